/// typcat-core: The patient archivist of font folders
///
/// Point it at a directory of font files and it hands back a tidy,
/// alphabetized catalog of display names - the kind of list you can pour
/// straight into a font picker. Every name is pulled out of the font's own
/// `name` table by reading the SFNT container byte by byte; when a file
/// turns out to be truncated, hostile, or simply nameless, the filename
/// itself is dressed up into something presentable instead.
///
/// ## How a catalog comes together
///
/// **Discovery**: list the font files sitting in one folder
/// - Case-insensitive extension matching (TTF and TTC out of the box)
/// - No recursion - a catalog is one folder, nothing more
///
/// **Extraction**: ask each font what it wants to be called
/// - Windowed, bounds-checked big-endian reads over the raw bytes
/// - TrueType Collections are welcome; only the first face gets a say
/// - Family and Full names are scored by platform, encoding and language,
///   and the best non-empty candidate wins
///
/// **Fallback**: when extraction comes up empty
/// - `my_font-Bold.ttf` becomes `My Font Bold`, and nobody is the wiser
///
/// ## A Sample Conversation
///
/// ```rust,no_run
/// use typcat_core::catalog::FontCatalog;
///
/// let mut catalog = FontCatalog::new("/usr/share/fonts/truetype/noto");
/// catalog.build();
///
/// for entry in catalog.entries() {
///     println!("{} ({})", entry.display_name, entry.path.display());
/// }
///
/// // Out-of-range lookups hand back a defined default, never a panic.
/// let fallback = catalog.get(9999);
/// assert!(!fallback.display_name.is_empty());
/// ```
///
/// ## Ground Rules
///
/// - A scan of N files yields exactly N entries; parse failures degrade to
///   filename-derived names rather than dropping files.
/// - A missing folder is an empty catalog, not an error.
/// - Builds and rescans run synchronously on the caller's thread and
///   replace the catalog in one piece - readers never see a half-built list.
///
/// ---
///
/// Crafted with care at FontLab https://www.fontlab.com/
pub mod catalog;
pub mod discovery;
pub mod fallback;
pub mod name;
pub mod output;
pub mod sfnt;
