//! Catalog construction and lookup (made by FontLab https://www.fontlab.com/)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::discovery::{DirectoryScanner, FontDiscovery};
use crate::fallback::file_to_display_name;
use crate::name::extract_display_name;

/// One catalog row: a display name and the file it came from.
///
/// The display name is never empty; files whose metadata and fallback both
/// come up blank keep their raw file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontCatalogEntry {
    pub display_name: String,
    pub path: PathBuf,
}

/// A sorted catalog of the font files in one folder.
///
/// The entry list is built lazily on first access (or eagerly via
/// [`FontCatalog::rescan`]) and replaced wholesale on every rebuild, so a
/// reader holding a snapshot never sees a half-built list. Scanning is
/// synchronous and runs on the caller's thread, one file handle at a time.
#[derive(Debug, Clone)]
pub struct FontCatalog {
    root: PathBuf,
    extensions: Vec<String>,
    entries: Option<Vec<FontCatalogEntry>>,
}

impl FontCatalog {
    /// Catalog over `root`, matching `ttf` and `ttc` files.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: vec!["ttf".to_string(), "ttc".to_string()],
            entries: None,
        }
    }

    /// Replace the extension filter (matched case-insensitively).
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self.entries = None;
        self
    }

    /// Build the catalog unless it already exists.
    pub fn build(&mut self) {
        if self.entries.is_none() {
            self.rescan();
        }
    }

    /// Rebuild the catalog unconditionally.
    ///
    /// Every matching file yields exactly one entry: the name extracted
    /// from its `name` table, or the filename-derived fallback when
    /// extraction fails or comes back empty. Entries are sorted by
    /// ascending byte-wise comparison of their display names (plain Rust
    /// `str` ordering over UTF-8 bytes), tie-broken by path, and the
    /// previous entry list is replaced in a single assignment.
    pub fn rescan(&mut self) {
        let scanner = DirectoryScanner::new(&self.root, self.extensions.iter().cloned());

        let mut entries: Vec<FontCatalogEntry> = scanner
            .discover()
            .into_iter()
            .map(|file_name| {
                let path = self.root.join(&file_name);
                let display_name = display_name_for(&path, &file_name);
                FontCatalogEntry { display_name, path }
            })
            .collect();

        entries.sort_by(|a, b| {
            a.display_name
                .cmp(&b.display_name)
                .then_with(|| a.path.cmp(&b.path))
        });

        self.entries = Some(entries);
    }

    /// The current entries, building the catalog on first access.
    pub fn entries(&mut self) -> &[FontCatalogEntry] {
        self.build();
        self.entries.as_deref().unwrap_or(&[])
    }

    /// Entry at `index` (0-based), or [`FontCatalog::default_entry`] when
    /// the catalog is empty or the index is out of range.
    pub fn get(&mut self, index: usize) -> FontCatalogEntry {
        self.entries()
            .get(index)
            .cloned()
            .unwrap_or_else(Self::default_entry)
    }

    /// Path of the first entry whose display name matches exactly.
    pub fn path_for(&mut self, display_name: &str) -> Option<PathBuf> {
        self.entries()
            .iter()
            .find(|entry| entry.display_name == display_name)
            .map(|entry| entry.path.clone())
    }

    /// Display names in catalog order.
    pub fn display_names(&mut self) -> Vec<String> {
        self.entries()
            .iter()
            .map(|entry| entry.display_name.clone())
            .collect()
    }

    /// Entry count of the current snapshot; 0 before the first build.
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The stand-in entry handed out for empty or out-of-range lookups.
    pub fn default_entry() -> FontCatalogEntry {
        FontCatalogEntry {
            display_name: "Default".to_string(),
            path: PathBuf::new(),
        }
    }
}

/// Extracted display name, degrading to the filename-derived fallback and
/// finally the raw file name, so the result is never empty.
fn display_name_for(path: &Path, file_name: &str) -> String {
    if let Ok(name) = extract_display_name(path) {
        return name;
    }

    let fallback = file_to_display_name(file_name);
    if fallback.is_empty() {
        file_name.to_string()
    } else {
        fallback
    }
}
