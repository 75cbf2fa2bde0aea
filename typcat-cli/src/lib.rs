//! typcat CLI (made by FontLab https://www.fontlab.com/)

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};
use regex::Regex;

use typcat_core::catalog::{FontCatalog, FontCatalogEntry};
use typcat_core::fallback::file_to_display_name;
use typcat_core::name::extract_display_name;
use typcat_core::output::{write_json_pretty, write_ndjson};

pub mod server;

/// CLI entrypoint for typcat.
#[derive(Debug, Parser)]
#[command(
    name = "typcat",
    about = "Folder-scoped font catalogs (made by FontLab https://www.fontlab.com/)"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a catalog for one folder and print it
    List(ListArgs),
    /// Print the extracted display name of individual font files
    Name(NameArgs),
    /// Serve catalogs over HTTP
    Serve(ServeArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Folder to catalog
    #[arg(value_hint = ValueHint::DirPath)]
    dir: PathBuf,

    /// File extensions to include
    #[arg(
        short = 'e',
        long = "extensions",
        value_delimiter = ',',
        default_values_t = vec!["ttf".to_string(), "ttc".to_string()]
    )]
    extensions: Vec<String>,

    /// Regex patterns that must match the display name
    #[arg(short = 'n', long = "name", value_hint = ValueHint::Other)]
    name_patterns: Vec<String>,

    /// Print file paths instead of display names
    #[arg(long = "paths", action = ArgAction::SetTrue)]
    paths: bool,

    /// Emit a single JSON array
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "ndjson")]
    json: bool,

    /// Emit newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,

    /// Format output as padded columns
    #[arg(long = "columns", action = ArgAction::SetTrue)]
    columns: bool,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,
}

#[derive(Debug, Args)]
struct NameArgs {
    /// Font files to name
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    files: Vec<PathBuf>,
}

#[derive(Debug, Args)]
struct ServeArgs {
    /// Address to bind the HTTP server to
    #[arg(long = "bind", default_value = "127.0.0.1:8789")]
    bind: String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::List(args) => run_list(args),
        Command::Name(args) => run_name(args),
        Command::Serve(args) => run_serve(args),
    }
}

fn run_list(args: ListArgs) -> Result<()> {
    let patterns = compile_patterns(&args.name_patterns)?;

    let mut catalog = FontCatalog::new(&args.dir).with_extensions(args.extensions.clone());
    catalog.build();

    let entries: Vec<FontCatalogEntry> = catalog
        .entries()
        .iter()
        .filter(|entry| {
            patterns.is_empty() || patterns.iter().any(|re| re.is_match(&entry.display_name))
        })
        .cloned()
        .collect();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let use_color = match args.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => handle.is_terminal(),
    };

    if args.ndjson {
        write_ndjson(&entries, &mut handle)?;
    } else if args.json {
        write_json_pretty(&entries, &mut handle)?;
    } else if args.columns {
        write_columns(&entries, &mut handle, use_color)?;
    } else if args.paths {
        write_paths(&entries, &mut handle)?;
    } else {
        write_plain(&entries, &mut handle, use_color)?;
    }

    Ok(())
}

fn run_name(args: NameArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for file in &args.files {
        writeln!(handle, "{}", display_name_of(file))?;
    }

    Ok(())
}

fn run_serve(args: ServeArgs) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting tokio runtime")?;

    runtime.block_on(server::serve(&args.bind))
}

/// Extracted display name with the catalog's fallback chain: name table,
/// then title-cased filename, then the raw filename.
fn display_name_of(path: &Path) -> String {
    if let Ok(name) = extract_display_name(path) {
        return name;
    }

    let file_name = path
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let fallback = file_to_display_name(&file_name);
    if fallback.is_empty() {
        file_name
    } else {
        fallback
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).with_context(|| format!("invalid regex: {p}")))
        .collect()
}

fn write_plain(entries: &[FontCatalogEntry], mut w: impl Write, color: bool) -> Result<()> {
    for entry in entries {
        let rendered = apply_color(&entry.display_name, color, AnsiColor::Yellow);
        writeln!(w, "{rendered}")?;
    }
    Ok(())
}

fn write_paths(entries: &[FontCatalogEntry], mut w: impl Write) -> Result<()> {
    for entry in entries {
        writeln!(w, "{}", entry.path.display())?;
    }
    Ok(())
}

fn write_columns(entries: &[FontCatalogEntry], mut w: impl Write, color: bool) -> Result<()> {
    let name_width = entries
        .iter()
        .map(|e| e.display_name.len())
        .max()
        .unwrap_or(0)
        .clamp(0, 80);

    for entry in entries {
        let padded_name = format!("{:<name_width$}", entry.display_name);
        let rendered_name = apply_color(&padded_name, color, AnsiColor::Yellow);
        let rendered_path = apply_color(
            &entry.path.display().to_string(),
            color,
            AnsiColor::Cyan,
        );

        writeln!(w, "{rendered_name}  {rendered_path}")?;
    }

    Ok(())
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Cyan,
    Yellow,
}

fn apply_color(text: &str, color: bool, code: AnsiColor) -> String {
    if !color {
        return text.to_string();
    }

    let code_str = match code {
        AnsiColor::Cyan => "36",
        AnsiColor::Yellow => "33",
    };

    format!("\u{1b}[{}m{}\u{1b}[0m", code_str, text)
}

#[cfg(test)]
mod tests;
