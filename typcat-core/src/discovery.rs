//! Font discovery helpers for typcat-core (made by FontLab https://www.fontlab.com/)

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Trait for enumerating font file names from some backing store.
pub trait FontDiscovery {
    fn discover(&self) -> Vec<String>;
}

/// Non-recursive directory listing with a case-insensitive extension filter.
///
/// A catalog is one folder deep: nested directories are never entered. A
/// missing or unreadable folder produces an empty listing rather than an
/// error, so an empty catalog stays a valid state.
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    root: PathBuf,
    extensions: Vec<String>,
}

impl DirectoryScanner {
    pub fn new<P, I, S>(root: P, extensions: I) -> Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let extensions = extensions
            .into_iter()
            .map(|e| e.into().to_ascii_lowercase())
            .collect();
        Self {
            root: root.into(),
            extensions,
        }
    }
}

impl FontDiscovery for DirectoryScanner {
    fn discover(&self) -> Vec<String> {
        let mut found = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .flatten()
        {
            if entry.file_type().is_file() && self.matches(entry.path()) {
                if let Some(file_name) = entry.file_name().to_str() {
                    found.push(file_name.to_string());
                }
            }
        }

        found.sort_unstable();
        found
    }
}

impl DirectoryScanner {
    fn matches(&self, path: &Path) -> bool {
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext.to_ascii_lowercase(),
            None => return false,
        };

        self.extensions.iter().any(|wanted| *wanted == ext)
    }
}
