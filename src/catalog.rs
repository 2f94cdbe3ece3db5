//! Directory scans behind the lab index.
//!
//! Examples are files whose name ends with the configured suffix, recipes are
//! directories. Entries keep the order `fs::read_dir` yields them in, which is
//! platform dependent and not sorted.

use crate::error::LabError;
use std::fs;
use std::path::Path;

pub const EXAMPLES_FALLBACK: &str = "Examples directory not found or empty";
pub const RECIPES_FALLBACK: &str = "Recipes directory not found or empty";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Example,
    Recipe,
}

impl EntryKind {
    pub fn heading(self) -> &'static str {
        match self {
            EntryKind::Example => "Available Examples:",
            EntryKind::Recipe => "Available Recipes:",
        }
    }

    pub fn fallback_message(self) -> &'static str {
        match self {
            EntryKind::Example => EXAMPLES_FALLBACK,
            EntryKind::Recipe => RECIPES_FALLBACK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl CatalogEntry {
    fn new(name: String, kind: EntryKind) -> Self {
        Self { name, kind }
    }
}

/// Result of one best-effort scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Entries(Vec<CatalogEntry>),
    Unavailable(EntryKind),
}

impl Listing {
    pub fn is_available(&self) -> bool {
        matches!(self, Listing::Entries(_))
    }

    pub fn names(&self) -> Vec<&str> {
        match self {
            Listing::Entries(entries) => entries.iter().map(|e| e.name.as_str()).collect(),
            Listing::Unavailable(_) => Vec::new(),
        }
    }

    /// Printable lines: `- name` per entry, or the fallback message.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Listing::Entries(entries) => entries.iter().map(|e| format!("- {}", e.name)).collect(),
            Listing::Unavailable(kind) => vec![kind.fallback_message().to_string()],
        }
    }
}

fn read_names(dir: &Path) -> Result<Vec<String>, LabError> {
    let unreadable = |source| LabError::directory_unreadable(dir, source);
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

pub fn scan_examples(dir: &Path, suffix: &str) -> Result<Vec<CatalogEntry>, LabError> {
    Ok(read_names(dir)?
        .into_iter()
        .filter(|name| name.ends_with(suffix))
        .map(|name| CatalogEntry::new(name, EntryKind::Example))
        .collect())
}

/// Keeps entries that resolve to a directory. Symlinks are followed; an entry
/// whose metadata cannot be read is skipped.
pub fn scan_recipes(dir: &Path) -> Result<Vec<CatalogEntry>, LabError> {
    let mut recipes = Vec::new();
    for name in read_names(dir)? {
        match fs::metadata(dir.join(&name)) {
            Ok(meta) if meta.is_dir() => recipes.push(CatalogEntry::new(name, EntryKind::Recipe)),
            Ok(_) => {}
            Err(err) => log::debug!("skipping recipe entry {name}: {err}"),
        }
    }
    Ok(recipes)
}

pub fn list_examples(dir: &Path, suffix: &str) -> Listing {
    match scan_examples(dir, suffix) {
        Ok(entries) => Listing::Entries(entries),
        Err(err) => {
            log::debug!("{err}");
            Listing::Unavailable(EntryKind::Example)
        }
    }
}

pub fn list_recipes(dir: &Path) -> Listing {
    match scan_recipes(dir) {
        Ok(entries) => Listing::Entries(entries),
        Err(err) => {
            log::debug!("{err}");
            Listing::Unavailable(EntryKind::Recipe)
        }
    }
}
