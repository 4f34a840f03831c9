use crate::AssetName;
use crate::category::{Category, GTK_WM_THEME};
use crate::errors::{EngineError, EngineResult};
use crate::paths::{SCHEME_EXTENSION, SearchPaths};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs::{self, DirEntry};
use std::path::{Path, PathBuf};

/// Every scanned category, each list sorted and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inventory {
    pub wm_themes: Vec<AssetName>,
    pub gtk_themes: Vec<AssetName>,
    pub icon_themes: Vec<AssetName>,
    pub terminal_schemes: Vec<AssetName>,
    pub wallpapers: Vec<AssetName>,
}

impl Inventory {
    pub fn get(&self, category: Category) -> &[AssetName] {
        match category {
            Category::WindowManagerTheme => &self.wm_themes,
            Category::GtkTheme => &self.gtk_themes,
            Category::IconTheme => &self.icon_themes,
            Category::TerminalScheme => &self.terminal_schemes,
            Category::Wallpaper => &self.wallpapers,
        }
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }
}

/// True for real directories and for symlinks whose target is a directory.
///
/// Only the entry itself is inspected without following links; a symlink is
/// then resolved with one `stat` of its target. Broken links are not
/// directories.
pub fn entry_is_dir(parent: &Path, entry: &DirEntry) -> bool {
    let Ok(file_type) = entry.file_type() else {
        return false;
    };
    if file_type.is_dir() {
        return true;
    }
    if !file_type.is_symlink() {
        return false;
    }
    fs::metadata(parent.join(entry.file_name()))
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}

/// Scan every root of `category` and return the sorted set of asset names.
///
/// Missing or unreadable roots are skipped. The window-manager category
/// always contains the synthetic [`GTK_WM_THEME`] entry.
pub fn scan(paths: &SearchPaths, category: Category) -> Vec<AssetName> {
    let membership = category.membership();
    let mut names = BTreeSet::new();

    if category == Category::WindowManagerTheme {
        names.insert(GTK_WM_THEME.to_string());
    }

    for root in paths.roots_for(category) {
        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("Skipping {} root '{}': {}", category, root.display(), e);
                continue;
            }
        };

        for entry in entries.flatten() {
            let is_dir = entry_is_dir(root, &entry);
            if membership.wants_directories() != is_dir {
                continue;
            }
            if let Some(name) = membership.asset_name(&entry.path(), is_dir) {
                names.insert(name);
            }
        }
    }

    log::debug!("Scanned {} {} entries", names.len(), category);
    names.into_iter().collect()
}

/// Run all five category scans.
pub fn scan_all(paths: &SearchPaths) -> Inventory {
    Inventory {
        wm_themes: scan(paths, Category::WindowManagerTheme),
        gtk_themes: scan(paths, Category::GtkTheme),
        icon_themes: scan(paths, Category::IconTheme),
        terminal_schemes: scan(paths, Category::TerminalScheme),
        wallpapers: scan(paths, Category::Wallpaper),
    }
}

/// Locate the file backing a terminal scheme name.
///
/// Scheme files are matched by their stem with any casing of the scheme
/// extension; when the directory cannot be listed or nothing matches, a
/// direct `<name>.conf` lookup is attempted before giving up.
pub fn locate_scheme(paths: &SearchPaths, name: &str) -> EngineResult<PathBuf> {
    let dir = &paths.scheme_dir;

    match fs::read_dir(dir) {
        Ok(entries) => {
            for entry in entries.flatten() {
                if entry_is_dir(dir, &entry) {
                    continue;
                }
                let path = entry.path();
                let extension_matches = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case(SCHEME_EXTENSION));
                let stem_matches = path.file_stem().and_then(|s| s.to_str()) == Some(name);
                if extension_matches && stem_matches {
                    return Ok(path);
                }
            }
        }
        Err(e) => {
            log::debug!("Cannot list scheme directory '{}': {}", dir.display(), e);
        }
    }

    let fallback = dir.join(format!("{name}.{SCHEME_EXTENSION}"));
    if !name.is_empty() && fallback.is_file() {
        return Ok(fallback);
    }

    Err(EngineError::not_found("Terminal scheme", name))
}
