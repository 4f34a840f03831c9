use crate::AssetName;
use crate::paths::{SCHEME_EXTENSION, WALLPAPER_EXTENSIONS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Synthetic window-manager theme meaning "use the GTK theme's decorations".
pub const GTK_WM_THEME: &str = "GTK";

/// The five asset kinds that are scanned and matched independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    WindowManagerTheme,
    GtkTheme,
    IconTheme,
    TerminalScheme,
    Wallpaper,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::WindowManagerTheme,
        Category::GtkTheme,
        Category::IconTheme,
        Category::TerminalScheme,
        Category::Wallpaper,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::WindowManagerTheme => "LabWC",
            Category::GtkTheme => "GTK",
            Category::IconTheme => "Icons",
            Category::TerminalScheme => "Kitty",
            Category::Wallpaper => "Walls",
        }
    }

    pub fn membership(self) -> Membership {
        match self {
            Category::WindowManagerTheme => Membership::DirWithFile(&["openbox-3", "themerc"]),
            Category::GtkTheme => Membership::GtkDir,
            Category::IconTheme => Membership::IconDir,
            Category::TerminalScheme => Membership::FileWithExtension {
                extensions: &[SCHEME_EXTENSION],
                strip_extension: true,
            },
            Category::Wallpaper => Membership::FileWithExtension {
                extensions: WALLPAPER_EXTENSIONS,
                strip_extension: false,
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category '{0}' (expected one of: wm, gtk, icons, kitty, wallpaper)")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wm" | "openbox" | "labwc" => Ok(Category::WindowManagerTheme),
            "gtk" => Ok(Category::GtkTheme),
            "icons" | "icon" => Ok(Category::IconTheme),
            "kitty" | "terminal" | "scheme" => Ok(Category::TerminalScheme),
            "wallpaper" | "wallpapers" | "walls" => Ok(Category::Wallpaper),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// Filesystem test deciding whether a directory entry belongs to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    /// Directory containing the given relative file.
    DirWithFile(&'static [&'static str]),
    /// Directory with `gtk-3.0/gtk.css`, `gtk-4.0/gtk.css` or a `gtk-3.0` subdirectory.
    GtkDir,
    /// Non-hidden directory containing `index.theme`.
    IconDir,
    /// Regular file with one of the extensions.
    FileWithExtension {
        extensions: &'static [&'static str],
        strip_extension: bool,
    },
}

impl Membership {
    pub fn wants_directories(self) -> bool {
        !matches!(self, Membership::FileWithExtension { .. })
    }

    /// Returns the asset name for `entry_path` when the entry belongs to the
    /// category. The caller has already established whether the entry is a
    /// directory (following symlinks).
    pub fn asset_name(self, entry_path: &Path, is_dir: bool) -> Option<AssetName> {
        let file_name = entry_path.file_name()?.to_str()?;

        match self {
            Membership::DirWithFile(relative) => {
                let target = relative.iter().fold(entry_path.to_path_buf(), |p, c| p.join(c));
                (is_dir && target.exists()).then(|| file_name.to_string())
            }
            Membership::GtkDir => {
                let member = is_dir
                    && (entry_path.join("gtk-3.0/gtk.css").exists()
                        || entry_path.join("gtk-4.0/gtk.css").exists()
                        || entry_path.join("gtk-3.0").exists());
                member.then(|| file_name.to_string())
            }
            Membership::IconDir => {
                let member = is_dir
                    && !file_name.starts_with('.')
                    && entry_path.join("index.theme").exists();
                member.then(|| file_name.to_string())
            }
            Membership::FileWithExtension {
                extensions,
                strip_extension,
            } => {
                if is_dir || !entry_path.is_file() {
                    return None;
                }
                let extension = entry_path.extension()?.to_str()?.to_lowercase();
                if !extensions.contains(&extension.as_str()) {
                    return None;
                }
                if !strip_extension {
                    return Some(file_name.to_string());
                }
                let stem = entry_path.file_stem()?.to_str()?.trim();
                (!stem.is_empty()).then(|| stem.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_category_aliases() {
        assert_eq!("labwc".parse::<Category>(), Ok(Category::WindowManagerTheme));
        assert_eq!("GTK".parse::<Category>(), Ok(Category::GtkTheme));
        assert_eq!(" kitty ".parse::<Category>(), Ok(Category::TerminalScheme));
        assert_eq!("walls".parse::<Category>(), Ok(Category::Wallpaper));
        assert!("cursor".parse::<Category>().is_err());
    }

    #[test]
    fn test_scheme_extension_is_stripped_case_insensitively() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Gruvbox Dark.CONF");
        fs::write(&path, "background #282828\n").unwrap();

        let name = Category::TerminalScheme.membership().asset_name(&path, false);
        assert_eq!(name.as_deref(), Some("Gruvbox Dark"));
    }

    #[test]
    fn test_wallpaper_keeps_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nord-mountains.PNG");
        fs::write(&path, b"").unwrap();

        let name = Category::Wallpaper.membership().asset_name(&path, false);
        assert_eq!(name.as_deref(), Some("nord-mountains.PNG"));
    }

    #[test]
    fn test_blank_scheme_stem_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(" .conf");
        fs::write(&path, "").unwrap();

        assert_eq!(
            Category::TerminalScheme.membership().asset_name(&path, false),
            None
        );
    }

    #[test]
    fn test_gtk_dir_needs_only_gtk3_subdirectory() {
        let dir = TempDir::new().unwrap();
        let theme = dir.path().join("Adwaita-ish");
        fs::create_dir_all(theme.join("gtk-3.0")).unwrap();

        assert_eq!(
            Category::GtkTheme.membership().asset_name(&theme, true).as_deref(),
            Some("Adwaita-ish")
        );
        assert_eq!(Category::GtkTheme.membership().asset_name(&theme, false), None);
    }

    #[test]
    fn test_hidden_icon_dir_is_rejected() {
        let dir = TempDir::new().unwrap();
        let hidden = dir.path().join(".cache");
        fs::create_dir_all(&hidden).unwrap();
        fs::write(hidden.join("index.theme"), "").unwrap();

        assert_eq!(Category::IconTheme.membership().asset_name(&hidden, true), None);
    }
}
