use crate::category::Category;
use std::path::{Path, PathBuf};

/// Extension of terminal color-scheme files (compared case-insensitively)
pub const SCHEME_EXTENSION: &str = "conf";

/// Wallpaper image extensions (compared case-insensitively)
pub const WALLPAPER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Resolve the user's home directory, falling back to the filesystem root.
pub fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Roots searched for each asset category.
///
/// Theme and icon roots are searched in order; a later root never removes a
/// name found in an earlier one. Terminal schemes and wallpapers live in a
/// single flat directory each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPaths {
    pub theme_dirs: Vec<PathBuf>,
    pub icon_dirs: Vec<PathBuf>,
    pub scheme_dir: PathBuf,
    pub wallpaper_dir: PathBuf,
}

impl SearchPaths {
    /// The roots used on a regular (or NixOS) desktop install.
    pub fn system_default() -> Self {
        Self::for_home(&home_dir())
    }

    pub fn for_home(home: &Path) -> Self {
        Self {
            theme_dirs: share_roots(home, "themes"),
            icon_dirs: share_roots(home, "icons"),
            scheme_dir: home.join(".config/kitty/themes"),
            wallpaper_dir: home.join("Pictures/walls"),
        }
    }

    pub fn with_extra_theme_dirs(mut self, dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        self.theme_dirs.extend(dirs);
        self
    }

    pub fn with_extra_icon_dirs(mut self, dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        self.icon_dirs.extend(dirs);
        self
    }

    pub fn with_scheme_dir(mut self, dir: PathBuf) -> Self {
        self.scheme_dir = dir;
        self
    }

    pub fn with_wallpaper_dir(mut self, dir: PathBuf) -> Self {
        self.wallpaper_dir = dir;
        self
    }

    /// Roots searched for a category. Window-manager and GTK themes share the
    /// theme roots.
    pub fn roots_for(&self, category: Category) -> Vec<&Path> {
        match category {
            Category::WindowManagerTheme | Category::GtkTheme => {
                self.theme_dirs.iter().map(PathBuf::as_path).collect()
            }
            Category::IconTheme => self.icon_dirs.iter().map(PathBuf::as_path).collect(),
            Category::TerminalScheme => vec![self.scheme_dir.as_path()],
            Category::Wallpaper => vec![self.wallpaper_dir.as_path()],
        }
    }
}

impl Default for SearchPaths {
    fn default() -> Self {
        Self::system_default()
    }
}

fn share_roots(home: &Path, kind: &str) -> Vec<PathBuf> {
    vec![
        PathBuf::from("/usr/share").join(kind),
        home.join(".local/share").join(kind),
        PathBuf::from("/run/current-system/sw/share").join(kind),
        home.join(".nix-profile/share").join(kind),
    ]
}

/// Desktop configuration files read by the settings probe and rewritten by
/// the config writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopPaths {
    pub labwc_rc: PathBuf,
    pub labwc_environment: PathBuf,
    pub fuzzel_ini: PathBuf,
}

impl DesktopPaths {
    pub fn system_default() -> Self {
        Self::for_home(&home_dir())
    }

    pub fn for_home(home: &Path) -> Self {
        let config = home.join(".config");
        Self {
            labwc_rc: config.join("labwc/rc.xml"),
            labwc_environment: config.join("labwc/environment"),
            fuzzel_ini: config.join("fuzzel/fuzzel.ini"),
        }
    }
}

impl Default for DesktopPaths {
    fn default() -> Self {
        Self::system_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_relative_roots() {
        let paths = SearchPaths::for_home(Path::new("/home/alice"));

        assert_eq!(paths.theme_dirs.len(), 4);
        assert!(
            paths
                .theme_dirs
                .contains(&PathBuf::from("/home/alice/.local/share/themes"))
        );
        assert!(
            paths
                .icon_dirs
                .contains(&PathBuf::from("/run/current-system/sw/share/icons"))
        );
        assert_eq!(
            paths.scheme_dir,
            PathBuf::from("/home/alice/.config/kitty/themes")
        );
        assert_eq!(paths.wallpaper_dir, PathBuf::from("/home/alice/Pictures/walls"));
    }

    #[test]
    fn test_roots_for_category() {
        let paths = SearchPaths::for_home(Path::new("/h"))
            .with_extra_theme_dirs([PathBuf::from("/opt/themes")]);

        assert_eq!(paths.roots_for(Category::GtkTheme).len(), 5);
        assert_eq!(
            paths.roots_for(Category::WindowManagerTheme),
            paths.roots_for(Category::GtkTheme)
        );
        assert_eq!(
            paths.roots_for(Category::Wallpaper),
            vec![Path::new("/h/Pictures/walls")]
        );
    }

    #[test]
    fn test_desktop_paths() {
        let desktop = DesktopPaths::for_home(Path::new("/home/bob"));
        assert_eq!(desktop.labwc_rc, PathBuf::from("/home/bob/.config/labwc/rc.xml"));
        assert_eq!(
            desktop.fuzzel_ini,
            PathBuf::from("/home/bob/.config/fuzzel/fuzzel.ini")
        );
    }
}
