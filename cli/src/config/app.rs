use super::LoggingConfig;
use engine::paths::{DesktopPaths, SearchPaths, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    paths: PathsConfig,
}

impl AppConfig {
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn paths(&self) -> &PathsConfig {
        &self.paths
    }

    /// Engine search roots with the configured additions applied.
    pub fn search_paths(&self) -> SearchPaths {
        self.paths.apply_to(SearchPaths::system_default(), &home_dir())
    }

    pub fn desktop_paths(&self) -> DesktopPaths {
        DesktopPaths::system_default()
    }
}

/// Extra search roots and directory overrides.
///
/// Paths starting with `~/` are resolved against the home directory.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PathsConfig {
    #[serde(default)]
    extra_theme_dirs: Vec<PathBuf>,
    #[serde(default)]
    extra_icon_dirs: Vec<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scheme_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wallpaper_dir: Option<PathBuf>,
}

impl PathsConfig {
    pub fn apply_to(&self, paths: SearchPaths, home: &Path) -> SearchPaths {
        let expand = |p: &PathBuf| expand_home(p, home);

        let mut paths = paths
            .with_extra_theme_dirs(self.extra_theme_dirs.iter().map(expand))
            .with_extra_icon_dirs(self.extra_icon_dirs.iter().map(expand));
        if let Some(dir) = &self.scheme_dir {
            paths = paths.with_scheme_dir(expand(dir));
        }
        if let Some(dir) = &self.wallpaper_dir {
            paths = paths.with_wallpaper_dir(expand(dir));
        }
        paths
    }
}

fn expand_home(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_config_extends_and_overrides() {
        let config: PathsConfig = toml::from_str(
            r#"
            extra_theme_dirs = ["~/src/themes", "/opt/themes"]
            wallpaper_dir = "~/Wallpapers"
            "#,
        )
        .unwrap();

        let home = Path::new("/home/carol");
        let paths = config.apply_to(SearchPaths::for_home(home), home);

        assert_eq!(paths.theme_dirs.len(), 6);
        assert!(paths.theme_dirs.contains(&PathBuf::from("/home/carol/src/themes")));
        assert!(paths.theme_dirs.contains(&PathBuf::from("/opt/themes")));
        assert_eq!(paths.icon_dirs.len(), 4);
        assert_eq!(paths.wallpaper_dir, PathBuf::from("/home/carol/Wallpapers"));
        assert_eq!(
            paths.scheme_dir,
            PathBuf::from("/home/carol/.config/kitty/themes")
        );
    }

    #[test]
    fn test_empty_config_deserializes_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.paths(), &PathsConfig::default());
        assert_eq!(config.logging().level(), "info");
        assert_eq!(config.logging().file(), None);
    }

    #[test]
    fn test_expand_home() {
        let home = Path::new("/home/dan");
        assert_eq!(expand_home(Path::new("~"), home), PathBuf::from("/home/dan"));
        assert_eq!(
            expand_home(Path::new("~/walls"), home),
            PathBuf::from("/home/dan/walls")
        );
        assert_eq!(expand_home(Path::new("/srv/walls"), home), PathBuf::from("/srv/walls"));
    }
}
