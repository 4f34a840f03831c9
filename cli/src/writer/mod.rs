//! Persists a [`SelectionBundle`] to the desktop.
//!
//! Steps, in order, each skipped when its selection is empty:
//!
//! 1. labwc `rc.xml`: `<theme><name>` and `<theme><icon>`
//! 2. `gsettings set` for the GTK and icon themes
//! 3. labwc `environment`: `GTK_THEME=`
//! 4. wallpaper via `swww img`
//! 5. kitty scheme via `kitten themes`, then the fuzzel accent colors
//! 6. `labwc -r` so the compositor reloads its configuration
//! 7. waybar restart (`pkill waybar`, then a detached `waybar`)
//!
//! Missing desktop files are skipped rather than created. Failures of the
//! wallpaper, reload and waybar steps are logged and ignored. A terminal scheme
//! that cannot be located aborts the whole run before anything is written.

pub mod files;
pub mod runner;

use crate::error::{AppResult, io_error};
use crate::validation::{AssetNameValidator, Validator};
use engine::category::Category;
use engine::current::GSETTINGS_SCHEMA;
use engine::palette::{AccentSnippet, derive_accent_snippet};
use engine::paths::{DesktopPaths, SCHEME_EXTENSION, SearchPaths};
use engine::selection::SelectionBundle;
use runner::CommandRunner;
use std::fs;
use std::path::Path;

/// Applies selections through a [`CommandRunner`].
pub struct ConfigWriter<'a, R: CommandRunner> {
    search: &'a SearchPaths,
    desktop: &'a DesktopPaths,
    runner: R,
    dry_run: bool,
}

impl<'a, R: CommandRunner> ConfigWriter<'a, R> {
    pub fn new(search: &'a SearchPaths, desktop: &'a DesktopPaths, runner: R) -> Self {
        Self {
            search,
            desktop,
            runner,
            dry_run: false,
        }
    }

    /// Report file writes instead of performing them.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The runner the commands went through, for inspecting what ran.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn apply(&self, selection: &SelectionBundle) -> AppResult<()> {
        for category in Category::ALL {
            AssetNameValidator.validate(selection.get(category))?;
        }

        // Resolve the scheme up front so a NotFound leaves everything untouched.
        let snippet = if selection.terminal_scheme.is_empty() {
            None
        } else {
            Some(derive_accent_snippet(self.search, &selection.terminal_scheme)?)
        };

        self.update_rc_xml(selection)?;
        self.update_gsettings(selection)?;
        self.update_environment(selection)?;
        self.set_wallpaper(selection);
        if let Some(snippet) = snippet {
            self.apply_terminal_scheme(&selection.terminal_scheme)?;
            self.write_accent_snippet(&snippet)?;
        }

        if let Err(e) = self.runner.run("labwc", &["-r"]) {
            log::warn!("Could not reconfigure labwc: {e}");
        }
        self.restart_waybar();

        log::info!("Applied selection: {selection:?}");
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &str) -> AppResult<()> {
        if self.dry_run {
            println!("would write: {}", path.display());
            return Ok(());
        }
        fs::write(path, contents).map_err(|e| io_error("write", path, e))?;
        log::info!("Updated {}", path.display());
        Ok(())
    }

    fn update_rc_xml(&self, selection: &SelectionBundle) -> AppResult<()> {
        if selection.wm_theme.is_empty() && selection.icon_theme.is_empty() {
            return Ok(());
        }
        let path = &self.desktop.labwc_rc;
        if !path.exists() {
            log::info!("{} not found, skipping", path.display());
            return Ok(());
        }

        let text = fs::read_to_string(path).map_err(|e| io_error("read", path, e))?;
        let updated = files::update_rc_xml(&text, &selection.wm_theme, &selection.icon_theme);
        if updated != text {
            self.write_file(path, &updated)?;
        }
        Ok(())
    }

    fn update_gsettings(&self, selection: &SelectionBundle) -> AppResult<()> {
        for (key, value) in [
            ("gtk-theme", &selection.gtk_theme),
            ("icon-theme", &selection.icon_theme),
        ] {
            if !value.is_empty() {
                self.runner
                    .run("gsettings", &["set", GSETTINGS_SCHEMA, key, value])?;
            }
        }
        Ok(())
    }

    fn update_environment(&self, selection: &SelectionBundle) -> AppResult<()> {
        if selection.gtk_theme.is_empty() {
            return Ok(());
        }
        let path = &self.desktop.labwc_environment;
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                log::info!("{} not readable ({e}), skipping", path.display());
                return Ok(());
            }
        };

        let updated = files::update_environment(&text, &selection.gtk_theme);
        if updated != text {
            self.write_file(path, &updated)?;
        }
        Ok(())
    }

    fn set_wallpaper(&self, selection: &SelectionBundle) {
        if selection.wallpaper.is_empty() {
            return;
        }
        let path = self.search.wallpaper_dir.join(&selection.wallpaper);
        let path = path.to_string_lossy();
        if let Err(e) = self.runner.run("swww", &["img", &path]) {
            log::warn!("Could not set wallpaper: {e}");
        }
    }

    /// waybar only picks up GTK theme changes on restart.
    fn restart_waybar(&self) {
        if let Err(e) = self.runner.run("pkill", &["waybar"]) {
            log::debug!("No waybar to stop: {e}");
        }
        if let Err(e) = self.runner.start_detached("waybar", &[]) {
            log::warn!("Could not start waybar: {e}");
        }
    }

    fn apply_terminal_scheme(&self, scheme: &str) -> AppResult<()> {
        // kitten expects the theme name, not the file name
        let name = strip_scheme_extension(scheme.trim());
        if name.is_empty() {
            return Ok(());
        }
        self.runner
            .run("kitten", &["themes", "--reload-in=all", name])
    }

    /// Write the rendered accent colors to fuzzel.ini, creating its directory.
    pub fn write_accent_snippet(&self, snippet: &AccentSnippet) -> AppResult<()> {
        let path = &self.desktop.fuzzel_ini;
        if !self.dry_run {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| io_error("create directory", parent, e))?;
            }
        }
        self.write_file(path, &snippet.render())
    }
}

fn strip_scheme_extension(name: &str) -> &str {
    let suffix_len = SCHEME_EXTENSION.len() + 1;
    if name.len() > suffix_len && name.is_char_boundary(name.len() - suffix_len) {
        let (stem, suffix) = name.split_at(name.len() - suffix_len);
        if suffix.starts_with('.') && suffix[1..].eq_ignore_ascii_case(SCHEME_EXTENSION) {
            return stem;
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_scheme_extension() {
        assert_eq!(strip_scheme_extension("Nord.conf"), "Nord");
        assert_eq!(strip_scheme_extension("Nord.CONF"), "Nord");
        assert_eq!(strip_scheme_extension("Gruvbox 2.0"), "Gruvbox 2.0");
        assert_eq!(strip_scheme_extension(".conf"), ".conf");
        assert_eq!(strip_scheme_extension("Nord"), "Nord");
    }
}
