//! Launcher accent colors derived from a terminal color scheme.
//!
//! Scheme files are line oriented:
//!
//! ```text
//! ## name: Gruvbox Dark
//! ## author: Pavel Pertsev
//! foreground #ebdbb2
//! background #282828
//! color4     #458588
//! ```
//!
//! Six base16-style slots are picked from the parsed colors through fallback
//! chains and rendered as the `[colors]` section of the launcher's ini file.

use crate::errors::{EngineError, EngineResult};
use crate::paths::SearchPaths;
use crate::scanner::locate_scheme;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fs;

static COLOR_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9_-]+)\s+#([0-9A-Fa-f]{6})").expect("color line pattern is valid")
});

pub const DEFAULT_FOREGROUND: &str = "FFFFFF";
pub const DEFAULT_BACKGROUND: &str = "000000";
pub const DEFAULT_AUTHOR: &str = "unknown";

/// Alpha suffix for the launcher window background.
pub const BACKGROUND_ALPHA: &str = "f2";
/// Alpha suffix for text, match and border colors.
pub const OPAQUE_ALPHA: &str = "ff";

/// Parse `key #RRGGBB` lines into a map of key to uppercase hex.
///
/// Blank lines and `#` comments are skipped. A repeated key keeps its last value.
pub fn parse_colors(content: &str) -> HashMap<String, String> {
    let mut colors = HashMap::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some(caps) = COLOR_LINE.captures(trimmed) {
            colors.insert(caps[1].to_string(), caps[2].to_uppercase());
        }
    }

    colors
}

/// Value of the first `## key: value` metadata comment.
pub fn parse_meta(content: &str, key: &str) -> Option<String> {
    let pattern = format!(r"(?m)^##\s*{}\s*:\s*(.+)$", regex::escape(key));
    let re = Regex::new(&pattern).ok()?;
    re.captures(content)
        .map(|caps| caps[1].trim().to_string())
        .filter(|v| !v.is_empty())
}

fn first_present<'a>(colors: &'a HashMap<String, String>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|k| colors.get(*k))
        .map(String::as_str)
        .find(|v| !v.trim().is_empty())
}

/// Six lowercase `rrggbb` colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Background
    pub base00: String,
    /// Inactive surface
    pub base01: String,
    /// Muted foreground
    pub base03: String,
    /// Foreground
    pub base05: String,
    /// Selection text
    pub base06: String,
    /// Accent / link
    pub base0d: String,
}

impl Palette {
    pub fn from_colors(colors: &HashMap<String, String>) -> Self {
        let base05 = first_present(colors, &["foreground", "cursor"])
            .unwrap_or(DEFAULT_FOREGROUND)
            .to_lowercase();
        let base00 = first_present(colors, &["background"])
            .unwrap_or(DEFAULT_BACKGROUND)
            .to_lowercase();
        let base01 = first_present(colors, &["inactive_tab_background", "selection_background"])
            .map(str::to_lowercase)
            .unwrap_or_else(|| base00.clone());
        let base03 = first_present(colors, &["inactive_tab_foreground", "color8"])
            .map(str::to_lowercase)
            .unwrap_or_else(|| base05.clone());
        let base06 = first_present(colors, &["selection_foreground", "foreground"])
            .map(str::to_lowercase)
            .unwrap_or_else(|| base05.clone());
        let base0d = first_present(colors, &["color4", "active_border_color", "color12"])
            .map(str::to_lowercase)
            .unwrap_or_else(|| base05.clone());

        Self {
            base00,
            base01,
            base03,
            base05,
            base06,
            base0d,
        }
    }

    pub fn from_scheme_text(content: &str) -> Self {
        Self::from_colors(&parse_colors(content))
    }
}

/// A rendered-ready launcher color section with its header metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccentSnippet {
    pub name: String,
    pub author: String,
    pub palette: Palette,
}

impl AccentSnippet {
    /// Build from scheme text; `scheme_name` is the header name when the file
    /// carries no `## name:` comment.
    pub fn from_scheme_text(scheme_name: &str, content: &str) -> Self {
        Self {
            name: parse_meta(content, "name").unwrap_or_else(|| scheme_name.to_string()),
            author: parse_meta(content, "author").unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            palette: Palette::from_scheme_text(content),
        }
    }

    pub fn render(&self) -> String {
        let p = &self.palette;
        [
            format!("## {} theme", self.name),
            format!("## by {}", self.author),
            String::new(),
            "[colors]".to_string(),
            format!("background={}{BACKGROUND_ALPHA}", p.base01),
            format!("text={}{OPAQUE_ALPHA}", p.base05),
            format!("match={}{OPAQUE_ALPHA}", p.base0d),
            format!("selection={}{OPAQUE_ALPHA}", p.base03),
            format!("selection-text={}{OPAQUE_ALPHA}", p.base06),
            format!("selection-match={}{OPAQUE_ALPHA}", p.base0d),
            format!("border={}{OPAQUE_ALPHA}", p.base0d),
            String::new(),
        ]
        .join("\n")
    }
}

/// Locate a terminal scheme by name, read it and derive its accent snippet.
pub fn derive_accent_snippet(paths: &SearchPaths, scheme_name: &str) -> EngineResult<AccentSnippet> {
    let path = locate_scheme(paths, scheme_name)?;
    let content = fs::read_to_string(&path).map_err(|source| EngineError::Io {
        path: path.clone(),
        source,
    })?;
    log::debug!("Deriving accent colors from {}", path.display());
    Ok(AccentSnippet::from_scheme_text(scheme_name, &content))
}
