use crate::paths::DesktopPaths;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::ops::Range;
use std::process::{Command, Stdio};

pub const GSETTINGS_SCHEMA: &str = "org.gnome.desktop.interface";

static XML_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"));

static XML_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<(/?)([A-Za-z_][\w:.-]*)(?:\s[^>]*?)?(/?)>").expect("tag pattern is valid")
});

/// Theme settings the desktop is using right now. Empty means unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CurrentSettings {
    pub gtk_theme: String,
    pub icon_theme: String,
    pub wm_theme: String,
}

/// Read the active GTK/icon themes from gsettings and the window-manager
/// theme from labwc's `rc.xml`. Every source that cannot be read yields an
/// empty value.
pub fn probe(desktop: &DesktopPaths) -> CurrentSettings {
    let wm_theme = match fs::read_to_string(&desktop.labwc_rc) {
        Ok(text) => read_wm_theme_from_rc(&text).unwrap_or_default(),
        Err(e) => {
            log::debug!("No readable {}: {}", desktop.labwc_rc.display(), e);
            String::new()
        }
    };

    CurrentSettings {
        gtk_theme: gsettings_get(GSETTINGS_SCHEMA, "gtk-theme"),
        icon_theme: gsettings_get(GSETTINGS_SCHEMA, "icon-theme"),
        wm_theme,
    }
}

fn gsettings_get(schema: &str, key: &str) -> String {
    let output = Command::new("gsettings")
        .args(["get", schema, key])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output();

    match output {
        Ok(out) if out.status.success() => {
            clean_gsettings_value(&String::from_utf8_lossy(&out.stdout))
        }
        Ok(out) => {
            log::debug!("gsettings get {schema} {key} exited with {}", out.status);
            String::new()
        }
        Err(e) => {
            log::debug!("gsettings unavailable: {e}");
            String::new()
        }
    }
}

/// Strip the GVariant string quoting and trailing newline from gsettings output.
pub fn clean_gsettings_value(raw: &str) -> String {
    raw.trim_matches(|c| c == '\'' || c == '\n' || c == ' ')
        .to_string()
}

/// Text of the first `<name>` element whose parent is `<theme>`, with the
/// predefined XML entities decoded. A self-closing `<name/>` reads as empty.
pub fn read_wm_theme_from_rc(text: &str) -> Option<String> {
    match find_theme_child(text, "name")? {
        ThemeChild::Content(span) => Some(unescape_xml(text[span].trim())),
        ThemeChild::Empty(_) => Some(String::new()),
    }
}

/// Decode the five predefined XML entities.
pub fn unescape_xml(value: &str) -> String {
    // &amp; last so "&amp;lt;" stays "&lt;"
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Where a `<theme>` child element sits in the rc.xml text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeChild {
    /// Byte range of the element's text content.
    Content(Range<usize>),
    /// Byte range of the whole self-closing tag, e.g. `<name/>`.
    Empty(Range<usize>),
}

/// Locate the first `<child>` element directly inside a `<theme>` element.
/// Commented-out markup is ignored.
pub fn find_theme_child(text: &str, child: &str) -> Option<ThemeChild> {
    // Blank out comments without shifting offsets.
    let masked = XML_COMMENT.replace_all(text, |caps: &regex::Captures| " ".repeat(caps[0].len()));
    let closing = format!("</{child}>");
    let mut stack: Vec<&str> = Vec::new();

    for caps in XML_TAG.captures_iter(&masked) {
        let whole = caps.get(0)?;
        let name = caps.get(2)?.as_str();
        let is_closing = &caps[1] == "/";
        let is_self_closing = &caps[3] == "/";

        if is_closing {
            while let Some(open) = stack.pop() {
                if open == name {
                    break;
                }
            }
            continue;
        }
        if name == child && stack.last() == Some(&"theme") {
            if is_self_closing {
                return Some(ThemeChild::Empty(whole.range()));
            }
            let start = whole.end();
            let end = start + masked[start..].find(&closing)?;
            return Some(ThemeChild::Content(start..end));
        }
        if !is_self_closing {
            stack.push(name);
        }
    }

    None
}
