//! Text rewrites of the desktop configuration files.

use engine::current::{ThemeChild, find_theme_child};

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Set the text of `<theme><name>` and `<theme><icon>` in labwc's rc.xml.
///
/// Empty values and absent elements leave the document unchanged; a
/// self-closing `<name/>` is expanded to hold the value. All other markup,
/// comments and formatting are preserved byte for byte.
pub fn update_rc_xml(text: &str, wm_theme: &str, icon_theme: &str) -> String {
    let mut updated = text.to_string();

    for (child, value) in [("name", wm_theme), ("icon", icon_theme)] {
        if value.is_empty() {
            continue;
        }
        let value = escape_xml(value);
        match find_theme_child(&updated, child) {
            Some(ThemeChild::Content(span)) => updated.replace_range(span, &value),
            Some(ThemeChild::Empty(span)) => {
                let open_tag = updated[span.clone()]
                    .trim_end_matches('>')
                    .trim_end_matches('/')
                    .trim_end()
                    .to_string();
                updated.replace_range(span, &format!("{open_tag}>{value}</{child}>"));
            }
            None => log::debug!("rc.xml has no <theme><{child}> element"),
        }
    }

    updated
}

/// Replace the value of every `GTK_THEME=` line in labwc's environment file.
pub fn update_environment(text: &str, gtk_theme: &str) -> String {
    let mut out = String::with_capacity(text.len() + gtk_theme.len());
    for line in text.lines() {
        if line.starts_with("GTK_THEME=") {
            out.push_str("GTK_THEME=");
            out.push_str(gtk_theme);
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
