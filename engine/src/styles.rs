use crate::category::Category;
use crate::matcher::best_match;
use crate::scanner::Inventory;
use crate::selection::SelectionBundle;
use std::borrow::Cow;

/// A user-facing style label with its two keyword tables.
///
/// `detection` decides whether the style is offered at all, from loose hints
/// in GTK theme and wallpaper names. `application` is the curated list used
/// to pick the concrete asset per category once the style is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDefinition {
    pub label: &'static str,
    pub detection: &'static [&'static str],
    pub application: &'static [&'static str],
}

pub const STYLES: &[StyleDefinition] = &[
    StyleDefinition {
        label: "Catppuccin Latte",
        detection: &["catppuccin", "latte"],
        application: &["catppuccin-latte", "catppuccin latte", "catppuccin", "latte"],
    },
    StyleDefinition {
        label: "Catppuccin Mocha",
        detection: &["catppuccin", "mocha"],
        application: &["catppuccin-mocha", "catppuccin mocha", "catppuccin", "mocha"],
    },
    StyleDefinition {
        label: "Graphite Dark",
        detection: &["graphite", "dark", "bandw"],
        application: &["graphite-dark", "graphite dark", "graphite", "dark", "bandw"],
    },
    StyleDefinition {
        label: "Graphite Light",
        detection: &["graphite", "light", "wandb"],
        application: &["graphite-light", "graphite light", "graphite", "light", "wandb"],
    },
    StyleDefinition {
        label: "Gruvbox Dark",
        detection: &["gruvbox", "dark"],
        application: &["gruvbox-dark", "gruvbox dark", "gruvbox", "dark"],
    },
    StyleDefinition {
        label: "Gruvbox Light",
        detection: &["gruvbox", "light"],
        application: &["gruvbox-light", "gruvbox light", "gruvbox", "light"],
    },
    StyleDefinition {
        label: "Juno Mirage",
        detection: &["juno", "mirage", "ayu"],
        application: &["juno-mirage", "juno mirage", "ayu-mirage", "ayu mirage", "mirage"],
    },
    StyleDefinition {
        label: "Kanagawa Dark",
        detection: &["kanagawa", "dark", "dragon"],
        application: &["kanagawa-dark", "kanagawa dark", "kanagawa", "dark", "dragon"],
    },
    StyleDefinition {
        label: "Kanagawa Light",
        detection: &["kanagawa", "light"],
        application: &["kanagawa-light", "kanagawa light", "kanagawa", "light"],
    },
    StyleDefinition {
        label: "Nordfox Dark",
        detection: &["nordfox", "dark"],
        application: &["nordfox-dark", "nordfox dark"],
    },
    StyleDefinition {
        label: "Nordfox Light",
        detection: &["nordfox", "light"],
        application: &["nordfox-light", "nordfox light"],
    },
    StyleDefinition {
        label: "Nordic Polar",
        detection: &["nordic", "polar", "nord", "light"],
        application: &["nordic-polar", "nordic polar", "nord-light", "nord light"],
    },
    StyleDefinition {
        label: "Orchis Orange",
        detection: &["orchis", "orange"],
        application: &[
            "orchis-orange",
            "orchis orange",
            "orchis",
            "orange",
            "ayu-light",
            "ayu light",
        ],
    },
];

impl StyleDefinition {
    pub fn find(label: &str) -> Option<&'static StyleDefinition> {
        STYLES.iter().find(|s| s.label == label)
    }

    /// Number of detection keywords one GTK theme name must contain.
    fn gtk_threshold(&self) -> usize {
        if self.detection.len() >= 2 { 2 } else { 1 }
    }

    fn detected_in_gtk(&self, gtk_themes: &[String]) -> bool {
        let threshold = self.gtk_threshold();
        gtk_themes.iter().any(|theme| {
            let theme = theme.to_lowercase();
            let hits = self
                .detection
                .iter()
                .filter(|k| theme.contains(&k.to_lowercase()))
                .count();
            hits >= threshold
        })
    }

    fn detected_in_wallpapers(&self, wallpapers: &[String]) -> bool {
        wallpapers.iter().any(|wall| {
            let wall = wall.to_lowercase();
            self.detection.iter().any(|k| wall.contains(&k.to_lowercase()))
        })
    }

    pub fn is_available(&self, gtk_themes: &[String], wallpapers: &[String]) -> bool {
        self.detected_in_gtk(gtk_themes) || self.detected_in_wallpapers(wallpapers)
    }
}

/// Application keywords for a style label. Unknown labels resolve with the
/// lowercased label as the only keyword.
pub fn application_keywords(label: &str) -> Vec<Cow<'static, str>> {
    match StyleDefinition::find(label) {
        Some(style) if !style.application.is_empty() => {
            style.application.iter().map(|k| Cow::Borrowed(*k)).collect()
        }
        _ => vec![Cow::Owned(label.to_lowercase())],
    }
}

/// Styles realizable with the installed GTK themes and wallpapers, sorted by label.
pub fn available_styles(gtk_themes: &[String], wallpapers: &[String]) -> Vec<&'static str> {
    let mut labels: Vec<&'static str> = STYLES
        .iter()
        .filter(|s| s.is_available(gtk_themes, wallpapers))
        .map(|s| s.label)
        .collect();
    labels.sort_unstable();
    labels
}

/// Resolve a style into one asset per category.
///
/// Each category is matched independently with the same keyword list; a slot
/// is left empty when nothing in that category scores above zero.
pub fn apply_style(label: &str, inventory: &Inventory) -> SelectionBundle {
    let keywords = application_keywords(label);
    let mut selection = SelectionBundle::default();

    for category in Category::ALL {
        let chosen = best_match(inventory.get(category), &keywords);
        log::debug!(
            "Style '{}' resolved {} to '{}'",
            label,
            category,
            chosen
        );
        selection.set(category, chosen);
    }

    selection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_table_is_sorted_and_unique() {
        let labels: Vec<_> = STYLES.iter().map(|s| s.label).collect();
        let mut sorted = labels.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(labels, sorted);
    }

    #[test]
    fn test_gtk_detection_needs_two_keywords_in_one_theme() {
        // "gruvbox" and "dark" are split across two themes
        let gtk = names(&["Gruvbox-Light", "Adwaita-dark"]);
        let styles = available_styles(&gtk, &[]);
        assert!(!styles.contains(&"Gruvbox Dark"));
        assert!(styles.contains(&"Gruvbox Light"));
    }

    #[test]
    fn test_any_wallpaper_hint_enables_style() {
        let walls = names(&["mocha-sunset.png"]);
        let styles = available_styles(&[], &walls);
        assert_eq!(styles, vec!["Catppuccin Mocha"]);
    }

    #[test]
    fn test_nothing_installed_offers_nothing() {
        assert!(available_styles(&[], &[]).is_empty());
    }

    #[test]
    fn test_unknown_style_falls_back_to_label() {
        assert_eq!(application_keywords("Dracula Pro"), vec!["dracula pro"]);
        assert_eq!(
            application_keywords("Nordfox Dark"),
            vec!["nordfox-dark", "nordfox dark"]
        );
    }

    #[test]
    fn test_apply_style_selects_per_category() {
        let inventory = Inventory {
            wm_themes: names(&["GTK", "Nordic"]),
            gtk_themes: names(&["Gruvbox-Dark", "Gruvbox-Light", "Nordic"]),
            icon_themes: names(&["Papirus", "Papirus-Dark"]),
            terminal_schemes: names(&["Gruvbox Dark Hard", "Nord"]),
            wallpapers: names(&["forest.jpg"]),
        };

        let selection = apply_style("Gruvbox Dark", &inventory);
        assert_eq!(selection.gtk_theme, "Gruvbox-Dark");
        assert_eq!(selection.terminal_scheme, "Gruvbox Dark Hard");
        assert_eq!(selection.icon_theme, "Papirus-Dark");
        assert_eq!(selection.wm_theme, "");
        assert_eq!(selection.wallpaper, "");
    }
}
