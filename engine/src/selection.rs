use crate::category::Category;
use crate::current::CurrentSettings;
use serde::{Deserialize, Serialize};

/// The five chosen assets. An empty string means "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionBundle {
    pub wm_theme: String,
    pub gtk_theme: String,
    pub icon_theme: String,
    pub terminal_scheme: String,
    pub wallpaper: String,
}

impl SelectionBundle {
    /// Seed a bundle from what the desktop currently uses.
    pub fn from_current(current: &CurrentSettings) -> Self {
        Self {
            wm_theme: current.wm_theme.clone(),
            gtk_theme: current.gtk_theme.clone(),
            icon_theme: current.icon_theme.clone(),
            ..Self::default()
        }
    }

    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::WindowManagerTheme => &self.wm_theme,
            Category::GtkTheme => &self.gtk_theme,
            Category::IconTheme => &self.icon_theme,
            Category::TerminalScheme => &self.terminal_scheme,
            Category::Wallpaper => &self.wallpaper,
        }
    }

    pub fn set(&mut self, category: Category, value: impl Into<String>) {
        let slot = match category {
            Category::WindowManagerTheme => &mut self.wm_theme,
            Category::GtkTheme => &mut self.gtk_theme,
            Category::IconTheme => &mut self.icon_theme,
            Category::TerminalScheme => &mut self.terminal_scheme,
            Category::Wallpaper => &mut self.wallpaper,
        };
        *slot = value.into();
    }

    /// Copy every non-empty slot of `other` into `self`; empty slots in
    /// `other` leave the current value untouched.
    pub fn merge(&mut self, other: &SelectionBundle) {
        for category in Category::ALL {
            let value = other.get(category);
            if !value.is_empty() {
                self.set(category, value);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c).is_empty())
    }
}
