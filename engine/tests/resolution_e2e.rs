use claims::*;
use engine::SelectionBundle;
use engine::discovery::discover;
use engine::palette::derive_accent_snippet;
use engine::paths::{DesktopPaths, SearchPaths};
use engine::styles::apply_style;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn machine(root: &Path) -> (SearchPaths, DesktopPaths) {
    for theme in ["Gruvbox-Dark", "Gruvbox-Light", "Nordic"] {
        fs::create_dir_all(root.join("themes").join(theme).join("gtk-3.0")).unwrap();
    }
    fs::create_dir_all(root.join("icons/Papirus")).unwrap();
    fs::write(root.join("icons/Papirus/index.theme"), "").unwrap();
    fs::create_dir_all(root.join("kitty")).unwrap();
    fs::write(
        root.join("kitty/Gruvbox Dark.conf"),
        "## name: Gruvbox Dark\nforeground #EBDBB2\nbackground #282828\ncolor4 #458588\n",
    )
    .unwrap();
    fs::create_dir_all(root.join("walls")).unwrap();
    fs::write(root.join("walls/gruvbox-forest.png"), b"").unwrap();
    fs::write(root.join("walls/beach.jpg"), b"").unwrap();

    let paths = SearchPaths {
        theme_dirs: vec![root.join("themes")],
        icon_dirs: vec![root.join("icons")],
        scheme_dir: root.join("kitty"),
        wallpaper_dir: root.join("walls"),
    };
    (paths, DesktopPaths::for_home(root))
}

#[test]
fn test_style_resolution_end_to_end() {
    let dir = TempDir::new().unwrap();
    let (paths, desktop) = machine(dir.path());

    let discovery = discover(&paths, &desktop);
    assert!(discovery.styles.contains(&"Gruvbox Dark".to_string()));
    assert!(discovery.styles.contains(&"Gruvbox Light".to_string()));
    assert!(!discovery.styles.contains(&"Catppuccin Latte".to_string()));

    let resolved = apply_style("Gruvbox Dark", &discovery.inventory);
    assert_eq!(resolved.gtk_theme, "Gruvbox-Dark");
    assert_eq!(resolved.terminal_scheme, "Gruvbox Dark");
    assert_eq!(resolved.wallpaper, "gruvbox-forest.png");
    // No icon theme or window-manager theme shares a keyword
    assert_eq!(resolved.icon_theme, "");
    assert_eq!(resolved.wm_theme, "");

    let mut bundle = SelectionBundle {
        icon_theme: "Papirus".into(),
        wm_theme: "GTK".into(),
        ..Default::default()
    };
    bundle.merge(&resolved);
    assert_eq!(bundle.icon_theme, "Papirus");
    assert_eq!(bundle.wm_theme, "GTK");
    assert_eq!(bundle.gtk_theme, "Gruvbox-Dark");

    let snippet = assert_ok!(derive_accent_snippet(&paths, &bundle.terminal_scheme));
    assert_eq!(snippet.name, "Gruvbox Dark");
    assert_eq!(snippet.author, "unknown");
    assert!(snippet.render().contains("border=458588ff\n"));
}

#[test]
fn test_unknown_scheme_is_not_found() {
    let dir = TempDir::new().unwrap();
    let (paths, _) = machine(dir.path());

    let err = assert_err!(derive_accent_snippet(&paths, "Solarized"));
    assert!(err.is_not_found());
}

#[test]
fn test_unknown_style_uses_its_label() {
    let dir = TempDir::new().unwrap();
    let (paths, desktop) = machine(dir.path());
    let discovery = discover(&paths, &desktop);

    let resolved = apply_style("Nordic", &discovery.inventory);
    assert_eq!(resolved.gtk_theme, "Nordic");
    assert_eq!(resolved.terminal_scheme, "");
}
