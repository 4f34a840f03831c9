//! Subcommand handlers. Each handler takes the resolved search and desktop
//! paths and prints its result on stdout.

use crate::config::setup::write_default_config;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::writer::ConfigWriter;
use crate::writer::runner::{CommandRunner, DryRunRunner, SystemRunner};
use engine::category::Category;
use engine::current::{self, CurrentSettings};
use engine::discovery::DiscoveryTask;
use engine::matcher;
use engine::palette::derive_accent_snippet;
use engine::paths::{DesktopPaths, SearchPaths};
use engine::scanner::{self, Inventory};
use engine::selection::SelectionBundle;
use engine::styles::{self, application_keywords, apply_style};
use std::fmt::Write as _;
use std::path::Path;

/// Paths every command works against.
#[derive(Debug, Clone)]
pub struct Context {
    pub search: SearchPaths,
    pub desktop: DesktopPaths,
}

impl Context {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            search: config.search_paths(),
            desktop: config.desktop_paths(),
        }
    }
}

/// Explicit choices for `apply`; `None` keeps whatever the style or the
/// current desktop provides.
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    pub style: Option<String>,
    pub wm_theme: Option<String>,
    pub gtk_theme: Option<String>,
    pub icon_theme: Option<String>,
    pub terminal_scheme: Option<String>,
    pub wallpaper: Option<String>,
    pub dry_run: bool,
}

impl ApplyOptions {
    fn overrides(&self) -> SelectionBundle {
        let mut bundle = SelectionBundle::default();
        for (category, value) in [
            (Category::WindowManagerTheme, &self.wm_theme),
            (Category::GtkTheme, &self.gtk_theme),
            (Category::IconTheme, &self.icon_theme),
            (Category::TerminalScheme, &self.terminal_scheme),
            (Category::Wallpaper, &self.wallpaper),
        ] {
            if let Some(value) = value {
                bundle.set(category, value.trim());
            }
        }
        bundle
    }
}

pub fn scan(ctx: &Context, category: Option<Category>, json: bool) -> AppResult<()> {
    match category {
        Some(category) => {
            let names = scanner::scan(&ctx.search, category);
            if json {
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else {
                for name in names {
                    println!("{name}");
                }
            }
        }
        None => {
            let inventory = scanner::scan_all(&ctx.search);
            if json {
                println!("{}", serde_json::to_string_pretty(&inventory)?);
            } else {
                print!("{}", format_inventory(&inventory));
            }
        }
    }
    Ok(())
}

pub fn styles(ctx: &Context, json: bool) -> AppResult<()> {
    let gtk_themes = scanner::scan(&ctx.search, Category::GtkTheme);
    let wallpapers = scanner::scan(&ctx.search, Category::Wallpaper);
    let available = styles::available_styles(&gtk_themes, &wallpapers);

    if json {
        println!("{}", serde_json::to_string_pretty(&available)?);
    } else {
        for label in available {
            println!("{label}");
        }
    }
    Ok(())
}

pub fn resolve(ctx: &Context, style: &str, explain: bool, json: bool) -> AppResult<()> {
    let inventory = scanner::scan_all(&ctx.search);
    let selection = apply_style(style, &inventory);

    if json {
        println!("{}", serde_json::to_string_pretty(&selection)?);
        return Ok(());
    }

    print!("{}", format_selection(&selection));
    if explain {
        println!();
        print!("{}", format_explanation(style, &inventory));
    }
    Ok(())
}

pub fn palette(ctx: &Context, scheme: &str, write: bool) -> AppResult<()> {
    let snippet = derive_accent_snippet(&ctx.search, scheme.trim())?;

    if write {
        ConfigWriter::new(&ctx.search, &ctx.desktop, SystemRunner).write_accent_snippet(&snippet)?;
        println!("Wrote {}", ctx.desktop.fuzzel_ini.display());
    } else {
        print!("{}", snippet.render());
    }
    Ok(())
}

pub fn current(ctx: &Context, json: bool) -> AppResult<()> {
    let settings = current::probe(&ctx.desktop);
    if json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
    } else {
        print!("{}", format_current(&settings));
    }
    Ok(())
}

/// Resolve the final selection from the current desktop, the optional style
/// and the explicit overrides, then hand it to the config writer.
pub async fn apply(ctx: &Context, options: &ApplyOptions) -> AppResult<()> {
    let discovery = DiscoveryTask::spawn(ctx.search.clone(), ctx.desktop.clone())
        .wait()
        .await
        .ok_or_else(|| AppError::Command("Discovery did not complete".to_string()))?;

    let selection = build_selection(&discovery.current, &discovery.inventory, options);
    if selection.is_empty() {
        println!("Nothing to apply");
        return Ok(());
    }

    if options.dry_run {
        write_selection(ctx, DryRunRunner, true, &selection)
    } else {
        write_selection(ctx, SystemRunner, false, &selection)
    }
}

fn build_selection(
    current: &CurrentSettings,
    inventory: &Inventory,
    options: &ApplyOptions,
) -> SelectionBundle {
    let mut selection = SelectionBundle::from_current(current);
    if let Some(style) = options.style.as_deref() {
        let resolved = apply_style(style.trim(), inventory);
        log::debug!("Style '{style}' resolved to {resolved:?}");
        selection.merge(&resolved);
    }
    selection.merge(&options.overrides());
    selection
}

fn write_selection<R: CommandRunner>(
    ctx: &Context,
    runner: R,
    dry_run: bool,
    selection: &SelectionBundle,
) -> AppResult<()> {
    ConfigWriter::new(&ctx.search, &ctx.desktop, runner)
        .dry_run(dry_run)
        .apply(selection)?;
    print!("{}", format_selection(selection));
    Ok(())
}

/// Print the config file location and the effective configuration;
/// with `init`, write it out unless a file already exists.
pub fn config(config: &AppConfig, path: &Path, init: bool) -> AppResult<()> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| AppError::Config(format!("Failed to render configuration: {e}")))?;

    if init {
        let created = write_default_config(path, &rendered)
            .map_err(|e| AppError::Config(e.to_string()))?;
        if created {
            println!("Created {}", path.display());
        } else {
            println!("{} already exists, left unchanged", path.display());
        }
        return Ok(());
    }

    println!("# {}", path.display());
    print!("{rendered}");
    Ok(())
}

fn display_or_none(value: &str) -> &str {
    if value.is_empty() { "(none)" } else { value }
}

pub fn format_inventory(inventory: &Inventory) -> String {
    let mut out = String::new();
    for category in Category::ALL {
        let names = inventory.get(category);
        let _ = writeln!(out, "{} ({}):", category, names.len());
        for name in names {
            let _ = writeln!(out, "  {name}");
        }
    }
    out
}

pub fn format_selection(selection: &SelectionBundle) -> String {
    let mut out = String::new();
    for category in Category::ALL {
        let _ = writeln!(
            out,
            "{:<6} {}",
            category.label(),
            display_or_none(selection.get(category))
        );
    }
    out
}

pub fn format_current(settings: &CurrentSettings) -> String {
    format!(
        "{:<6} {}\n{:<6} {}\n{:<6} {}\n",
        Category::WindowManagerTheme.label(),
        display_or_none(&settings.wm_theme),
        Category::GtkTheme.label(),
        display_or_none(&settings.gtk_theme),
        Category::IconTheme.label(),
        display_or_none(&settings.icon_theme),
    )
}

/// Every candidate that scores above zero for the style's keywords, best
/// first, with the winner marked.
pub fn format_explanation(style: &str, inventory: &Inventory) -> String {
    let keywords = application_keywords(style);
    let mut out = String::new();
    let _ = writeln!(out, "Keywords: {}", keywords.join(", "));

    for category in Category::ALL {
        let candidates = inventory.get(category);
        let winner = matcher::best_match(candidates, &keywords);

        let mut scored: Vec<(&str, i64)> = candidates
            .iter()
            .map(|c| (c.as_str(), matcher::score(c, &keywords)))
            .filter(|(_, s)| *s > 0)
            .collect();
        // stable sort keeps scan order among equal scores, matching the tie-break
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        let _ = writeln!(out, "{category}:");
        if scored.is_empty() {
            let _ = writeln!(out, "  (no match)");
        }
        for (name, s) in scored {
            let marker = if name == winner { " *" } else { "" };
            let _ = writeln!(out, "  {s:>5}  {name}{marker}");
        }
    }
    out
}
