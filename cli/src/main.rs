use clap::{Parser, Subcommand};
use engine::category::Category;
use std::path::PathBuf;
use themeswitch::commands::{self, ApplyOptions, Context};
use themeswitch::config::{self, setup};
use themeswitch::error::{AppError, AppResult};
use themeswitch::logger::setup_logger;

/// Resolve and apply coordinated desktop themes for labwc
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (default: ~/.config/themeswitch/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List installed assets, optionally for one category
    Scan {
        /// wm, gtk, icons, kitty or wallpaper
        category: Option<Category>,
        #[arg(long)]
        json: bool,
    },
    /// List the styles the installed themes and wallpapers can realize
    Styles {
        #[arg(long)]
        json: bool,
    },
    /// Show which asset a style picks in every category
    Resolve {
        style: String,
        /// Print every scoring candidate
        #[arg(long)]
        explain: bool,
        #[arg(long)]
        json: bool,
    },
    /// Print the launcher colors derived from a terminal scheme
    Palette {
        scheme: String,
        /// Write them to fuzzel.ini instead
        #[arg(long)]
        write: bool,
    },
    /// Show the themes the desktop is using now
    Current {
        #[arg(long)]
        json: bool,
    },
    /// Apply a style and/or explicit assets to the desktop
    Apply {
        #[arg(long)]
        style: Option<String>,
        #[arg(long)]
        wm: Option<String>,
        #[arg(long)]
        gtk: Option<String>,
        #[arg(long)]
        icons: Option<String>,
        #[arg(long)]
        scheme: Option<String>,
        #[arg(long)]
        wallpaper: Option<String>,
        /// Print the commands and file writes without performing them
        #[arg(long)]
        dry_run: bool,
    },
    /// Show the effective configuration
    Config {
        /// Write it to the config file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => setup::get_config_file_path().map_err(|e| AppError::Config(e.to_string()))?,
    };

    let app_config = config::init_global(config::load_config(Some(&config_path)));
    if let Err(e) = setup_logger(app_config.logging(), cli.verbose) {
        eprintln!("Warning: Failed to initialize logger: {e}");
    }
    log::debug!("Using config file {}", config_path.display());

    let ctx = Context::from_config(app_config);

    match cli.command {
        Command::Scan { category, json } => commands::scan(&ctx, category, json),
        Command::Styles { json } => commands::styles(&ctx, json),
        Command::Resolve {
            style,
            explain,
            json,
        } => commands::resolve(&ctx, &style, explain, json),
        Command::Palette { scheme, write } => commands::palette(&ctx, &scheme, write),
        Command::Current { json } => commands::current(&ctx, json),
        Command::Apply {
            style,
            wm,
            gtk,
            icons,
            scheme,
            wallpaper,
            dry_run,
        } => {
            let options = ApplyOptions {
                style,
                wm_theme: wm,
                gtk_theme: gtk,
                icon_theme: icons,
                terminal_scheme: scheme,
                wallpaper,
                dry_run,
            };
            commands::apply(&ctx, &options).await
        }
        Command::Config { init } => commands::config(app_config, &config_path, init),
    }
}
