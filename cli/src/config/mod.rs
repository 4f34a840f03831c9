use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub mod app;
pub mod setup;

pub use app::{AppConfig, PathsConfig};

/// Prefix of environment overrides, e.g. `THEMESWITCH__LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "THEMESWITCH";

/// Global configuration, initialised once at startup
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Outcome of loading the configuration sources
#[derive(Debug, Clone)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}

/// Load configuration from an optional TOML file and the environment.
///
/// A missing file is not an error; environment entries override file values.
pub fn load_config(file: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();
    let env_source = Environment::with_prefix(ENV_PREFIX).separator("__");

    let mut builder = Config::builder();
    if let Some(path) = file {
        builder = builder
            .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(false));
    }

    let config = match builder.add_source(env_source).build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => ConfigLoadResult::Success(Box::new(app_config)),
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Install the loaded configuration as the global one.
///
/// Load failures are reported on stderr and replaced by defaults, since the
/// logger is not running yet at this point.
pub fn init_global(result: ConfigLoadResult) -> &'static AppConfig {
    let config = match result {
        ConfigLoadResult::Success(config) => *config,
        ConfigLoadResult::LoadError(e) | ConfigLoadResult::DeserializeError(e) => {
            eprintln!("Warning: {e}");
            eprintln!("Continuing with default configuration.");
            AppConfig::default()
        }
    };
    CONFIG.get_or_init(|| config)
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}
