use engine::EngineError;
use std::fmt::Display;

/// Application-wide error types for the themeswitch command line.
///
/// Matcher misses are not errors: an unmatched category is simply left
/// unset. Errors are reserved for things the user has to act on.
///
/// # Error Categories
///
/// - [`NotFound`] - A named asset (terminal scheme) does not exist
/// - [`Io`] - Reading or writing a desktop configuration file failed
/// - [`Command`] - An external program (`gsettings`, `kitten`) failed
/// - [`Config`] - The themeswitch configuration could not be loaded
/// - [`Validation`] - An asset name is unsafe to pass on to other programs
///
/// [`NotFound`]: AppError::NotFound
/// [`Io`]: AppError::Io
/// [`Command`]: AppError::Command
/// [`Config`]: AppError::Config
/// [`Validation`]: AppError::Validation
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// A named asset is absent. Nothing was written.
    NotFound(String),

    /// File system failure while reading or writing desktop configuration.
    Io(String),

    /// An external command exited unsuccessfully or could not be started.
    Command(String),

    /// Configuration loading and validation errors.
    Config(String),

    /// Rejected asset name or command line value.
    Validation(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::Io(msg) => write!(f, "IO Error: {msg}"),
            AppError::Command(msg) => write!(f, "Command Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Validation(msg) => write!(f, "Validation Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NotFound { .. } => AppError::NotFound(err.to_string()),
            EngineError::Io { .. } => AppError::Io(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Io(format!("Failed to serialize output: {err}"))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Attach the file path to an IO error.
pub fn io_error(action: &str, path: &std::path::Path, err: std::io::Error) -> AppError {
    AppError::Io(format!("Failed to {action} '{}': {err}", path.display()))
}
