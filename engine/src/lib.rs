//! # Themeswitch Engine
//!
//! Theme resolution core for the themeswitch desktop appearance switcher.
//! Theme assets on a typical Linux machine are spread over several package
//! roots and follow no naming convention, so this library discovers what is
//! installed and resolves a human-chosen style into concrete selections.
//!
//! ## Modules
//!
//! - [`paths`] - Search roots per asset category and desktop config file locations
//! - [`category`] - Asset categories and their membership predicates
//! - [`scanner`] - Multi-root directory scanning with symlink resolution
//! - [`matcher`] - Keyword-weighted fuzzy matching of asset names
//! - [`styles`] - Static style tables, availability and style application
//! - [`selection`] - The five-slot selection bundle
//! - [`palette`] - Terminal scheme parsing and launcher accent snippet rendering
//! - [`current`] - Probe for the currently active desktop settings
//! - [`discovery`] - Full discovery pass, optionally as a cancellable background task
//! - [`errors`] - Error types shared by the engine

pub mod category;
pub mod current;
pub mod discovery;
pub mod errors;
pub mod matcher;
pub mod palette;
pub mod paths;
pub mod scanner;
pub mod selection;
pub mod styles;

pub use category::Category;
pub use errors::{EngineError, EngineResult};
pub use selection::SelectionBundle;

/// Identifier of a discoverable theme, icon set, scheme or wallpaper.
pub type AssetName = String;
