//! Command line front end for the theme resolution engine.
//!
//! Loads the layered configuration, installs the logger and drives the
//! engine's scanner, matcher and palette extractor. The [`writer`] module
//! persists a resolved selection to labwc, GTK, kitty and fuzzel.

pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod validation;
pub mod writer;
