//! Error types for routing config loading and compilation
//!
//! This module defines the error types used throughout the bselect library.
//! All public functions return [`Result<T, Error>`] for consistent error handling.

use std::path::PathBuf;

/// Errors that can occur while loading and compiling a routing config
///
/// Loading is all-or-nothing: any of these errors aborts the whole load and
/// the caller sees no partial preference list. The one deliberate exception
/// is a `urls` entry naming an unknown browser, which is dropped silently
/// rather than reported (stale config drift, not a structural mistake).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Config file missing at the expected location
    #[error("The config file was not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Two `[browsers]` entries share the same name
    #[error("Duplicate browser name '{name}' in [browsers] section")]
    DuplicateBrowserName { name: String },

    /// Transform spec does not match the `s<delim>find<delim>replace<delim>flags` grammar
    #[error(
        "Unknown URL transform: {spec}\n\
         URL preference in question: {key}={value}\n\
         Recognized URL transforms are: s|pattern|replacement| (string substitution)"
    )]
    UnknownTransformSyntax {
        spec: String,
        key: String,
        value: String,
    },

    /// Transform flags contain characters outside the supported set
    #[error(
        "Invalid URL transform regex option(s): {flags}\n\
         URL preference in question: {key}={value}\n\
         Recognized regex options are: i (ignore case)"
    )]
    InvalidFlags {
        flags: String,
        key: String,
        value: String,
    },

    /// The transform's find expression failed to compile
    #[error(
        "Invalid URL transform regex: {message}\n\
         URL preference in question: {key}={value}"
    )]
    InvalidPattern {
        message: String,
        key: String,
        value: String,
    },

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
///
/// All public functions in the bselect library return this type alias for
/// consistent error handling.
///
/// # Example
///
/// ```rust
/// use bselect::{load_config, Result};
///
/// fn load_and_count(content: &str) -> Result<usize> {
///     let config = load_config(content)?;
///     Ok(config.preferences.len())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;
