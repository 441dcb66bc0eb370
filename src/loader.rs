//! Config loading entry points
//!
//! Ties the pipeline together: line filtering, section extraction, registry
//! build, preference compilation. [`load_config`] works on in-memory text;
//! [`load_config_file`] is the file convenience wrapper. The config path is
//! resolved once at startup (see [`default_config_path`]) and passed in
//! explicitly; the library holds no global state.

use crate::error::{Error, Result};
use crate::lines::{filter_lines, section_lines};
use crate::preferences::{compile_preferences, UrlPreference};
use crate::registry::BrowserRegistry;
use std::path::{Path, PathBuf};

/// Well-known config file name, expected alongside the running binary.
pub const CONFIG_FILE_NAME: &str = "bselect.ini";

/// A fully compiled routing config: the browser registry plus the ordered
/// preference list the matcher consumes
#[derive(Debug, Clone)]
pub struct RoutingConfig {
    pub browsers: BrowserRegistry,
    pub preferences: Vec<UrlPreference>,
}

/// Compile routing config from raw text.
///
/// Loading is all-or-nothing: any error means no partial preference list.
///
/// # Example
///
/// ```rust
/// use bselect::load_config;
///
/// let content = r#"
///     [browsers]
///     firefox = firefox "{url}"
///
///     [urls]
///     example.com = firefox
/// "#;
///
/// let config = load_config(content)?;
/// assert_eq!(config.preferences.len(), 2); // entry + catch-all
/// assert_eq!(config.preferences[1].pattern, "*");
/// # Ok::<(), bselect::Error>(())
/// ```
pub fn load_config(content: &str) -> Result<RoutingConfig> {
    let lines = filter_lines(content);

    let browsers = BrowserRegistry::from_section(&section_lines(&lines, "browsers"))?;
    let preferences = compile_preferences(&section_lines(&lines, "urls"), &browsers)?;

    Ok(RoutingConfig {
        browsers,
        preferences,
    })
}

/// Compile routing config from a file.
///
/// A missing file is fatal and reported with the full expected path; there
/// is no fallback config.
pub fn load_config_file(path: &Path) -> Result<RoutingConfig> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    load_config(&content)
}

/// Resolve the default config path: [`CONFIG_FILE_NAME`] in the directory
/// of the running binary.
///
/// Resolved once at startup and passed into [`load_config_file`] by the
/// caller, rather than read lazily from hidden global state.
pub fn default_config_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(CONFIG_FILE_NAME))
}
