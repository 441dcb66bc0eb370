//! # bselect - browser selector routing-config library
//!
//! This library compiles a small, comment-tolerant text configuration file
//! into a validated, ordered list of URL-routing rules. Each rule binds a
//! URL pattern to a configured browser and an optional URL transform
//! (a sed-like `s|find|replace|flags` rewrite applied before launch).
//! Matching a live URL against the rules and launching the chosen browser
//! are left to the caller.
//!
//! ## Config format
//!
//! ```text
//! ; comment lines start with ';' or '#'
//! [browsers]
//! firefox = firefox "{url}"
//! chromium = chromium "{url}"
//!
//! [urls]
//! *.mozilla.org = firefox
//! clickbait.com = firefox:s|utm_[^&#]*&?(#)?|$1|
//! ```
//!
//! Section headers are matched case-insensitively. `browsers` entries map a
//! name to a launch template holding a single `{url}` placeholder. `urls`
//! entries map a pattern to `browserName[:transformSpec]`. The compiled
//! list preserves file order and always ends with a synthesized `"*"`
//! catch-all bound to the first configured browser, so some default is
//! always reachable.
//!
//! ## Quick start
//!
//! ```rust
//! use bselect::load_config;
//!
//! let content = r#"
//!     [browsers]
//!     vivaldi = vivaldi "{url}"
//!     firefox = firefox "{url}"
//!
//!     [urls]
//!     example.com = firefox
//!     evil.com = vivaldi:s|://evil\.com/|://good.com/|
//! "#;
//!
//! let config = load_config(content)?;
//!
//! // Rules come out in file order, catch-all last.
//! assert_eq!(config.preferences[0].pattern, "example.com");
//! assert_eq!(config.preferences.last().unwrap().pattern, "*");
//! assert_eq!(config.preferences.last().unwrap().browser.name, "vivaldi");
//!
//! // Compiled transforms are pure functions over URLs.
//! let transform = config.preferences[1].transform.as_ref().unwrap();
//! assert_eq!(transform.apply("http://evil.com/a"), "http://good.com/a");
//! # Ok::<(), bselect::Error>(())
//! ```
//!
//! ### Loading from a file
//!
//! ```rust,no_run
//! use bselect::{default_config_path, load_config_file};
//!
//! // The config lives alongside the running binary; resolve the path once
//! // at startup and pass it around explicitly.
//! let path = default_config_path()?;
//! let config = load_config_file(&path)?;
//! for pref in &config.preferences {
//!     println!("{} -> {}", pref.pattern, pref.browser.name);
//! }
//! # Ok::<(), bselect::Error>(())
//! ```
//!
//! ## Error handling
//!
//! Loading is all-or-nothing: a half-loaded routing table that silently
//! mis-routes URLs is worse than refusing to start, so any syntax-level
//! error aborts the whole load. The one exception is a `urls` entry naming
//! an unknown browser, which is dropped silently (stale config drift, not a
//! structural mistake).
//!
//! ```rust
//! use bselect::{load_config, Error};
//!
//! let content = "[urls]\nexample.com = firefox:s|foo|bar|iz\n";
//! match load_config(content) {
//!     Ok(_) => unreachable!(),
//!     Err(Error::InvalidFlags { flags, key, value }) => {
//!         eprintln!("bad flag(s) '{}' in {}={}", flags, key, value);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

// Re-export all public types at crate root
pub use preferences::{UrlPreference, CATCH_ALL_PATTERN};
pub use registry::{Browser, BrowserRegistry, FALLBACK_BROWSER_NAME, FALLBACK_LAUNCH_TEMPLATE};
pub use transform::UrlTransform;

// Re-export error types
pub use error::{Error, Result};

// Re-export the loading entry points
pub use bootstrap::{write_sample_config, SAMPLE_CONFIG};
pub use loader::{default_config_path, load_config, load_config_file, RoutingConfig, CONFIG_FILE_NAME};

// Lower pipeline stages, exposed so each stage is directly testable and
// reusable by callers that bring their own text.
pub use lines::{filter_lines, section_lines, split_key_value};
pub use preferences::compile_preferences;

// All modules are private - use re-exports above for public API
mod bootstrap;
mod error;
mod lines;
mod loader;
mod preferences;
mod registry;
mod transform;
