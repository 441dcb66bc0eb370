//! Preference compiler: the `[urls]` section into an ordered rule list
//!
//! Each `urls` entry is `pattern=browserName[:transformSpec]`. The compiler
//! resolves browser references against the registry, compiles transform
//! specs, and appends a synthesized `"*"` catch-all bound to the first
//! browser in registry order. Source order is a hard invariant: the
//! downstream matcher is first-match-wins.

use crate::error::Result;
use crate::lines::split_key_value;
use crate::registry::{Browser, BrowserRegistry};
use crate::transform::UrlTransform;
use std::sync::Arc;

/// Pattern of the synthesized catch-all preference.
pub const CATCH_ALL_PATTERN: &str = "*";

/// One compiled routing rule: a URL pattern, the browser to launch, and an
/// optional URL transform applied before launch
#[derive(Debug, Clone)]
pub struct UrlPreference {
    pub pattern: String,
    pub browser: Arc<Browser>,
    pub transform: Option<UrlTransform>,
}

impl UrlPreference {
    /// Whether this is the synthesized catch-all rule.
    pub fn is_catch_all(&self) -> bool {
        self.pattern == CATCH_ALL_PATTERN
    }
}

/// Compile the `[urls]` section's raw lines into the ordered preference list.
///
/// Per entry, the value is split at its first `:` into a browser name and an
/// optional transform spec. Entries naming an unknown browser are silently
/// dropped; a config referencing a since-removed browser keeps working for
/// all other rules. Transform errors abort the whole load.
///
/// The returned list always ends with a catch-all (`pattern = "*"`) bound to
/// the first browser in registry order, unless the registry is empty.
pub fn compile_preferences(
    lines: &[&str],
    registry: &BrowserRegistry,
) -> Result<Vec<UrlPreference>> {
    let mut preferences = Vec::with_capacity(lines.len() + 1);

    for line in lines {
        let (pattern, value) = split_key_value(line);
        if let Some(preference) = compile_entry(pattern, value, registry)? {
            preferences.push(preference);
        }
    }

    if let Some(first) = registry.first() {
        preferences.push(UrlPreference {
            pattern: CATCH_ALL_PATTERN.to_string(),
            browser: first,
            transform: None,
        });
    }

    Ok(preferences)
}

/// Compile a single `pattern=browserName[:transformSpec]` entry.
///
/// Returns `Ok(None)` when the browser reference does not resolve.
fn compile_entry(
    pattern: &str,
    value: &str,
    registry: &BrowserRegistry,
) -> Result<Option<UrlPreference>> {
    let (browser_name, transform_spec) = match value.split_once(':') {
        Some((name, spec)) => (name, Some(spec)),
        None => (value, None),
    };

    let browser = match registry.get(browser_name) {
        Some(browser) => browser,
        None => return Ok(None),
    };

    let transform = match transform_spec {
        Some(spec) => Some(UrlTransform::compile(spec, pattern, value)?),
        None => None,
    };

    Ok(Some(UrlPreference {
        pattern: pattern.to_string(),
        browser,
        transform,
    }))
}
