//! Browser registry built from the `[browsers]` section
//!
//! The registry is an explicitly order-preserving mapping from browser name
//! to [`Browser`]. Order matters: the synthesized catch-all preference is
//! bound to the *first* configured browser, so a plain hash map would not
//! do. Browsers are owned by the registry and shared with preferences via
//! `Arc`; they are never mutated after construction.

use crate::error::{Error, Result};
use crate::lines::split_key_value;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Fallback browser name used when the `[browsers]` section is empty.
pub const FALLBACK_BROWSER_NAME: &str = "firefox";

/// Fallback launch template. `{url}` is the single placeholder substituted
/// with the (possibly transformed) URL by the launcher.
pub const FALLBACK_LAUNCH_TEMPLATE: &str = "firefox \"{url}\"";

/// One configured browser: a name and a launch template
///
/// The launch template contains exactly one `{url}` placeholder; launching
/// itself is the launcher's job, not this crate's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Browser {
    pub name: String,
    pub launch_template: String,
}

/// Order-preserving mapping of browser name to [`Browser`]
///
/// Built once from the `[browsers]` section and immutable afterwards.
/// Never empty: if the section yields zero entries, exactly one fallback
/// browser is injected.
#[derive(Debug, Clone)]
pub struct BrowserRegistry {
    browsers: Vec<Arc<Browser>>,
    by_name: HashMap<String, usize>,
}

impl BrowserRegistry {
    /// Build a registry from the `[browsers]` section's raw lines, in file order.
    ///
    /// Each line is `name=launch_template`. Duplicate names fail fast with
    /// [`Error::DuplicateBrowserName`]. An empty section produces a registry
    /// holding just the fallback browser.
    pub fn from_section(lines: &[&str]) -> Result<Self> {
        let mut registry = BrowserRegistry {
            browsers: Vec::with_capacity(lines.len()),
            by_name: HashMap::with_capacity(lines.len()),
        };

        for line in lines {
            let (name, launch_template) = split_key_value(line);
            registry.insert(Browser {
                name: name.to_string(),
                launch_template: launch_template.to_string(),
            })?;
        }

        // Nobody should write a config with no browsers at all, but if they
        // do, force a commonly preinstalled default in there.
        if registry.browsers.is_empty() {
            registry.insert(Browser {
                name: FALLBACK_BROWSER_NAME.to_string(),
                launch_template: FALLBACK_LAUNCH_TEMPLATE.to_string(),
            })?;
        }

        Ok(registry)
    }

    fn insert(&mut self, browser: Browser) -> Result<()> {
        if self.by_name.contains_key(&browser.name) {
            return Err(Error::DuplicateBrowserName { name: browser.name });
        }
        self.by_name.insert(browser.name.clone(), self.browsers.len());
        self.browsers.push(Arc::new(browser));
        Ok(())
    }

    /// Look up a browser by name, sharing ownership with the caller.
    pub fn get(&self, name: &str) -> Option<Arc<Browser>> {
        self.by_name.get(name).map(|&i| Arc::clone(&self.browsers[i]))
    }

    /// The first browser in file order, target of the catch-all preference.
    pub fn first(&self) -> Option<Arc<Browser>> {
        self.browsers.first().map(Arc::clone)
    }

    /// Iterate over the browsers in file order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Browser>> {
        self.browsers.iter()
    }

    pub fn len(&self) -> usize {
        self.browsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.browsers.is_empty()
    }
}
