use bselect::{
    default_config_path, load_config_file, write_sample_config, RoutingConfig, UrlPreference,
};
use serde_json::json;
use std::path::PathBuf;

/// Resolve the config path: explicit flag, or bselect.ini next to the binary.
fn resolve_config_path(config: Option<PathBuf>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match config {
        Some(path) => Ok(path),
        None => default_config_path().map_err(|e| {
            anyhow::anyhow!("Failed to resolve the default config path: {}", e).into()
        }),
    }
}

fn load(config: Option<PathBuf>) -> Result<RoutingConfig, Box<dyn std::error::Error>> {
    let path = resolve_config_path(config)?;
    load_config_file(&path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load routing config from {}:\n{}",
            path.display(),
            e
        )
        .into()
    })
}

/// Load the config and print a one-line summary
pub fn check(config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let routing = load(config)?;
    println!(
        "OK: {} browser(s), {} rule(s) (including the \"*\" catch-all)",
        routing.browsers.len(),
        routing.preferences.len()
    );
    Ok(())
}

/// Print the compiled routing rules in first-match-wins order
pub fn rules(config: Option<PathBuf>, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let routing = load(config)?;

    if as_json {
        let entries: Vec<_> = routing.preferences.iter().map(preference_json).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for pref in &routing.preferences {
        match &pref.transform {
            Some(transform) => {
                println!("{} -> {} ({})", pref.pattern, pref.browser.name, transform)
            }
            None => println!("{} -> {}", pref.pattern, pref.browser.name),
        }
    }
    Ok(())
}

/// Print the configured browsers in file order
pub fn browsers(config: Option<PathBuf>, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let routing = load(config)?;

    if as_json {
        let entries: Vec<&bselect::Browser> =
            routing.browsers.iter().map(|b| b.as_ref()).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for browser in routing.browsers.iter() {
        println!("{}\t{}", browser.name, browser.launch_template);
    }
    Ok(())
}

/// Write the sample config, rotating any pre-existing file to a backup name
pub fn init(config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let path = resolve_config_path(config)?;
    let backup = write_sample_config(&path).map_err(|e| {
        anyhow::anyhow!("Failed to write sample config to {}: {}", path.display(), e)
    })?;

    if let Some(backup) = backup {
        println!("Moved existing config to {}", backup.display());
    }
    println!("Wrote sample config to {}", path.display());
    Ok(())
}

fn preference_json(pref: &UrlPreference) -> serde_json::Value {
    json!({
        "pattern": pref.pattern,
        "browser": pref.browser.name,
        "launch_template": pref.browser.launch_template,
        "transform": pref.transform.as_ref().map(|t| t.spec()),
    })
}
