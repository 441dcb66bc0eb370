//! First-run bootstrap: write a sample config without clobbering anything
//!
//! Writes a bundled sample config to the given path. An existing file is
//! never overwritten: it is first renamed by inserting the lowest unused
//! 4-digit suffix before the extension (`bselect.0001.ini`,
//! `bselect.0002.ini`, ...).

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Bundled sample config written on first run.
pub const SAMPLE_CONFIG: &str = r#"; bselect sample configuration.
;
; Browsers are listed as name = launch template. The template contains a
; single {url} placeholder substituted with the (possibly transformed) URL.
; The first browser listed is the default for unmatched URLs.
[browsers]
firefox = firefox "{url}"
chromium = chromium "{url}"

; Routing rules as pattern = browser[:transform], first match wins.
; A transform is s|find|replace|flags with any single delimiter character;
; the only recognized flag is i (ignore case).
[urls]
; example.com = firefox
; *.corp.example = chromium
; clickbait.com = firefox:s|utm_[^&#]*&?(#)?|$1|
"#;

/// Write the sample config to `path`, rotating any pre-existing file to a
/// backup name first. Returns the backup path if a rotation happened.
pub fn write_sample_config(path: &Path) -> Result<Option<PathBuf>> {
    let backup = if path.exists() {
        let backup = backup_file_name(path);
        std::fs::rename(path, &backup)?;
        Some(backup)
    } else {
        None
    };

    std::fs::write(path, SAMPLE_CONFIG)?;
    Ok(backup)
}

/// Pick the lowest unused backup name for `path`, starting at `0001`.
///
/// The suffix goes before the extension: `bselect.ini` rotates to
/// `bselect.0001.ini`, then `bselect.0002.ini`, and so on.
fn backup_file_name(path: &Path) -> PathBuf {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut index = 0u32;
    loop {
        index += 1;
        let candidate = dir.join(format!("{}.{:04}{}", stem, index, ext));
        if !candidate.exists() {
            return candidate;
        }
    }
}
