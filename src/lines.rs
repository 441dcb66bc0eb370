//! Line-level normalization of the routing config text
//!
//! This module is the lowest stage of the pipeline: it turns raw file
//! content into trimmed, comment-free lines, slices out a named section,
//! and splits `key=value` lines. Together these implement a deliberately
//! minimal "poor man's INI" reading; general INI parsing (nesting,
//! escaping, multi-line values) is a non-goal.

/// Normalize raw config content into trimmed, non-empty, non-comment lines.
///
/// A line is a comment if, after trimming, it starts with `;` or `#`.
/// Trailing (inline) comments are not stripped; that is a documented
/// limitation of the format, not something to fix here.
pub fn filter_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with(';') && !l.starts_with('#'))
        .collect()
}

/// Slice a named section's `key=value` lines out of the filtered stream.
///
/// The header match is case-insensitive and exact: the trimmed line must
/// equal `[name]`. The section runs until the next line starting with `[`
/// or end of input. Lines without `=` inside the section are filtered out,
/// not treated as a format error. A missing header yields an empty vec;
/// absence is not an error, callers decide defaults.
pub fn section_lines<'a>(lines: &[&'a str], name: &str) -> Vec<&'a str> {
    let header = format!("[{}]", name);
    lines
        .iter()
        .skip_while(|l| !l.eq_ignore_ascii_case(&header))
        .skip(1)
        .take_while(|l| !l.starts_with('['))
        .filter(|l| l.contains('='))
        .copied()
        .collect()
}

/// Split a line at its first `=`, trimming both sides (tabs included).
///
/// Callers only pass lines that [`section_lines`] already verified contain
/// an `=`. A value embedding a literal `=` before the intended separator is
/// mis-split at the first `=`; this matches the reference behavior and is
/// a documented limitation of the format.
pub fn split_key_value(line: &str) -> (&str, &str) {
    match line.split_once('=') {
        Some((key, value)) => (key.trim(), value.trim()),
        None => (line.trim(), ""),
    }
}
