//! Compiler for the sed-like URL transform mini-language
//!
//! A transform spec has the form `s<delim><find><delim><replace><delim><flags>`
//! where `<delim>` is any single non-whitespace character, required to be the
//! same at all three positions. `<find>` is a regular expression, `<replace>`
//! a replacement template, and `<flags>` zero or more options (only `i`,
//! ignore case, is recognized).
//!
//! There is no escaping mechanism: a literal delimiter character inside
//! `<find>` or `<replace>` changes the field count and fails the grammar.
//! This is a documented limitation of the format, preserved as-is.
//!
//! # Example
//!
//! ```rust
//! use bselect::UrlTransform;
//!
//! let transform = UrlTransform::compile(
//!     "s|utm_[^&#]*&?(#)?|$1|",
//!     "clickbait.com",
//!     "vivaldi:s|utm_[^&#]*&?(#)?|$1|",
//! )?;
//! assert_eq!(
//!     transform.apply("https://clickbait.com/article?utm_source=bla&article_id=123"),
//!     "https://clickbait.com/article?article_id=123"
//! );
//! # Ok::<(), bselect::Error>(())
//! ```

use crate::error::{Error, Result};
use regex::RegexBuilder;
use std::fmt;

/// A compiled find/replace URL transform
///
/// Performs a global substitution: every non-overlapping match of the find
/// expression is replaced. The replacement template supports the regex
/// engine's standard back-references (`$1`, `${name}`). The struct is
/// stateless beyond the compiled pattern and template, so it is safe to
/// call [`apply`](UrlTransform::apply) repeatedly and concurrently.
#[derive(Debug, Clone)]
pub struct UrlTransform {
    regex: regex::Regex,
    replacement: String,
    spec: String,
}

impl UrlTransform {
    /// Parse and compile a transform spec.
    ///
    /// `key` and `value` are the originating `urls` entry, carried verbatim
    /// into every error for user-facing diagnostics.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownTransformSyntax`] if the spec does not match the
    ///   grammar (missing leading `s`, missing or mismatched delimiters).
    /// - [`Error::InvalidFlags`] if the flags field contains characters
    ///   outside the supported set, listing every offender in order.
    /// - [`Error::InvalidPattern`] if the find expression fails to compile,
    ///   including the regex engine's diagnostic.
    pub fn compile(spec: &str, key: &str, value: &str) -> Result<UrlTransform> {
        let (find, replace, flags) =
            split_spec(spec).ok_or_else(|| Error::UnknownTransformSyntax {
                spec: spec.to_string(),
                key: key.to_string(),
                value: value.to_string(),
            })?;

        let ignore_case = parse_flags(flags).map_err(|invalid| Error::InvalidFlags {
            flags: invalid,
            key: key.to_string(),
            value: value.to_string(),
        })?;

        let regex = RegexBuilder::new(find)
            .case_insensitive(ignore_case)
            .build()
            .map_err(|e| Error::InvalidPattern {
                message: e.to_string(),
                key: key.to_string(),
                value: value.to_string(),
            })?;

        Ok(UrlTransform {
            regex,
            replacement: replace.to_string(),
            spec: spec.to_string(),
        })
    }

    /// Rewrite a URL, replacing every non-overlapping match of the find
    /// expression with the replacement template.
    pub fn apply(&self, url: &str) -> String {
        self.regex
            .replace_all(url, self.replacement.as_str())
            .into_owned()
    }

    /// The original spec string this transform was compiled from.
    pub fn spec(&self) -> &str {
        &self.spec
    }
}

impl fmt::Display for UrlTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec)
    }
}

/// Split a spec into its `(find, replace, flags)` fields.
///
/// The delimiter is whatever single non-whitespace character follows the
/// leading `s`; the same literal character must then close the find and
/// replace fields. Any other field count means a delimiter was missing,
/// mismatched, or appeared inside a field, and the grammar does not match.
fn split_spec(spec: &str) -> Option<(&str, &str, &str)> {
    let rest = spec.strip_prefix('s')?;
    let delim = rest.chars().next()?;
    if delim.is_whitespace() {
        return None;
    }
    let body = &rest[delim.len_utf8()..];

    let mut fields = body.split(delim);
    let find = fields.next()?;
    let replace = fields.next()?;
    let flags = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    Some((find, replace, flags))
}

/// Fold the flags field into regex options.
///
/// Returns the case-insensitivity setting, or the full string of
/// unrecognized characters (in order, duplicates kept) on failure.
fn parse_flags(flags: &str) -> std::result::Result<bool, String> {
    let mut ignore_case = false;
    let mut invalid = String::new();
    for c in flags.chars() {
        match c {
            'i' => ignore_case = true,
            _ => invalid.push(c),
        }
    }
    if invalid.is_empty() {
        Ok(ignore_case)
    } else {
        Err(invalid)
    }
}
