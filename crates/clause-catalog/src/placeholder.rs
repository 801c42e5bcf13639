//! Placeholder scanning and substitution
//!
//! A placeholder is `{{name}}` where `name` starts with an ASCII letter or
//! underscore, followed by ASCII letters, digits, `_` or `-`. Anything else
//! between braces is plain text. There is no escape syntax.
//!
//! Substitution is a single left-to-right pass: replacement text is never
//! scanned again, so a value containing `{{x}}` is emitted verbatim.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashSet;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{([A-Za-z_][A-Za-z0-9_\-]*)\}\}").expect("placeholder pattern is valid")
});

/// Distinct placeholder names in order of first appearance
#[must_use]
pub fn placeholders(body: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    PLACEHOLDER
        .captures_iter(body)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .filter(|name| seen.insert(*name))
        .collect()
}

/// Whether `name` can appear inside a placeholder
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Text emitted for a placeholder without a value: `[name]`
#[inline]
#[must_use]
pub fn fallback(name: &str) -> String {
    format!("[{name}]")
}

/// Replace every placeholder in `body`
///
/// `lookup` is asked once per occurrence. A `None` or empty value yields
/// [`fallback`].
pub fn substitute<'v, F>(body: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<&'v str>,
{
    PLACEHOLDER
        .replace_all(body, |caps: &Captures<'_>| {
            let name = &caps[1];
            match lookup(name) {
                Some(value) if !value.is_empty() => value.to_owned(),
                _ => fallback(name),
            }
        })
        .into_owned()
}
