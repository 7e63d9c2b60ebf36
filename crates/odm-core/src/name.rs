//! Helpers for dotted document names.
//!
//! A dotted name such as `Animal.Mammal.Dog` lists an inheritance chain from the
//! most general type to the most specific one. The last segment is the simple name.

use std::collections::HashSet;

/// Separator between inheritance segments
pub const SEPARATOR: char = '.';

/// Split a dotted name into its ordered segments
pub fn segments(name: &str) -> Vec<&str> {
    name.split(SEPARATOR).collect()
}

/// Segments of a dotted name with duplicates collapsed and order discarded
pub fn segment_set(name: &str) -> HashSet<&str> {
    name.split(SEPARATOR).collect()
}

/// The text after the last separator, or the whole name if there is none
pub fn simple_name(name: &str) -> &str {
    match name.rfind(SEPARATOR) {
        Some(pos) => &name[pos + SEPARATOR.len_utf8()..],
        None => name,
    }
}

/// Returns true if `key` names the same simple type as `simple`,
/// either exactly or as the final segment of a longer chain.
pub fn ends_with_simple_name(key: &str, simple: &str) -> bool {
    key == simple
        || key
            .strip_suffix(simple)
            .is_some_and(|prefix| prefix.ends_with(SEPARATOR))
}

/// Rebuild a plausible class name from its snake_case form.
///
/// `billed_organisation` becomes `BilledOrganisation`. Only the first character
/// of each token is uppercased, the rest is kept as is.
pub fn denormalize(name: &str) -> String {
    name.split('_')
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Convert a class name into its snake_case form, eg. `BilledOrganisation` -> `billed_organisation`
pub fn normalize(class_name: &str) -> String {
    let mut out = String::with_capacity(class_name.len() + 4);
    for c in class_name.chars() {
        if c.is_uppercase() {
            out.push('_');
        }
        out.push(c);
    }
    out.trim_start_matches('_').to_lowercase()
}
