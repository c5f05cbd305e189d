//! Naming convention shared by node types and grammar keywords
//!
//! Node types are spelled in UpperCamel form (`CheckNames`) while the
//! grammar uses lowercase hyphenated keywords (`check-names`). This module
//! maps the former onto the latter.

/// Convert an UpperCamel identifier into its hyphenated grammar keyword.
///
/// The first character is lower-cased; every later upper-case character is
/// emitted as a hyphen followed by its lower-case form. Everything else passes
/// through unchanged, so digits and punctuation are kept as they are and an
/// empty identifier maps to an empty keyword.
pub fn camel_to_hyphened(identifier: &str) -> String {
    let mut chars = identifier.chars();
    let mut keyword = String::with_capacity(identifier.len() + 4);

    if let Some(first) = chars.next() {
        keyword.extend(first.to_lowercase());
    }
    for c in chars {
        if c.is_uppercase() {
            keyword.push('-');
            keyword.extend(c.to_lowercase());
        } else {
            keyword.push(c);
        }
    }
    keyword
}
