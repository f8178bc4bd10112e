//! URL slug derivation.

/// Separator placed between alphanumeric runs.
pub const SEPARATOR: char = '-';

/// Generate a URL-safe slug from a display name.
///
/// Lowercases ASCII, drops apostrophes and periods so that `Ether.fi` stays one
/// word, and collapses every other run of non-alphanumeric characters into a
/// single `-`. Leading and trailing separators are trimmed.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            slug.push(c);
        } else if matches!(c, '.' | '\'' | '\u{2019}') {
            continue;
        } else {
            pending_separator = true;
        }
    }

    slug
}
