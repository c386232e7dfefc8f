//! Display titles derived from file and directory names.

use crate::builder::DOCUMENT_EXTENSIONS;

/// Strip a recognized document extension (`.md`, `.mdx`) from a name.
///
/// Names with other extensions are returned unchanged.
#[must_use]
pub fn strip_document_extension(name: &str) -> &str {
    if let Some((stem, ext)) = name.rsplit_once('.')
        && !stem.is_empty()
        && DOCUMENT_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
    {
        return stem;
    }
    name
}

/// Format a file or directory name as a display title.
///
/// Punctuation separators (`-`, `_`, `.`) become spaces and each word gets an
/// uppercase first letter.
///
/// # Examples
///
/// - `getting-started.mdx` -> `Getting Started`
/// - `date_picker` -> `Date Picker`
/// - `api` -> `Api`
#[must_use]
pub fn format_title(name: &str) -> String {
    strip_document_extension(name)
        .split(['-', '_', '.', ' '])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
