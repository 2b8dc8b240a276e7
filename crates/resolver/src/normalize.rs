use unicode_normalization::UnicodeNormalization;

/// Diacritic-insensitive form used for fuzzy cover matching.
///
/// Decomposes (NFD), drops everything outside ASCII, lower-cases and turns
/// every remaining character outside `[a-z0-9 ]` into a space.
pub fn ascii_normalize(text: &str) -> String {
    let normalized: String = text
        .nfd()
        .filter(char::is_ascii)
        .map(|c| c.to_ascii_lowercase())
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ' {
                c
            } else {
                ' '
            }
        })
        .collect();
    normalized.trim().to_string()
}

/// Removes `(...)` qualifiers such as `(single)` and the whitespace around them.
pub fn strip_parentheticals(text: &str) -> String {
    let mut parts = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')') else {
            break;
        };
        parts.push(&rest[..open]);
        rest = &rest[open + close + 1..];
    }
    parts.push(rest);

    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn tokens(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}
