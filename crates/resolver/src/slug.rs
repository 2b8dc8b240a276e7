/// Turns a display name or file name into a URL slug.
///
/// Lower-cases, drops one trailing `.ext`, collapses every run of characters
/// outside `[a-z0-9]` into a single `-` and trims hyphens from both ends.
/// Non-ASCII letters are not transliterated, they are treated as separators:
/// `bludný kruh.txt` becomes `bludn-kruh`.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stem = strip_extension(&lowered);

    let mut out = String::with_capacity(stem.len());
    let mut pending_dash = false;
    for ch in stem.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch);
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Removes the last `.ext` segment when `ext` is made only of word characters.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => {
            let ext = &name[idx + 1..];
            if !ext.is_empty() && ext.chars().all(|c| c.is_alphanumeric() || c == '_') {
                &name[..idx]
            } else {
                name
            }
        }
        None => name,
    }
}
