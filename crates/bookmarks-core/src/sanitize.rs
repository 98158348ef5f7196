//! Output sanitization.

/// Escape the characters that let stored text be read back as markup.
///
/// `&` goes first so the entities produced for the other characters are not
/// escaped twice.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
