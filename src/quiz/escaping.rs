//! String-literal escaping
//!
//! Extracted field text is embedded verbatim inside double-quoted string
//! literals of the generated source. The escape order is a correctness
//! invariant: backslashes first, then quotes, then newlines. Escaping
//! newlines before backslashes would double-escape the backslash introduced
//! by the newline escape.

/// Escape raw field text for embedding in a double-quoted literal
pub fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Inverse of [`escape`].
///
/// Unknown escape sequences are passed through unchanged, so this is total
/// over arbitrary input, and an exact inverse over the image of `escape`.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
