//! LaTeX escaping for free text pulled from the resume document.
//!
//! Backslash is deliberately left alone so that callers can pass through text
//! that already carries LaTeX commands.

/// Replacements applied after ampersands, in this order. Braces come before
/// `~` and `^` because their replacements introduce `{}`.
const REPLACEMENTS: &[(char, &str)] = &[
    ('%', r"\%"),
    ('$', r"\$"),
    ('#', r"\#"),
    ('_', r"\_"),
    ('{', r"\{"),
    ('}', r"\}"),
    ('~', r"\textasciitilde{}"),
    ('^', r"\textasciicircum{}"),
];

/// Escapes `&`, collapsing `\\&` back to `\&` so already-escaped ampersands
/// are not doubled.
pub fn escape_ampersands(text: &str) -> String {
    text.replace('&', r"\&").replace(r"\\&", r"\&")
}

/// Escapes the LaTeX special characters in `text`.
pub fn escape(text: &str) -> String {
    let mut out = escape_ampersands(text);
    for (ch, replacement) in REPLACEMENTS {
        if out.contains(*ch) {
            out = out.replace(*ch, replacement);
        }
    }
    out
}

/// [`escape`] for optional fields; absent text becomes the empty string.
pub fn escape_opt(text: Option<&str>) -> String {
    text.map(escape).unwrap_or_default()
}
