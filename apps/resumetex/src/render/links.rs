//! Inline link translation for achievement descriptions.
//!
//! Descriptions are split into alternating literal and protected spans.
//! `[text](url)` links and `\href{url}{text}` commands already present in the
//! text become protected `\href` spans; only literal spans are escaped.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::escape::escape;

/// Markdown link (groups 1-2) or an existing `\href{url}{text}` (groups 3-4).
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)|\\href\{([^}]*)\}\{([^}]*)\}")
        .expect("link pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span<'a> {
    /// Free text, escaped on output.
    Literal(&'a str),
    /// A finished `\href` command, emitted verbatim.
    Protected(String),
}

/// The LaTeX hyperlink command for `url` labelled `text`.
pub fn href(url: &str, text: &str) -> String {
    format!("\\href{{{url}}}{{{text}}}")
}

/// Splits `text` into literal and protected spans, in order.
///
/// Malformed notation (unbalanced brackets or parentheses) does not match and
/// stays inside a literal span.
pub fn split_spans(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in LINK_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            spans.push(Span::Literal(&text[last..whole.start()]));
        }
        spans.push(Span::Protected(link_command(&caps)));
        last = whole.end();
    }

    if last < text.len() {
        spans.push(Span::Literal(&text[last..]));
    }
    spans
}

fn link_command(caps: &Captures<'_>) -> String {
    let (text, url) = match (caps.get(1), caps.get(2)) {
        (Some(text), Some(url)) => (text.as_str(), url.as_str()),
        _ => (
            caps.get(4).map_or("", |m| m.as_str()),
            caps.get(3).map_or("", |m| m.as_str()),
        ),
    };
    // URLs never carry escaped ampersands.
    href(&url.replace(r"\&", "&"), text)
}

/// Translates inline links to `\href` commands and escapes everything else.
pub fn translate_links(description: &str) -> String {
    let mut out = String::with_capacity(description.len());
    for span in split_spans(description) {
        match span {
            Span::Literal(text) => out.push_str(&escape(text)),
            Span::Protected(command) => out.push_str(&command),
        }
    }
    out
}
