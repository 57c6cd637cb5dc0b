//! XML escaping and best-effort markup stripping
//!
//! [`filter_tags`] is a plain-text extraction heuristic, not a parser: it does
//! not track quoted attribute values, CDATA sections or nested `<`.

use regex::Regex;
use std::sync::OnceLock;

/// Comment spans, matched non-greedily across lines
static XML_COMMENT: OnceLock<Regex> = OnceLock::new();

fn xml_comment_pattern() -> &'static Regex {
    XML_COMMENT
        .get_or_init(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is a valid literal"))
}

/// Escape `<`, `>`, `&` and `"` for use in XML text or attribute values.
///
/// Every other character, including non-ASCII text, is copied unchanged.
pub fn escape_xml_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    for ch in s.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Same as [`escape_xml_text`]; the escaped set is valid for HTML as well
#[inline]
pub fn escape_html(s: &str) -> String {
    escape_xml_text(s)
}

/// Strip comments and tags from `s`, keeping the text between them.
///
/// Comments are replaced by a single space first, so tag-like text inside a
/// comment is never seen by the tag pass. A tag is a `<` that does not follow
/// another `<`, then one or more characters other than `<` and `>`, then `>`;
/// tags are removed without replacement.
pub fn filter_tags(s: &str) -> String {
    let without_comments = xml_comment_pattern().replace_all(s, " ");
    strip_bare_tags(&without_comments)
}

fn strip_bare_tags(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    // start of the pending run of text not yet copied
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'<' && (i == 0 || bytes[i - 1] != b'<') {
            if let Some(end) = tag_end(bytes, i) {
                out.push_str(&s[copied..i]);
                i = end + 1;
                copied = i;
                continue;
            }
        }
        i += 1;
    }
    out.push_str(&s[copied..]);
    out
}

/// Index of the `>` closing a tag opened at `open`, if the tag has a non-empty body
fn tag_end(bytes: &[u8], open: usize) -> Option<usize> {
    let body = &bytes[open + 1..];
    let close = body.iter().position(|&b| b == b'<' || b == b'>')?;
    (close > 0 && body[close] == b'>').then_some(open + 1 + close)
}
