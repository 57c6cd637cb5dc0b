//! Context excerpts around detected issues

use crate::index::TextIndex;

/// Produces a bounded excerpt of `text` around the character range `[from, to)`
pub trait ExcerptExtractor: Send + Sync {
    /// Excerpt with up to `width` characters of context on each side
    fn excerpt(&self, text: &str, from: usize, to: usize, width: usize) -> String;

    /// Same as [`ExcerptExtractor::excerpt`] over a text indexed once for a
    /// whole batch of issues
    fn excerpt_in(&self, index: &TextIndex<'_>, from: usize, to: usize, width: usize) -> String {
        self.excerpt(index.text(), from, to, width)
    }
}

const ELLIPSIS: &str = "...";

/// Plain-text context window.
///
/// Line breaks and tabs inside the window are flattened to spaces so the
/// excerpt is a single line; `...` marks text cut off on either side. With
/// [`ContextWindow::with_marker`] a second line underlines the issue with `^`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextWindow {
    marker: bool,
}

impl ContextWindow {
    /// Single-line excerpts
    pub fn new() -> Self {
        Self::default()
    }

    /// Excerpts followed by a `^^^` marker line under the issue
    pub fn with_marker() -> Self {
        Self { marker: true }
    }
}

impl ExcerptExtractor for ContextWindow {
    fn excerpt(&self, text: &str, from: usize, to: usize, width: usize) -> String {
        self.excerpt_in(&TextIndex::new(text), from, to, width)
    }

    fn excerpt_in(&self, index: &TextIndex<'_>, from: usize, to: usize, width: usize) -> String {
        let char_len = index.char_len();
        let to = to.min(char_len);
        let from = from.min(to);
        let start = from.saturating_sub(width);
        let end = to.saturating_add(width).min(char_len);

        let prefix = if start > 0 { ELLIPSIS } else { "" };
        let suffix = if end < char_len { ELLIPSIS } else { "" };

        let window = index.slice(start, end);
        let mut out = String::with_capacity(window.len() + 8);
        out.push_str(prefix);
        out.extend(
            window
                .chars()
                .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c }),
        );
        out.push_str(suffix);

        if self.marker {
            out.push('\n');
            let lead = prefix.len() + (from - start);
            out.extend(std::iter::repeat(' ').take(lead));
            out.extend(std::iter::repeat('^').take(to - from));
        }
        out
    }
}
