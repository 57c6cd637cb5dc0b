//! Character offset index over a checked text

/// Char boundaries and line starts of a text, computed once per report batch.
///
/// All offsets are in characters; anything past the end is clamped.
#[derive(Debug, Clone)]
pub struct TextIndex<'a> {
    text: &'a str,
    /// Byte offset of every char boundary, including the end of text
    bounds: Vec<usize>,
    /// Char offset of the first character of every line
    line_starts: Vec<usize>,
}

impl<'a> TextIndex<'a> {
    /// Index `text`
    pub fn new(text: &'a str) -> Self {
        let mut bounds = Vec::with_capacity(text.len() + 1);
        let mut line_starts = vec![0];
        for (i, (pos, ch)) in text.char_indices().enumerate() {
            bounds.push(pos);
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }
        bounds.push(text.len());
        Self {
            text,
            bounds,
            line_starts,
        }
    }

    /// The indexed text
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Number of characters
    pub fn char_len(&self) -> usize {
        self.bounds.len() - 1
    }

    /// The characters `[start, end)`, clamped to the text
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        let end = end.min(self.char_len());
        let start = start.min(end);
        &self.text[self.bounds[start]..self.bounds[end]]
    }

    /// Zero-based line and column of character `offset`
    pub fn line_and_column(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.char_len());
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        (line, offset - self.line_starts[line])
    }
}
