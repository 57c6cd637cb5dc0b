//! Punctuation set lookup
//!
//! ASCII fast-path array, hash set for everything else.

use std::collections::HashSet;

/// Set of punctuation characters with O(1) membership
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunctTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// Non-ASCII members (guillemets, CJK punctuation)
    non_ascii: HashSet<char>,
}

impl PunctTable {
    /// Create from the member characters
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for ch in chars {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    /// Check membership - hot path
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// Number of member characters
    pub fn len(&self) -> usize {
        self.ascii_table.iter().filter(|&&member| member).count() + self.non_ascii.len()
    }

    /// Whether the table has no members
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punct_lookup() {
        let table = PunctTable::new(['.', ',', '。', '、']);

        // ASCII fast path
        assert!(table.contains('.'));
        assert!(table.contains(','));
        assert!(!table.contains(';'));

        // Non-ASCII
        assert!(table.contains('。'));
        assert!(table.contains('、'));
        assert!(!table.contains('！'));

        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_empty_table() {
        let table = PunctTable::new(std::iter::empty());
        assert!(table.is_empty());
        assert!(!table.contains('.'));
    }

    #[test]
    fn test_duplicates_collapse() {
        let table = PunctTable::new(['.', '.', '»', '»']);
        assert_eq!(table.len(), 2);
    }
}
