//! Character-level predicates
//!
//! Whitespace here follows the conventions text checkers rely on: the
//! non-breaking spaces are content, not blanks, and the zero-width space
//! counts as blank so scripts written without inter-word spaces (Khmer) can
//! still be tokenized.
//!
//! Letters are classified by Unicode general category, not by the derived
//! `Alphabetic` property: combining marks and enclosed letters such as `Ⓐ`
//! are not letters here.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Unbreakable field marker, e.g. a footnote number inserted by a word processor
const UNBREAKABLE_FIELD: &str = "\u{2}";
/// Breakable field marker
const BREAKABLE_FIELD: &str = "\u{1}";
const ZERO_WIDTH_SPACE: char = '\u{200B}';
const NO_BREAK_SPACE: &str = "\u{A0}";

/// Trim every code point up to and including U+0020 from both ends.
///
/// Control characters are trimmed along with the ASCII space; Unicode
/// spaces above U+0020 (including U+00A0) are kept.
pub fn trim_control(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

/// Whether `ch` is a whitespace character that permits a line break.
///
/// Covers the Unicode space, line and paragraph separators except the three
/// no-break spaces (U+00A0, U+2007, U+202F), plus the ASCII controls
/// `\t`, `\n`, VT, FF, `\r` and the information separators U+001C..=U+001F.
#[inline]
pub fn is_breaking_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\u{B}'
            | '\u{C}'
            | '\r'
            | '\u{1C}'..='\u{1F}'
            | ' '
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Whether `s` is blank: empty, only trimmed control/space code points, or a
/// single whitespace character.
///
/// The field markers U+0001 and U+0002 on their own are never blank. The
/// no-break space is not blank; see [`is_non_breaking_whitespace`].
pub fn is_whitespace(s: &str) -> bool {
    if s == UNBREAKABLE_FIELD || s == BREAKABLE_FIELD {
        return false;
    }
    let trimmed = trim_control(s);
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (None, _) => true,
        (Some(ch), None) => ch == ZERO_WIDTH_SPACE || is_breaking_whitespace(ch),
        _ => false,
    }
}

/// Whether `s` is exactly the no-break space U+00A0
pub fn is_non_breaking_whitespace(s: &str) -> bool {
    s == NO_BREAK_SPACE
}

/// Whether `ch` is an ASCII digit from 1 to 9
#[inline]
pub fn is_positive_number(ch: char) -> bool {
    ('1'..='9').contains(&ch)
}

/// Whether `ch` is in one of the letter categories (Lu, Ll, Lt, Lm, Lo)
#[inline]
pub fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Whether `ch` is a letter or a decimal digit (Nd).
///
/// Other numerics such as `½`, `²` or `Ⅻ` do not qualify.
#[inline]
pub fn is_letter_or_digit(ch: char) -> bool {
    is_letter(ch) || get_general_category(ch) == GeneralCategory::DecimalNumber
}

/// Whether `code_point` is a Unicode letter or letter number.
///
/// Code points that are not Unicode scalar values are not alphabetic.
pub fn is_alphabetic(code_point: u32) -> bool {
    char::from_u32(code_point).is_some_and(|ch| {
        is_letter(ch) || get_general_category(ch) == GeneralCategory::LetterNumber
    })
}

/// Remove every `\n`, ` `, `\t` and `\r` from `s`, wherever it occurs
pub fn trim_whitespace(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '\n' | ' ' | '\t' | '\r'))
        .collect()
}
