//! Casing classification of words and tokens
//!
//! Characters without a case distinction (digits, punctuation, CJK) are
//! ignored by every predicate, so `"ABC-1"` is all-uppercase and `"x2"` is
//! all-lowercase. Only the letter categories count as letters (see
//! [`is_letter`]), so combining marks and enclosed letters like `ⓐ` are
//! ignored too.

use crate::chars::{is_letter, is_letter_or_digit};

/// Whether no letter in `s` is lowercase. The empty string qualifies.
pub fn is_all_uppercase(s: &str) -> bool {
    !s.chars().any(|c| is_letter(c) && c.is_lowercase())
}

/// Whether at least one letter in `s` is not lowercase (uppercase, titlecase
/// or caseless).
pub fn is_not_all_lowercase(s: &str) -> bool {
    s.chars().any(|c| is_letter(c) && !c.is_lowercase())
}

/// Whether `s` starts with an uppercase letter and every later letter is
/// lowercase, like `Hello` or `O'neil`.
pub fn is_capitalized_word(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            chars.all(|c| !is_letter(c) || c.is_lowercase())
        }
        _ => false,
    }
}

/// Whether `s` has irregular case, like `MixedCase` or `iPhone`.
///
/// All-uppercase, all-lowercase and capitalized words are not mixed case.
pub fn is_mixed_case(s: &str) -> bool {
    !is_all_uppercase(s) && !is_capitalized_word(s) && is_not_all_lowercase(s)
}

/// Whether the first character of `s` is uppercase
pub fn starts_with_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

/// Uppercase the first letter or decimal digit of `s`, skipping leading
/// quotes, brackets, punctuation and other numerics like `½`.
pub fn uppercase_first_char(s: &str) -> String {
    change_first_char_case(s, true)
}

/// Lowercase the first letter or decimal digit of `s`, skipping leading
/// quotes, brackets, punctuation and other numerics like `½`.
pub fn lowercase_first_char(s: &str) -> String {
    change_first_char_case(s, false)
}

/// Change the case of the first letter or decimal digit of `s`.
///
/// The skipped prefix and the remainder are copied unchanged. When `s` has no
/// letter or digit the last character is changed instead; a
/// single-character string is always changed directly.
pub fn change_first_char_case(s: &str, to_upper: bool) -> String {
    let mut indices = s.char_indices().peekable();
    let mut target = None;
    while let Some((pos, ch)) = indices.next() {
        // stop on the first letter or digit, or on the last char regardless of class
        if is_letter_or_digit(ch) || indices.peek().is_none() {
            target = Some((pos, ch));
            break;
        }
    }
    let Some((pos, ch)) = target else {
        return String::new();
    };

    let rest = &s[pos + ch.len_utf8()..];
    let mut out = String::with_capacity(s.len() + 2);
    out.push_str(&s[..pos]);
    if to_upper {
        out.extend(ch.to_uppercase());
    } else {
        out.extend(ch.to_lowercase());
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_uppercase() {
        assert!(is_all_uppercase("ABC"));
        assert!(is_all_uppercase("ABC-1 !"));
        assert!(is_all_uppercase(""));
        assert!(is_all_uppercase("123"));
        assert!(is_all_uppercase("ÄÖÜ"));
        assert!(!is_all_uppercase("ABc"));
        assert!(!is_all_uppercase("ß"));
    }

    #[test]
    fn test_not_all_lowercase() {
        assert!(is_not_all_lowercase("abC"));
        assert!(is_not_all_lowercase("ǅ"));
        // caseless letters are not lowercase
        assert!(is_not_all_lowercase("漢字"));
        assert!(!is_not_all_lowercase("abc"));
        assert!(!is_not_all_lowercase("abc 123"));
        assert!(!is_not_all_lowercase(""));
    }

    #[test]
    fn test_capitalized_word() {
        assert!(is_capitalized_word("Hello"));
        assert!(is_capitalized_word("H"));
        assert!(is_capitalized_word("O'neil"));
        assert!(is_capitalized_word("Über"));
        assert!(!is_capitalized_word("HeLlo"));
        assert!(!is_capitalized_word("hello"));
        assert!(!is_capitalized_word("'Hello"));
        assert!(!is_capitalized_word(""));
    }

    #[test]
    fn test_mixed_case() {
        assert!(is_mixed_case("MixedCase"));
        assert!(is_mixed_case("mixedCase"));
        assert!(is_mixed_case("iPhone"));
        assert!(!is_mixed_case("Mixedcase"));
        assert!(!is_mixed_case("MIXED"));
        assert!(!is_mixed_case("mixed"));
        assert!(!is_mixed_case(""));
    }

    #[test]
    fn test_starts_with_uppercase() {
        assert!(starts_with_uppercase("Abc"));
        assert!(starts_with_uppercase("Émile"));
        assert!(!starts_with_uppercase("abc"));
        assert!(!starts_with_uppercase("(Abc"));
        assert!(!starts_with_uppercase(""));
    }

    #[test]
    fn test_uppercase_first_char() {
        assert_eq!(uppercase_first_char("hello"), "Hello");
        assert_eq!(uppercase_first_char("(hello)"), "(Hello)");
        assert_eq!(uppercase_first_char("\"«hello"), "\"«Hello");
        assert_eq!(uppercase_first_char("1st"), "1st");
        assert_eq!(uppercase_first_char("a"), "A");
        assert_eq!(uppercase_first_char(""), "");
    }

    #[test]
    fn test_lowercase_first_char() {
        assert_eq!(lowercase_first_char("HELLO"), "hELLO");
        assert_eq!(lowercase_first_char("[Über]"), "[über]");
        assert_eq!(lowercase_first_char("A"), "a");
    }

    #[test]
    fn test_no_letter_or_digit_changes_last_char() {
        assert_eq!(uppercase_first_char("..."), "...");
        assert_eq!(uppercase_first_char("-"), "-");
        assert_eq!(lowercase_first_char("(("), "((");
    }

    #[test]
    fn test_non_letters_are_ignored() {
        // enclosed letters (So) and roman numerals (Nl) carry case but are not letters
        assert!(is_all_uppercase("ⓐⓑ"));
        assert!(is_all_uppercase("ⅻ"));
        assert!(!is_not_all_lowercase("ⒶⒷ"));
        assert!(is_capitalized_word("Kⓐ"));
        // a spacing vowel sign is not an uppercase letter
        assert!(!is_mixed_case("ka\u{93E}"));
        assert!(!is_not_all_lowercase("ka\u{93E}"));
    }

    #[test]
    fn test_skips_non_decimal_numerics() {
        assert_eq!(uppercase_first_char("½ cup"), "½ Cup");
        assert_eq!(uppercase_first_char("² note"), "² Note");
        assert_eq!(uppercase_first_char("3 cups"), "3 cups");
    }

    #[test]
    fn test_full_case_mapping() {
        assert_eq!(uppercase_first_char("ßx"), "SSx");
        assert_eq!(uppercase_first_char("ß"), "SS");
    }
}
