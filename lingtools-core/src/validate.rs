//! Argument validation helpers

use crate::chars::trim_control;
use crate::error::{Result, TextError};

/// Whether `value` is absent or has no characters
#[inline]
pub fn is_empty(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Fail with [`TextError::InvalidArgument`] naming `name` when `value` is
/// absent, empty, or consists only of spaces and control characters.
pub fn assure_set<'a>(value: impl Into<Option<&'a str>>, name: &str) -> Result<()> {
    match value.into() {
        Some(value) if !trim_control(value).is_empty() => Ok(()),
        _ => Err(TextError::InvalidArgument {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_set_values_pass() {
        assert!(assure_set("x", "value").is_ok());
        assert!(assure_set(Some(" x "), "value").is_ok());
        // the no-break space is content
        assert!(assure_set("\u{A0}", "value").is_ok());
    }

    #[test]
    fn test_missing_values_fail() {
        for value in [None, Some(""), Some("   "), Some("\t\n")] {
            let err = assure_set(value, "ruleId").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert_eq!(err.to_string(), "ruleId cannot be empty or whitespace only");
        }
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty(None));
        assert!(is_empty(Some("")));
        assert!(!is_empty(Some(" ")));
    }
}
