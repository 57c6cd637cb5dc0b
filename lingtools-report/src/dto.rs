//! Data Transfer Objects for reports

use std::ops::Range;

/// One flagged span of checked text, as produced by a rule engine.
///
/// `from` and `to` are character offsets (not bytes) into the checked text,
/// forming the half-open range `[from, to)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectedIssue {
    /// First character of the span
    pub from: usize,
    /// One past the last character of the span
    pub to: usize,
    /// Human-readable explanation
    pub message: String,
    /// Identifier of the rule that matched
    pub rule_id: String,
    /// Optional one-line summary of `message`
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub short_message: Option<String>,
    /// Suggested replacements for the span, best first
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub replacements: Vec<String>,
}

impl DetectedIssue {
    /// Create an issue covering `span`
    pub fn new(span: Range<usize>, message: impl Into<String>, rule_id: impl Into<String>) -> Self {
        Self {
            from: span.start,
            to: span.end,
            message: message.into(),
            rule_id: rule_id.into(),
            short_message: None,
            replacements: Vec::new(),
        }
    }

    /// Attach a short message
    pub fn with_short_message(mut self, short_message: impl Into<String>) -> Self {
        self.short_message = Some(short_message.into());
        self
    }

    /// Attach suggested replacements
    pub fn with_replacements<I, S>(mut self, replacements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.replacements = replacements.into_iter().map(Into::into).collect();
        self
    }

    /// The flagged character range
    pub fn span(&self) -> Range<usize> {
        self.from..self.to
    }

    /// Number of flagged characters
    pub fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }

    /// Whether the span covers no characters
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse a JSON array of issues, e.g. the output of an external checker
#[cfg(feature = "serde")]
pub fn issues_from_json(json: &str) -> crate::error::Result<Vec<DetectedIssue>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let issue = DetectedIssue::new(4..9, "Possible typo", "MORFOLOGIK_RULE_EN_US")
            .with_short_message("Spelling")
            .with_replacements(["world", "word"]);
        assert_eq!(issue.span(), 4..9);
        assert_eq!(issue.len(), 5);
        assert_eq!(issue.short_message.as_deref(), Some("Spelling"));
        assert_eq!(issue.replacements, vec!["world", "word"]);
    }

    #[test]
    fn test_inverted_span_is_empty() {
        let issue = DetectedIssue {
            from: 9,
            to: 4,
            ..DetectedIssue::new(0..0, "m", "R")
        };
        assert!(issue.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_issues_from_json() {
        let issues = issues_from_json(
            r#"[
                {"from": 0, "to": 3, "message": "Repeated word", "rule_id": "WORD_REPEAT"},
                {"from": 5, "to": 6, "message": "Comma", "rule_id": "COMMA", "replacements": [", "]}
            ]"#,
        )
        .unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].rule_id, "WORD_REPEAT");
        assert!(issues[0].replacements.is_empty());
        assert_eq!(issues[1].replacements, vec![", "]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_issues_from_invalid_json() {
        let err = issues_from_json("[{\"from\": 1}]").unwrap_err();
        assert!(err.to_string().starts_with("serialization error"));
    }
}
