//! Configuration structures and validation
//!
//! This module defines the TOML schema for typography rules.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Result, TextError};
use crate::validate::assure_set;

/// Root typography configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypographyConfig {
    /// Rules for languages without an entry of their own
    pub default: PunctuationRule,
    /// Per-language overrides
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
}

/// Punctuation that takes no preceding space
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunctuationRule {
    pub tight: Vec<char>,
}

/// Typography override for one language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    pub tight: Vec<char>,
}

impl TypographyConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.languages {
            assure_set(entry.code.as_str(), "language code")?;
            if !seen.insert(entry.code.to_ascii_lowercase()) {
                return Err(TextError::Config(format!(
                    "duplicate typography entry for language '{}'",
                    entry.code
                )));
            }
        }
        Ok(())
    }
}
