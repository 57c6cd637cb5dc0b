//! Language descriptors and language-specific typography
//!
//! Typography rules are data-driven: an embedded TOML table lists the
//! punctuation each language attaches to the preceding word.

pub mod config;
pub(crate) mod loader;
pub mod tables;
pub mod typography;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validate::assure_set;

pub use loader::builtin_rules;
pub use typography::TypographyRules;

/// Identifies a language by its short code (`en`, `fr`, `pt-BR`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Language {
    /// Create a descriptor from a language code
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: None,
        }
    }

    /// Create a descriptor, rejecting blank codes
    pub fn try_new(code: &str) -> Result<Self> {
        assure_set(code, "language code")?;
        Ok(Self::new(code.trim()))
    }

    /// Attach a human-readable name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The language code as given
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The display name, if one was attached
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The code up to the first `-` or `_` (`pt` for `pt-BR`)
    pub fn primary_subtag(&self) -> &str {
        self.code.split(['-', '_']).next().unwrap_or(&self.code)
    }
}

/// The space to put before `token` under the built-in typography rules.
///
/// Returns `""` when `token` is a single punctuation character that closes
/// up against the preceding word in `language`, and `" "` otherwise.
pub fn space_before(token: &str, language: &Language) -> &'static str {
    builtin_rules().space_before(token, language)
}
