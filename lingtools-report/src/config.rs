//! Report configuration

use crate::error::{ReportError, Result};
use lingtools_core::Language;

/// Characters of context shown on each side of an issue
pub const DEFAULT_CONTEXT_WIDTH: usize = 25;

/// Which structural parts of the XML document a call emits.
///
/// A report can be written in one call ([`FramingMode::Full`]) or streamed
/// in batches: the first batch with [`FramingMode::Open`], middle batches
/// with [`FramingMode::Continue`], the last with [`FramingMode::Close`].
/// The serializer keeps no state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FramingMode {
    /// Prologue, root open, body, root close
    #[default]
    Full,
    /// Prologue, root open, body
    Open,
    /// Body, root close
    Close,
    /// Body only
    Continue,
}

impl FramingMode {
    /// Whether the prologue and opening root element are emitted
    pub fn emits_start(self) -> bool {
        matches!(self, FramingMode::Full | FramingMode::Open)
    }

    /// Whether the closing root element is emitted
    pub fn emits_end(self) -> bool {
        matches!(self, FramingMode::Full | FramingMode::Close)
    }
}

/// Options for one report serialization call
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ReportConfig {
    /// Context characters on each side of an issue
    pub context_width: usize,
    /// Document framing
    pub mode: FramingMode,
    /// Language of the checked text
    pub language: Option<Language>,
    /// The writer's native language, when known
    pub secondary_language: Option<Language>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            context_width: DEFAULT_CONTEXT_WIDTH,
            mode: FramingMode::Full,
            language: None,
            secondary_language: None,
        }
    }
}

impl ReportConfig {
    /// Create a builder
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }

    /// Same configuration with a different framing mode
    pub fn with_mode(&self, mode: FramingMode) -> Self {
        Self {
            mode,
            ..self.clone()
        }
    }

    /// Parse and validate a TOML report configuration
    #[cfg(feature = "serde")]
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: ReportConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.secondary_language.is_some() && self.language.is_none() {
            return Err(ReportError::Config(
                "secondary language requires a primary language".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ReportConfigBuilder {
    config: ReportConfig,
}

impl ReportConfigBuilder {
    /// Set the context width
    pub fn context_width(mut self, width: usize) -> Self {
        self.config.context_width = width;
        self
    }

    /// Set the framing mode
    pub fn mode(mut self, mode: FramingMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Set the language of the checked text
    pub fn language(mut self, language: Language) -> Self {
        self.config.language = Some(language);
        self
    }

    /// Set the language of the checked text from its code
    pub fn language_code(self, code: &str) -> Result<Self> {
        Ok(self.language(Language::try_new(code)?))
    }

    /// Set the writer's native language
    pub fn secondary_language(mut self, language: Language) -> Self {
        self.config.secondary_language = Some(language);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ReportConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
