//! Spacing rules before punctuation tokens
//!
//! Most languages close up the space before `. , ; : ? !`. French only does
//! so before `.` and `,`, setting a space before the other four.

use std::collections::HashMap;

use crate::error::Result;
use crate::language::{config::TypographyConfig, tables::PunctTable, Language};

const DEFAULT_TIGHT: [char; 6] = ['.', ',', ';', ':', '?', '!'];
const FRENCH_TIGHT: [char; 2] = ['.', ','];

/// Per-language punctuation spacing table
#[derive(Debug, Clone)]
pub struct TypographyRules {
    default: PunctTable,
    by_language: HashMap<String, PunctTable>,
}

impl Default for TypographyRules {
    fn default() -> Self {
        let mut by_language = HashMap::new();
        by_language.insert("fr".to_string(), PunctTable::new(FRENCH_TIGHT));
        Self {
            default: PunctTable::new(DEFAULT_TIGHT),
            by_language,
        }
    }
}

impl TypographyRules {
    /// Create from configuration
    pub fn from_config(config: &TypographyConfig) -> Result<Self> {
        config.validate()?;
        let by_language = config
            .languages
            .iter()
            .map(|entry| {
                (
                    entry.code.to_ascii_lowercase(),
                    PunctTable::new(entry.tight.iter().copied()),
                )
            })
            .collect();

        Ok(Self {
            default: PunctTable::new(config.default.tight.iter().copied()),
            by_language,
        })
    }

    /// Parse a TOML typography configuration
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: TypographyConfig = toml::from_str(toml_str)?;
        Self::from_config(&config)
    }

    /// The tight punctuation set for `language`.
    ///
    /// Looks up the full code first, then its primary subtag (`fr` for
    /// `fr-CA`), then falls back to the default set.
    pub fn tight_punctuation(&self, language: &Language) -> &PunctTable {
        let code = language.code().to_ascii_lowercase();
        let primary = code.split(['-', '_']).next().unwrap_or(&code);
        self.by_language
            .get(&code)
            .or_else(|| self.by_language.get(primary))
            .unwrap_or(&self.default)
    }

    /// The space to put before `token`: empty for a single tight punctuation
    /// character, a single space otherwise.
    pub fn space_before(&self, token: &str, language: &Language) -> &'static str {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if self.tight_punctuation(language).contains(ch) => "",
            _ => " ",
        }
    }
}
