//! Embedded typography configuration

use std::sync::OnceLock;
use tracing::warn;

use crate::language::typography::TypographyRules;

/// Rules parsed from the embedded configuration
static EMBEDDED: OnceLock<TypographyRules> = OnceLock::new();

/// The typography rules shipped with the crate, parsed on first access
pub fn builtin_rules() -> &'static TypographyRules {
    EMBEDDED.get_or_init(|| {
        match TypographyRules::from_toml_str(include_str!("../../configs/typography.toml")) {
            Ok(rules) => rules,
            Err(e) => {
                warn!(error = %e, "embedded typography config rejected, using compiled defaults");
                TypographyRules::default()
            }
        }
    })
}
