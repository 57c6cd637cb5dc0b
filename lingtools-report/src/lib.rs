//! XML reports of detected text issues
//!
//! This crate turns the issues a rule engine found in a text into an XML
//! report. Reports can be written in one call or streamed in batches using
//! [`FramingMode`]; excerpt extraction and element formatting are pluggable
//! through [`ExcerptExtractor`] and [`ElementRenderer`].
//!
//! # Example
//!
//! ```rust
//! use lingtools_report::{assemble_report, DetectedIssue, FramingMode, ReportConfig};
//!
//! let text = "This is a a test.";
//! let issues = vec![DetectedIssue::new(8..11, "Repeated word", "WORD_REPEAT")];
//!
//! let config = ReportConfig::builder()
//!     .language_code("en")
//!     .unwrap()
//!     .build()
//!     .unwrap();
//! let xml = assemble_report(&issues, text, &config);
//! assert!(xml.starts_with("<?xml"));
//! assert!(xml.contains("ruleId=\"WORD_REPEAT\""));
//! assert!(xml.ends_with("</matches>\n"));
//!
//! // Body only, for the middle of a streamed report
//! let batch = assemble_report(&issues, text, &config.with_mode(FramingMode::Continue));
//! assert!(batch.starts_with("<error"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod context;
pub mod dto;
pub mod error;
pub mod index;
pub mod render;

use tracing::debug;

// Re-export key types
pub use config::{FramingMode, ReportConfig, ReportConfigBuilder, DEFAULT_CONTEXT_WIDTH};
pub use context::{ContextWindow, ExcerptExtractor};
pub use dto::DetectedIssue;
pub use error::{ReportError, Result};
pub use index::TextIndex;
pub use lingtools_core::Language;
pub use render::{ElementRenderer, XmlRenderer};

/// Assembles reports from an excerpt extractor and an element renderer
#[derive(Debug, Clone)]
pub struct ReportSerializer<E = ContextWindow, R = XmlRenderer> {
    extractor: E,
    renderer: R,
}

impl ReportSerializer {
    /// Serializer with plain-text context windows and the XML renderer
    pub fn new() -> Self {
        Self::with_parts(ContextWindow::new(), XmlRenderer::default())
    }
}

impl Default for ReportSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ExcerptExtractor, R: ElementRenderer> ReportSerializer<E, R> {
    /// Serializer with custom collaborators
    pub fn with_parts(extractor: E, renderer: R) -> Self {
        Self {
            extractor,
            renderer,
        }
    }

    /// The excerpt extractor in use
    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// The renderer in use
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Render `issues` found in `text`, framed as `config.mode` requests.
    ///
    /// Issues are emitted in input order; none are skipped or merged. An
    /// empty list yields an empty body, but the requested framing is still
    /// written.
    pub fn assemble(&self, issues: &[DetectedIssue], text: &str, config: &ReportConfig) -> String {
        let mut xml = String::with_capacity(200);
        if config.mode.emits_start() {
            xml.push_str(&self.renderer.render_start(
                config.language.as_ref(),
                config.secondary_language.as_ref(),
            ));
        }
        xml.push_str(&self.renderer.render_issues(
            issues,
            text,
            config.context_width,
            &self.extractor,
        ));
        if config.mode.emits_end() {
            xml.push_str(&self.renderer.render_end());
        }

        debug!(
            issues = issues.len(),
            mode = ?config.mode,
            bytes = xml.len(),
            "assembled issue report"
        );
        xml
    }
}

/// Render `issues` with the default serializer
pub fn assemble_report(issues: &[DetectedIssue], text: &str, config: &ReportConfig) -> String {
    ReportSerializer::new().assemble(issues, text, config)
}
