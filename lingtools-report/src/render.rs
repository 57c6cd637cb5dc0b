//! XML element rendering

use crate::context::ExcerptExtractor;
use crate::dto::DetectedIssue;
use crate::index::TextIndex;
use lingtools_core::xml::escape_xml_text;
use lingtools_core::Language;

/// Formats the pieces of a report document.
///
/// Implementations own escaping: the serializer pastes whatever they return.
pub trait ElementRenderer: Send + Sync {
    /// Prologue and opening root element
    fn render_start(&self, language: Option<&Language>, secondary: Option<&Language>) -> String;

    /// One element for `issue`; `excerpt` is its context, `text` the full checked text
    fn render_issue(&self, issue: &DetectedIssue, excerpt: &str, text: &str) -> String;

    /// Same as [`ElementRenderer::render_issue`] over an already indexed text
    fn render_issue_in(&self, issue: &DetectedIssue, excerpt: &str, index: &TextIndex<'_>) -> String {
        self.render_issue(issue, excerpt, index.text())
    }

    /// Closing root element
    fn render_end(&self) -> String;

    /// All issues in order, each with its excerpt from `extractor`.
    ///
    /// `text` is indexed once for the whole batch.
    fn render_issues(
        &self,
        issues: &[DetectedIssue],
        text: &str,
        width: usize,
        extractor: &dyn ExcerptExtractor,
    ) -> String {
        let index = TextIndex::new(text);
        issues
            .iter()
            .map(|issue| {
                let excerpt = extractor.excerpt_in(&index, issue.from, issue.to, width);
                self.render_issue_in(issue, &excerpt, &index)
            })
            .collect()
    }
}

/// Renders a `<matches>` document with one empty `<error .../>` element per issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlRenderer {
    software: String,
    version: String,
}

impl Default for XmlRenderer {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

impl XmlRenderer {
    /// Renderer identifying the producing software in the root element
    pub fn new(software: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            software: software.into(),
            version: version.into(),
        }
    }
}

/// ` name="value"` with the value escaped
fn attribute(name: &str, value: &str) -> String {
    format!(" {name}=\"{}\"", escape_xml_text(value))
}

impl ElementRenderer for XmlRenderer {
    fn render_start(&self, language: Option<&Language>, secondary: Option<&Language>) -> String {
        let mut xml = String::with_capacity(160);
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<matches");
        xml.push_str(&attribute("software", &self.software));
        xml.push_str(&attribute("version", &self.version));
        xml.push_str(">\n");

        if let Some(language) = language {
            xml.push_str("<language");
            xml.push_str(&attribute("shortname", language.code()));
            if let Some(name) = language.name() {
                xml.push_str(&attribute("name", name));
            }
            if let Some(secondary) = secondary {
                xml.push_str(&attribute("mothertongueshortname", secondary.code()));
                if let Some(name) = secondary.name() {
                    xml.push_str(&attribute("mothertonguename", name));
                }
            }
            xml.push_str("/>\n");
        }
        xml
    }

    fn render_issue(&self, issue: &DetectedIssue, excerpt: &str, text: &str) -> String {
        self.render_issue_in(issue, excerpt, &TextIndex::new(text))
    }

    fn render_issue_in(&self, issue: &DetectedIssue, excerpt: &str, index: &TextIndex<'_>) -> String {
        let (from_y, from_x) = index.line_and_column(issue.from);
        let (to_y, to_x) = index.line_and_column(issue.to);

        let mut xml = String::with_capacity(128 + issue.message.len() + excerpt.len());
        xml.push_str(&format!(
            "<error fromy=\"{from_y}\" fromx=\"{from_x}\" toy=\"{to_y}\" tox=\"{to_x}\""
        ));
        xml.push_str(&attribute("ruleId", &issue.rule_id));
        xml.push_str(&attribute("msg", &issue.message));
        if let Some(short) = &issue.short_message {
            xml.push_str(&attribute("shortmsg", short));
        }
        if !issue.replacements.is_empty() {
            xml.push_str(&attribute("replacements", &issue.replacements.join("#")));
        }
        xml.push_str(&attribute("context", excerpt));
        xml.push_str(&format!(
            " offset=\"{}\" errorlength=\"{}\"/>\n",
            issue.from,
            issue.len()
        ));
        xml
    }

    fn render_end(&self) -> String {
        "</matches>\n".to_string()
    }
}
