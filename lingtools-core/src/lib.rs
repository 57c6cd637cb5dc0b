//! Text utilities for grammar and style checkers
//!
//! This crate collects the small, stateless string operations a text checker
//! needs around its rule engine:
//!
//! - **casing**: classify a token as all-uppercase, capitalized, mixed case, ...
//! - **chars**: whitespace and letter predicates tuned for tokenization
//! - **ingest**: decode a byte stream in a named encoding into normalized lines
//! - **xml**: escape text for XML and strip markup from XML/HTML input
//! - **language**: language descriptors and punctuation spacing rules
//! - **validate**: argument checks
//!
//! Everything except [`ingest`] is pure and safe to call from any thread.
//!
//! # Example
//!
//! ```rust
//! use lingtools_core::{casing, xml, Language};
//!
//! assert!(casing::is_mixed_case("iPhone"));
//! assert_eq!(casing::uppercase_first_char("(hello)"), "(Hello)");
//! assert_eq!(xml::escape_xml_text("a < b"), "a &lt; b");
//! assert_eq!(lingtools_core::space_before(";", &Language::new("fr")), " ");
//!
//! let text = lingtools_core::ingest::read_stream(&b"one\r\ntwo"[..], None).unwrap();
//! assert_eq!(text, "one\ntwo\n");
//! ```

pub mod casing;
pub mod chars;
pub mod error;
pub mod ingest;
pub mod language;
pub mod validate;
pub mod xml;

pub use error::{ErrorKind, Result, TextError};
pub use language::{space_before, Language, TypographyRules};
pub use validate::assure_set;
