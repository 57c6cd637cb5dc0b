//! Runtime lookup tables built from language configuration

pub mod punctuation;

pub use punctuation::PunctTable;
