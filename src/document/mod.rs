//! Document structure parsing and data structures module
//!
//! This module parses generated official-document text into a
//! [`DocumentStructure`] and provides read-only queries over it.

pub(crate) mod cleanup;
pub mod legacy;
pub mod models;
pub mod parser;
pub(crate) mod parsing;
pub mod query;

pub use models::*;
pub use parser::parse_document;
pub use query::*;
