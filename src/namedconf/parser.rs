//! Parser module for named.conf
//!
//! The grammar only recognizes words, blocks and terminators; the
//! [`records`] step gives each raw statement its record shape and hands it to
//! the type registry, children first.
//!
//! ## Testing
//!
//! Document tests load their input from the sample files (see
//! [`NamedConfSources`](crate::namedconf::processor::samples::NamedConfSources))
//! and check the result with the fluent assertions of the
//! [testing module](crate::namedconf::testing).

pub mod api;
pub mod combinators;
pub mod document;
pub mod intermediate_ast;
pub mod records;
#[cfg(test)]
mod tests;

pub use api::{parse_document, parse_statements, Error, SyntaxError};
pub use intermediate_ast::{RawItem, RawStatement};
pub use records::{build_sequence, build_statement, shape_record};
