//! # namedconf
//!
//! A parser for BIND-style `named.conf` files: statements are read into a
//! typed node tree that can be searched and written back as canonical text.
//!
//! ```rust,ignore
//! use namedconf::parse_document;
//!
//! let results = parse_document("zone \"example.com\" { type master; };")?;
//! assert_eq!(results.search("zone").len(), 1);
//! ```
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](namedconf::testing).

pub mod namedconf;

pub use namedconf::ast::{AstNode, Container, Node, NodeKind, Results};
pub use namedconf::naming::camel_to_hyphened;
pub use namedconf::parser::{parse_document, Error};
