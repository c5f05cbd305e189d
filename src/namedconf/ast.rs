//! Typed AST for named.conf documents
//!
//! This module provides the statement node model: the typed node variants,
//! the type registry that picks a variant for each parse record, the two
//! ordered sequence flavors used by blocks, and the document-level
//! [`Results`] wrapper.
//!
//! ## Modules
//!
//! - `record` - Structured parse records handed over by the grammar
//! - `registry` - Keyword to node constructor mapping
//! - `elements` - Node variants, sequences and `Results`
//! - `traits` - Uniform node access (`AstNode`, `Container`)
//! - `error` - Node construction errors

pub mod elements;
pub mod error;
pub mod record;
pub mod registry;
pub mod traits;

// Re-export commonly used types at module root
pub use elements::{
    Acl, CheckNames, Controls, Field, Inet, Key, Node, NodeSequence, Options, Results,
    UnknownNode, UnknownValue, ValueList, ValueNode, Zone,
};
pub use error::NodeError;
pub use record::{ParseRecord, RawValue, RecordValue, Word};
pub use registry::{build_node, NodeKind, TypeRegistry, KNOWN_KINDS};
pub use traits::{AstNode, Container};
