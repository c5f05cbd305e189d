//! Statement node types
//!
//! One module per statement shape, plus the two sequence flavors and the
//! document-level [`Results`] wrapper.

pub mod acl;
pub mod check_names;
pub mod controls;
pub mod inet;
pub mod key;
pub mod node;
pub mod options;
pub mod results;
pub mod sequence;
pub mod unknown;
pub mod value;
pub mod value_list;
pub mod zone;

pub use acl::Acl;
pub use check_names::CheckNames;
pub use controls::Controls;
pub use inet::Inet;
pub use key::Key;
pub use node::{Field, Node};
pub use options::Options;
pub use results::Results;
pub use sequence::NodeSequence;
pub use unknown::{UnknownNode, UnknownValue};
pub use value::ValueNode;
pub use value_list::ValueList;
pub use zone::Zone;

use super::error::NodeError;
use super::record::ParseRecord;
use super::registry::NodeKind;

/// Tag for a node of a known kind: the record's own tag if it carries one
/// (which must agree with the kind), otherwise the kind's keyword.
pub(crate) fn resolve_tag(record: &ParseRecord, kind: NodeKind) -> Result<String, NodeError> {
    if record.contains_key("node_type") {
        assert_tag(record, kind)
    } else {
        Ok(kind.keyword().to_string())
    }
}

/// Require the record to be tagged with exactly `kind`'s keyword.
pub(crate) fn assert_tag(record: &ParseRecord, kind: NodeKind) -> Result<String, NodeError> {
    let found = record.node_type()?;
    if found == kind.keyword() {
        Ok(found.to_string())
    } else {
        Err(NodeError::TagMismatch {
            expected: kind.keyword().to_string(),
            found: found.to_string(),
        })
    }
}
