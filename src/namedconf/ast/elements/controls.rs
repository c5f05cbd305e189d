//! `controls { inet ...; };`

use serde::Serialize;
use std::fmt;

use super::super::error::NodeError;
use super::super::record::ParseRecord;
use super::super::registry::NodeKind;
use super::super::traits::{AstNode, Container};
use super::{resolve_tag, NodeSequence};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Controls {
    pub node_type: String,
    pub value: NodeSequence,
}

impl Controls {
    /// The children arrive under the `inet-node` sub-record.
    pub fn from_record(mut record: ParseRecord) -> Result<Self, NodeError> {
        let node_type = resolve_tag(&record, NodeKind::Controls)?;
        let value = record.take_record("inet-node")?.take_nodes("value")?;
        Ok(Self { node_type, value })
    }
}

impl AstNode for Controls {
    fn node_type(&self) -> &str {
        &self.node_type
    }

    fn is_same_nodetype(&self, kind: &str) -> bool {
        NodeKind::Controls.keyword() == kind
    }

    fn display_label(&self) -> String {
        format!("{} statements", self.value.len())
    }
}

impl Container for Controls {
    fn children(&self) -> &NodeSequence {
        &self.value
    }
}

impl fmt::Display for Controls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "controls {{\n{}\n}};", self.value)
    }
}
