//! `key "<name>" { algorithm ...; secret "..."; };`

use serde::Serialize;
use std::fmt;

use super::super::error::NodeError;
use super::super::record::{ParseRecord, Word};
use super::super::registry::NodeKind;
use super::super::traits::AstNode;
use super::{resolve_tag, Node, ValueNode};

/// A key definition. Only its `algorithm` and `secret` statements are kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Key {
    pub node_type: String,
    pub name: Word,
    pub algorithm: ValueNode,
    pub secret: ValueNode,
}

impl Key {
    pub fn from_record(mut record: ParseRecord) -> Result<Self, NodeError> {
        let node_type = resolve_tag(&record, NodeKind::Key)?;
        let name = record.first_value("name")?.clone();
        let mut nodes = record.take_nodes("value")?.into_nodes();

        let algorithm = take_first(&mut nodes, &node_type, NodeKind::Algorithm)?;
        let secret = take_first(&mut nodes, &node_type, NodeKind::Secret)?;
        Ok(Self {
            node_type,
            name,
            algorithm,
            secret,
        })
    }
}

/// Move the first child of `kind` out of `nodes`.
fn take_first(
    nodes: &mut Vec<Node>,
    node_type: &str,
    kind: NodeKind,
) -> Result<ValueNode, NodeError> {
    let missing = || NodeError::MissingSubNode {
        node_type: node_type.to_string(),
        kind: kind.keyword().to_string(),
    };
    let index = nodes
        .iter()
        .position(|node| node.is_same_nodetype(kind.keyword()))
        .ok_or_else(missing)?;
    nodes.remove(index).into_value_node().ok_or_else(missing)
}

impl AstNode for Key {
    fn node_type(&self) -> &str {
        &self.node_type
    }

    fn is_same_nodetype(&self, kind: &str) -> bool {
        NodeKind::Key.keyword() == kind
    }

    fn display_label(&self) -> String {
        self.name.text.clone()
    }
}

// Like acl, the name is not written back.
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key {{\n {}\n {}\n}};", self.algorithm, self.secret)
    }
}
