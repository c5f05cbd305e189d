//! `check-names <target> <value>;`

use serde::Serialize;
use std::fmt;

use super::super::error::NodeError;
use super::super::record::ParseRecord;
use super::super::registry::NodeKind;
use super::super::traits::AstNode;
use super::{resolve_tag, Node};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckNames {
    pub node_type: String,
    pub target: String,
    pub value: String,
}

impl CheckNames {
    /// Build from a record whose `value` is the pair `[target, value]`.
    pub fn from_record(record: &ParseRecord) -> Result<Self, NodeError> {
        let node_type = resolve_tag(record, NodeKind::CheckNames)?;
        match record.words("value")? {
            [target, value, ..] => Ok(Self {
                node_type,
                target: target.text.clone(),
                value: value.text.clone(),
            }),
            _ => Err(NodeError::shape(node_type, "value", "a target and a value")),
        }
    }

    /// Re-wrap an already built `check-names` node.
    pub fn from_node(node: &Node) -> Result<Self, NodeError> {
        match node {
            Node::CheckNames(check_names) => Ok(Self {
                node_type: check_names.node_type.clone(),
                target: check_names.target.clone(),
                value: check_names.value.clone(),
            }),
            other => Err(NodeError::TagMismatch {
                expected: NodeKind::CheckNames.keyword().to_string(),
                found: other.node_type().to_string(),
            }),
        }
    }

    pub fn as_list(&self) -> Vec<&str> {
        vec![
            self.node_type.as_str(),
            self.target.as_str(),
            self.value.as_str(),
        ]
    }
}

impl AstNode for CheckNames {
    fn node_type(&self) -> &str {
        &self.node_type
    }

    fn is_same_nodetype(&self, kind: &str) -> bool {
        NodeKind::CheckNames.keyword() == kind
    }

    fn display_label(&self) -> String {
        format!("{} {}", self.target, self.value)
    }
}

impl fmt::Display for CheckNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {};", self.node_type, self.target, self.value)
    }
}
