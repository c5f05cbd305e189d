//! `options { ... };`

use serde::Serialize;
use std::fmt;

use super::super::error::NodeError;
use super::super::record::ParseRecord;
use super::super::registry::NodeKind;
use super::super::traits::{AstNode, Container};
use super::{assert_tag, NodeSequence};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Options {
    pub node_type: String,
    pub value: NodeSequence,
}

impl Options {
    /// The record must be tagged `options`.
    pub fn from_record(mut record: ParseRecord) -> Result<Self, NodeError> {
        let node_type = assert_tag(&record, NodeKind::Options)?;
        let value = record.take_nodes("value")?;
        Ok(Self { node_type, value })
    }
}

impl AstNode for Options {
    fn node_type(&self) -> &str {
        &self.node_type
    }

    fn is_same_nodetype(&self, kind: &str) -> bool {
        NodeKind::Options.keyword() == kind
    }

    fn display_label(&self) -> String {
        format!("{} statements", self.value.len())
    }
}

impl Container for Options {
    fn children(&self) -> &NodeSequence {
        &self.value
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "options {{\n{}\n}};", self.value)
    }
}
