//! `acl "<name>" { ... };`

use serde::Serialize;
use std::fmt;

use super::super::error::NodeError;
use super::super::record::{ParseRecord, Word};
use super::super::registry::NodeKind;
use super::super::traits::{AstNode, Container};
use super::{resolve_tag, NodeSequence};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Acl {
    pub node_type: String,
    pub name: Word,
    pub value: NodeSequence,
}

impl Acl {
    pub fn from_record(mut record: ParseRecord) -> Result<Self, NodeError> {
        let node_type = resolve_tag(&record, NodeKind::Acl)?;
        let name = record.first_value("name")?.clone();
        let value = record.take_nodes("value")?;
        Ok(Self {
            node_type,
            name,
            value,
        })
    }
}

impl AstNode for Acl {
    fn node_type(&self) -> &str {
        &self.node_type
    }

    fn is_same_nodetype(&self, kind: &str) -> bool {
        NodeKind::Acl.keyword() == kind
    }

    fn display_label(&self) -> String {
        self.name.text.clone()
    }
}

impl Container for Acl {
    fn children(&self) -> &NodeSequence {
        &self.value
    }
}

// The name is not written back.
impl fmt::Display for Acl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "acl {{\n{}\n}};", self.value)
    }
}
