//! `zone "<name>" [class] { ... };`

use serde::Serialize;
use std::fmt;

use super::super::error::NodeError;
use super::super::record::{ParseRecord, Word};
use super::super::registry::NodeKind;
use super::super::traits::{AstNode, Container};
use super::{assert_tag, NodeSequence};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Zone {
    pub node_type: String,
    pub name: Word,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<Word>,
    pub value: NodeSequence,
}

impl Zone {
    /// The record must be tagged `zone` and carry a `name`.
    pub fn from_record(mut record: ParseRecord) -> Result<Self, NodeError> {
        let node_type = assert_tag(&record, NodeKind::Zone)?;
        let name = record.first_value("name")?.clone();
        let class = match record.get("args") {
            Some(_) => record.words("args")?.first().cloned(),
            None => None,
        };
        let value = record.take_nodes("value")?;
        Ok(Self {
            node_type,
            name,
            class,
            value,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Whether a direct child of `kind` exists, answered from the kind set.
    pub fn contains(&self, kind: &str) -> bool {
        self.value.contains(kind)
    }
}

impl AstNode for Zone {
    fn node_type(&self) -> &str {
        &self.node_type
    }

    fn is_same_nodetype(&self, kind: &str) -> bool {
        NodeKind::Zone.keyword() == kind
    }

    fn display_label(&self) -> String {
        self.name.text.clone()
    }
}

impl Container for Zone {
    fn children(&self) -> &NodeSequence {
        &self.value
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zone {}", self.name)?;
        if let Some(class) = &self.class {
            write!(f, " {class}")?;
        }
        write!(f, " {{\n{}\n}};", self.value)
    }
}
