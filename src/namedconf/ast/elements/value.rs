//! Single-value statements: `include`, `directory`, `algorithm`, `secret`

use serde::Serialize;
use std::fmt;

use super::super::error::NodeError;
use super::super::record::{write_quoted, ParseRecord};
use super::super::registry::NodeKind;
use super::super::traits::AstNode;
use super::resolve_tag;

/// A statement of the form `keyword value;`.
///
/// The kind decides how the value is written back: `include`, `directory`
/// and `secret` quote it, `algorithm` leaves it bare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueNode {
    #[serde(skip)]
    kind: NodeKind,
    pub node_type: String,
    pub value: String,
}

impl ValueNode {
    pub fn new(kind: NodeKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            node_type: kind.keyword().to_string(),
            value: value.into(),
        }
    }

    /// Build from a record's `value`, taking its first word when the grammar
    /// supplied a sequence.
    pub fn from_record(kind: NodeKind, record: &ParseRecord) -> Result<Self, NodeError> {
        let node_type = resolve_tag(record, kind)?;
        let value = record.first_value("value")?.text.clone();
        Ok(Self {
            kind,
            node_type,
            value,
        })
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_quoted(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Include | NodeKind::Directory | NodeKind::Secret
        )
    }

    pub fn as_list(&self) -> Vec<&str> {
        vec![self.node_type.as_str(), self.value.as_str()]
    }
}

impl AstNode for ValueNode {
    fn node_type(&self) -> &str {
        &self.node_type
    }

    fn is_same_nodetype(&self, kind: &str) -> bool {
        self.kind.keyword() == kind
    }

    fn display_label(&self) -> String {
        self.value.clone()
    }
}

impl fmt::Display for ValueNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.node_type)?;
        if self.is_quoted() {
            write_quoted(f, &self.value)?;
        } else {
            f.write_str(&self.value)?;
        }
        f.write_str(";")
    }
}
