//! Error types for node construction

use thiserror::Error;

/// Structural failures detected while building a node from a parse record.
///
/// All of these are fatal for the document being built: nothing recovers
/// from them locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("`{node_type}` statement is missing required field `{field}`")]
    MissingRequiredField { node_type: String, field: String },

    #[error("expected a `{expected}` statement, found `{found}`")]
    TagMismatch { expected: String, found: String },

    #[error("`{node_type}` block has no `{kind}` statement")]
    MissingSubNode { node_type: String, kind: String },

    #[error("field `{field}` of `{node_type}` has the wrong shape, expected {expected}")]
    UnexpectedShape {
        node_type: String,
        field: String,
        expected: &'static str,
    },
}

impl NodeError {
    pub fn missing(node_type: impl Into<String>, field: impl Into<String>) -> Self {
        NodeError::MissingRequiredField {
            node_type: node_type.into(),
            field: field.into(),
        }
    }

    pub fn shape(
        node_type: impl Into<String>,
        field: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        NodeError::UnexpectedShape {
            node_type: node_type.into(),
            field: field.into(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = NodeError::missing("zone", "name");
        assert_eq!(
            err.to_string(),
            "`zone` statement is missing required field `name`"
        );
    }

    #[test]
    fn test_missing_sub_node_message() {
        let err = NodeError::MissingSubNode {
            node_type: "key".to_string(),
            kind: "secret".to_string(),
        };
        assert_eq!(err.to_string(), "`key` block has no `secret` statement");
    }
}
