//! Ordered statement sequence used as the payload of blocks

use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::ops::Index;

use super::super::traits::AstNode;
use super::Node;

/// Child statements of a block, in source order.
///
/// The set of distinct `node_type`s is computed once at construction and
/// answers [`contains`](Self::contains) without a scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeSequence {
    nodes: Vec<Node>,
    kinds: HashSet<String>,
}

impl NodeSequence {
    pub fn new(nodes: Vec<Node>) -> Self {
        let kinds = nodes
            .iter()
            .map(|node| node.node_type().to_string())
            .collect();
        Self { nodes, kinds }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Distinct tags present in the sequence.
    pub fn kinds(&self) -> &HashSet<String> {
        &self.kinds
    }

    /// Every node matching `kind`, in order.
    pub fn search(&self, kind: &str) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|node| node.is_same_nodetype(kind))
            .collect()
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains(kind)
    }
}

impl Index<usize> for NodeSequence {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        &self.nodes[index]
    }
}

impl<'a> IntoIterator for &'a NodeSequence {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl From<Vec<Node>> for NodeSequence {
    fn from(nodes: Vec<Node>) -> Self {
        Self::new(nodes)
    }
}

impl Serialize for NodeSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.nodes)
    }
}

impl fmt::Display for NodeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namedconf::ast::elements::{CheckNames, ValueNode};
    use crate::namedconf::ast::registry::NodeKind;

    fn sample() -> NodeSequence {
        NodeSequence::new(vec![
            Node::Directory(ValueNode::new(NodeKind::Directory, "/var/named")),
            Node::CheckNames(CheckNames {
                node_type: "check-names".to_string(),
                target: "slave".to_string(),
                value: "ignore".to_string(),
            }),
            Node::Directory(ValueNode::new(NodeKind::Directory, "/srv/named")),
        ])
    }

    #[test]
    fn test_search_preserves_order() {
        let seq = sample();
        let found: Vec<String> = seq
            .search("directory")
            .iter()
            .map(|node| node.to_string())
            .collect();
        assert_eq!(
            found,
            vec!["directory \"/var/named\";", "directory \"/srv/named\";"]
        );
    }

    #[test]
    fn test_search_absent_kind() {
        assert!(sample().search("zone").is_empty());
    }

    #[test]
    fn test_contains_uses_kind_set() {
        let seq = sample();
        assert!(seq.contains("check-names"));
        assert!(!seq.contains("acl"));
        assert_eq!(seq.kinds().len(), 2);
    }

    #[test]
    fn test_display_joins_lines() {
        assert_eq!(
            sample().to_string(),
            "directory \"/var/named\";\ncheck-names slave ignore;\ndirectory \"/srv/named\";"
        );
    }

    #[test]
    fn test_indexing() {
        let seq = sample();
        assert_eq!(seq[1].node_type(), "check-names");
        assert!(seq.get(3).is_none());
        assert_eq!(seq.iter().count(), 3);
    }
}
