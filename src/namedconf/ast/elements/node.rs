//! The statement node sum type

use serde::Serialize;
use std::fmt;

use super::super::record::Word;
use super::super::registry::NodeKind;
use super::super::traits::{AstNode, Container};
use super::{
    Acl, CheckNames, Controls, Inet, Key, NodeSequence, Options, UnknownNode, UnknownValue,
    ValueList, ValueNode, Zone,
};

/// One statement of a named.conf document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Unknown(UnknownNode),
    Include(ValueNode),
    Directory(ValueNode),
    Algorithm(ValueNode),
    Secret(ValueNode),
    CheckNames(CheckNames),
    Options(Options),
    Zone(Zone),
    Acl(Acl),
    Controls(Controls),
    Key(Key),
    Inet(Inet),
}

/// Borrowed view of a named node field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    Text(&'a str),
    Word(&'a Word),
    Nodes(&'a NodeSequence),
    List(&'a ValueList),
    Value(&'a ValueNode),
}

impl<'a> Field<'a> {
    /// Text of a scalar field.
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            Field::Text(text) => Some(text),
            Field::Word(word) => Some(word.as_str()),
            Field::Value(node) => Some(node.value.as_str()),
            Field::Nodes(_) | Field::List(_) => None,
        }
    }

    pub fn as_nodes(&self) -> Option<&'a NodeSequence> {
        match *self {
            Field::Nodes(nodes) => Some(nodes),
            _ => None,
        }
    }
}

impl Node {
    /// Registered kind, `None` for unknown statements.
    pub fn kind(&self) -> Option<NodeKind> {
        match self {
            Node::Unknown(_) => None,
            Node::Include(_) => Some(NodeKind::Include),
            Node::Directory(_) => Some(NodeKind::Directory),
            Node::Algorithm(_) => Some(NodeKind::Algorithm),
            Node::Secret(_) => Some(NodeKind::Secret),
            Node::CheckNames(_) => Some(NodeKind::CheckNames),
            Node::Options(_) => Some(NodeKind::Options),
            Node::Zone(_) => Some(NodeKind::Zone),
            Node::Acl(_) => Some(NodeKind::Acl),
            Node::Controls(_) => Some(NodeKind::Controls),
            Node::Key(_) => Some(NodeKind::Key),
            Node::Inet(_) => Some(NodeKind::Inet),
        }
    }

    fn as_ast_node(&self) -> &dyn AstNode {
        match self {
            Node::Unknown(n) => n,
            Node::Include(n) | Node::Directory(n) | Node::Algorithm(n) | Node::Secret(n) => n,
            Node::CheckNames(n) => n,
            Node::Options(n) => n,
            Node::Zone(n) => n,
            Node::Acl(n) => n,
            Node::Controls(n) => n,
            Node::Key(n) => n,
            Node::Inet(n) => n,
        }
    }

    /// Read a field by name.
    pub fn get(&self, field: &str) -> Option<Field<'_>> {
        if field == "node_type" {
            return Some(Field::Text(self.node_type()));
        }
        match (self, field) {
            (Node::Unknown(n), "name") => n.name.as_ref().map(Field::Word),
            (Node::Unknown(n), "value") => match n.value.as_ref()? {
                UnknownValue::Word(word) => Some(Field::Word(word)),
                UnknownValue::Nodes(nodes) => Some(Field::Nodes(nodes)),
                UnknownValue::List(list) => Some(Field::List(list)),
            },
            (
                Node::Include(n) | Node::Directory(n) | Node::Algorithm(n) | Node::Secret(n),
                "value",
            ) => Some(Field::Text(&n.value)),
            (Node::CheckNames(n), "target") => Some(Field::Text(&n.target)),
            (Node::CheckNames(n), "value") => Some(Field::Text(&n.value)),
            (Node::Options(n), "value") => Some(Field::Nodes(&n.value)),
            (Node::Zone(n), "name") => Some(Field::Word(&n.name)),
            (Node::Zone(n), "class") => n.class.as_ref().map(Field::Word),
            (Node::Zone(n), "value") => Some(Field::Nodes(&n.value)),
            (Node::Acl(n), "name") => Some(Field::Word(&n.name)),
            (Node::Acl(n), "value") => Some(Field::Nodes(&n.value)),
            (Node::Controls(n), "value") => Some(Field::Nodes(&n.value)),
            (Node::Key(n), "name") => Some(Field::Word(&n.name)),
            (Node::Key(n), "algorithm") => Some(Field::Value(&n.algorithm)),
            (Node::Key(n), "secret") => Some(Field::Value(&n.secret)),
            (Node::Inet(n), "ipaddr") => Some(Field::Text(&n.ipaddr)),
            (Node::Inet(n), "port") => n.port.as_deref().map(Field::Text),
            (Node::Inet(n), "allows") => Some(Field::List(&n.allows)),
            (Node::Inet(n), "keys") => Some(Field::List(&n.keys)),
            _ => None,
        }
    }

    /// `[node_type, value]` for value statements, `[node_type, target, value]`
    /// for `check-names`.
    pub fn as_list(&self) -> Option<Vec<&str>> {
        match self {
            Node::Unknown(n) => n.as_list(),
            Node::Include(n) | Node::Directory(n) | Node::Algorithm(n) | Node::Secret(n) => {
                Some(n.as_list())
            }
            Node::CheckNames(n) => Some(n.as_list()),
            _ => None,
        }
    }

    /// Direct children of block statements.
    pub fn children(&self) -> Option<&NodeSequence> {
        match self {
            Node::Options(n) => Some(n.children()),
            Node::Zone(n) => Some(n.children()),
            Node::Acl(n) => Some(n.children()),
            Node::Controls(n) => Some(n.children()),
            Node::Unknown(n) => n.children(),
            _ => None,
        }
    }

    /// Direct children matching `kind`; empty for statements without a block.
    pub fn search(&self, kind: &str) -> Vec<&Node> {
        self.children()
            .map(|children| children.search(kind))
            .unwrap_or_default()
    }

    pub(crate) fn into_value_node(self) -> Option<ValueNode> {
        match self {
            Node::Include(n) | Node::Directory(n) | Node::Algorithm(n) | Node::Secret(n) => {
                Some(n)
            }
            _ => None,
        }
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &str {
        self.as_ast_node().node_type()
    }

    fn is_same_nodetype(&self, kind: &str) -> bool {
        self.as_ast_node().is_same_nodetype(kind)
    }

    fn display_label(&self) -> String {
        self.as_ast_node().display_label()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Unknown(n) => write!(f, "{n}"),
            Node::Include(n) | Node::Directory(n) | Node::Algorithm(n) | Node::Secret(n) => {
                write!(f, "{n}")
            }
            Node::CheckNames(n) => write!(f, "{n}"),
            Node::Options(n) => write!(f, "{n}"),
            Node::Zone(n) => write!(f, "{n}"),
            Node::Acl(n) => write!(f, "{n}"),
            Node::Controls(n) => write!(f, "{n}"),
            Node::Key(n) => write!(f, "{n}"),
            Node::Inet(n) => write!(f, "{n}"),
        }
    }
}
