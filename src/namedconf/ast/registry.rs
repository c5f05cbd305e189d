//! Type registry for statement nodes
//!
//! Maps a grammar keyword to the constructor of its node variant. The table
//! of known variants is fixed at compile time; the lookup map is built once,
//! on first use, and is read-only afterwards. Keywords that are not in the
//! registry fall back to [`UnknownNode`].

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, trace};

use super::elements::{
    Acl, CheckNames, Controls, Inet, Key, Node, Options, UnknownNode, ValueNode, Zone,
};
use super::error::NodeError;
use super::record::ParseRecord;

/// The statement kinds the node model knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Include,
    Directory,
    CheckNames,
    Options,
    Zone,
    Key,
    Algorithm,
    Secret,
    Acl,
    Inet,
    Controls,
}

/// Every known kind, in registry order.
pub const KNOWN_KINDS: [NodeKind; 11] = [
    NodeKind::Include,
    NodeKind::Directory,
    NodeKind::CheckNames,
    NodeKind::Options,
    NodeKind::Zone,
    NodeKind::Key,
    NodeKind::Algorithm,
    NodeKind::Secret,
    NodeKind::Acl,
    NodeKind::Inet,
    NodeKind::Controls,
];

impl NodeKind {
    /// UpperCamel type identifier of the variant.
    pub const fn identifier(self) -> &'static str {
        match self {
            NodeKind::Include => "Include",
            NodeKind::Directory => "Directory",
            NodeKind::CheckNames => "CheckNames",
            NodeKind::Options => "Options",
            NodeKind::Zone => "Zone",
            NodeKind::Key => "Key",
            NodeKind::Algorithm => "Algorithm",
            NodeKind::Secret => "Secret",
            NodeKind::Acl => "Acl",
            NodeKind::Inet => "Inet",
            NodeKind::Controls => "Controls",
        }
    }

    /// Grammar keyword; always `camel_to_hyphened(self.identifier())`.
    pub const fn keyword(self) -> &'static str {
        match self {
            NodeKind::Include => "include",
            NodeKind::Directory => "directory",
            NodeKind::CheckNames => "check-names",
            NodeKind::Options => "options",
            NodeKind::Zone => "zone",
            NodeKind::Key => "key",
            NodeKind::Algorithm => "algorithm",
            NodeKind::Secret => "secret",
            NodeKind::Acl => "acl",
            NodeKind::Inet => "inet",
            NodeKind::Controls => "controls",
        }
    }

    /// Whether the statement's payload is a block of child statements.
    pub const fn is_block(self) -> bool {
        matches!(
            self,
            NodeKind::Options | NodeKind::Zone | NodeKind::Key | NodeKind::Acl | NodeKind::Controls
        )
    }

    pub fn from_keyword(keyword: &str) -> Option<NodeKind> {
        TypeRegistry::global().kind_of(keyword)
    }
}

/// Builds a node of one variant from its parse record.
pub type Constructor = fn(ParseRecord) -> Result<Node, NodeError>;

fn constructor_for(kind: NodeKind) -> Constructor {
    match kind {
        NodeKind::Include => |r| ValueNode::from_record(NodeKind::Include, &r).map(Node::Include),
        NodeKind::Directory => {
            |r| ValueNode::from_record(NodeKind::Directory, &r).map(Node::Directory)
        }
        NodeKind::Algorithm => {
            |r| ValueNode::from_record(NodeKind::Algorithm, &r).map(Node::Algorithm)
        }
        NodeKind::Secret => |r| ValueNode::from_record(NodeKind::Secret, &r).map(Node::Secret),
        NodeKind::CheckNames => |r| CheckNames::from_record(&r).map(Node::CheckNames),
        NodeKind::Options => |r| Options::from_record(r).map(Node::Options),
        NodeKind::Zone => |r| Zone::from_record(r).map(Node::Zone),
        NodeKind::Key => |r| Key::from_record(r).map(Node::Key),
        NodeKind::Acl => |r| Acl::from_record(r).map(Node::Acl),
        NodeKind::Inet => |r| Inet::from_record(r).map(Node::Inet),
        NodeKind::Controls => |r| Controls::from_record(r).map(Node::Controls),
    }
}

/// Keyword to constructor map
pub struct TypeRegistry {
    entries: HashMap<&'static str, (NodeKind, Constructor)>,
}

static TYPE_REGISTRY: Lazy<TypeRegistry> = Lazy::new(TypeRegistry::build);

impl TypeRegistry {
    fn build() -> Self {
        let entries = KNOWN_KINDS
            .iter()
            .map(|&kind| (kind.keyword(), (kind, constructor_for(kind))))
            .collect();
        TypeRegistry { entries }
    }

    /// The process-wide registry.
    pub fn global() -> &'static TypeRegistry {
        &TYPE_REGISTRY
    }

    /// Constructor for `keyword`, or `None` when the keyword is unknown.
    pub fn lookup(&self, keyword: &str) -> Option<Constructor> {
        self.entries.get(keyword).map(|&(_, constructor)| constructor)
    }

    pub fn kind_of(&self, keyword: &str) -> Option<NodeKind> {
        self.entries.get(keyword).map(|&(kind, _)| kind)
    }

    /// Registered keywords (sorted)
    pub fn keywords(&self) -> Vec<&'static str> {
        let mut keywords: Vec<_> = self.entries.keys().copied().collect();
        keywords.sort_unstable();
        keywords
    }

    /// Build the node for `record`, falling back to [`UnknownNode`] for
    /// unregistered tags.
    pub fn build_node(&self, record: ParseRecord) -> Result<Node, NodeError> {
        let node_type = record.node_type()?.to_string();
        match self.lookup(&node_type) {
            Some(constructor) => {
                trace!(node_type = %node_type, "building node");
                constructor(record)
            }
            None => {
                debug!(node_type = %node_type, "unrecognized statement, using unknown node");
                UnknownNode::from_record(record).map(Node::Unknown)
            }
        }
    }
}

/// Build a node through the global registry.
pub fn build_node(record: ParseRecord) -> Result<Node, NodeError> {
    TypeRegistry::global().build_node(record)
}
