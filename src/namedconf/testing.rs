//! Testing utilities for AST assertions
//!
//! Document tests should take their input from the verified sample files
//! ([`NamedConfSources`](crate::namedconf::processor::samples::NamedConfSources))
//! and check the whole node tree with [`assert_results`], whose fluent API
//! mirrors the shape of the document:
//!
//! ```rust,ignore
//! let source = NamedConfSources::get_string("010-options.conf")?;
//! let results = parse_document(&source)?;
//!
//! assert_results(&results)
//!     .node_count(1)
//!     .node(0, |options| {
//!         options
//!             .node_type("options")
//!             .child_count(2)
//!             .child(0, |child| {
//!                 child.node_type("directory").field("value", "/var/na/named");
//!             });
//!     });
//! ```

use crate::namedconf::ast::{AstNode, Node, Results};

/// Create an assertion builder for a parsed document
pub fn assert_results(results: &Results) -> ResultsAssertion<'_> {
    ResultsAssertion { results }
}

pub struct ResultsAssertion<'a> {
    results: &'a Results,
}

impl<'a> ResultsAssertion<'a> {
    pub fn node_count(self, expected: usize) -> Self {
        assert_eq!(
            self.results.len(),
            expected,
            "Expected {} top-level nodes, found {}: [{}]",
            expected,
            self.results.len(),
            summarize(self.results.nodes())
        );
        self
    }

    /// Assert on a top-level node by index
    pub fn node<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let node = self.results.get(index).unwrap_or_else(|| {
            panic!(
                "Node index {} out of bounds (document has {} nodes)",
                index,
                self.results.len()
            )
        });
        assertion(NodeAssertion {
            node,
            context: format!("nodes[{}]", index),
        });
        self
    }

    /// Assert the tags of the nodes `search(kind)` returns, in order
    pub fn search_finds(self, kind: &str, expected: usize) -> Self {
        let found = self.results.search(kind);
        assert_eq!(
            found.len(),
            expected,
            "Expected search({:?}) to find {} nodes, found {}",
            kind,
            expected,
            found.len()
        );
        assert!(found.iter().all(|node| node.is_same_nodetype(kind)));
        self
    }
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn node_type(self, expected: &str) -> Self {
        assert_eq!(
            self.node.node_type(),
            expected,
            "{}: Expected node type '{}', found '{}'",
            self.context,
            expected,
            self.node.node_type()
        );
        self
    }

    /// The node fell back to the unknown variant
    pub fn is_unknown(self) -> Self {
        assert!(
            matches!(self.node, Node::Unknown(_)),
            "{}: Expected an unknown node, found {:?}",
            self.context,
            self.node.kind()
        );
        self
    }

    /// Scalar field value, read through `Node::get`
    pub fn field(self, name: &str, expected: &str) -> Self {
        let actual = self.node.get(name).and_then(|field| field.as_str());
        assert_eq!(
            actual,
            Some(expected),
            "{}: Expected field '{}' to be '{}', found {:?}",
            self.context,
            name,
            expected,
            actual
        );
        self
    }

    /// Canonical text of the node
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.node.to_string(),
            expected,
            "{}: unexpected rendering",
            self.context
        );
        self
    }

    pub fn as_list(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.node.as_list().as_deref(),
            Some(expected),
            "{}: unexpected list form",
            self.context
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children().map_or(0, |children| children.len());
        assert_eq!(
            actual, expected,
            "{}: Expected {} children, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let child = self
            .node
            .children()
            .and_then(|children| children.get(index))
            .unwrap_or_else(|| panic!("{}: no child at index {}", self.context, index));
        assertion(NodeAssertion {
            node: child,
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }

    /// Membership answered by the block's kind set
    pub fn contains(self, kind: &str, expected: bool) -> Self {
        let actual = self
            .node
            .children()
            .map_or(false, |children| children.contains(kind));
        assert_eq!(
            actual, expected,
            "{}: Expected contains({:?}) to be {}",
            self.context, kind, expected
        );
        self
    }
}

fn summarize(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|node| node.node_type())
        .collect::<Vec<_>>()
        .join(", ")
}
