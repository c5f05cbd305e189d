//! AST traits - Common interfaces for uniform node access
//!
//! Every statement node implements [`AstNode`]; block statements whose payload
//! is a statement sequence also implement [`Container`].

use super::elements::{Node, NodeSequence};

/// Common interface for all AST nodes
pub trait AstNode {
    /// The lowercase hyphenated statement tag, e.g. `check-names`.
    fn node_type(&self) -> &str;

    /// Type-match predicate used by `search` and `contains`.
    fn is_same_nodetype(&self, kind: &str) -> bool;

    /// Short label used by tree views.
    fn display_label(&self) -> String;
}

/// Trait for block nodes holding an ordered sequence of child statements
pub trait Container: AstNode {
    fn children(&self) -> &NodeSequence;

    /// Direct children of the given kind, in source order. Grandchildren are
    /// not visited.
    fn search(&self, kind: &str) -> Vec<&Node> {
        self.children().search(kind)
    }
}
