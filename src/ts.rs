//! `SyntaxNode` adapter for tree-sitter parse trees.
//!
//! `tree_sitter::Node` is a `Copy` handle into its tree, so it satisfies the
//! transient-snapshot contract directly. Children include anonymous nodes
//! (punctuation, keywords), matching what the parser actually produced.

use std::ops::Range;

use crate::node::SyntaxNode;

impl<'tree> SyntaxNode for tree_sitter::Node<'tree> {
    fn kind(&self) -> &str {
        tree_sitter::Node::kind(self)
    }

    fn span(&self) -> Range<usize> {
        self.byte_range()
    }

    fn child_nodes(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        self.children(&mut cursor).collect()
    }
}
