use std::ops::Range;

/// Read-only view of one parse-tree node.
///
/// Implemented by the host's parser integration (see the `ts` module for the
/// tree-sitter adapter). The core only ever reads through this trait, and only
/// for the duration of a single traversal or render pass; nothing retains
/// nodes across passes, so cheap handle types (`tree_sitter::Node` is `Copy`)
/// work well here.
pub trait SyntaxNode: Clone {
    /// Node type tag (the grammar symbol name).
    fn kind(&self) -> &str;

    /// Byte span of the node in the source text.
    fn span(&self) -> Range<usize>;

    /// Children in their natural left-to-right order. Empty for leaves.
    fn child_nodes(&self) -> Vec<Self>;
}
