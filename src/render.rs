//! Rendering a parse tree into display lines.

use std::fmt;
use std::ops::Range;

use crate::node::SyntaxNode;
use crate::search::{search, DepthLimit, Direction};

/// One rendered row of the tree view.
///
/// Lines come out in pre-order, so a parent is immediately followed by its
/// full subtree and the structure is reconstructible from the indent levels
/// alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    /// Nesting depth of the node this line shows; the root is 0.
    pub indent: usize,
    /// The node's type tag.
    pub label: String,
    /// Source byte span to jump to. Present only when navigation was enabled
    /// at render time.
    pub span: Option<Range<usize>>,
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.indent {
            f.write_str("  ")?;
        }
        write!(f, "{}:", self.label)?;
        if let Some(span) = &self.span {
            write!(f, " [{}..{}]", span.start, span.end)?;
        }
        Ok(())
    }
}

/// Render the whole tree into one line per node, in pre-order.
///
/// Pure: the same tree and flag always produce identical lines, and nothing
/// is retained between calls. The output is rebuilt wholesale on every render;
/// there is no patching of a previous result.
pub fn render<N: SyntaxNode>(root: &N, navigation_enabled: bool) -> Vec<DisplayLine> {
    let mut lines = Vec::new();
    // Full descent: the predicate never matches, it only records each node.
    let matched = search(
        root,
        Direction::Forward,
        DepthLimit::Unbounded,
        |node, depth| {
            lines.push(DisplayLine {
                indent: depth,
                label: node.kind().to_string(),
                span: navigation_enabled.then(|| node.span()),
            });
            false
        },
    );
    debug_assert!(matched.is_none());
    lines
}
