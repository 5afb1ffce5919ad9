//! Depth-first search over a parse tree.
//!
//! Pre-order with a configurable child visit order and depth cutoff. The
//! traversal runs on an explicit stack so its memory use is bounded by tree
//! width, not tree depth; parse trees of pathological inputs can nest far
//! deeper than the native call stack tolerates.

use std::convert::Infallible;

use crate::node::SyntaxNode;

/// Child visit order for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Visit children left to right; the first match is the leftmost one.
    Forward,
    /// Visit children right to left; the first match is the rightmost one.
    Backward,
}

/// Depth cutoff for a search. The root is at depth 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthLimit {
    /// Descend through the whole tree.
    Unbounded,
    /// Evaluate nodes down to this depth and no further; `Max(0)` evaluates
    /// only the root.
    Max(usize),
}

impl DepthLimit {
    fn allows_descent_from(self, depth: usize) -> bool {
        match self {
            DepthLimit::Unbounded => true,
            DepthLimit::Max(limit) => depth < limit,
        }
    }
}

/// Return the first node, in pre-order, accepted by `predicate`.
///
/// The predicate sees each node together with its depth and is evaluated at a
/// node before any of its children; the root itself is eligible. The search
/// short-circuits on the first acceptance, so for `Direction::Forward` the
/// leftmost pre-order match wins and for `Direction::Backward` the rightmost
/// one does.
pub fn search<N, P>(
    root: &N,
    direction: Direction,
    limit: DepthLimit,
    mut predicate: P,
) -> Option<N>
where
    N: SyntaxNode,
    P: FnMut(&N, usize) -> bool,
{
    let result = try_search(root, direction, limit, |node, depth| {
        Ok::<bool, Infallible>(predicate(node, depth))
    });
    match result {
        Ok(found) => found,
        Err(never) => match never {},
    }
}

/// Fallible variant of [`search`]: a predicate error aborts the traversal
/// immediately and propagates to the caller untouched.
pub fn try_search<N, P, E>(
    root: &N,
    direction: Direction,
    limit: DepthLimit,
    mut predicate: P,
) -> Result<Option<N>, E>
where
    N: SyntaxNode,
    P: FnMut(&N, usize) -> Result<bool, E>,
{
    // Children are pushed in reverse visit order so the next node to visit is
    // always on top of the stack.
    let mut stack = vec![(root.clone(), 0usize)];
    while let Some((node, depth)) = stack.pop() {
        if predicate(&node, depth)? {
            return Ok(Some(node));
        }
        if !limit.allows_descent_from(depth) {
            continue;
        }
        let mut children = node.child_nodes();
        if children.is_empty() {
            continue;
        }
        if direction == Direction::Forward {
            children.reverse();
        }
        for child in children {
            stack.push((child, depth + 1));
        }
    }
    Ok(None)
}
