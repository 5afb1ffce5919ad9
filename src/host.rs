//! The collaborator interface to the embedding editor.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Range;

use crate::node::SyntaxNode;
use crate::render::DisplayLine;

/// Everything the tree view needs from the embedding editor and its parser.
///
/// Handle types are opaque associated types so the crate never assumes how
/// the host identifies buffers, view surfaces, or hook registrations. All
/// methods are synchronous; the whole crate runs inside whichever event
/// handler invoked it.
pub trait EditorHost {
    /// Parse-tree node type produced by the host's parser.
    type Node: SyntaxNode;
    /// Identifies one source buffer.
    type SourceId: Copy + Eq + Hash + Debug;
    /// Identifies one view surface.
    type ViewId: Copy + Debug;
    /// Unsubscribe handle for a notification registration.
    type Subscription;

    /// Root of the source's current parse tree, or `None` once the source is
    /// gone.
    fn parse_tree(&self, source: Self::SourceId) -> Option<Self::Node>;

    /// Whether the source still exists on the host side.
    fn source_alive(&self, source: Self::SourceId) -> bool;

    /// Register for commit-level change notifications (e.g. on save, not per
    /// keystroke). The host glue is expected to route the notification to
    /// `TreeDebugger::handle_commit`.
    fn subscribe_commit(&mut self, source: Self::SourceId) -> Self::Subscription;

    /// Register for source destruction notifications, routed to
    /// `TreeDebugger::handle_destroy`.
    fn subscribe_destroy(&mut self, source: Self::SourceId) -> Self::Subscription;

    /// Drop a notification registration.
    fn unsubscribe(&mut self, subscription: Self::Subscription);

    /// Create an empty view surface for rendered tree lines.
    fn create_view(&mut self, title: &str) -> Self::ViewId;

    /// Replace the view's displayed content wholesale.
    fn set_view_content(&mut self, view: Self::ViewId, lines: &[DisplayLine]);

    /// Tear the view surface down.
    fn destroy_view(&mut self, view: Self::ViewId);

    /// Bring the source into view and select `span`, optionally highlighting
    /// it. How a span is highlighted (and how navigable lines are made
    /// clickable in the first place) is entirely the host's concern.
    fn focus_and_select(&mut self, source: Self::SourceId, span: Range<usize>, highlight: bool);
}
