//! Live parse tree viewer for editor integrations.
//!
//! Renders the parse tree of a source buffer into a secondary view, keeps
//! that view in sync as the buffer changes (wholesale re-render on each
//! commit-level event, no diffing), and optionally lets the user jump from a
//! rendered line back to the source span it represents.
//!
//! The host editor plugs in through the [`EditorHost`] trait: it supplies the
//! current parse tree, notification subscriptions, and view-surface
//! primitives, and drives [`TreeDebugger`] from its own commands and hook
//! callbacks. Everything runs synchronously inside the triggering event.

pub mod debugger;
pub mod error;
pub mod host;
pub mod nav;
pub mod node;
pub mod render;
pub mod search;
pub mod session;
#[cfg(feature = "tree-sitter")]
pub mod ts;

pub use debugger::TreeDebugger;
pub use error::{DebugError, NavigationErrorKind};
pub use host::EditorHost;
pub use node::SyntaxNode;
pub use render::{render, DisplayLine};
pub use search::{search, try_search, DepthLimit, Direction};
pub use session::{DebugOptions, LifecycleState, ViewSession};
