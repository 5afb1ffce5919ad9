//! Errors surfaced by lifecycle, sync, and navigation operations.
//!
//! Every failure names the precondition that was violated; a failed operation
//! leaves the session exactly as it was before the call.

use std::fmt;

use crate::session::LifecycleState;

/// Error kinds raised by the tree view core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugError {
    /// A lifecycle transition was attempted from a state that does not allow
    /// it, e.g. enabling twice or disabling an inactive session.
    Lifecycle {
        /// The operation that was attempted.
        operation: &'static str,
        /// The state the session was in at the time.
        state: LifecycleState,
    },
    /// A jump request violated one of its preconditions.
    Navigation(NavigationErrorKind),
    /// The source side is gone; it was destroyed between the last render and
    /// this call.
    SourceUnavailable,
}

/// The specific precondition a failed jump violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationErrorKind {
    /// No session is bound to a view (the session is inactive or was never
    /// enabled for this source).
    SessionInactive,
    /// The clicked line carries no navigable span; navigation was disabled
    /// when it was rendered.
    NotNavigable,
    /// The line index does not exist in the current render.
    LineOutOfRange(usize),
}

impl fmt::Display for DebugError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugError::Lifecycle { operation, state } => {
                write!(f, "cannot {operation}: session is {state}")
            }
            DebugError::Navigation(kind) => write!(f, "{kind}"),
            DebugError::SourceUnavailable => write!(f, "source is no longer available"),
        }
    }
}

impl fmt::Display for NavigationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationErrorKind::SessionInactive => {
                write!(f, "cannot navigate: no view is bound to this source")
            }
            NavigationErrorKind::NotNavigable => {
                write!(f, "line has no navigable span (navigation is disabled)")
            }
            NavigationErrorKind::LineOutOfRange(index) => {
                write!(f, "display line {index} does not exist in the current render")
            }
        }
    }
}

impl std::error::Error for DebugError {}
