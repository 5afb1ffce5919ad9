//! Jumping from a rendered line back to its source span.

use tracing::trace;

use crate::error::{DebugError, NavigationErrorKind};
use crate::host::EditorHost;
use crate::render::DisplayLine;
use crate::session::{LifecycleState, ViewSession};

/// Ask the host to focus the session's source and select the span behind
/// `line`, highlighting it when the session was enabled with
/// `highlight_on_navigate`.
///
/// Every precondition is checked before the host is asked to act, so a failed
/// jump has no effect at all: the session must be active, the line must carry
/// a navigable span, and the source must still exist. Each violation gets its
/// own error rather than a silent no-op.
pub fn jump_to<H: EditorHost>(
    host: &mut H,
    session: &ViewSession<H>,
    line: &DisplayLine,
) -> Result<(), DebugError> {
    if session.state() != LifecycleState::Active {
        return Err(DebugError::Navigation(NavigationErrorKind::SessionInactive));
    }
    let span = line
        .span
        .clone()
        .ok_or(DebugError::Navigation(NavigationErrorKind::NotNavigable))?;
    if !host.source_alive(session.source()) {
        return Err(DebugError::SourceUnavailable);
    }
    trace!(source = ?session.source(), span = ?span, "jumping to node span");
    host.focus_and_select(
        session.source(),
        span,
        session.options().highlight_on_navigate,
    );
    Ok(())
}
