//! The lifecycle binding between one source buffer and its rendered tree view.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DebugError, NavigationErrorKind};
use crate::host::EditorHost;
use crate::nav;
use crate::render::{render, DisplayLine};

/// Lifecycle state of a [`ViewSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// No view is bound. Initial and terminal; a new session may be created
    /// for the same source afterwards.
    Inactive,
    /// A view surface exists and both notifications are subscribed.
    Active,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleState::Inactive => f.write_str("inactive"),
            LifecycleState::Active => f.write_str("active"),
        }
    }
}

/// Options recognized when enabling tree debugging. No other keys are
/// accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DebugOptions {
    /// Attach navigable spans to rendered lines and allow click-to-jump.
    /// Costs extra per-line data on very large trees.
    pub enable_navigation: bool,
    /// Highlight the target span after a jump. Only effective when
    /// `enable_navigation` is set.
    pub highlight_on_navigate: bool,
}

/// Binding between one source buffer and its rendered tree view.
///
/// Owned exclusively by the enable/disable lifecycle: [`crate::TreeDebugger`]
/// is the only place sessions are constructed and torn down. The view handle
/// is valid exactly while the state is [`LifecycleState::Active`].
pub struct ViewSession<H: EditorHost> {
    source: H::SourceId,
    view: Option<H::ViewId>,
    state: LifecycleState,
    options: DebugOptions,
    lines: Vec<DisplayLine>,
    commit_sub: Option<H::Subscription>,
    destroy_sub: Option<H::Subscription>,
}

impl<H: EditorHost> fmt::Debug for ViewSession<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewSession")
            .field("source", &self.source)
            .field("view", &self.view)
            .field("state", &self.state)
            .field("options", &self.options)
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}

impl<H: EditorHost> ViewSession<H> {
    /// Create the view side for `source`, perform the initial full render
    /// into it, and subscribe to commit and destroy notifications.
    ///
    /// Fails with [`DebugError::SourceUnavailable`] if the host no longer
    /// knows the source; nothing is created in that case.
    pub(crate) fn enable(
        host: &mut H,
        source: H::SourceId,
        options: DebugOptions,
    ) -> Result<Self, DebugError> {
        let root = host
            .parse_tree(source)
            .ok_or(DebugError::SourceUnavailable)?;
        let lines = render(&root, options.enable_navigation);
        let view = host.create_view(&format!("tree view: {:?}", source));
        host.set_view_content(view, &lines);
        let commit_sub = host.subscribe_commit(source);
        let destroy_sub = host.subscribe_destroy(source);
        debug!(source = ?source, lines = lines.len(), "tree view enabled");
        Ok(Self {
            source,
            view: Some(view),
            state: LifecycleState::Active,
            options,
            lines,
            commit_sub: Some(commit_sub),
            destroy_sub: Some(destroy_sub),
        })
    }

    /// Re-render against the source's current tree and replace the view's
    /// content wholesale. No diffing is attempted.
    pub(crate) fn source_changed(&mut self, host: &mut H) -> Result<(), DebugError> {
        if self.state != LifecycleState::Active {
            return Err(DebugError::Lifecycle {
                operation: "sync",
                state: self.state,
            });
        }
        let root = host
            .parse_tree(self.source)
            .ok_or(DebugError::SourceUnavailable)?;
        self.lines = render(&root, self.options.enable_navigation);
        let view = self.view.expect("active session always has a view");
        host.set_view_content(view, &self.lines);
        debug!(source = ?self.source, lines = self.lines.len(), "tree view re-rendered");
        Ok(())
    }

    /// Tear the view down in response to an explicit user request.
    pub(crate) fn disable(&mut self, host: &mut H) -> Result<(), DebugError> {
        self.teardown(host, "disable")
    }

    /// Tear the view down because the source itself went away.
    pub(crate) fn source_destroyed(&mut self, host: &mut H) -> Result<(), DebugError> {
        self.teardown(host, "tear down")
    }

    fn teardown(&mut self, host: &mut H, operation: &'static str) -> Result<(), DebugError> {
        if self.state != LifecycleState::Active {
            return Err(DebugError::Lifecycle {
                operation,
                state: self.state,
            });
        }
        if let Some(sub) = self.commit_sub.take() {
            host.unsubscribe(sub);
        }
        if let Some(sub) = self.destroy_sub.take() {
            host.unsubscribe(sub);
        }
        if let Some(view) = self.view.take() {
            host.destroy_view(view);
        }
        self.lines.clear();
        self.state = LifecycleState::Inactive;
        debug!(source = ?self.source, "tree view torn down");
        Ok(())
    }

    /// Resolve a clicked line index against the current render and jump to
    /// its source span.
    pub(crate) fn navigate(&self, host: &mut H, line_index: usize) -> Result<(), DebugError> {
        if self.state != LifecycleState::Active {
            return Err(DebugError::Navigation(NavigationErrorKind::SessionInactive));
        }
        let line = self.lines.get(line_index).ok_or(DebugError::Navigation(
            NavigationErrorKind::LineOutOfRange(line_index),
        ))?;
        nav::jump_to(host, self, line)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// The options this session was enabled with.
    pub fn options(&self) -> DebugOptions {
        self.options
    }

    /// The source this session is bound to.
    pub fn source(&self) -> H::SourceId {
        self.source
    }

    /// The bound view surface; `Some` exactly while the session is active.
    pub fn view(&self) -> Option<H::ViewId> {
        self.view
    }

    /// The lines of the most recent render, in display order.
    pub fn lines(&self) -> &[DisplayLine] {
        &self.lines
    }
}
