//! Per-source registry of tree view sessions.
//!
//! This is the surface the host glue calls: enable/disable from user
//! commands, `handle_commit`/`handle_destroy` from the hook callbacks it
//! registered through [`EditorHost`], and `navigate` from clicks on rendered
//! lines.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{DebugError, NavigationErrorKind};
use crate::host::EditorHost;
use crate::session::{DebugOptions, LifecycleState, ViewSession};

/// Owns every live [`ViewSession`], at most one per source.
///
/// Sessions in the registry are always active; teardown removes them, after
/// which the same source can be enabled again from scratch.
pub struct TreeDebugger<H: EditorHost> {
    sessions: HashMap<H::SourceId, ViewSession<H>>,
}

impl<H: EditorHost> Default for TreeDebugger<H> {
    fn default() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }
}

impl<H: EditorHost> TreeDebugger<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable tree debugging for `source` and return the new session.
    ///
    /// At most one session may exist per source: enabling a source that
    /// already has one fails with a lifecycle error, never a duplicate view.
    pub fn enable_debugging(
        &mut self,
        host: &mut H,
        source: H::SourceId,
        options: DebugOptions,
    ) -> Result<&ViewSession<H>, DebugError> {
        if let Some(existing) = self.sessions.get(&source) {
            return Err(DebugError::Lifecycle {
                operation: "enable",
                state: existing.state(),
            });
        }
        let session = ViewSession::enable(host, source, options)?;
        debug!(source = ?source, "debugging enabled");
        Ok(self.sessions.entry(source).or_insert(session))
    }

    /// Tear down the session for `source` and return it (now inactive).
    pub fn disable_debugging(
        &mut self,
        host: &mut H,
        source: H::SourceId,
    ) -> Result<ViewSession<H>, DebugError> {
        let mut session = self.sessions.remove(&source).ok_or(DebugError::Lifecycle {
            operation: "disable",
            state: LifecycleState::Inactive,
        })?;
        match session.disable(host) {
            Ok(()) => {
                debug!(source = ?source, "debugging disabled");
                Ok(session)
            }
            Err(err) => {
                // Failed operations must leave the registry as it was.
                self.sessions.insert(source, session);
                Err(err)
            }
        }
    }

    /// Entry point for the commit notification: re-render the source's view
    /// wholesale against its current tree.
    pub fn handle_commit(&mut self, host: &mut H, source: H::SourceId) -> Result<(), DebugError> {
        let session = self
            .sessions
            .get_mut(&source)
            .ok_or(DebugError::Lifecycle {
                operation: "sync",
                state: LifecycleState::Inactive,
            })?;
        session.source_changed(host)
    }

    /// Entry point for the destroy notification: tear the source's session
    /// down and return it (now inactive).
    pub fn handle_destroy(
        &mut self,
        host: &mut H,
        source: H::SourceId,
    ) -> Result<ViewSession<H>, DebugError> {
        let mut session = self.sessions.remove(&source).ok_or(DebugError::Lifecycle {
            operation: "tear down",
            state: LifecycleState::Inactive,
        })?;
        match session.source_destroyed(host) {
            Ok(()) => Ok(session),
            Err(err) => {
                self.sessions.insert(source, session);
                Err(err)
            }
        }
    }

    /// Jump from a rendered line back to the source span it shows.
    pub fn navigate(
        &self,
        host: &mut H,
        source: H::SourceId,
        line_index: usize,
    ) -> Result<(), DebugError> {
        let session = self
            .sessions
            .get(&source)
            .ok_or(DebugError::Navigation(NavigationErrorKind::SessionInactive))?;
        session.navigate(host, line_index)
    }

    /// The live session for `source`, if debugging is enabled.
    pub fn session(&self, source: H::SourceId) -> Option<&ViewSession<H>> {
        self.sessions.get(&source)
    }

    /// Number of sources currently being debugged.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
