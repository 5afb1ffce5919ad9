//! Shared test support: an in-memory editor host and fixture parse trees.

#![allow(dead_code)]

use std::collections::HashMap;
use std::ops::Range;
use std::sync::Once;

use ast_view::{DisplayLine, EditorHost, SyntaxNode};

/// Initialize the global tracing subscriber once (used by tests that run with
/// `RUST_LOG`).
pub fn init_tracing_from_env() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stdout);
        let _ = subscriber.try_init();
    });
}

/// In-memory parse-tree node for driving the core without a real parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureNode {
    pub kind: &'static str,
    pub span: Range<usize>,
    pub children: Vec<FixtureNode>,
}

pub fn leaf(kind: &'static str, start: usize, end: usize) -> FixtureNode {
    FixtureNode {
        kind,
        span: start..end,
        children: Vec::new(),
    }
}

pub fn branch(
    kind: &'static str,
    start: usize,
    end: usize,
    children: Vec<FixtureNode>,
) -> FixtureNode {
    FixtureNode {
        kind,
        span: start..end,
        children,
    }
}

impl SyntaxNode for FixtureNode {
    fn kind(&self) -> &str {
        self.kind
    }

    fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    fn child_nodes(&self) -> Vec<Self> {
        self.children.clone()
    }
}

/// The expression tree used across the lifecycle and navigation tests,
/// modeling the source `1 + 2`:
/// `Program[BinaryExpr[Num(0,1), Num(4,5)]]`.
pub fn expr_tree() -> FixtureNode {
    branch(
        "Program",
        0,
        5,
        vec![branch(
            "BinaryExpr",
            0,
            5,
            vec![leaf("Num", 0, 1), leaf("Num", 4, 5)],
        )],
    )
}

/// Notification kinds the mock host hands out subscriptions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubKind {
    Commit,
    Destroy,
}

/// Scriptable in-memory host that records every call the core makes.
///
/// Sources, views, and subscriptions all draw ids from one counter so no two
/// handles ever collide in a test.
#[derive(Debug, Default)]
pub struct MockHost {
    next_id: u32,
    trees: HashMap<u32, FixtureNode>,
    /// Live registrations: subscription id -> (kind, source).
    pub subscriptions: HashMap<u32, (SubKind, u32)>,
    /// Last content set on each live view.
    pub view_contents: HashMap<u32, Vec<DisplayLine>>,
    /// Views torn down so far, in order.
    pub destroyed_views: Vec<u32>,
    /// Every focus-and-select request: (source, span, highlight).
    pub focus_calls: Vec<(u32, Range<usize>, bool)>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source with its current parse tree and return its id.
    pub fn add_source(&mut self, tree: FixtureNode) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.trees.insert(id, tree);
        id
    }

    /// Replace the source's tree, as an edit followed by a commit would.
    pub fn set_tree(&mut self, source: u32, tree: FixtureNode) {
        self.trees.insert(source, tree);
    }

    /// Drop the source entirely, as closing its buffer would.
    pub fn destroy_source(&mut self, source: u32) {
        self.trees.remove(&source);
    }

    /// The kinds of live subscriptions registered against `source`.
    pub fn subscriptions_for(&self, source: u32) -> Vec<SubKind> {
        let mut kinds: Vec<SubKind> = self
            .subscriptions
            .values()
            .filter(|(_, s)| *s == source)
            .map(|(kind, _)| *kind)
            .collect();
        kinds.sort_by_key(|kind| *kind as u8);
        kinds
    }
}

impl EditorHost for MockHost {
    type Node = FixtureNode;
    type SourceId = u32;
    type ViewId = u32;
    type Subscription = u32;

    fn parse_tree(&self, source: u32) -> Option<FixtureNode> {
        self.trees.get(&source).cloned()
    }

    fn source_alive(&self, source: u32) -> bool {
        self.trees.contains_key(&source)
    }

    fn subscribe_commit(&mut self, source: u32) -> u32 {
        self.next_id += 1;
        self.subscriptions
            .insert(self.next_id, (SubKind::Commit, source));
        self.next_id
    }

    fn subscribe_destroy(&mut self, source: u32) -> u32 {
        self.next_id += 1;
        self.subscriptions
            .insert(self.next_id, (SubKind::Destroy, source));
        self.next_id
    }

    fn unsubscribe(&mut self, subscription: u32) {
        self.subscriptions.remove(&subscription);
    }

    fn create_view(&mut self, _title: &str) -> u32 {
        self.next_id += 1;
        self.view_contents.insert(self.next_id, Vec::new());
        self.next_id
    }

    fn set_view_content(&mut self, view: u32, lines: &[DisplayLine]) {
        self.view_contents.insert(view, lines.to_vec());
    }

    fn destroy_view(&mut self, view: u32) {
        self.view_contents.remove(&view);
        self.destroyed_views.push(view);
    }

    fn focus_and_select(&mut self, source: u32, span: Range<usize>, highlight: bool) {
        self.focus_calls.push((source, span, highlight));
    }
}
