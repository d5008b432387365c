// Shared test helpers for integration tests: in-memory doubles for the
// loader/runner collaborators, a capturing logger, and sample trees.
#![allow(dead_code)]

use anyhow::{Result, bail};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::UnboundedReceiver;

use explorer_adapter::core::adapter::TestAdapter;
use explorer_adapter::core::contracts::{TestLoader, TestRunner};
use explorer_adapter::core::models::{
    LoadedTests, TestCaseNode, TestEvent, TestNode, TestState, TestSuiteNode,
};
use explorer_adapter::infra::events::EventEmitter;
use explorer_adapter::infra::logger::Logger;

/// One scripted outcome for the fake loader.
pub enum LoadOutcome {
    Tree(LoadedTests),
    Empty,
    Fail(String),
}

/// A loader double that replays scripted outcomes in order. Once the script
/// is exhausted it reports an empty workspace.
pub struct FakeLoader {
    outcomes: Mutex<VecDeque<LoadOutcome>>,
    pub calls: Mutex<usize>,
}

impl FakeLoader {
    pub fn scripted(outcomes: Vec<LoadOutcome>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(0),
        })
    }

    pub fn with_tree(suite: TestSuiteNode) -> Arc<Self> {
        Self::scripted(vec![LoadOutcome::Tree(LoadedTests::new(suite))])
    }

    pub fn empty() -> Arc<Self> {
        Self::scripted(vec![LoadOutcome::Empty])
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Self::scripted(vec![LoadOutcome::Fail(message.to_string())])
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl TestLoader for FakeLoader {
    async fn load_unit_tests(
        &self,
        _workspace_root: &Path,
        _logger: &dyn Logger,
    ) -> Result<Option<LoadedTests>> {
        *self.calls.lock().unwrap() += 1;
        match self.outcomes.lock().unwrap().pop_front() {
            Some(LoadOutcome::Tree(loaded)) => Ok(Some(loaded)),
            Some(LoadOutcome::Empty) | None => Ok(None),
            Some(LoadOutcome::Fail(message)) => bail!("{}", message),
        }
    }
}

/// A runner double that records every invocation and reports everything as
/// passed, except for an optional node id that errors instead.
pub struct FakeRunner {
    pub invocations: Mutex<Vec<String>>,
    fail_on: Option<String>,
}

impl FakeRunner {
    pub fn passing() -> Arc<Self> {
        Arc::new(Self {
            invocations: Mutex::new(Vec::new()),
            fail_on: None,
        })
    }

    pub fn failing_on(node_id: &str) -> Arc<Self> {
        Arc::new(Self {
            invocations: Mutex::new(Vec::new()),
            fail_on: Some(node_id.to_string()),
        })
    }

    pub fn recorded(&self) -> Vec<String> {
        self.invocations.lock().unwrap().clone()
    }
}

/// Collects one passed-state event per case in the suite's subtree, in
/// document order. Mimics a runner that executes a whole suite as a unit.
fn subtree_case_events(suite: &TestSuiteNode, out: &mut Vec<TestEvent>) {
    for child in &suite.children {
        match child {
            TestNode::Case(case) => out.push(TestEvent::new(&case.id, TestState::Passed)),
            TestNode::Suite(nested) => subtree_case_events(nested, out),
        }
    }
}

#[async_trait]
impl TestRunner for FakeRunner {
    async fn run_test_case(
        &self,
        node: &TestCaseNode,
        _workspace_root: &Path,
    ) -> Result<TestEvent> {
        self.invocations
            .lock()
            .unwrap()
            .push(format!("case:{}", node.id));
        if self.fail_on.as_deref() == Some(node.id.as_str()) {
            bail!("oh nose!");
        }
        Ok(TestEvent::new(&node.id, TestState::Passed))
    }

    async fn run_test_suite(
        &self,
        node: &TestSuiteNode,
        _workspace_root: &Path,
    ) -> Result<Vec<TestEvent>> {
        self.invocations
            .lock()
            .unwrap()
            .push(format!("suite:{}", node.id));
        if self.fail_on.as_deref() == Some(node.id.as_str()) {
            bail!("oh nose!");
        }
        let mut events = Vec::new();
        subtree_case_events(node, &mut events);
        Ok(events)
    }
}

/// A logger double that captures every line for later assertions.
#[derive(Default)]
pub struct CapturingLogger {
    pub infos: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl CapturingLogger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn info_lines(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn error_lines(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Logger for CapturingLogger {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

/// Builds the reference tree used across the run tests:
///
/// ```text
/// root
/// ├── test-1
/// ├── suite-3        (runnable)
/// │   ├── test-2
/// │   └── test-3
/// ├── test-4
/// └── suite-5        (runnable)
///     └── test-5
/// ```
pub fn sample_tree() -> TestSuiteNode {
    TestSuiteNode::new("root", "All tests")
        .with_child(TestCaseNode::new("test-1", "test 1").owned_by("root"))
        .with_child(
            TestSuiteNode::new("suite-3", "suite 3")
                .with_child(TestCaseNode::new("test-2", "test 2").owned_by("suite-3"))
                .with_child(TestCaseNode::new("test-3", "test 3").owned_by("suite-3")),
        )
        .with_child(TestCaseNode::new("test-4", "test 4").owned_by("root"))
        .with_child(
            TestSuiteNode::new("suite-5", "suite 5")
                .with_child(TestCaseNode::new("test-5", "test 5").owned_by("suite-5")),
        )
}

/// Builds a tree whose intermediate layers are structural groups:
///
/// ```text
/// root
/// └── group-a        (structural)
///     ├── test-a1
///     └── group-b    (structural)
///         ├── test-b1
///         └── suite-c  (runnable)
///             └── test-c1
/// ```
pub fn structural_tree() -> TestSuiteNode {
    TestSuiteNode::new("root", "All tests").with_child(
        TestSuiteNode::structural("group-a", "group a")
            .with_child(TestCaseNode::new("test-a1", "test a1").owned_by("group-a"))
            .with_child(
                TestSuiteNode::structural("group-b", "group b")
                    .with_child(TestCaseNode::new("test-b1", "test b1").owned_by("group-b"))
                    .with_child(
                        TestSuiteNode::new("suite-c", "suite c").with_child(
                            TestCaseNode::new("test-c1", "test c1").owned_by("suite-c"),
                        ),
                    ),
            ),
    )
}

/// Wires an adapter around the given doubles with fresh emitters.
pub fn build_adapter(
    loader: Arc<dyn TestLoader>,
    runner: Arc<dyn TestRunner>,
    logger: Arc<dyn Logger>,
) -> TestAdapter {
    TestAdapter::new(
        PathBuf::from("/workspace"),
        loader,
        runner,
        logger,
        EventEmitter::new(),
        EventEmitter::new(),
        EventEmitter::new(),
    )
}

/// Drains every event already buffered in the channel without waiting.
pub fn collect_ready<T>(rx: &mut UnboundedReceiver<T>) -> Vec<T> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
