//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the adapter:
//! the hierarchical test tree (cases and suites), the loader result, and the
//! event payloads streamed to the host.
//!
//! 此模块定义了整个适配器中使用的核心数据结构：
//! 分层测试树（用例和套件）、加载器结果以及流式传输给宿主的事件负载。

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single unit-test case, the leaf of the test tree.
/// 单个单元测试用例，测试树的叶子节点。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseNode {
    /// The unique identifier of the test case within its tree.
    /// 测试用例在其树中的唯一标识符。
    pub id: String,
    /// The label displayed by the host UI.
    /// 宿主 UI 显示的标签。
    pub label: String,
    /// The identifier of the owning suite. This is a back-reference by id,
    /// never an owning link, so the tree stays a strict hierarchy.
    /// 所属套件的标识符。这是一个按 id 的反向引用，而非所有权链接，
    /// 因此树保持严格的层级结构。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suite_id: Option<String>,
}

impl TestCaseNode {
    /// Creates a new test case node.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            suite_id: None,
        }
    }

    /// Sets the owning suite back-reference.
    /// 设置所属套件的反向引用。
    pub fn owned_by(mut self, suite_id: impl Into<String>) -> Self {
        self.suite_id = Some(suite_id.into());
        self
    }
}

/// A suite of tests, the branch of the test tree. A suite marked as
/// `structural` exists purely for grouping and is never handed to the
/// runner itself; running it recurses into its children instead.
///
/// 测试套件，测试树的分支节点。标记为 `structural` 的套件纯粹用于分组，
/// 它本身永远不会交给运行器执行；运行它时会递归到其子节点。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSuiteNode {
    /// The unique identifier of the suite within its tree.
    /// 套件在其树中的唯一标识符。
    pub id: String,
    /// The label displayed by the host UI.
    /// 宿主 UI 显示的标签。
    pub label: String,
    /// Marks a pure grouping construct with no independent execution
    /// semantics.
    /// 标记一个没有独立执行语义的纯分组构造。
    #[serde(default)]
    pub structural: bool,
    /// The ordered children of this suite, in document order.
    /// 此套件的有序子节点，按文档顺序排列。
    #[serde(default)]
    pub children: Vec<TestNode>,
}

impl TestSuiteNode {
    /// Creates a new runnable (non-structural) suite with no children.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            structural: false,
            children: Vec::new(),
        }
    }

    /// Creates a new structural suite with no children.
    /// 创建一个没有子节点的结构性套件。
    pub fn structural(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            structural: true,
            ..Self::new(id, label)
        }
    }

    /// Appends a child node, preserving document order.
    pub fn with_child(mut self, child: impl Into<TestNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Searches the subtree below this suite for a node with the given id.
    /// The suite itself is not a match; callers that want to match the root
    /// compare against `self.id` first.
    ///
    /// 在此套件下方的子树中搜索具有给定 id 的节点。
    /// 套件本身不参与匹配；需要匹配根节点的调用者应先与 `self.id` 比较。
    pub fn find_node(&self, id: &str) -> Option<&TestNode> {
        for child in &self.children {
            if child.id() == id {
                return Some(child);
            }
            if let TestNode::Suite(suite) = child {
                if let Some(found) = suite.find_node(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Counts the test cases in the subtree, including nested suites.
    /// 统计子树中的测试用例数量，包括嵌套套件。
    pub fn case_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                TestNode::Case(_) => 1,
                TestNode::Suite(suite) => suite.case_count(),
            })
            .sum()
    }
}

/// A node of the loaded test tree: either a runnable leaf case or a suite.
/// The discriminant doubles as the host wire tag (`"test"` / `"suite"`).
///
/// 已加载测试树的一个节点：可运行的叶子用例或套件。
/// 判别标签同时作为宿主线路协议的标记（`"test"` / `"suite"`）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TestNode {
    /// A leaf test case / 叶子测试用例
    #[serde(rename = "test")]
    Case(TestCaseNode),
    /// A branch suite / 分支套件
    #[serde(rename = "suite")]
    Suite(TestSuiteNode),
}

impl TestNode {
    /// Gets the unique identifier of the node.
    pub fn id(&self) -> &str {
        match self {
            TestNode::Case(case) => &case.id,
            TestNode::Suite(suite) => &suite.id,
        }
    }

    /// Gets the display label of the node.
    pub fn label(&self) -> &str {
        match self {
            TestNode::Case(case) => &case.label,
            TestNode::Suite(suite) => &suite.label,
        }
    }
}

impl From<TestCaseNode> for TestNode {
    fn from(case: TestCaseNode) -> Self {
        TestNode::Case(case)
    }
}

impl From<TestSuiteNode> for TestNode {
    fn from(suite: TestSuiteNode) -> Self {
        TestNode::Suite(suite)
    }
}

/// The result of one successful loader invocation: a full test tree rooted
/// at a single suite. "No tests in the workspace" is modelled as `None` at
/// the loader contract level, not as an empty `LoadedTests`.
///
/// 一次成功的加载器调用的结果：以单个套件为根的完整测试树。
/// “工作区中没有测试”在加载器契约层面被建模为 `None`，而不是空的 `LoadedTests`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadedTests {
    /// The root suite of the loaded tree.
    /// 已加载树的根套件。
    pub suite: TestSuiteNode,
}

impl LoadedTests {
    pub fn new(suite: TestSuiteNode) -> Self {
        Self { suite }
    }
}

/// The outcome states a test can report to the host.
/// 测试可以向宿主报告的结果状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestState {
    /// The test has started running / 测试已开始运行
    Running,
    /// The test passed / 测试通过
    Passed,
    /// The test failed / 测试失败
    Failed,
    /// The test was skipped / 测试被跳过
    Skipped,
    /// The test errored before producing a verdict / 测试在产生结论前出错
    Errored,
}

impl fmt::Display for TestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TestState::Running => "running",
            TestState::Passed => "passed",
            TestState::Failed => "failed",
            TestState::Skipped => "skipped",
            TestState::Errored => "errored",
        };
        write!(f, "{}", s)
    }
}

/// A single state transition for one test, as returned by the runner.
/// Transient only: state events are streamed to the host and never stored.
///
/// 单个测试的一次状态变化，由运行器返回。
/// 仅为瞬态数据：状态事件流式传输给宿主，从不持久化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestEvent {
    /// The identifier of the test the state belongs to.
    /// 此状态所属测试的标识符。
    pub test: String,
    /// The reported outcome state.
    /// 报告的结果状态。
    pub state: TestState,
}

impl TestEvent {
    pub fn new(test: impl Into<String>, state: TestState) -> Self {
        Self {
            test: test.into(),
            state,
        }
    }
}

/// Lifecycle events on the test-tree-load channel.
/// 测试树加载通道上的生命周期事件。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TestLoadEvent {
    /// A load has begun / 一次加载已开始
    Started,
    /// A load has completed. `suite` is present iff a non-empty tree was
    /// loaded; an empty workspace and a failed load both finish without one.
    /// 一次加载已完成。仅当加载到非空树时才带有 `suite`；
    /// 空工作区和加载失败都会在没有 `suite` 的情况下完成。
    Finished {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        suite: Option<TestSuiteNode>,
    },
}

impl TestLoadEvent {
    /// Serializes the event to the host wire form.
    /// 将事件序列化为宿主线路格式。
    pub fn to_wire(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Events on the test-state channel: the run bracket plus every per-test
/// state transition fired while the bracket is open.
///
/// 测试状态通道上的事件：运行括号（start/finish）以及括号打开期间
/// 触发的每个单测状态变化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TestRunEvent {
    /// A run has begun for exactly the listed node identifiers, in request
    /// order.
    /// 一次运行已开始，目标正是所列出的节点标识符，且保持请求顺序。
    Started { tests: Vec<String> },
    /// The terminal marker of a run; fired exactly once per `run()` call.
    /// 运行的终止标记；每次 `run()` 调用只触发一次。
    Finished,
    /// A per-test state transition.
    /// 单个测试的状态变化。
    Test { test: String, state: TestState },
}

impl TestRunEvent {
    /// Serializes the event to the host wire form.
    /// 将事件序列化为宿主线路格式。
    pub fn to_wire(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<TestEvent> for TestRunEvent {
    fn from(event: TestEvent) -> Self {
        TestRunEvent::Test {
            test: event.test,
            state: event.state,
        }
    }
}

/// The trigger fired on the autorun channel. Carries no payload; the host
/// re-runs its current selection when it observes one.
/// 自动运行通道上触发的信号。不携带任何负载；宿主观察到它时会重新运行当前选择。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AutorunEvent;
