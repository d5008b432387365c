//! # Adapter Engine Module / 适配器引擎模块
//!
//! The core of the crate: owns the one cached test-tree snapshot, resolves
//! run requests into runner invocations, and fires load/run lifecycle
//! events toward the host. `load()` and `run()` never fail; collaborator
//! failures are logged and converted into normal "finished" events so the
//! host UI never waits on a missing finish marker.
//!
//! Overlapping `load()`/`run()` calls are not mutually excluded, matching
//! the cooperative single-threaded host model this adapter was written for;
//! on a multi-threaded runtime the cached tree is guarded by a
//! single-writer/many-reader lock and nothing more.
//!
//! 本 crate 的核心：持有唯一的缓存测试树快照，将运行请求解析为运行器调用，
//! 并向宿主发射 load/run 生命周期事件。`load()` 和 `run()` 永不失败；
//! 协作者的失败会被记录并转换为正常的 "finished" 事件，
//! 因此宿主 UI 永远不会等待一个缺失的结束标记。
//!
//! 重叠的 `load()`/`run()` 调用之间不做互斥，这与该适配器所面向的
//! 协作式单线程宿主模型一致；在多线程运行时上，缓存的树仅由一个
//! 单写多读锁保护，除此之外别无其它。

use anyhow::Result;
use futures::future::BoxFuture;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::core::contracts::{TestLoader, TestRunner};
use crate::core::models::{
    AutorunEvent, TestLoadEvent, TestNode, TestRunEvent, TestSuiteNode,
};
use crate::infra::events::EventEmitter;
use crate::infra::logger::Logger;

/// The error returned by the host-contract operations this version does not
/// support (`debug`, `cancel`).
/// 此版本不支持的宿主契约操作（`debug`、`cancel`）所返回的错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotImplemented;

impl fmt::Display for NotImplemented {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Method not implemented.")
    }
}

impl std::error::Error for NotImplemented {}

/// The adapter engine bridging the host's test-explorer contract to the
/// injected loader and runner collaborators.
///
/// 在宿主的测试浏览器契约与注入的加载器、运行器协作者之间架桥的适配器引擎。
pub struct TestAdapter {
    workspace_root: PathBuf,
    loader: Arc<dyn TestLoader>,
    runner: Arc<dyn TestRunner>,
    logger: Arc<dyn Logger>,
    /// The single cached tree snapshot, replaced wholesale by `load()` and
    /// read-only during `run()`.
    /// 唯一的缓存树快照，由 `load()` 整体替换，在 `run()` 期间只读。
    loaded_tests: RwLock<Option<TestSuiteNode>>,
    load_emitter: EventEmitter<TestLoadEvent>,
    run_emitter: EventEmitter<TestRunEvent>,
    autorun_emitter: EventEmitter<AutorunEvent>,
}

impl TestAdapter {
    /// Creates the adapter for one workspace. Logs a single initialization
    /// line synchronously; performs no I/O.
    ///
    /// 为一个工作区创建适配器。同步记录一行初始化日志；不执行任何 I/O。
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        workspace_root: PathBuf,
        loader: Arc<dyn TestLoader>,
        runner: Arc<dyn TestRunner>,
        logger: Arc<dyn Logger>,
        load_emitter: EventEmitter<TestLoadEvent>,
        run_emitter: EventEmitter<TestRunEvent>,
        autorun_emitter: EventEmitter<AutorunEvent>,
    ) -> Self {
        logger.info("Initializing adapter");
        Self {
            workspace_root,
            loader,
            runner,
            logger,
            loaded_tests: RwLock::new(None),
            load_emitter,
            run_emitter,
            autorun_emitter,
        }
    }

    /// The workspace this adapter was created for.
    pub fn workspace_root(&self) -> &PathBuf {
        &self.workspace_root
    }

    /// The subscription-side view of the test-tree-load channel.
    /// 测试树加载通道的订阅端视图。
    pub fn tests(&self) -> &EventEmitter<TestLoadEvent> {
        &self.load_emitter
    }

    /// The subscription-side view of the test-state channel.
    /// 测试状态通道的订阅端视图。
    pub fn test_states(&self) -> &EventEmitter<TestRunEvent> {
        &self.run_emitter
    }

    /// The subscription-side view of the autorun channel.
    /// 自动运行通道的订阅端视图。
    pub fn autorun(&self) -> &EventEmitter<AutorunEvent> {
        &self.autorun_emitter
    }

    /// Loads (or reloads) the test tree through the injected loader.
    ///
    /// Exactly one `Started` and one `Finished` load event fire per call,
    /// in that order, whatever the outcome. A loader failure is logged and
    /// swallowed; the previously cached tree stays in place. An explicit
    /// "no tests" result clears the cache.
    ///
    /// 通过注入的加载器加载（或重新加载）测试树。
    ///
    /// 无论结果如何，每次调用恰好触发一个 `Started` 和一个 `Finished`
    /// 加载事件，且顺序固定。加载器失败会被记录并吞掉；此前缓存的树保持不变。
    /// 明确的“没有测试”结果会清空缓存。
    pub async fn load(&self) {
        self.logger.info("Loading unit tests...");
        self.load_emitter.fire(TestLoadEvent::Started);

        match self
            .loader
            .load_unit_tests(&self.workspace_root, self.logger.as_ref())
            .await
        {
            Ok(Some(loaded)) => {
                let suite = loaded.suite;
                *self.loaded_tests.write().await = Some(suite.clone());
                self.load_emitter.fire(TestLoadEvent::Finished {
                    suite: Some(suite),
                });
            }
            Ok(None) => {
                self.logger.info("No unit tests found");
                *self.loaded_tests.write().await = None;
                self.load_emitter.fire(TestLoadEvent::Finished { suite: None });
            }
            Err(e) => {
                self.logger.error(&format!("Load error: {e:#}"));
                self.load_emitter.fire(TestLoadEvent::Finished { suite: None });
            }
        }
    }

    /// Runs the requested nodes against the cached tree.
    ///
    /// Fires `Started` carrying exactly the requested identifier sequence,
    /// dispatches each identifier in order, streams every state event the
    /// moment the runner returns it, and always fires the terminal
    /// `Finished` marker. The first runner failure is logged and aborts the
    /// remaining dispatch. Identifiers that do not resolve against the
    /// cached tree are skipped.
    ///
    /// 针对缓存的树运行所请求的节点。
    ///
    /// 触发携带与请求完全一致的标识符序列的 `Started`，按顺序调度每个标识符，
    /// 在运行器返回的瞬间流式发出每个状态事件，并且总是触发终止标记
    /// `Finished`。第一个运行器失败会被记录并中止剩余调度。
    /// 无法在缓存树中解析的标识符会被跳过。
    pub async fn run(&self, node_ids: Vec<String>) {
        self.logger.info("Running unit tests...");
        self.run_emitter.fire(TestRunEvent::Started {
            tests: node_ids.clone(),
        });

        let loaded = self.loaded_tests.read().await;
        if let Some(root) = loaded.as_ref() {
            if let Err(e) = self.dispatch(root, &node_ids).await {
                self.logger.error(&format!("Run error: {e:#}"));
            }
        }

        self.run_emitter.fire(TestRunEvent::Finished);
    }

    /// Resolves each requested identifier against the tree and runs it.
    /// Stops at the first runner failure.
    async fn dispatch(&self, root: &TestSuiteNode, node_ids: &[String]) -> Result<()> {
        for id in node_ids {
            if id == "root" || *id == root.id {
                // The root suite is treated as structural: run every direct
                // child in document order.
                // 根套件按结构性处理：按文档顺序运行每个直接子节点。
                for child in &root.children {
                    self.run_node(child).await?;
                }
            } else if let Some(node) = root.find_node(id) {
                self.run_node(node).await?;
            }
        }
        Ok(())
    }

    /// Runs one resolved node, recursing through structural suites. Leaves
    /// go to the runner's case execution, non-structural suites to its
    /// suite execution; a structural suite is never handed to the runner.
    ///
    /// 运行一个已解析的节点，并递归穿过结构性套件。叶子节点交给运行器的
    /// 用例执行，非结构性套件交给其套件执行；结构性套件绝不交给运行器。
    fn run_node<'a>(&'a self, node: &'a TestNode) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            match node {
                TestNode::Case(case) => {
                    let event = self
                        .runner
                        .run_test_case(case, &self.workspace_root)
                        .await?;
                    self.run_emitter.fire(event.into());
                }
                TestNode::Suite(suite) if suite.structural => {
                    for child in &suite.children {
                        self.run_node(child).await?;
                    }
                }
                TestNode::Suite(suite) => {
                    let events = self
                        .runner
                        .run_test_suite(suite, &self.workspace_root)
                        .await?;
                    for event in events {
                        self.run_emitter.fire(event.into());
                    }
                }
            }
            Ok(())
        })
    }

    /// Debugging is part of the host contract surface but unsupported here.
    ///
    /// # Errors
    ///
    /// Always fails with [`NotImplemented`]; has no side effects.
    ///
    /// 调试是宿主契约表面的一部分，但这里不支持。
    /// 总是以 [`NotImplemented`] 失败；没有任何副作用。
    pub async fn debug(&self, _node_ids: Vec<String>) -> Result<(), NotImplemented> {
        Err(NotImplemented)
    }

    /// In-flight cancellation is unsupported in this version.
    ///
    /// # Errors
    ///
    /// Always fails synchronously with [`NotImplemented`].
    ///
    /// 此版本不支持取消进行中的运行。
    /// 总是以 [`NotImplemented`] 同步失败。
    pub fn cancel(&self) -> Result<(), NotImplemented> {
        Err(NotImplemented)
    }

    /// Releases the adapter's event channels. Cancellation is attempted
    /// first, best-effort. Call once.
    ///
    /// 释放适配器的事件通道。会先尽力尝试取消。只应调用一次。
    pub fn dispose(&self) {
        let _ = self.cancel();
        self.load_emitter.dispose();
        self.run_emitter.dispose();
        self.autorun_emitter.dispose();
    }
}

impl fmt::Debug for TestAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestAdapter")
            .field("workspace_root", &self.workspace_root)
            .finish_non_exhaustive()
    }
}
