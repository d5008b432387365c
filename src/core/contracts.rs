//! # Collaborator Contracts Module / 协作者契约模块
//!
//! This module defines the two external collaborators the adapter engine
//! depends on: the loader that discovers the test tree in a workspace, and
//! the runner that executes a single case or suite against the toolchain.
//! Both are injected as trait objects so the engine can be exercised with
//! in-memory doubles.
//!
//! 此模块定义了适配器引擎所依赖的两个外部协作者：
//! 在工作区中发现测试树的加载器，以及针对工具链执行单个用例或套件的运行器。
//! 两者都以 trait 对象的形式注入，以便引擎可以用内存替身进行测试。

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::core::models::{LoadedTests, TestCaseNode, TestEvent, TestSuiteNode};
use crate::infra::logger::Logger;

/// Discovers the unit tests of a workspace and produces the full test tree.
/// 发现工作区中的单元测试并生成完整的测试树。
#[async_trait]
pub trait TestLoader: Send + Sync {
    /// Loads the unit-test tree for the given workspace.
    ///
    /// Returns `Ok(None)` when the workspace contains no tests at all.
    ///
    /// # Errors
    ///
    /// Returns an error if discovery fails; the engine recovers locally and
    /// never propagates it to the host.
    ///
    /// 加载给定工作区的单元测试树。
    /// 当工作区完全不包含测试时返回 `Ok(None)`。
    /// 发现失败时返回错误；引擎会在本地恢复，绝不向宿主传播。
    async fn load_unit_tests(
        &self,
        workspace_root: &Path,
        logger: &dyn Logger,
    ) -> Result<Option<LoadedTests>>;
}

/// Executes a single test case or a single (non-structural) test suite.
/// 执行单个测试用例或单个（非结构性）测试套件。
#[async_trait]
pub trait TestRunner: Send + Sync {
    /// Runs one leaf test case and returns its single state event.
    ///
    /// # Errors
    ///
    /// Returns an error if the toolchain invocation fails; the engine logs
    /// it and aborts the remaining dispatch of the current run.
    ///
    /// 运行一个叶子测试用例并返回其单个状态事件。
    /// 工具链调用失败时返回错误；引擎会记录该错误并中止当前运行的剩余调度。
    async fn run_test_case(
        &self,
        node: &TestCaseNode,
        workspace_root: &Path,
    ) -> Result<TestEvent>;

    /// Runs one suite as a unit and returns its state events in the order
    /// they were produced. Structural suites are never passed here; the
    /// engine recurses through them instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the toolchain invocation fails.
    ///
    /// 将一个套件作为整体运行，并按产生顺序返回其状态事件。
    /// 结构性套件绝不会传到这里；引擎会改为递归处理它们。
    async fn run_test_suite(
        &self,
        node: &TestSuiteNode,
        workspace_root: &Path,
    ) -> Result<Vec<TestEvent>>;
}
