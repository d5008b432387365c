//! # Explorer Adapter Library / Explorer Adapter 库
//!
//! This library implements a host-facing test-explorer adapter engine: it
//! loads a hierarchical unit-test tree from a workspace through an injected
//! loader, executes selected tests through an injected runner, and streams
//! load/run lifecycle and per-test state events back to the host through
//! typed event emitters.
//!
//! 此库实现了一个面向宿主的测试浏览器适配器引擎：它通过注入的加载器从
//! 工作区加载分层的单元测试树，通过注入的运行器执行选定的测试，并通过
//! 类型化的事件发射器将 load/run 生命周期事件和单测状态事件流式回传给宿主。
//!
//! ## Modules / 模块
//!
//! - `core` - Test tree model, collaborator contracts, and the adapter engine
//! - `infra` - Infrastructure capabilities: event emitters and logging
//!
//! - `core` - 测试树模型、协作者契约与适配器引擎
//! - `infra` - 基础设施能力：事件发射器与日志

pub mod core;
pub mod infra;

// Re-export commonly used items
pub use self::core::adapter;
pub use self::core::contracts;
pub use self::core::models;
