//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the adapter: the test
//! tree data model, the loader/runner collaborator contracts, and the
//! adapter engine that dispatches run requests over the tree.
//!
//! 此模块包含适配器的核心功能：测试树数据模型、加载器/运行器协作者契约，
//! 以及在树上调度运行请求的适配器引擎。

pub mod adapter;
pub mod contracts;
pub mod models;

// Re-exports
pub use adapter::{NotImplemented, TestAdapter};
pub use contracts::{TestLoader, TestRunner};
pub use models::{LoadedTests, TestEvent, TestNode, TestState};
