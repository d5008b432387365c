//! # Infrastructure Module / 基础设施模块
//!
//! This module provides the infrastructure capabilities the adapter engine
//! is constructed with: typed event emitters and the logging capability.
//!
//! 此模块提供适配器引擎构造时所需的基础设施能力：
//! 类型化事件发射器与日志能力。

pub mod events;
pub mod logger;

// Re-exports
pub use events::EventEmitter;
pub use logger::{ConsoleLogger, Logger, NullLogger};
