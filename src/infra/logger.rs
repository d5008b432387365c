//! # Logger Module / 日志模块
//!
//! The logging capability the adapter is constructed with. The engine only
//! needs fire-and-forget `info`/`error` lines; the host decides where they
//! end up. A colored console implementation is provided for standalone use.
//!
//! 适配器构造时所需的日志能力。引擎只需要“即发即忘”的 `info`/`error`
//! 日志行；它们最终去向由宿主决定。同时提供一个用于独立使用的彩色控制台实现。

use chrono::Local;
use colored::*;

/// Fire-and-forget diagnostic sink, synchronous from the caller's
/// perspective.
/// “即发即忘”的诊断输出端，从调用者的角度看是同步的。
pub trait Logger: Send + Sync {
    /// Writes an informational line.
    fn info(&self, message: &str);
    /// Writes an error line.
    fn error(&self, message: &str);
}

/// A logger that prints timestamped, colored lines to the console.
/// 将带时间戳的彩色日志行打印到控制台的日志器。
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }

    fn timestamp() -> String {
        Local::now().format("%H:%M:%S%.3f").to_string()
    }
}

impl Logger for ConsoleLogger {
    fn info(&self, message: &str) {
        println!("[{}] {} {}", Self::timestamp(), "INFO".blue(), message);
    }

    fn error(&self, message: &str) {
        eprintln!("[{}] {} {}", Self::timestamp(), "ERROR".red(), message);
    }
}

/// A logger that discards everything. Useful when the host wires its own
/// diagnostics elsewhere.
/// 丢弃所有内容的日志器。当宿主在别处接入自己的诊断时很有用。
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
