// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use parking_lot::Mutex;
use std::fmt;
use tracing::{error, info, warn};

/// Actor 日志能力
///
/// 由调用方注入到各个组件中，而不是依赖模块级的全局日志对象。
/// 默认实现 [`TracingLogger`] 转发到 `tracing`，测试中使用 [`MemoryLogger`] 记录输出。
pub trait ActorLogger: Send + Sync {
    /// 普通信息
    fn info(&self, message: &str);

    /// 警告信息
    fn warning(&self, message: &str);

    /// 错误信息
    fn error(&self, message: &str);

    /// 致命异常
    fn exception(&self, err: &dyn std::error::Error);
}

/// 基于 tracing 的日志实现
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl ActorLogger for TracingLogger {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn warning(&self, message: &str) {
        warn!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }

    fn exception(&self, err: &dyn std::error::Error) {
        error!(error = %err, "Exception");
    }
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Exception,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Exception => write!(f, "EXCEPTION"),
        }
    }
}

/// 一条被记录的日志
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// 内存日志实现
///
/// 保存所有日志条目，便于断言某条 URL 被丢弃时确实输出了警告
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, level: LogLevel, message: String) {
        self.entries.lock().push(LogEntry { level, message });
    }

    /// 返回全部日志条目的快照
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// 返回指定级别的日志消息
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.level == level)
            .map(|e| e.message.clone())
            .collect()
    }
}

impl ActorLogger for MemoryLogger {
    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message.to_string());
    }

    fn warning(&self, message: &str) {
        self.push(LogLevel::Warning, message.to_string());
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message.to_string());
    }

    fn exception(&self, err: &dyn std::error::Error) {
        self.push(LogLevel::Exception, err.to_string());
    }
}
