// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 输出扩展转换
//!
//! 运维人员通过 `extendOutputFunction` 选择一个在进程内注册的转换，
//! 或者提供一组受限的 CSS 选择器规则，不会执行任意代码。

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::models::page::PageContext;

pub mod builtin;
pub mod registry;
pub mod selector_rules;

pub use registry::TransformRegistry;

/// 转换加载错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TransformLoadError {
    /// 源文本无法解析
    #[error("extendOutputFunction is not valid! Error: {0}")]
    InvalidSource(String),

    /// 解析成功但不是可调用的转换
    #[error("extendOutputFunction is not a function! Please fix it or use just default output! ({0})")]
    NotCallable(String),
}

/// 转换运行错误
#[derive(Error, Debug)]
#[error("{0}")]
pub struct TransformError(pub String);

impl TransformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// 输出扩展转换特质
///
/// 接收页面上下文，返回要合并进条目的字段。
/// 返回值必须是 JSON 对象，否则视为致命错误。
#[async_trait]
pub trait ExtendOutputTransform: Send + Sync {
    /// 转换名称
    fn name(&self) -> &str;

    /// 执行转换
    async fn extend(&self, page: &PageContext) -> Result<Value, TransformError>;
}
