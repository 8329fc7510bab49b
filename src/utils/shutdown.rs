// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// 停止原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// 正常结束，例如达到 maxItems 上限
    Success,
    /// 致命错误，例如 extendOutputFunction 返回了非对象
    Failure,
}

impl ExitReason {
    /// 进程退出码
    pub fn code(self) -> u8 {
        match self {
            ExitReason::Success => 0,
            ExitReason::Failure => 1,
        }
    }
}

impl fmt::Display for ExitReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExitReason::Success => write!(f, "success"),
            ExitReason::Failure => write!(f, "failure"),
        }
    }
}

/// 全局停止信号
///
/// 取代叶子函数直接退出进程的做法：任何组件都可以触发停止，
/// 由顶层编排器观察取消令牌、排空进行中的工作并返回退出码。
/// 停止是一次性的，只有第一次触发会记录原因。
#[derive(Debug, Clone, Default)]
pub struct Shutdown {
    token: CancellationToken,
    reason: Arc<OnceCell<ExitReason>>,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// 触发停止
    ///
    /// 返回 `true` 表示本次调用是第一次触发
    pub fn trigger(&self, reason: ExitReason) -> bool {
        let first = self.reason.set(reason).is_ok();
        self.token.cancel();
        first
    }

    /// 是否已触发
    pub fn is_triggered(&self) -> bool {
        self.token.is_cancelled()
    }

    /// 第一次触发时记录的原因
    pub fn reason(&self) -> Option<ExitReason> {
        self.reason.get().copied()
    }

    /// 退出码，未触发时视为成功
    pub fn exit_code(&self) -> u8 {
        self.reason().map(ExitReason::code).unwrap_or(0)
    }

    /// 等待停止信号
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }

    /// 底层取消令牌，供协作任务派生子令牌
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}
