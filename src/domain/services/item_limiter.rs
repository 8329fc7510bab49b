// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use crate::utils::logger::ActorLogger;
use crate::utils::shutdown::{ExitReason, Shutdown};

/// 条目数量上限守卫
///
/// 达到 `maxItems` 时触发成功停止，由编排器负责排空剩余工作
pub struct ItemLimiter {
    max_items: Option<u64>,
    shutdown: Shutdown,
    logger: Arc<dyn ActorLogger>,
}

impl ItemLimiter {
    pub fn new(max_items: Option<u64>, shutdown: Shutdown, logger: Arc<dyn ActorLogger>) -> Self {
        Self {
            max_items,
            shutdown,
            logger,
        }
    }

    pub fn max_items(&self) -> Option<u64> {
        self.max_items
    }

    /// 检查当前条目数
    ///
    /// 返回 `true` 表示已达到上限；第一次达到时输出日志并触发停止
    pub fn check(&self, item_count: u64) -> bool {
        let Some(max_items) = self.max_items else {
            return false;
        };

        if item_count < max_items {
            return false;
        }

        if self.shutdown.trigger(ExitReason::Success) {
            self.logger
                .info("Actor reached the max items limit. Crawler is going to halt...");
            self.logger.info("Crawler Finished.");
        }
        true
    }
}
