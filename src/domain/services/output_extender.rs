// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;

use crate::domain::extend_output::ExtendOutputTransform;
use crate::domain::models::page::{Item, PageContext};
use crate::utils::logger::ActorLogger;
use crate::utils::shutdown::{ExitReason, Shutdown};

/// 输出扩展错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtendOutputError {
    /// 转换返回了非对象，属于致命错误
    #[error("extendOutputFunction must return an object!")]
    NonObjectResult,
}

/// 输出扩展服务
///
/// 调用转换并把结果合并进基础条目。转换自身出错时按空结果处理；
/// 转换返回非对象时触发失败停止。
pub struct OutputExtender {
    shutdown: Shutdown,
    logger: Arc<dyn ActorLogger>,
}

impl OutputExtender {
    pub fn new(shutdown: Shutdown, logger: Arc<dyn ActorLogger>) -> Self {
        Self { shutdown, logger }
    }

    /// 应用转换
    ///
    /// # 参数
    ///
    /// * `page` - 页面上下文
    /// * `transform` - 已加载的转换
    /// * `item` - 基础条目
    ///
    /// # 返回值
    ///
    /// * `Ok(Item)` - 合并后的条目，转换结果覆盖同名字段
    /// * `Err(ExtendOutputError)` - 转换结果不是对象，此时已触发停止
    pub async fn apply(
        &self,
        page: &PageContext,
        transform: &dyn ExtendOutputTransform,
        item: Item,
    ) -> Result<Item, ExtendOutputError> {
        let user_result = match transform.extend(page).await {
            Ok(value) => value,
            Err(err) => {
                self.logger.error(&format!(
                    "extendOutputFunction crashed! Pushing default output. \
                     Please fix your function if you want to update the output. Error: {}",
                    err
                ));
                Value::Object(Map::new())
            }
        };

        let Value::Object(extension) = user_result else {
            let err = ExtendOutputError::NonObjectResult;
            self.logger.exception(&err);
            self.shutdown.trigger(ExitReason::Failure);
            return Err(err);
        };

        let mut merged = item;
        merged.extend(extension);
        Ok(merged)
    }
}
