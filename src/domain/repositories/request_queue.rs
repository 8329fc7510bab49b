// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::domain::models::source::Source;
use crate::domain::repositories::storage_error::StorageError;

/// 请求队列特质
///
/// 接收分类后的爬取源，按加入顺序处理
#[async_trait]
pub trait RequestQueue: Send + Sync {
    /// 加入一条请求
    async fn add_request(&self, source: &Source) -> Result<(), StorageError>;
}
