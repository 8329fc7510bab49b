// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::domain::models::page::{Item, PageContext};
use crate::domain::repositories::storage_error::StorageError;

/// 数据集仓库特质
///
/// 保存扩展后的抓取条目
#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// 写入一条数据
    async fn push_data(&self, item: &Item) -> Result<(), StorageError>;
}

/// 页面仓库特质
///
/// 提供待处理的页面，替代真实的网络抓取
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// 按顺序列出所有页面
    async fn list_pages(&self) -> Result<Vec<PageContext>, StorageError>;
}
