// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

use crate::domain::extend_output::TransformLoadError;
use crate::domain::repositories::storage_error::StorageError;
use crate::domain::services::input_validator::InputError;
use crate::domain::services::proxy_service::ProxyError;

/// Actor 运行错误类型
///
/// 汇总启动阶段和页面处理阶段可能出现的所有错误
#[derive(Error, Debug)]
pub enum ActorError {
    #[error("输入错误: {0}")]
    Input(#[from] InputError),

    #[error("extendOutputFunction 加载失败: {0}")]
    TransformLoad(#[from] TransformLoadError),

    #[error("代理错误: {0}")]
    Proxy(#[from] ProxyError),

    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),
}
