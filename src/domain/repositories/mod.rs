// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义外部协作者的抽象接口：请求队列、数据集和页面来源
pub mod dataset_repository;
pub mod request_queue;
pub mod storage_error;
