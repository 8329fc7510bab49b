// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施模块
///
/// 提供外部协作者的实现：Apify 代理 URL 构造、本地请求队列、数据集和页面快照
pub mod proxy;
pub mod storage;
