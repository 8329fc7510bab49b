// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：Actor 输入、爬取源和页面
/// - 仓库接口（repositories）：请求队列、数据集和页面来源的抽象接口
/// - 服务（services）：校验、代理、分类、上限和输出扩展
/// - 输出扩展转换（extend_output）：可注册的转换和选择器规则
///
/// 领域层不依赖于任何外部实现，体现了纯粹的业务规则。
pub mod extend_output;
pub mod models;
pub mod repositories;
pub mod services;
