// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - Actor 输入（input）：INPUT.json 的结构和代理配置
/// - 爬取源（source）：带分类标签的种子 URL
/// - 页面（page）：页面上下文和抓取条目
pub mod input;
pub mod page;
pub mod source;
