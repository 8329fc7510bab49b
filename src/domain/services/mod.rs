// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含 Actor 的核心业务规则：
/// - 输入校验（input_validator）：检查 INPUT 的字段是否存在以及类型是否正确
/// - 代理服务（proxy_service）：根据代理配置生成代理 URL
/// - URL 分类（url_classifier）：把种子 URL 归类为带标签的爬取源
/// - 条目上限（item_limiter）：达到 maxItems 时触发停止
/// - 输出扩展（output_extender）：调用转换并合并结果
pub mod input_validator;
pub mod item_limiter;
pub mod output_extender;
pub mod proxy_service;
pub mod url_classifier;
