// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 编排一次完整的 Actor 运行
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含输入校验、代理、URL 分类、条目上限和输出扩展等业务规则
pub mod domain;

/// 基础设施模块
///
/// 提供代理 URL 构造和本地存储等外部协作者的实现
pub mod infrastructure;

/// 工具模块
///
/// 提供错误类型、日志、停止信号和遥测
pub mod utils;
