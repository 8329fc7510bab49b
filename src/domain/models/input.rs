// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Deserializer, Serialize};

/// Actor 输入
///
/// 对应 INPUT.json，字段名使用 camelCase。所有字段都是可选的，
/// 是否必填由 `input_validator` 负责检查。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorInput {
    /// 种子 URL 列表
    #[serde(default)]
    pub start_urls: Vec<StartUrl>,
    /// 最多输出的条目数
    #[serde(default, deserialize_with = "deserialize_max_items")]
    pub max_items: Option<u64>,
    /// 输出扩展转换的源文本
    #[serde(default)]
    pub extend_output_function: Option<String>,
    /// 代理配置
    #[serde(default)]
    pub proxy_configuration: Option<ProxyConfiguration>,
}

/// 种子 URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartUrl {
    pub url: String,
}

impl StartUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// 代理配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyConfiguration {
    /// 是否使用 Apify 代理
    #[serde(default)]
    pub use_apify_proxy: bool,
    /// 自定义代理 URL，非空时直接使用
    #[serde(default)]
    pub proxy_urls: Vec<String>,
    /// Apify 代理分组
    #[serde(default)]
    pub apify_proxy_groups: Vec<String>,
}

/// 将任意数值转换为条目上限
///
/// 小数向上取整、负数视为 0，与 `count >= max` 的比较语义一致
fn deserialize_max_items<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number: Option<serde_json::Number> = Option::deserialize(deserializer)?;
    Ok(number.map(|n| match n.as_u64() {
        Some(v) => v,
        None => {
            let f = n.as_f64().unwrap_or(0.0);
            if f <= 0.0 {
                0
            } else {
                f.ceil() as u64
            }
        }
    }))
}
