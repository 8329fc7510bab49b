// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use validator::Validate;

/// H&M 美国站首页
pub const DEFAULT_HOMEPAGE_URL: &str = "https://www2.hm.com/en_us/index.html";

/// 默认代理国家
pub const PROXY_DEFAULT_COUNTRY: &str = "US";

/// Apify 代理密码的环境变量
pub const PROXY_PASSWORD_ENV: &str = "APIFY_PROXY_PASSWORD";

/// 子分类页面的路径标记
pub const DEFAULT_SUBCATEGORY_MARKERS: [&str; 9] = [
    "/products",
    "/new-arrivals",
    "/deals",
    "/seasonal-trending",
    "/campaigns/",
    "/concepts",
    "/selected/",
    "/shop-by-room",
    "/sale/",
];

/// 应用程序配置设置
///
/// 包含 Actor 输入、代理和本地存储的配置项
#[derive(Debug, Deserialize, Validate)]
pub struct Settings {
    /// Actor 配置
    #[validate(nested)]
    pub actor: ActorSettings,
    /// 代理配置
    #[validate(nested)]
    pub proxy: ProxySettings,
    /// 存储配置
    pub storage: StorageSettings,
}

/// Actor 配置设置
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ActorSettings {
    /// INPUT.json 路径
    pub input_path: String,
    /// 首页 URL，完全相等时归类为 HOMEPAGE
    #[validate(url)]
    pub homepage_url: String,
    /// 子分类路径标记
    #[serde(default = "default_subcategory_markers")]
    #[validate(length(min = 1))]
    pub subcategory_markers: Vec<String>,
    /// 生成代理 URL 时是否绑定会话
    pub need_session: bool,
}

/// 代理配置设置
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProxySettings {
    /// 代理主机名
    #[validate(length(min = 1))]
    pub hostname: String,
    /// 代理端口
    #[validate(range(min = 1))]
    pub port: u16,
    /// 默认国家代码 (ISO 3166-1 alpha-2)
    #[validate(length(equal = 2))]
    pub default_country: String,
    /// 代理密码，未配置时读取 APIFY_PROXY_PASSWORD
    pub password: Option<String>,
}

/// 存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 请求队列文件 (JSON lines)
    pub request_queue_path: String,
    /// 数据集文件 (JSON lines)
    pub dataset_path: String,
    /// 页面快照目录，未配置时只生成请求队列
    pub pages_dir: Option<String>,
}

fn default_subcategory_markers() -> Vec<String> {
    DEFAULT_SUBCATEGORY_MARKERS
        .iter()
        .map(|m| m.to_string())
        .collect()
}

impl Default for ActorSettings {
    fn default() -> Self {
        Self {
            input_path: "./storage/key_value_stores/default/INPUT.json".to_string(),
            homepage_url: DEFAULT_HOMEPAGE_URL.to_string(),
            subcategory_markers: default_subcategory_markers(),
            need_session: false,
        }
    }
}

impl Default for ProxySettings {
    fn default() -> Self {
        Self {
            hostname: "proxy.apify.com".to_string(),
            port: 8000,
            default_country: PROXY_DEFAULT_COUNTRY.to_string(),
            password: None,
        }
    }
}

impl ProxySettings {
    /// 解析代理密码
    ///
    /// 配置文件中的值优先，其次是环境变量
    pub fn resolve_password(&self) -> Option<String> {
        self.password
            .clone()
            .filter(|p| !p.is_empty())
            .or_else(|| std::env::var(PROXY_PASSWORD_ENV).ok())
            .filter(|p| !p.is_empty())
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从配置文件和环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败或校验失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default actor settings
            .set_default(
                "actor.input_path",
                "./storage/key_value_stores/default/INPUT.json",
            )?
            .set_default("actor.homepage_url", DEFAULT_HOMEPAGE_URL)?
            .set_default("actor.need_session", false)?
            // Default proxy settings
            .set_default("proxy.hostname", "proxy.apify.com")?
            .set_default("proxy.port", 8000)?
            .set_default("proxy.default_country", PROXY_DEFAULT_COUNTRY)?
            // Default storage settings
            .set_default(
                "storage.request_queue_path",
                "./storage/request_queues/default/requests.jsonl",
            )?
            .set_default(
                "storage.dataset_path",
                "./storage/datasets/default/items.jsonl",
            )?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("HM_SCRAPER").separator("__"));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings
            .validate()
            .map_err(|e| ConfigError::Message(e.to_string()))?;
        Ok(settings)
    }
}
