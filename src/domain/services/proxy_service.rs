// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use thiserror::Error;

use crate::domain::models::input::ProxyConfiguration;

/// 代理错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProxyError {
    #[error("Apify Proxy password must be provided via APIFY_PROXY_PASSWORD")]
    MissingPassword,

    #[error("Invalid proxy session id: {0}")]
    InvalidSession(String),

    #[error("Invalid proxy group: {0}")]
    InvalidGroup(String),

    #[error("Invalid proxy URL: {0}")]
    InvalidUrl(String),
}

/// 构造代理 URL 所需的参数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyUrlOptions {
    pub password: Option<String>,
    pub groups: Vec<String>,
    pub session: Option<String>,
    pub country: Option<String>,
}

/// 代理 URL 构造器
///
/// 外部协作者，负责把分组、会话和国家编码成代理地址
pub trait ProxyUrlBuilder: Send + Sync {
    fn build(&self, options: &ProxyUrlOptions) -> Result<String, ProxyError>;
}

/// 代理 URL 解析服务
pub struct ProxyResolver<B> {
    builder: B,
    password: Option<String>,
    default_country: String,
    last_session: AtomicI64,
}

impl<B: ProxyUrlBuilder> ProxyResolver<B> {
    pub fn new(builder: B, password: Option<String>, default_country: impl Into<String>) -> Self {
        Self {
            builder,
            password,
            default_country: default_country.into(),
            last_session: AtomicI64::new(0),
        }
    }

    /// 获取代理 URL 列表
    ///
    /// # 参数
    ///
    /// * `config` - 代理配置
    /// * `need_session` - 是否绑定会话
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(urls))` - 自定义代理原样返回，否则返回一个 Apify 代理地址
    /// * `Ok(None)` - 不使用代理
    /// * `Err(ProxyError)` - 代理地址构造失败
    pub fn get_proxy_urls(
        &self,
        config: &ProxyConfiguration,
        need_session: bool,
    ) -> Result<Option<Vec<String>>, ProxyError> {
        if !config.proxy_urls.is_empty() {
            return Ok(Some(config.proxy_urls.clone()));
        }

        if !config.use_apify_proxy {
            return Ok(None);
        }

        let options = ProxyUrlOptions {
            password: self.password.clone(),
            groups: config.apify_proxy_groups.clone(),
            session: need_session.then(|| self.next_session()),
            country: Some(self.default_country.clone()),
        };

        let proxy_url = self.builder.build(&options)?;
        Ok(Some(vec![proxy_url]))
    }

    /// 基于当前毫秒时间戳生成会话 ID
    ///
    /// 同一毫秒内的重复调用会顺延，保证每次得到不同的会话
    fn next_session(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last_session.load(Ordering::Relaxed);
        loop {
            let next = if now > last { now } else { last + 1 };
            match self.last_session.compare_exchange_weak(
                last,
                next,
                Ordering::SeqCst,
                Ordering::Relaxed,
            ) {
                Ok(_) => return next.to_string(),
                Err(actual) => last = actual,
            }
        }
    }
}
