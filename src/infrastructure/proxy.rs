// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::config::settings::ProxySettings;
use crate::domain::services::proxy_service::{ProxyError, ProxyUrlBuilder, ProxyUrlOptions};

static SESSION_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w._~]+$").unwrap());
static GROUP_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w\-]+$").unwrap());

const MAX_SESSION_LENGTH: usize = 50;

/// Apify 代理 URL 构造器
///
/// 生成 `http://<username>:<password>@<hostname>:<port>`，
/// username 由 `groups-A+B`、`session-ID`、`country-CC` 以逗号连接，都没有时为 `auto`
#[derive(Debug, Clone)]
pub struct ApifyProxyUrlBuilder {
    hostname: String,
    port: u16,
}

impl ApifyProxyUrlBuilder {
    pub fn new(hostname: impl Into<String>, port: u16) -> Self {
        Self {
            hostname: hostname.into(),
            port,
        }
    }

    pub fn from_settings(settings: &ProxySettings) -> Self {
        Self::new(settings.hostname.clone(), settings.port)
    }

    fn username(options: &ProxyUrlOptions) -> Result<String, ProxyError> {
        let mut parts = Vec::new();

        if !options.groups.is_empty() {
            if let Some(bad) = options.groups.iter().find(|g| !GROUP_NAME.is_match(g)) {
                return Err(ProxyError::InvalidGroup(bad.clone()));
            }
            parts.push(format!("groups-{}", options.groups.join("+")));
        }

        if let Some(session) = &options.session {
            if session.len() > MAX_SESSION_LENGTH || !SESSION_ID.is_match(session) {
                return Err(ProxyError::InvalidSession(session.clone()));
            }
            parts.push(format!("session-{}", session));
        }

        if let Some(country) = options.country.as_deref().filter(|c| !c.is_empty()) {
            parts.push(format!("country-{}", country));
        }

        if parts.is_empty() {
            Ok("auto".to_string())
        } else {
            Ok(parts.join(","))
        }
    }
}

impl ProxyUrlBuilder for ApifyProxyUrlBuilder {
    fn build(&self, options: &ProxyUrlOptions) -> Result<String, ProxyError> {
        let password = options
            .password
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or(ProxyError::MissingPassword)?;

        let username = Self::username(options)?;
        let proxy_url = format!(
            "http://{}:{}@{}:{}",
            username, password, self.hostname, self.port
        );

        // Reject hostnames or passwords that don't form a valid URL
        Url::parse(&proxy_url).map_err(|e| ProxyError::InvalidUrl(e.to_string()))?;

        Ok(proxy_url)
    }
}
