// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

use crate::config::settings::{ActorSettings, DEFAULT_HOMEPAGE_URL, DEFAULT_SUBCATEGORY_MARKERS};
use crate::domain::models::input::StartUrl;
use crate::domain::models::source::{Label, Source};
use crate::utils::logger::ActorLogger;

static PRODUCT_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{8,12}").unwrap());
static SCHEME: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://").unwrap());

/// 顶级分类页允许的最大路径分隔符数量
const MAINCAT_MAX_SEPARATORS: usize = 2;

/// URL 分类服务
///
/// 按固定优先级把种子 URL 归类为首页、商品页、子分类页或顶级分类页，
/// 其余 URL 会被丢弃并输出警告。
pub struct UrlClassifier {
    homepage_url: String,
    subcategory_markers: Vec<String>,
    logger: Arc<dyn ActorLogger>,
}

impl UrlClassifier {
    pub fn new(
        homepage_url: impl Into<String>,
        subcategory_markers: Vec<String>,
        logger: Arc<dyn ActorLogger>,
    ) -> Self {
        Self {
            homepage_url: homepage_url.into(),
            subcategory_markers,
            logger,
        }
    }

    /// 使用 H&M 美国站的默认规则
    pub fn with_defaults(logger: Arc<dyn ActorLogger>) -> Self {
        Self::new(
            DEFAULT_HOMEPAGE_URL,
            DEFAULT_SUBCATEGORY_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            logger,
        )
    }

    pub fn from_settings(settings: &ActorSettings, logger: Arc<dyn ActorLogger>) -> Self {
        Self::new(
            settings.homepage_url.clone(),
            settings.subcategory_markers.clone(),
            logger,
        )
    }

    /// 对单个 URL 分类
    ///
    /// 不支持的 URL 返回 `None`
    pub fn classify(&self, url: &str) -> Option<Label> {
        if url == self.homepage_url {
            return Some(Label::Homepage);
        }

        if url.contains("productpage") || PRODUCT_ID.is_match(url) {
            return Some(Label::Product);
        }

        if self.subcategory_markers.iter().any(|m| url.contains(m.as_str())) {
            return Some(Label::Subcat);
        }

        // No separator at all counts as zero
        let stripped = SCHEME.replacen(url, 1, "");
        if stripped.matches('/').count() <= MAINCAT_MAX_SEPARATORS {
            return Some(Label::Maincat);
        }

        None
    }

    /// 为种子 URL 创建爬取源
    ///
    /// 保持输入顺序，不支持的 URL 被丢弃
    pub fn create_sources(&self, start_urls: &[StartUrl]) -> Vec<Source> {
        let mut sources = Vec::with_capacity(start_urls.len());

        for StartUrl { url } in start_urls {
            match self.classify(url) {
                Some(label) => {
                    self.logger.info(&format!("{} {}", label, url));
                    sources.push(Source::new(url.clone(), label));
                }
                None => {
                    self.logger.warning(&format!(
                        "The following url has not been added to the queue: {}. \
                         It may be due to unsupported or incorrect url. For more information, \
                         have a look at the actor documentation, \"input\" section.",
                        url
                    ));
                }
            }
        }

        sources
    }
}
