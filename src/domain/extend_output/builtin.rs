// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use scraper::{Html, Selector};
use serde_json::{json, Value};

use super::{ExtendOutputTransform, TransformError};
use crate::domain::models::page::PageContext;

/// 不添加任何字段
pub struct EmptyTransform;

#[async_trait]
impl ExtendOutputTransform for EmptyTransform {
    fn name(&self) -> &str {
        "empty"
    }

    async fn extend(&self, _page: &PageContext) -> Result<Value, TransformError> {
        Ok(json!({}))
    }
}

/// 页面元数据
///
/// 提取 `<title>`、meta description 和 canonical 链接
pub struct PageMetadataTransform;

impl PageMetadataTransform {
    fn first_attr(document: &Html, selector: &str, attr: &str) -> Result<Value, TransformError> {
        let selector = Selector::parse(selector)
            .map_err(|e| TransformError::new(format!("bad selector {}: {}", selector, e)))?;
        Ok(document
            .select(&selector)
            .next()
            .and_then(|e| e.value().attr(attr))
            .map(|v| Value::String(v.trim().to_string()))
            .unwrap_or(Value::Null))
    }
}

#[async_trait]
impl ExtendOutputTransform for PageMetadataTransform {
    fn name(&self) -> &str {
        "page_metadata"
    }

    async fn extend(&self, page: &PageContext) -> Result<Value, TransformError> {
        let document = page.document();
        let description =
            Self::first_attr(&document, r#"meta[name="description"]"#, "content")?;
        let canonical_url = Self::first_attr(&document, r#"link[rel="canonical"]"#, "href")?;

        Ok(json!({
            "pageTitle": page.title(),
            "description": description,
            "canonicalUrl": canonical_url,
        }))
    }
}
