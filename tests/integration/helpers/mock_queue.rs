// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use hm_scraper::domain::extend_output::{ExtendOutputTransform, TransformError};
use hm_scraper::domain::models::page::PageContext;
use hm_scraper::domain::models::source::Source;
use hm_scraper::domain::repositories::request_queue::RequestQueue;
use hm_scraper::domain::repositories::storage_error::StorageError;
use serde_json::{json, Value};
use std::sync::Mutex;
use std::time::Duration;

/// 内存请求队列
#[derive(Default)]
pub struct MockRequestQueue {
    sources: Mutex<Vec<Source>>,
}

impl MockRequestQueue {
    pub fn sources(&self) -> Vec<Source> {
        self.sources.lock().unwrap().clone()
    }
}

#[async_trait]
impl RequestQueue for MockRequestQueue {
    async fn add_request(&self, source: &Source) -> Result<(), StorageError> {
        self.sources.lock().unwrap().push(source.clone());
        Ok(())
    }
}

/// 返回数组的转换，用于触发致命错误
pub struct ArrayTransform;

#[async_trait]
impl ExtendOutputTransform for ArrayTransform {
    fn name(&self) -> &str {
        "returns_array"
    }

    async fn extend(&self, _page: &PageContext) -> Result<Value, TransformError> {
        Ok(json!(["not", "an", "object"]))
    }
}

/// 总是失败的转换
pub struct CrashingTransform;

#[async_trait]
impl ExtendOutputTransform for CrashingTransform {
    fn name(&self) -> &str {
        "crashes"
    }

    async fn extend(&self, page: &PageContext) -> Result<Value, TransformError> {
        Err(TransformError::new(format!("cannot read price of {}", page.url)))
    }
}

/// 永远不返回的转换，用于验证停止信号会放弃进行中的工作
pub struct StalledTransform;

#[async_trait]
impl ExtendOutputTransform for StalledTransform {
    fn name(&self) -> &str {
        "stalls"
    }

    async fn extend(&self, _page: &PageContext) -> Result<Value, TransformError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(json!({}))
    }
}
