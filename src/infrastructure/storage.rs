// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::domain::models::page::{Item, PageContext};
use crate::domain::models::source::Source;
use crate::domain::repositories::dataset_repository::{DatasetRepository, PageRepository};
use crate::domain::repositories::request_queue::RequestQueue;
use crate::domain::repositories::storage_error::StorageError;

/// JSON lines 追加写入器
///
/// 写入串行化，保证每行完整
struct JsonLinesWriter {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonLinesWriter {
    fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn append<T: Serialize + Sync>(&self, value: &T) -> Result<(), StorageError> {
        let mut line = serde_json::to_vec(value)?;
        line.push(b'\n');

        let _guard = self.lock.lock().await;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await?;
        Ok(())
    }
}

/// 本地请求队列
pub struct LocalRequestQueue {
    writer: JsonLinesWriter,
}

impl LocalRequestQueue {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            writer: JsonLinesWriter::new(path),
        }
    }
}

#[async_trait]
impl RequestQueue for LocalRequestQueue {
    async fn add_request(&self, source: &Source) -> Result<(), StorageError> {
        self.writer.append(source).await
    }
}

/// 本地数据集
pub struct LocalDataset {
    writer: JsonLinesWriter,
}

impl LocalDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            writer: JsonLinesWriter::new(path),
        }
    }
}

#[async_trait]
impl DatasetRepository for LocalDataset {
    async fn push_data(&self, item: &Item) -> Result<(), StorageError> {
        self.writer.append(item).await
    }
}

/// 本地页面快照
///
/// 目录中的每个 `*.json` 文件保存一个 `{url, html, label?}`，按文件名排序读取
pub struct LocalPageStore {
    dir: PathBuf,
}

impl LocalPageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn read_page(path: &Path) -> Result<PageContext, StorageError> {
        let data = fs::read(path).await?;
        serde_json::from_slice(&data).map_err(|e| {
            StorageError::Other(format!("invalid page snapshot {}: {}", path.display(), e))
        })
    }
}

#[async_trait]
impl PageRepository for LocalPageStore {
    async fn list_pages(&self) -> Result<Vec<PageContext>, StorageError> {
        let mut paths = Vec::new();
        let mut entries = fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut pages = Vec::with_capacity(paths.len());
        for path in paths {
            pages.push(Self::read_page(&path).await?);
        }
        Ok(pages)
    }
}
