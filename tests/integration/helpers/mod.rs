// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use hm_scraper::application::use_cases::actor_run::ActorRunUseCase;
use hm_scraper::config::settings::{ActorSettings, ProxySettings};
use hm_scraper::domain::extend_output::TransformRegistry;
use hm_scraper::domain::services::proxy_service::ProxyResolver;
use hm_scraper::domain::services::url_classifier::UrlClassifier;
use hm_scraper::infrastructure::proxy::ApifyProxyUrlBuilder;
use hm_scraper::infrastructure::storage::{LocalDataset, LocalPageStore};
use hm_scraper::utils::logger::{ActorLogger, MemoryLogger};
use hm_scraper::utils::shutdown::Shutdown;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub mod mock_queue;

use mock_queue::{ArrayTransform, CrashingTransform, MockRequestQueue, StalledTransform};

#[allow(dead_code)]
pub struct TestApp {
    pub use_case: ActorRunUseCase<ApifyProxyUrlBuilder>,
    pub queue: Arc<MockRequestQueue>,
    pub logger: Arc<MemoryLogger>,
    pub shutdown: Shutdown,
    pub page_store: LocalPageStore,
    pub dataset_path: PathBuf,
    pub pages_dir: PathBuf,
    // Keep the directory alive
    pub dir: TempDir,
}

impl TestApp {
    /// 写入一个页面快照
    pub fn write_page(&self, name: &str, url: &str, html: &str) {
        let snapshot = json!({ "url": url, "html": html });
        std::fs::write(self.pages_dir.join(name), snapshot.to_string())
            .expect("Failed to write page snapshot");
    }

    /// 读取数据集中的所有条目
    pub fn dataset_items(&self) -> Vec<Value> {
        match std::fs::read_to_string(&self.dataset_path) {
            Ok(content) => content
                .lines()
                .map(|l| serde_json::from_str(l).expect("Dataset line is not JSON"))
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}

pub fn create_test_app() -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let pages_dir = dir.path().join("pages");
    std::fs::create_dir_all(&pages_dir).expect("Failed to create pages dir");
    let dataset_path = dir.path().join("datasets/default/items.jsonl");

    let logger = Arc::new(MemoryLogger::new());
    let actor_logger: Arc<dyn ActorLogger> = logger.clone();
    let shutdown = Shutdown::new();
    let queue = Arc::new(MockRequestQueue::default());

    let mut registry = TransformRegistry::with_builtins();
    registry.register(Arc::new(ArrayTransform));
    registry.register(Arc::new(CrashingTransform));
    registry.register(Arc::new(StalledTransform));

    let proxy_settings = ProxySettings::default();
    let use_case = ActorRunUseCase::new(
        UrlClassifier::from_settings(&ActorSettings::default(), actor_logger.clone()),
        ProxyResolver::new(
            ApifyProxyUrlBuilder::from_settings(&proxy_settings),
            Some("test-password".to_string()),
            proxy_settings.default_country.clone(),
        ),
        registry,
        queue.clone(),
        Arc::new(LocalDataset::new(&dataset_path)),
        shutdown.clone(),
        actor_logger,
        true,
    );

    TestApp {
        use_case,
        queue,
        logger,
        shutdown,
        page_store: LocalPageStore::new(&pages_dir),
        dataset_path,
        pages_dir,
        dir,
    }
}
