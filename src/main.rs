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

use anyhow::Context;
use hm_scraper::application::use_cases::actor_run::ActorRunUseCase;
use hm_scraper::config::settings::Settings;
use hm_scraper::domain::repositories::dataset_repository::PageRepository;
use hm_scraper::infrastructure::storage::{LocalDataset, LocalPageStore, LocalRequestQueue};
use hm_scraper::utils::logger::{ActorLogger, TracingLogger};
use hm_scraper::utils::shutdown::{ExitReason, Shutdown};
use hm_scraper::utils::telemetry;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并执行一次 Actor 运行
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting hm-scraper...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Read INPUT
    let raw_input = match tokio::fs::read(&settings.actor.input_path).await {
        Ok(data) => Some(
            serde_json::from_slice::<serde_json::Value>(&data)
                .with_context(|| format!("INPUT at {} is not valid JSON", settings.actor.input_path))?,
        ),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => return Err(err).context("Failed to read INPUT"),
    };

    // 4. Wire collaborators
    let shutdown = Shutdown::new();
    let logger: Arc<dyn ActorLogger> = Arc::new(TracingLogger);
    let request_queue = Arc::new(LocalRequestQueue::new(&settings.storage.request_queue_path));
    let dataset = Arc::new(LocalDataset::new(&settings.storage.dataset_path));
    let page_store = settings.storage.pages_dir.as_ref().map(|dir| LocalPageStore::new(dir));

    let use_case = ActorRunUseCase::from_settings(
        &settings,
        request_queue,
        dataset,
        shutdown.clone(),
        logger,
    );

    // Ctrl-C drains like any other shutdown
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Received shutdown signal");
            signal_shutdown.trigger(ExitReason::Failure);
        }
    });

    // 5. Run
    let summary = use_case
        .run(
            raw_input.as_ref(),
            page_store.as_ref().map(|s| s as &dyn PageRepository),
        )
        .await?;

    info!(
        sources = summary.sources_enqueued,
        pages = summary.pages_processed,
        items = summary.items_pushed,
        "Crawler finished"
    );

    Ok(ExitCode::from(summary.exit_code()))
}
