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

use serde_json::Value;
use std::sync::Arc;

use crate::{
    config::settings::Settings,
    domain::{
        extend_output::{ExtendOutputTransform, TransformRegistry},
        models::{input::ActorInput, page::PageContext, source::Source},
        repositories::{
            dataset_repository::{DatasetRepository, PageRepository},
            request_queue::RequestQueue,
        },
        services::{
            input_validator::parse_input,
            item_limiter::ItemLimiter,
            output_extender::OutputExtender,
            proxy_service::{ProxyResolver, ProxyUrlBuilder},
            url_classifier::UrlClassifier,
        },
    },
    infrastructure::proxy::ApifyProxyUrlBuilder,
    utils::{
        errors::ActorError,
        logger::ActorLogger,
        shutdown::{ExitReason, Shutdown},
    },
};

/// 启动阶段的结果
pub struct PreparedRun {
    pub input: ActorInput,
    pub sources: Vec<Source>,
    pub proxy_urls: Option<Vec<String>>,
    pub transform: Option<Arc<dyn ExtendOutputTransform>>,
}

/// 运行摘要
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sources_enqueued: usize,
    pub pages_processed: usize,
    pub items_pushed: u64,
    pub exit_reason: Option<ExitReason>,
}

impl RunSummary {
    /// 进程退出码，未触发停止时为 0
    pub fn exit_code(&self) -> u8 {
        self.exit_reason.map(ExitReason::code).unwrap_or(0)
    }
}

/// Actor 运行用例
///
/// 启动阶段：校验输入、加载输出扩展转换、解析代理、分类种子 URL 并写入请求队列。
/// 处理阶段：逐页构造条目、应用转换、写入数据集，并在达到上限或出现致命错误时停止。
pub struct ActorRunUseCase<B> {
    classifier: UrlClassifier,
    proxy_resolver: ProxyResolver<B>,
    registry: TransformRegistry,
    request_queue: Arc<dyn RequestQueue>,
    dataset: Arc<dyn DatasetRepository>,
    shutdown: Shutdown,
    logger: Arc<dyn ActorLogger>,
    need_session: bool,
}

impl ActorRunUseCase<ApifyProxyUrlBuilder> {
    /// 根据配置创建用例，使用 Apify 代理和内置转换
    pub fn from_settings(
        settings: &Settings,
        request_queue: Arc<dyn RequestQueue>,
        dataset: Arc<dyn DatasetRepository>,
        shutdown: Shutdown,
        logger: Arc<dyn ActorLogger>,
    ) -> Self {
        let classifier = UrlClassifier::from_settings(&settings.actor, logger.clone());
        let proxy_resolver = ProxyResolver::new(
            ApifyProxyUrlBuilder::from_settings(&settings.proxy),
            settings.proxy.resolve_password(),
            settings.proxy.default_country.clone(),
        );

        Self::new(
            classifier,
            proxy_resolver,
            TransformRegistry::with_builtins(),
            request_queue,
            dataset,
            shutdown,
            logger,
            settings.actor.need_session,
        )
    }
}

impl<B: ProxyUrlBuilder> ActorRunUseCase<B> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        classifier: UrlClassifier,
        proxy_resolver: ProxyResolver<B>,
        registry: TransformRegistry,
        request_queue: Arc<dyn RequestQueue>,
        dataset: Arc<dyn DatasetRepository>,
        shutdown: Shutdown,
        logger: Arc<dyn ActorLogger>,
        need_session: bool,
    ) -> Self {
        Self {
            classifier,
            proxy_resolver,
            registry,
            request_queue,
            dataset,
            shutdown,
            logger,
            need_session,
        }
    }

    pub fn shutdown(&self) -> &Shutdown {
        &self.shutdown
    }

    /// 启动阶段
    ///
    /// 任何一步失败都会中止启动
    pub async fn prepare(&self, raw_input: Option<&Value>) -> Result<PreparedRun, ActorError> {
        let input = parse_input(raw_input)?;

        let transform = input
            .extend_output_function
            .as_deref()
            .map(|source| self.registry.load(source))
            .transpose()?;

        let proxy_urls = match &input.proxy_configuration {
            Some(config) => self
                .proxy_resolver
                .get_proxy_urls(config, self.need_session)?,
            None => None,
        };
        match &proxy_urls {
            Some(urls) => self
                .logger
                .info(&format!("Using {} proxy URL(s)", urls.len())),
            None => self.logger.info("Running without proxy"),
        }

        let sources = self.classifier.create_sources(&input.start_urls);
        for source in &sources {
            self.request_queue.add_request(source).await?;
        }
        self.logger.info(&format!(
            "{} of {} start URLs added to the queue",
            sources.len(),
            input.start_urls.len()
        ));

        Ok(PreparedRun {
            input,
            sources,
            proxy_urls,
            transform,
        })
    }

    /// 处理阶段
    ///
    /// 停止信号触发后不再处理剩余页面，进行中的转换会被放弃
    pub async fn process_pages(
        &self,
        run: &PreparedRun,
        pages: Vec<PageContext>,
    ) -> Result<RunSummary, ActorError> {
        let limiter = ItemLimiter::new(
            run.input.max_items,
            self.shutdown.clone(),
            self.logger.clone(),
        );
        let extender = OutputExtender::new(self.shutdown.clone(), self.logger.clone());

        let mut summary = RunSummary {
            sources_enqueued: run.sources.len(),
            ..RunSummary::default()
        };

        for page in pages {
            if self.shutdown.is_triggered() || limiter.check(summary.items_pushed) {
                break;
            }

            let page = match page.label {
                Some(_) => page,
                None => match self.classifier.classify(&page.url) {
                    Some(label) => page.with_label(label),
                    None => page,
                },
            };
            summary.pages_processed += 1;

            let base = page.base_item();
            let item = match &run.transform {
                Some(transform) => {
                    tokio::select! {
                        biased;
                        _ = self.shutdown.cancelled() => break,
                        result = extender.apply(&page, transform.as_ref(), base) => match result {
                            Ok(item) => item,
                            Err(_) => break,
                        },
                    }
                }
                None => base,
            };

            self.dataset.push_data(&item).await?;
            summary.items_pushed += 1;
        }

        summary.exit_reason = self.shutdown.reason();
        Ok(summary)
    }

    /// 完整运行
    ///
    /// 没有页面来源时只执行启动阶段
    pub async fn run(
        &self,
        raw_input: Option<&Value>,
        pages: Option<&dyn PageRepository>,
    ) -> Result<RunSummary, ActorError> {
        let prepared = self.prepare(raw_input).await?;

        let pages = match pages {
            Some(repository) => repository.list_pages().await?,
            None => Vec::new(),
        };

        let summary = self.process_pages(&prepared, pages).await?;
        self.logger.info(&format!(
            "Run finished: {} item(s) pushed from {} page(s), exit code {}",
            summary.items_pushed,
            summary.pages_processed,
            summary.exit_code()
        ));
        Ok(summary)
    }
}
