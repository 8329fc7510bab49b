// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Actor 运行集成测试
///
/// 使用本地页面快照和 JSON lines 数据集验证完整运行流程

#[cfg(test)]
mod tests {
    use super::super::helpers::create_test_app;
    use hm_scraper::domain::models::source::Label;
    use hm_scraper::domain::repositories::dataset_repository::PageRepository;
    use hm_scraper::utils::errors::ActorError;
    use hm_scraper::utils::logger::LogLevel;
    use hm_scraper::utils::shutdown::ExitReason;
    use serde_json::{json, Value};
    use std::time::Duration;

    const PRODUCT_HTML: &str = r#"
        <html>
            <head><title>Cotton T-shirt</title></head>
            <body>
                <h1 class="product-item-headline">Cotton T-shirt</h1>
                <span class="price-value">$9.99</span>
            </body>
        </html>
    "#;

    #[tokio::test]
    async fn test_prepare_classifies_and_builds_session_proxy() {
        let app = create_test_app();
        let input = json!({
            "startUrls": [
                { "url": "https://www2.hm.com/en_us/index.html" },
                { "url": "https://www2.hm.com/en_us/productpage.0970818001.html" },
                { "url": "https://www2.hm.com/en_us/men/products/view-all.html" },
                { "url": "https://www2.hm.com/en_us/men" },
                { "url": "https://www2.hm.com/en_us/men/shirts/blue/slimfit" }
            ],
            "proxyConfiguration": {
                "useApifyProxy": true,
                "apifyProxyGroups": ["RESIDENTIAL"]
            }
        });

        let prepared = app.use_case.prepare(Some(&input)).await.unwrap();

        let labels: Vec<Label> = app.queue.sources().iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec![Label::Homepage, Label::Product, Label::Subcat, Label::Maincat]
        );
        assert_eq!(prepared.sources.len(), 4);

        let proxy_urls = prepared.proxy_urls.expect("proxy should be configured");
        assert_eq!(proxy_urls.len(), 1);
        assert!(proxy_urls[0].starts_with("http://groups-RESIDENTIAL,session-"));
        assert!(proxy_urls[0].ends_with(",country-US:test-password@proxy.apify.com:8000"));

        let warnings = app.logger.messages(LogLevel::Warning);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("https://www2.hm.com/en_us/men/shirts/blue/slimfit"));
    }

    #[tokio::test]
    async fn test_custom_proxy_urls_are_used_as_is() {
        let app = create_test_app();
        let input = json!({
            "startUrls": [{ "url": "https://www2.hm.com/en_us/index.html" }],
            "proxyConfiguration": { "useApifyProxy": true, "proxyUrls": ["http://a"] }
        });

        let prepared = app.use_case.prepare(Some(&input)).await.unwrap();
        assert_eq!(prepared.proxy_urls, Some(vec!["http://a".to_string()]));
    }

    #[tokio::test]
    async fn test_full_run_with_selector_rules() {
        let app = create_test_app();
        app.write_page(
            "001.json",
            "https://www2.hm.com/en_us/productpage.0970818001.html",
            PRODUCT_HTML,
        );
        app.write_page("002.json", "https://www2.hm.com/en_us/men", "<title>Men</title>");

        let input = json!({
            "startUrls": [{ "url": "https://www2.hm.com/en_us/index.html" }],
            "extendOutputFunction": r#"{"rules": {"price": {"selector": ".price-value"}, "title": {"selector": "h1"}}}"#
        });

        let summary = app
            .use_case
            .run(Some(&input), Some(&app.page_store as &dyn PageRepository))
            .await
            .unwrap();

        assert_eq!(summary.sources_enqueued, 1);
        assert_eq!(summary.pages_processed, 2);
        assert_eq!(summary.items_pushed, 2);
        assert_eq!(summary.exit_code(), 0);

        let items = app.dataset_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["label"], "PRODUCT");
        assert_eq!(items[0]["price"], "$9.99");
        assert_eq!(items[0]["title"], "Cotton T-shirt");
        assert_eq!(items[1]["label"], "MAINCAT");
        assert_eq!(items[1]["price"], Value::Null);
        // transform result overrides the base title
        assert_eq!(items[1]["title"], Value::Null);
    }

    #[tokio::test]
    async fn test_max_items_halts_with_success() {
        let app = create_test_app();
        for i in 0..5 {
            app.write_page(
                &format!("{:03}.json", i),
                &format!("https://www2.hm.com/en_us/productpage.09708180{:02}.html", i),
                PRODUCT_HTML,
            );
        }

        let input = json!({
            "startUrls": [{ "url": "https://www2.hm.com/en_us/index.html" }],
            "maxItems": 3
        });

        let summary = app
            .use_case
            .run(Some(&input), Some(&app.page_store as &dyn PageRepository))
            .await
            .unwrap();

        assert_eq!(summary.items_pushed, 3);
        assert_eq!(summary.exit_reason, Some(ExitReason::Success));
        assert_eq!(app.dataset_items().len(), 3);
        assert!(app
            .logger
            .messages(LogLevel::Info)
            .contains(&"Crawler Finished.".to_string()));
    }

    #[tokio::test]
    async fn test_non_object_result_fails_the_run() {
        let app = create_test_app();
        app.write_page("001.json", "https://www2.hm.com/en_us/men", PRODUCT_HTML);
        app.write_page("002.json", "https://www2.hm.com/en_us/women", PRODUCT_HTML);

        let input = json!({
            "startUrls": [{ "url": "https://www2.hm.com/en_us/index.html" }],
            "extendOutputFunction": "returns_array"
        });

        let summary = app
            .use_case
            .run(Some(&input), Some(&app.page_store as &dyn PageRepository))
            .await
            .unwrap();

        assert_eq!(summary.exit_reason, Some(ExitReason::Failure));
        assert_eq!(summary.exit_code(), 1);
        assert_eq!(summary.items_pushed, 0);
        assert!(app.dataset_items().is_empty());
        assert_eq!(app.logger.messages(LogLevel::Exception).len(), 1);
    }

    #[tokio::test]
    async fn test_crashing_transform_pushes_default_output() {
        let app = create_test_app();
        app.write_page("001.json", "https://www2.hm.com/en_us/men", "<title>Men</title>");

        let input = json!({
            "startUrls": [{ "url": "https://www2.hm.com/en_us/index.html" }],
            "extendOutputFunction": "crashes"
        });

        let summary = app
            .use_case
            .run(Some(&input), Some(&app.page_store as &dyn PageRepository))
            .await
            .unwrap();

        assert_eq!(summary.exit_code(), 0);
        let items = app.dataset_items();
        assert_eq!(
            items,
            vec![json!({
                "url": "https://www2.hm.com/en_us/men",
                "label": "MAINCAT",
                "title": "Men"
            })]
        );

        let errors = app.logger.messages(LogLevel::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("cannot read price of https://www2.hm.com/en_us/men"));
    }

    #[tokio::test]
    async fn test_shutdown_abandons_in_flight_transform() {
        let app = create_test_app();
        app.write_page("001.json", "https://www2.hm.com/en_us/men", PRODUCT_HTML);

        let input = json!({
            "startUrls": [{ "url": "https://www2.hm.com/en_us/index.html" }],
            "extendOutputFunction": "stalls"
        });

        let shutdown = app.shutdown.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            shutdown.trigger(ExitReason::Failure);
        });

        let summary = tokio::time::timeout(
            Duration::from_secs(5),
            app.use_case
                .run(Some(&input), Some(&app.page_store as &dyn PageRepository)),
        )
        .await
        .expect("run should stop after shutdown")
        .unwrap();

        assert_eq!(summary.items_pushed, 0);
        assert_eq!(summary.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_invalid_input_is_rejected_before_queueing() {
        let app = create_test_app();
        let input = json!({
            "startUrls": [{ "url": "https://www2.hm.com/en_us/index.html" }],
            "maxItems": "10"
        });

        let result = app.use_case.run(Some(&input), None).await;

        assert!(matches!(result, Err(ActorError::Input(_))));
        assert!(app.queue.sources().is_empty());
    }

    #[tokio::test]
    async fn test_missing_input_is_rejected() {
        let app = create_test_app();
        let result = app.use_case.run(None, None).await;

        match result {
            Err(err) => assert_eq!(err.to_string(), "输入错误: INPUT is missing."),
            Ok(_) => panic!("missing input should fail"),
        }
    }
}
