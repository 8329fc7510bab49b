// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use hm_scraper::utils::logger::{ActorLogger, TracingLogger};
    use hm_scraper::utils::telemetry;

    #[test]
    fn test_telemetry_initialization() {
        // 初始化遥测系统，重复调用不应 panic
        telemetry::init_telemetry();
        telemetry::init_telemetry();

        // 通过注入的日志能力输出各级别日志
        let logger = TracingLogger;
        logger.info("This is an info message");
        logger.warning("This is a warning message");
        logger.error("This is an error message");
        logger.exception(&std::io::Error::other("Test error"));

        tracing::info!(
            url = "https://www2.hm.com/en_us/index.html",
            label = "HOMEPAGE",
            "Source added"
        );
    }
}
