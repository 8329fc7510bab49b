// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置设置测试模块
///
/// 测试配置加载和默认值

#[cfg(test)]
mod tests {
    use hm_scraper::config::settings::{Settings, DEFAULT_HOMEPAGE_URL};

    #[test]
    fn test_config_loading_with_defaults() {
        match Settings::new() {
            Ok(settings) => {
                println!("✓ Configuration loaded successfully");
                println!("  Input path: {}", settings.actor.input_path);
                println!(
                    "  Proxy: {}:{}",
                    settings.proxy.hostname, settings.proxy.port
                );

                assert!(!settings.actor.input_path.is_empty());
                assert!(!settings.storage.dataset_path.is_empty());
                assert!(!settings.storage.request_queue_path.is_empty());
                assert_eq!(settings.proxy.default_country.len(), 2);
                assert!(!settings.actor.subcategory_markers.is_empty());
            }
            Err(e) => {
                panic!("✗ Failed to load configuration: {}", e);
            }
        }
    }

    #[test]
    fn test_default_homepage_constant() {
        assert_eq!(DEFAULT_HOMEPAGE_URL, "https://www2.hm.com/en_us/index.html");
    }
}
