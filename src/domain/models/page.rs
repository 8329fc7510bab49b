// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::models::source::Label;

/// 抓取条目
///
/// 页面提取出的任意 JSON 对象
pub type Item = Map<String, Value>;

/// 页面上下文
///
/// 传递给输出扩展转换的页面句柄，持有原始 HTML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    pub url: String,
    pub html: String,
    #[serde(default)]
    pub label: Option<Label>,
}

impl PageContext {
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    /// 解析后的 HTML 文档
    ///
    /// `Html` 不是 `Send`，不要跨 `.await` 持有
    pub fn document(&self) -> Html {
        Html::parse_document(&self.html)
    }

    /// 页面标题
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        let document = self.document();
        let title = document
            .select(&selector)
            .next()
            .map(|e| e.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty());
        title
    }

    /// 构造基础条目
    pub fn base_item(&self) -> Item {
        let mut item = Item::new();
        item.insert("url".to_string(), Value::String(self.url.clone()));
        if let Some(label) = self.label {
            item.insert("label".to_string(), Value::String(label.to_string()));
        }
        item.insert(
            "title".to_string(),
            self.title().map(Value::String).unwrap_or(Value::Null),
        );
        item
    }
}
