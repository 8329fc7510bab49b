// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::{ExtendOutputTransform, TransformError, TransformLoadError};
use crate::domain::models::page::PageContext;

/// 选择器规则
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SelectorRule {
    pub selector: String,
    /// 为空时提取文本
    #[serde(default)]
    pub attr: Option<String>,
    #[serde(default)]
    pub is_array: bool,
}

/// 规则集合
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectorRuleSet {
    pub rules: BTreeMap<String, SelectorRule>,
}

struct CompiledRule {
    field: String,
    selector: Selector,
    attr: Option<String>,
    is_array: bool,
}

/// 基于 CSS 选择器规则的转换
///
/// 每条规则产出一个字段：单值规则取第一个匹配元素，
/// 没有匹配时为 null；数组规则收集所有非空匹配。
pub struct SelectorRulesTransform {
    rules: Vec<CompiledRule>,
}

impl SelectorRulesTransform {
    /// 编译规则集，选择器无效时返回错误
    pub fn compile(rule_set: SelectorRuleSet) -> Result<Self, TransformLoadError> {
        let mut rules = Vec::with_capacity(rule_set.rules.len());
        for (field, rule) in rule_set.rules {
            let selector = Selector::parse(&rule.selector).map_err(|e| {
                TransformLoadError::InvalidSource(format!(
                    "invalid selector {:?} for field {}: {}",
                    rule.selector, field, e
                ))
            })?;
            rules.push(CompiledRule {
                field,
                selector,
                attr: rule.attr,
                is_array: rule.is_array,
            });
        }
        Ok(Self { rules })
    }

    fn element_value(element: ElementRef<'_>, attr: Option<&str>) -> Option<String> {
        match attr {
            Some(attr) => element.value().attr(attr).map(|s| s.to_string()),
            None => Some(
                element
                    .text()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .trim()
                    .to_string(),
            ),
        }
    }

    fn extract(&self, document: &Html) -> Map<String, Value> {
        let mut result = Map::new();

        for rule in &self.rules {
            let attr = rule.attr.as_deref();
            let value = if rule.is_array {
                let values = document
                    .select(&rule.selector)
                    .filter_map(|e| Self::element_value(e, attr))
                    .filter(|v| !v.is_empty())
                    .map(Value::String)
                    .collect();
                Value::Array(values)
            } else {
                document
                    .select(&rule.selector)
                    .next()
                    .and_then(|e| Self::element_value(e, attr))
                    .map(Value::String)
                    .unwrap_or(Value::Null)
            };
            result.insert(rule.field.clone(), value);
        }

        result
    }
}

#[async_trait]
impl ExtendOutputTransform for SelectorRulesTransform {
    fn name(&self) -> &str {
        "selector_rules"
    }

    async fn extend(&self, page: &PageContext) -> Result<Value, TransformError> {
        let document = page.document();
        Ok(Value::Object(self.extract(&document)))
    }
}
