// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use super::builtin::{EmptyTransform, PageMetadataTransform};
use super::selector_rules::{SelectorRuleSet, SelectorRulesTransform};
use super::{ExtendOutputTransform, TransformLoadError};

static TRANSFORM_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_\-]*$").unwrap());

/// 转换注册表
///
/// 保存进程内注册的转换，并负责把 `extendOutputFunction` 文本解析成转换
pub struct TransformRegistry {
    transforms: HashMap<String, Arc<dyn ExtendOutputTransform>>,
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl TransformRegistry {
    /// 空注册表
    pub fn new() -> Self {
        Self {
            transforms: HashMap::new(),
        }
    }

    /// 包含内置转换的注册表
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(EmptyTransform));
        registry.register(Arc::new(PageMetadataTransform));
        registry
    }

    /// 注册转换，同名转换会被替换
    pub fn register(&mut self, transform: Arc<dyn ExtendOutputTransform>) {
        self.transforms
            .insert(transform.name().to_string(), transform);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn ExtendOutputTransform>> {
        self.transforms.get(name).cloned()
    }

    /// 已注册的转换名称，按字母排序
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.transforms.keys().cloned().collect();
        names.sort();
        names
    }

    /// 解析 `extendOutputFunction`
    ///
    /// 支持以下写法：
    /// - 转换名称：`page_metadata`
    /// - JSON 字符串：`"page_metadata"`
    /// - 按名称引用：`{"transform": "page_metadata"}`
    /// - 选择器规则：`{"rules": {"price": {"selector": ".price-value"}}}`
    ///
    /// # 返回值
    ///
    /// * `Err(TransformLoadError::InvalidSource)` - 文本无法解析
    /// * `Err(TransformLoadError::NotCallable)` - 文本可以解析但不是可用的转换
    pub fn load(&self, source: &str) -> Result<Arc<dyn ExtendOutputTransform>, TransformLoadError> {
        let source = source.trim();
        if source.is_empty() {
            return Err(TransformLoadError::InvalidSource(
                "empty source text".to_string(),
            ));
        }

        if TRANSFORM_NAME.is_match(source) {
            return self.lookup(source);
        }

        let value: Value = serde_json::from_str(source)
            .map_err(|e| TransformLoadError::InvalidSource(e.to_string()))?;

        match value {
            Value::String(name) => self.lookup(&name),
            Value::Object(map) if map.contains_key("rules") => {
                let rule_set: SelectorRuleSet = serde_json::from_value(Value::Object(map))
                    .map_err(|e| TransformLoadError::InvalidSource(e.to_string()))?;
                Ok(Arc::new(SelectorRulesTransform::compile(rule_set)?))
            }
            Value::Object(map) => match map.get("transform") {
                Some(Value::String(name)) if map.len() == 1 => self.lookup(name),
                _ => Err(TransformLoadError::NotCallable(
                    "object must contain either \"transform\" or \"rules\"".to_string(),
                )),
            },
            other => Err(TransformLoadError::NotCallable(format!(
                "source evaluates to {}",
                json_type(&other)
            ))),
        }
    }

    fn lookup(&self, name: &str) -> Result<Arc<dyn ExtendOutputTransform>, TransformLoadError> {
        self.get(name).ok_or_else(|| {
            TransformLoadError::NotCallable(format!(
                "unknown transform {:?}, available: {}",
                name,
                self.names().join(", ")
            ))
        })
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
