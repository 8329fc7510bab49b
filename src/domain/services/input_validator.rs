// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;
use thiserror::Error;

use crate::domain::models::input::ActorInput;

/// 输入校验错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("INPUT is missing.")]
    Missing,

    #[error("INPUT \"startUrls\" property is required")]
    StartUrlsRequired,

    #[error("Value of {key} should be {expected}")]
    InvalidType { key: String, expected: &'static str },

    #[error("INPUT could not be parsed: {0}")]
    Malformed(String),
}

impl InputError {
    fn invalid(key: impl Into<String>, expected: &'static str) -> Self {
        InputError::InvalidType {
            key: key.into(),
            expected,
        }
    }
}

/// 期望的字段类型
#[derive(Debug, Clone, Copy)]
enum FieldType {
    Array,
    Number,
    String,
    Object,
}

impl FieldType {
    fn name(self) -> &'static str {
        match self {
            FieldType::Array => "array",
            FieldType::Number => "number",
            FieldType::String => "string",
            FieldType::Object => "object",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            FieldType::Array => value.is_array(),
            FieldType::Number => value.is_number(),
            FieldType::String => value.is_string(),
            FieldType::Object => value.is_object(),
        }
    }
}

/// 检查可选字段的类型，缺失或为 null 时跳过
fn check_optional(input: &Value, key: &str, expected: FieldType) -> Result<(), InputError> {
    match input.get(key) {
        None | Some(Value::Null) => Ok(()),
        Some(value) if expected.matches(value) => Ok(()),
        Some(_) => Err(InputError::invalid(key, expected.name())),
    }
}

/// 校验 Actor 输入
///
/// `startUrls` 必须存在且为非空数组，每个元素都要带字符串类型的 `url`；
/// `maxItems`、`extendOutputFunction`、`proxyConfiguration` 可选，但出现时类型必须正确。
pub fn validate_input(input: Option<&Value>) -> Result<(), InputError> {
    let input = match input {
        None | Some(Value::Null) => return Err(InputError::Missing),
        Some(value) => value,
    };

    if !input.is_object() {
        return Err(InputError::Malformed("INPUT should be an object".to_string()));
    }

    // check required field
    let start_urls = match input.get("startUrls") {
        None | Some(Value::Null) => return Err(InputError::StartUrlsRequired),
        Some(Value::Array(urls)) if urls.is_empty() => {
            return Err(InputError::StartUrlsRequired)
        }
        Some(Value::Array(urls)) => urls,
        Some(_) => return Err(InputError::invalid("startUrls", FieldType::Array.name())),
    };

    for (i, entry) in start_urls.iter().enumerate() {
        if !entry.get("url").is_some_and(Value::is_string) {
            return Err(InputError::invalid(
                format!("startUrls[{}].url", i),
                FieldType::String.name(),
            ));
        }
    }

    // check correct types
    check_optional(input, "maxItems", FieldType::Number)?;
    check_optional(input, "extendOutputFunction", FieldType::String)?;
    check_optional(input, "proxyConfiguration", FieldType::Object)?;

    Ok(())
}

/// 校验并解析 Actor 输入
pub fn parse_input(input: Option<&Value>) -> Result<ActorInput, InputError> {
    validate_input(input)?;
    let value = input.cloned().unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|e| InputError::Malformed(e.to_string()))
}
