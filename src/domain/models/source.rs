// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 爬取分类标签
///
/// 决定下游页面处理逻辑
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    /// 首页
    Homepage,
    /// 商品详情页
    Product,
    /// 子分类列表页
    Subcat,
    /// 顶级分类页
    Maincat,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Label::Homepage => write!(f, "HOMEPAGE"),
            Label::Product => write!(f, "PRODUCT"),
            Label::Subcat => write!(f, "SUBCAT"),
            Label::Maincat => write!(f, "MAINCAT"),
        }
    }
}

impl FromStr for Label {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HOMEPAGE" => Ok(Label::Homepage),
            "PRODUCT" => Ok(Label::Product),
            "SUBCAT" => Ok(Label::Subcat),
            "MAINCAT" => Ok(Label::Maincat),
            _ => Err(()),
        }
    }
}

/// 请求附带的用户数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub label: Label,
}

/// 爬取源记录
///
/// 每个被接受的种子 URL 生成一条，交给请求队列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub url: String,
    pub user_data: UserData,
}

impl Source {
    pub fn new(url: impl Into<String>, label: Label) -> Self {
        Self {
            url: url.into(),
            user_data: UserData { label },
        }
    }

    pub fn label(&self) -> Label {
        self.user_data.label
    }
}
