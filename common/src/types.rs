//! サイト表示用の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ProjectRecord: プロジェクト一覧の1件（フィルタ対象）
//! - WorkExperience / NavItem / SocialLink / GridItem: 静的コンテンツ

use serde::{Deserialize, Serialize};

/// プロジェクト1件
///
/// `image_ref` / `link_url` / `source_url` は表示層にそのまま渡すだけで、
/// フィルタエンジンは解釈しない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub description: String,

    /// 技術タグ（表示順を保持）
    pub skills: Vec<String>,

    pub image_ref: String,
    pub link_url: String,
    pub source_url: String,
}

/// 職歴
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
}

/// ナビゲーション項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub link: &'static str,
}

/// SNSリンク
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub image_ref: &'static str,
    pub link_url: &'static str,
}

/// トップページのグリッドカード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridItem {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
}
