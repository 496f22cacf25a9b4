use crate::error::{PortfolioError, Result};
use portfolio_common::DEFAULT_SUMMARY_LIMIT;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// 共有リンクのベースURLを上書きする環境変数
pub const BASE_URL_ENV: &str = "PORTFOLIO_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 共有リンクに使うサイトのURL
    pub base_url: String,
    /// プロジェクト一覧JSON（None なら組み込みデータ）
    pub data_path: Option<PathBuf>,
    /// トップページの表示件数
    pub summary_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".into(),
            data_path: None,
            summary_limit: DEFAULT_SUMMARY_LIMIT,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;

        // 環境変数を優先
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }

        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PortfolioError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("portfolio-site").join("config.json"))
    }

    /// `projects --summary` で使う件数
    pub fn summary_view_limit(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.summary_limit).ok_or_else(|| {
            PortfolioError::Config("summary_limit は1以上を指定してください".into())
        })
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        let trimmed = url.trim();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(PortfolioError::Config(format!(
                "ベースURLは http:// または https:// で始めてください: {}",
                url
            )));
        }
        self.base_url = trimmed.trim_end_matches('/').to_string();
        Ok(())
    }
}
