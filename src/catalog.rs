use crate::config::Config;
use crate::error::{PortfolioError, Result};
use portfolio_common::ProjectCatalog;
use std::path::Path;

/// プロジェクト一覧を読み込む
///
/// 優先順位: `--data` 引数 > 設定ファイルの `data_path` > 組み込みデータ
pub fn load_catalog(data: Option<&Path>, config: &Config) -> Result<ProjectCatalog> {
    let path = data.or(config.data_path.as_deref());

    let Some(path) = path else {
        tracing::debug!("組み込みのプロジェクト一覧を使用");
        return Ok(ProjectCatalog::builtin());
    };

    if !path.exists() {
        return Err(PortfolioError::FileNotFound(path.display().to_string()));
    }

    let catalog = ProjectCatalog::from_file(path)?;
    tracing::debug!(path = %path.display(), count = catalog.len(), "プロジェクト一覧を読み込み");
    if catalog.is_empty() {
        tracing::warn!(path = %path.display(), "プロジェクト一覧が空です");
    }
    Ok(catalog)
}
