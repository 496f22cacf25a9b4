//! エラー型定義
//!
//! フィルタ処理自体は失敗しない。ここで扱うのはカタログ読み込み時の
//! I/O・JSON・内容の不整合のみ。

use thiserror::Error;

/// カタログ読み込みのエラー
#[derive(Error, Debug)]
pub enum Error {
    #[error("カタログを読み込めません: {0}")]
    Io(#[from] std::io::Error),

    #[error("カタログのJSONが不正です: {0}")]
    Json(#[from] serde_json::Error),

    /// `id` はURLやリストのキーに使うため重複できない
    #[error("プロジェクトIDが重複しています: {0}")]
    DuplicateId(u32),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
