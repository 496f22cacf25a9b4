use crate::config::Config;
use crate::error;
use clap::{Args, Parser, Subcommand};
use portfolio_common::{decode_query, FilterState};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "ポートフォリオのプロジェクト検索・共有リンク生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// プロジェクト一覧JSON（省略時は設定値、なければ組み込みデータ）
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 条件に一致するプロジェクトを表示
    Projects {
        #[command(flatten)]
        filter: FilterArgs,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// 分野・スキルのボタン一覧を表示
    Facets {
        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// 条件を共有URLに変換
    Link {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// 技術スタックを表示
    Stack {
        /// カテゴリ (All/Frontend/Backend/Database/AI/Dev Tools)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 共有リンクのベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// プロジェクト一覧JSONのパスを設定
        #[arg(long)]
        set_data: Option<PathBuf>,

        /// データパス設定を解除（組み込みデータに戻す）
        #[arg(long)]
        clear_data: bool,

        /// `projects --summary` の表示件数を設定
        #[arg(long)]
        set_summary_limit: Option<NonZeroUsize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 絞り込み条件
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// 検索文字列（タイトル・説明の部分一致）
    #[arg(short = 'q', long = "query")]
    pub query: Option<String>,

    /// 分野タグ（複数指定可、指定順にトグル）
    #[arg(long = "field")]
    pub fields: Vec<String>,

    /// スキルタグ（複数指定可、指定順にトグル）
    #[arg(long = "skill")]
    pub skills: Vec<String>,

    /// 表示件数の上限
    #[arg(short, long)]
    pub limit: Option<NonZeroUsize>,

    /// トップページと同じ件数に絞る（設定の summary_limit）
    #[arg(long, conflicts_with = "limit")]
    pub summary: bool,

    /// 共有URL（またはクエリ文字列）から条件を読み込む
    #[arg(long)]
    pub from_url: Option<String>,
}

impl FilterArgs {
    /// 画面のボタン操作と同じ順序で条件を組み立てる
    pub fn to_state(&self, config: &Config) -> error::Result<FilterState> {
        let mut state = self
            .from_url
            .as_deref()
            .map(|url| decode_query(query_part(url)))
            .unwrap_or_default();

        if let Some(query) = &self.query {
            state.set_search_text(query.as_str());
        }
        for field in &self.fields {
            state.toggle_field(field);
        }
        for skill in &self.skills {
            state.toggle_skill(skill);
        }
        state.result_limit = match self.limit {
            Some(limit) => Some(limit),
            None if self.summary => Some(config.summary_view_limit()?),
            None => None,
        };
        Ok(state)
    }
}

/// URLからクエリ部分を取り出す（`#` 以降は捨てる）
fn query_part(url: &str) -> &str {
    let url = url.split('#').next().unwrap_or(url);
    match url.split_once('?') {
        Some((_, query)) => query,
        None if url.contains('=') => url,
        None => "",
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}
