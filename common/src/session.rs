//! 画面ごとのフィルタセッション
//!
//! トップページ（サマリー）と一覧ページで同じフィルタ処理を使い、
//! URLとの同期方針だけを切り替える。
//!
//! - Gateway: URLを読まない。絞り込みが発生したら一覧ページへ遷移させる
//! - Bidirectional: 初期状態をURLから読み、変更のたびにURLを書き換える

use crate::filter::{compute_visible, derive_visible_fields, derive_visible_skills, FilterState};
use crate::query::{decode_query, encode_query, listing_href};
use crate::types::ProjectRecord;
use std::num::NonZeroUsize;

/// トップページで表示するプロジェクト数
pub const DEFAULT_SUMMARY_LIMIT: usize = 4;

/// URL同期方針
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPolicy {
    Gateway,
    Bidirectional,
}

/// 状態変更の結果としてURLに対して行う操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlEffect {
    /// 何もしない
    Unchanged,
    /// 現在のURLのクエリを置き換える（空文字はクエリ削除）
    Replace(String),
    /// 指定のパス+クエリへ遷移する
    Navigate(String),
}

/// 1画面分のフィルタ状態と同期方針
#[derive(Debug, Clone)]
pub struct FilterSession {
    state: FilterState,
    policy: SyncPolicy,
}

impl FilterSession {
    /// トップページ用（URLは読まない）
    pub fn summary(limit: usize) -> Self {
        Self {
            state: FilterState::with_limit(NonZeroUsize::new(limit)),
            policy: SyncPolicy::Gateway,
        }
    }

    /// 一覧ページ用（URLのクエリから復元）
    pub fn listing(query: &str) -> Self {
        Self {
            state: decode_query(query),
            policy: SyncPolicy::Bidirectional,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn policy(&self) -> SyncPolicy {
        self.policy
    }

    pub fn toggle_field(&mut self, field: &str) -> UrlEffect {
        let mut next = self.state.clone();
        next.toggle_field(field);
        self.commit(next)
    }

    pub fn toggle_skill(&mut self, skill: &str) -> UrlEffect {
        let mut next = self.state.clone();
        next.toggle_skill(skill);
        self.commit(next)
    }

    pub fn set_search_text(&mut self, text: &str) -> UrlEffect {
        let mut next = self.state.clone();
        next.set_search_text(text);
        self.commit(next)
    }

    /// 状態変更とURL操作を同じ呼び出しで確定させる
    fn commit(&mut self, next: FilterState) -> UrlEffect {
        match self.policy {
            SyncPolicy::Gateway => match listing_href(&next) {
                Some(href) => UrlEffect::Navigate(href),
                None => {
                    self.state = next;
                    UrlEffect::Unchanged
                }
            },
            SyncPolicy::Bidirectional => {
                let query = encode_query(&next);
                self.state = next;
                UrlEffect::Replace(query)
            }
        }
    }

    pub fn visible<'a>(&self, records: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        compute_visible(records, &self.state)
    }

    pub fn visible_fields(&self, records: &[ProjectRecord]) -> Vec<String> {
        derive_visible_fields(records)
    }

    pub fn visible_skills(&self, records: &[ProjectRecord]) -> Vec<String> {
        derive_visible_skills(records)
    }
}

impl Default for FilterSession {
    fn default() -> Self {
        Self::summary(DEFAULT_SUMMARY_LIMIT)
    }
}
