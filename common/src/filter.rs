//! プロジェクトフィルタモジュール
//!
//! 検索文字列・分野タグ・スキルタグの3条件でプロジェクト一覧を絞り込む。
//! URLやブラウザには依存しない純粋関数のみで構成する。

use crate::taxonomy::derive_fields;
use crate::types::ProjectRecord;
use std::num::NonZeroUsize;

/// 「制限なし」を表す番兵タグ
pub const ALL: &str = "All";

/// データに関係なく分野一覧の先頭に並べるタグ
const PINNED_FIELDS: &[&str] = &[ALL, "Mobile", "AI"];

/// タグの選択状態
///
/// `All` と具体タグは型の上で共存できず、`Only` は常に1件以上を持つ。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagSelection {
    #[default]
    All,
    Only(Vec<String>),
}

impl TagSelection {
    /// タグ列から選択状態を構築
    ///
    /// 空文字と `All` は読み飛ばし、重複は除く。何も残らなければ `All`。
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selected: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.as_ref().trim();
            if tag.is_empty() || tag == ALL {
                continue;
            }
            if !selected.iter().any(|t| t == tag) {
                selected.push(tag.to_string());
            }
        }
        if selected.is_empty() {
            Self::All
        } else {
            Self::Only(selected)
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// 選択中か（ボタンのハイライト判定にも使う）
    pub fn contains(&self, tag: &str) -> bool {
        match self {
            Self::All => tag == ALL,
            Self::Only(tags) => tags.iter().any(|t| t == tag),
        }
    }

    /// タグを切り替える
    ///
    /// `All` は部分選択より常に優先する。最後の具体タグを外すと `All` に戻る。
    /// 前後の空白は `from_tags` と同じく取り除き、空のタグは無視する。
    pub fn toggle(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() {
            return;
        }
        if tag == ALL {
            *self = Self::All;
            return;
        }

        let mut tags = match std::mem::take(self) {
            Self::All => Vec::new(),
            Self::Only(tags) => tags,
        };

        if let Some(pos) = tags.iter().position(|t| t == tag) {
            tags.remove(pos);
        } else {
            tags.push(tag.to_string());
        }

        *self = if tags.is_empty() { Self::All } else { Self::Only(tags) };
    }

    /// 具体タグ（`All` のときは空）
    pub fn concrete(&self) -> &[String] {
        match self {
            Self::All => &[],
            Self::Only(tags) => tags,
        }
    }

    /// 表示用ラベル（`All` のときは `["All"]`）
    pub fn labels(&self) -> Vec<&str> {
        match self {
            Self::All => vec![ALL],
            Self::Only(tags) => tags.iter().map(|t| t.as_str()).collect(),
        }
    }

    /// 候補タグのいずれかに一致するか
    fn matches_any<'a, I>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self {
            Self::All => true,
            Self::Only(tags) => candidates
                .into_iter()
                .any(|c| tags.iter().any(|t| t == c)),
        }
    }
}

/// 1画面分のフィルタ状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// 検索文字列（入力そのまま。trimは評価時に行う）
    pub search_text: String,
    pub fields: TagSelection,
    pub skills: TagSelection,
    /// 表示件数の上限（一覧ページでは None）
    pub result_limit: Option<NonZeroUsize>,
}

impl FilterState {
    pub fn with_limit(limit: Option<NonZeroUsize>) -> Self {
        Self {
            result_limit: limit,
            ..Default::default()
        }
    }

    pub fn toggle_field(&mut self, field: &str) {
        self.fields.toggle(field);
    }

    pub fn toggle_skill(&mut self, skill: &str) {
        self.skills.toggle(skill);
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// 絞り込み条件が何もないか（件数上限は考慮しない）
    pub fn is_unrestricted(&self) -> bool {
        self.fields.is_all() && self.skills.is_all() && self.search_text.trim().is_empty()
    }

    /// プロジェクトが全条件を満たすか
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        let field_ok = self.fields.is_all()
            || self
                .fields
                .matches_any(derive_fields(record).iter().map(|f| f.as_str()));
        let skill_ok = self
            .skills
            .matches_any(record.skills.iter().map(|s| s.as_str()));

        field_ok && skill_ok && self.matches_search(record)
    }

    fn matches_search(&self, record: &ProjectRecord) -> bool {
        let query = self.search_text.trim();
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        record.title.to_lowercase().contains(&query)
            || record.description.to_lowercase().contains(&query)
    }
}

/// 分野ボタン一覧を導出
///
/// 先頭は必ず `All`, `Mobile`, `AI`（該当プロジェクトがなくても表示する）。
pub fn derive_visible_fields(records: &[ProjectRecord]) -> Vec<String> {
    let mut fields: Vec<String> = PINNED_FIELDS.iter().map(|f| f.to_string()).collect();
    for field in records.iter().flat_map(derive_fields) {
        if !fields.contains(&field) {
            fields.push(field);
        }
    }
    fields
}

/// スキルボタン一覧を導出（先頭は `All`）
pub fn derive_visible_skills(records: &[ProjectRecord]) -> Vec<String> {
    let mut skills = vec![ALL.to_string()];
    for skill in records.iter().flat_map(|r| r.skills.iter()) {
        if !skills.contains(skill) {
            skills.push(skill.clone());
        }
    }
    skills
}

/// 表示対象のプロジェクトを算出
///
/// 元の並び順を保ち、件数上限は絞り込み後の先頭から切り詰める。
pub fn compute_visible<'a>(records: &'a [ProjectRecord], state: &FilterState) -> Vec<&'a ProjectRecord> {
    let matched = records.iter().filter(|r| state.matches(r));
    match state.result_limit {
        Some(limit) => matched.take(limit.get()).collect(),
        None => matched.collect(),
    }
}
