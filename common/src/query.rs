//! URLクエリ変換モジュール
//!
//! `FilterState` とクエリ文字列（`q` / `fields` / `skills`）の相互変換。
//! URLに触れるのはこのモジュールだけで、フィルタ処理側はURLを知らない。

use crate::filter::{FilterState, TagSelection};
use std::borrow::Cow;

/// 検索文字列のパラメータ名
pub const PARAM_SEARCH: &str = "q";
/// 分野タグのパラメータ名
pub const PARAM_FIELDS: &str = "fields";
/// スキルタグのパラメータ名
pub const PARAM_SKILLS: &str = "skills";

/// 一覧ページのパス
pub const LISTING_PATH: &str = "/projects";

/// タグ区切り文字
const TAG_SEPARATOR: char = ',';

/// フィルタ状態をクエリ文字列に変換（先頭の `?` は付けない）
///
/// `All` の次元と空白のみの検索文字列は出力しない。
pub fn encode_query(state: &FilterState) -> String {
    let mut pairs: Vec<String> = Vec::new();

    if !state.search_text.trim().is_empty() {
        pairs.push(format!("{}={}", PARAM_SEARCH, urlencoding::encode(&state.search_text)));
    }
    if let Some(value) = encode_tags(&state.fields) {
        pairs.push(format!("{}={}", PARAM_FIELDS, value));
    }
    if let Some(value) = encode_tags(&state.skills) {
        pairs.push(format!("{}={}", PARAM_SKILLS, value));
    }

    pairs.join("&")
}

fn encode_tags(selection: &TagSelection) -> Option<String> {
    if selection.is_all() {
        return None;
    }
    let encoded: Vec<String> = selection
        .concrete()
        .iter()
        .map(|tag| urlencoding::encode(tag).into_owned())
        .collect();
    Some(encoded.join(&TAG_SEPARATOR.to_string()))
}

/// クエリ文字列からフィルタ状態を復元
///
/// 不正な値があっても失敗しない。未知のパラメータは無視し、
/// 空の値はパラメータなしと同じ扱い。同じキーが複数あれば最初の値を使う。
/// 件数上限はURLに載せないので常に None。
pub fn decode_query(query: &str) -> FilterState {
    let pairs = parse_pairs(query);

    FilterState {
        search_text: first_value(&pairs, PARAM_SEARCH).unwrap_or_default().to_string(),
        fields: first_value(&pairs, PARAM_FIELDS).map(decode_tags).unwrap_or_default(),
        skills: first_value(&pairs, PARAM_SKILLS).map(decode_tags).unwrap_or_default(),
        result_limit: None,
    }
}

fn first_value<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// デコード済みの値をカンマで分割（`%2C` 区切りも同じ扱いになる）
fn decode_tags(value: &str) -> TagSelection {
    TagSelection::from_tags(value.split(TAG_SEPARATOR))
}

/// `key=value` の組に分解（キー・値ともデコード済み）
fn parse_pairs(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// パーセントデコード（`+` は空白）。不正な符号化は元の文字列のまま返す
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(Cow::Borrowed(s)) => s.to_string(),
        Ok(Cow::Owned(s)) => s,
        Err(_) => spaced,
    }
}

/// 共有用URLを組み立てる
pub fn share_url(base_url: &str, state: &FilterState) -> String {
    let base = base_url.trim_end_matches('/');
    listing_href(state)
        .map(|href| format!("{}{}", base, href))
        .unwrap_or_else(|| format!("{}{}", base, LISTING_PATH))
}

/// 一覧ページへのパス+クエリ（`/projects?...`）。条件がなければ None
pub fn listing_href(state: &FilterState) -> Option<String> {
    let query = encode_query(state);
    if query.is_empty() {
        None
    } else {
        Some(format!("{}?{}", LISTING_PATH, query))
    }
}
