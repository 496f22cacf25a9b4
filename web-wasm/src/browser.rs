//! ブラウザのURLとの境界
//!
//! `UrlEffect` を location / history 操作に変換する。アプリ内で
//! URLを直接読み書きするのはこのモジュールだけ。

use portfolio_common::{UrlEffect, LISTING_PATH};
use wasm_bindgen::JsValue;

/// 現在のパス（取得できなければ "/"）
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 現在のクエリ文字列（先頭の `?` を含む）
pub fn current_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// 一覧ページか
pub fn is_listing_path(path: &str) -> bool {
    let trimmed = path.trim_end_matches('/');
    trimmed == LISTING_PATH
}

/// 状態変更の結果をURLに反映
pub fn apply_effect(effect: &UrlEffect) {
    match effect {
        UrlEffect::Unchanged => {}
        UrlEffect::Replace(query) => replace_query(query),
        UrlEffect::Navigate(href) => navigate(href),
    }
}

/// 履歴を増やさずにクエリだけ書き換える
fn replace_query(query: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let path = window
        .location()
        .pathname()
        .unwrap_or_else(|_| LISTING_PATH.to_string());
    let url = if query.is_empty() {
        path
    } else {
        format!("{}?{}", path, query)
    };

    let result = window
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
    if let Err(e) = result {
        gloo::console::warn!(format!("URL更新失敗: {:?}", e));
    }
}

fn navigate(href: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    gloo::console::debug!(format!("一覧ページへ遷移: {}", href));
    if let Err(e) = window.location().set_href(href) {
        gloo::console::warn!(format!("遷移失敗: {:?}", e));
    }
}

/// クリップボードへ文字列をコピー（navigator.clipboard.writeText）
pub fn copy_to_clipboard(text: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or("windowがありません")?;
    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .map_err(|e| format!("{:?}", e))?;
    if clipboard.is_undefined() {
        return Err("クリップボードAPIが使えません".to_string());
    }
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| "writeTextが関数ではありません".to_string())?;
    write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_listing_path() {
        assert!(is_listing_path("/projects"));
        assert!(is_listing_path("/projects/"));
        assert!(!is_listing_path("/"));
        assert!(!is_listing_path("/projects/1"));
    }
}
