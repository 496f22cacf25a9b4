//! フィルタエンジンの性質テスト
//!
//! 組み込みの9件のプロジェクトを使い、トグル・検索・件数上限・URL変換・
//! ドラッグ判定の振る舞いをまとめて検証

use portfolio_common::drag::DragScroll;
use portfolio_common::{
    compute_visible, data, decode_query, encode_query, FilterSession, FilterState, TagSelection,
    UrlEffect, ALL,
};
use std::num::NonZeroUsize;

fn ids(state: &FilterState) -> Vec<u32> {
    compute_visible(&data::projects(), state).iter().map(|r| r.id).collect()
}

/// Allのみの状態でAllをトグルしても変わらない
#[test]
fn test_all_toggle_is_idempotent() {
    let mut state = FilterState::default();
    state.toggle_field(ALL);
    state.toggle_field(ALL);
    assert_eq!(state.fields, TagSelection::All);
}

/// どんなトグル列でも空にならず、Allと具体タグが共存しない
#[test]
fn test_toggle_sequences_keep_invariants() {
    let tags = ["All", "Frontend", "Backend", "Auth", "Mobile"];
    let mut state = FilterState::default();

    // 決定的な擬似乱数列
    let mut seed: u32 = 7;
    for _ in 0..200 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let tag = tags[(seed >> 16) as usize % tags.len()];
        state.toggle_field(tag);
        state.toggle_skill(tag);

        for selection in [&state.fields, &state.skills] {
            let labels = selection.labels();
            assert!(!labels.is_empty());
            assert!(!(labels.contains(&ALL) && labels.len() > 1), "{:?}", labels);
        }
    }
}

/// 条件なしなら全件を元の順序で返す
#[test]
fn test_unrestricted_returns_all_in_order() {
    assert_eq!(ids(&FilterState::default()), (1..=9).collect::<Vec<u32>>());
}

/// 検索は大文字小文字を区別しない
#[test]
fn test_search_case_insensitive() {
    for query in ["figpro", "FIGPRO"] {
        let mut state = FilterState::default();
        state.set_search_text(query);
        assert_eq!(ids(&state), vec![1]);
    }
}

/// 件数上限は絞り込み後の先頭から切り詰める
#[test]
fn test_limit_takes_first_matches() {
    let mut state = FilterState::with_limit(NonZeroUsize::new(4));
    assert_eq!(ids(&state), vec![1, 2, 3, 4]);

    state.toggle_skill("Clerk/Auth");
    assert_eq!(ids(&state), vec![2, 3, 5, 6]);
}

/// fields のURL往復
#[test]
fn test_fields_url_round_trip() {
    let state = FilterState {
        fields: TagSelection::from_tags(["Frontend", "Backend"]),
        ..Default::default()
    };
    let query = encode_query(&state);
    assert_eq!(query, "fields=Frontend,Backend");
    assert_eq!(decode_query(&query).fields, state.fields);
}

/// 空白付きの入力でトグルしても、共有リンクから復元した状態と結果が一致する
#[test]
fn test_padded_toggle_matches_restored_link() {
    let mut state = FilterState::default();
    state.toggle_field(" Frontend");
    state.toggle_skill("Clerk/Auth ");

    let restored = decode_query(&encode_query(&state));
    assert_eq!(restored, state);
    assert_eq!(ids(&restored), ids(&state));
    assert_eq!(ids(&state), vec![2, 3, 5, 6, 7, 8, 9]);
}

/// トップページで絞り込むと一覧ページへ遷移し、一覧ページで同じ結果になる
#[test]
fn test_summary_gateway_hands_over_to_listing() {
    let mut summary = FilterSession::summary(4);
    let UrlEffect::Navigate(href) = summary.toggle_field("Backend") else {
        panic!("一覧ページへの遷移にならない");
    };
    let (_, query) = href.split_once('?').unwrap();

    let listing = FilterSession::listing(query);
    let visible: Vec<u32> = listing.visible(&data::projects()).iter().map(|r| r.id).collect();
    assert_eq!(visible, vec![2, 9]);
}

/// 5px以下の移動はクリック、超えたらクリック抑止
#[test]
fn test_drag_vs_click() {
    let mut drag = DragScroll::new();
    drag.pointer_down(200.0, 0.0);
    drag.pointer_move(205.0);
    drag.pointer_up(0.0);
    assert!(drag.allows_click(0.0));

    drag.pointer_down(200.0, 0.0);
    drag.pointer_move(206.0);
    drag.pointer_up(0.0);
    assert!(!drag.allows_click(0.0));
}
