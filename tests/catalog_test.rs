//! カタログ読み込みテスト
//!
//! データソースの優先順位と、読み込んだ一覧へのフィルタ適用を検証

use portfolio_common::{compute_visible, derive_visible_skills, FilterState};
use portfolio_site::catalog::load_catalog;
use portfolio_site::config::Config;
use portfolio_site::error::PortfolioError;
use tempfile::tempdir;

const CUSTOM_PROJECTS: &str = r#"[
    {"id": 100, "title": "Rust Search Engine", "description": "Full text search", "skills": ["Rust"]},
    {"id": 101, "title": "Landing Page", "skills": ["React", "Tailwind CSS"]}
]"#;

/// 指定なしなら組み込みデータ
#[test]
fn test_builtin_when_no_path() {
    let catalog = load_catalog(None, &Config::default()).expect("読み込み失敗");
    assert_eq!(catalog.len(), 9);
}

/// 設定ファイルのデータパスを使用
#[test]
fn test_config_data_path() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("projects.json");
    std::fs::write(&path, CUSTOM_PROJECTS).unwrap();

    let config = Config {
        data_path: Some(path),
        ..Default::default()
    };
    let catalog = load_catalog(None, &config).expect("読み込み失敗");
    assert_eq!(catalog.len(), 2);
    assert!(catalog.find(100).is_some());
}

/// 引数のパスが設定より優先
#[test]
fn test_argument_overrides_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let from_arg = dir.path().join("arg.json");
    std::fs::write(&from_arg, r#"[{"id": 1, "title": "Only"}]"#).unwrap();

    let config = Config {
        data_path: Some(dir.path().join("missing.json")),
        ..Default::default()
    };
    let catalog = load_catalog(Some(from_arg.as_path()), &config).expect("読み込み失敗");
    assert_eq!(catalog.len(), 1);
}

/// 読み込んだ一覧でも未マップのスキルは分野を持たない
#[test]
fn test_filter_custom_catalog() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("projects.json");
    std::fs::write(&path, CUSTOM_PROJECTS).unwrap();
    let catalog = load_catalog(Some(path.as_path()), &Config::default()).unwrap();

    let mut state = FilterState::default();
    state.toggle_field("Frontend");
    let ids: Vec<u32> = compute_visible(catalog.records(), &state).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![101]);

    let mut state = FilterState::default();
    state.toggle_skill("Rust");
    let ids: Vec<u32> = compute_visible(catalog.records(), &state).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![100]);

    assert_eq!(
        derive_visible_skills(catalog.records()),
        vec!["All", "Rust", "React", "Tailwind CSS"]
    );
}

/// IDが重複した一覧はエラー
#[test]
fn test_duplicate_ids_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("projects.json");
    std::fs::write(&path, r#"[{"id": 5, "title": "A"}, {"id": 5, "title": "B"}]"#).unwrap();

    let err = load_catalog(Some(path.as_path()), &Config::default()).unwrap_err();
    assert!(matches!(
        err,
        PortfolioError::Catalog(portfolio_common::Error::DuplicateId(5))
    ));
}
