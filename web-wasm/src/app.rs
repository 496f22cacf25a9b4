//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use portfolio_common::{FilterSession, DEFAULT_SUMMARY_LIMIT};
use crate::browser;
use crate::components::{
    bento_grid::BentoGrid,
    experience::Experience,
    header::{FloatingNav, Hero},
    recent_projects::RecentProjects,
};

/// パスに応じてページを切り替える
#[component]
pub fn App() -> impl IntoView {
    let path = browser::current_path();

    if browser::is_listing_path(&path) {
        view! { <ProjectsPage /> }.into_any()
    } else {
        view! { <HomePage /> }.into_any()
    }
}

/// トップページ（プロジェクトは先頭数件のみ、絞り込むと一覧ページへ）
#[component]
fn HomePage() -> impl IntoView {
    let session = FilterSession::summary(DEFAULT_SUMMARY_LIMIT);

    view! {
        <main class="page">
            <FloatingNav />
            <div class="container">
                <Hero />
                <BentoGrid />
                <Experience />
                <RecentProjects session=session />
            </div>
        </main>
    }
}

/// プロジェクト一覧ページ（URLのクエリと同期）
#[component]
fn ProjectsPage() -> impl IntoView {
    let query = browser::current_query();
    gloo::console::debug!(format!("一覧ページ初期クエリ: {}", query));
    let session = FilterSession::listing(&query);

    view! {
        <main class="page">
            <div class="container">
                <div class="back-link">
                    <a href="/" class="btn btn-secondary">"← Back to Home"</a>
                </div>
                <RecentProjects session=session />
            </div>
        </main>
    }
}
