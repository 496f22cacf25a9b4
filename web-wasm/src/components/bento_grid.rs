//! トップページのグリッド
//!
//! 技術スタックカード（カテゴリ切り替え）と連絡先カード（メールコピー）を含む。

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use portfolio_common::data::{CONTACT_GRID_ID, GRID_ITEMS, OWNER_EMAIL, TECH_STACK_GRID_ID};
use portfolio_common::taxonomy::{stack_category, stack_category_names};
use portfolio_common::GridItem;
use crate::browser;

/// 「コピーしました」表示を消すまでの時間（ms）
const COPIED_RESET_MS: u32 = 3_500;

#[component]
pub fn BentoGrid() -> impl IntoView {
    view! {
        <section class="bento-grid">
            {GRID_ITEMS.iter().map(|item| view! { <BentoGridItem item=*item /> }).collect_view()}
        </section>
    }
}

#[component]
fn BentoGridItem(item: GridItem) -> impl IntoView {
    let body = match item.id {
        TECH_STACK_GRID_ID => view! { <TechStackCard /> }.into_any(),
        CONTACT_GRID_ID => view! {
            <div class="bento-text">
                <h3>{item.title}</h3>
                <CopyEmailButton />
            </div>
        }
        .into_any(),
        _ => view! {
            <div class="bento-text">
                <p class="bento-description">{item.description}</p>
                <h3>{item.title}</h3>
            </div>
        }
        .into_any(),
    };

    view! { <div class=format!("bento-item bento-item-{}", item.id)>{body}</div> }
}

#[component]
fn TechStackCard() -> impl IntoView {
    let (category, set_category) = signal("All");
    let items = move || stack_category(category.get()).unwrap_or_default();

    view! {
        <div class="tech-stack">
            <div class="tech-stack-header">
                <h3>{move || category.get()}</h3>
                <div class="tag-strip">
                    {stack_category_names()
                        .into_iter()
                        .map(|name| view! {
                            <button
                                class="tag-button"
                                class:active=move || category.get() == name
                                on:click=move |_| set_category.set(name)
                            >
                                {name}
                            </button>
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="tech-stack-grid">
                {move || {
                    items()
                        .iter()
                        .map(|tech| view! { <span class="skill-item" title=*tech>{*tech}</span> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn CopyEmailButton() -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let on_copy = move |_| match browser::copy_to_clipboard(OWNER_EMAIL) {
        Ok(()) => {
            set_copied.set(true);
            Timeout::new(COPIED_RESET_MS, move || set_copied.set(false)).forget();
        }
        Err(e) => gloo::console::warn!(format!("メールアドレスのコピー失敗: {}", e)),
    };

    view! {
        <button class="btn btn-primary" on:click=on_copy>
            {move || if copied.get() { "Email copied!" } else { "Copy my email" }}
        </button>
    }
}
