//! プロジェクト一覧セクション
//!
//! トップページと一覧ページで共用する。URLとの同期方針は
//! 渡された `FilterSession` が決める。

use leptos::prelude::*;
use portfolio_common::{data, FilterSession, ProjectRecord, SyncPolicy, UrlEffect, LISTING_PATH};
use crate::browser;
use crate::components::{project_card::ProjectCard, tag_strip::TagStrip};

/// 状態変更とURL反映を1つのイベントハンドラ内で行う
fn dispatch(session: RwSignal<FilterSession>, mutate: impl FnOnce(&mut FilterSession) -> UrlEffect) {
    if let Some(effect) = session.try_update(mutate) {
        browser::apply_effect(&effect);
    }
}

#[component]
pub fn RecentProjects(session: FilterSession) -> impl IntoView {
    let records = StoredValue::new(data::projects());
    let is_summary = session.policy() == SyncPolicy::Gateway;
    let fields = records.with_value(|r| session.visible_fields(r));
    let skills = records.with_value(|r| session.visible_skills(r));
    let session = RwSignal::new(session);

    let visible = Memo::new(move |_| {
        records.with_value(|r| {
            session.with(|s| s.visible(r).into_iter().cloned().collect::<Vec<ProjectRecord>>())
        })
    });

    let field_selected = move |tag: &str| session.with(|s| s.state().fields.contains(tag));
    let skill_selected = move |tag: &str| session.with(|s| s.state().skills.contains(tag));
    let toggle_field = move |tag: String| dispatch(session, |s| s.toggle_field(&tag));
    let toggle_skill = move |tag: String| dispatch(session, |s| s.toggle_skill(&tag));

    view! {
        <section id="projects" class="projects">
            <h2 class="heading"><span class="text-purple">"Projects"</span></h2>

            <div class="search-box">
                <input
                    type="text"
                    placeholder="Search projects by name or description..."
                    prop:value=move || session.with(|s| s.state().search_text.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        dispatch(session, |s| s.set_search_text(&text));
                    }
                />
            </div>

            <div class="filter-bars">
                <TagStrip label="Fields" tags=fields is_selected=field_selected on_toggle=toggle_field />
                <TagStrip label="Skills" tags=skills is_selected=skill_selected on_toggle=toggle_skill />
            </div>

            <div class="project-list">
                <For
                    each=move || visible.get()
                    key=|project| project.id
                    children=move |project| view! { <ProjectCard project=project /> }
                />
            </div>

            <Show when=move || visible.with(|v| v.is_empty())>
                <p class="text-muted">"No projects match the current filters."</p>
            </Show>

            {is_summary.then(|| view! {
                <div class="see-all">
                    <a href=LISTING_PATH class="btn btn-primary">"See all projects"</a>
                </div>
            })}
        </section>
    }
}
