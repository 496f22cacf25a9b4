//! プロジェクトカードコンポーネント

use leptos::prelude::*;
use portfolio_common::{derive_fields, ProjectRecord};

#[component]
pub fn ProjectCard(project: ProjectRecord) -> impl IntoView {
    let fields = derive_fields(&project);

    view! {
        <div class="project-card">
            <a href=project.link_url.clone() target="_blank" rel="noopener noreferrer" class="project-image">
                <img src=project.image_ref.clone() alt=project.title.clone() width="464" height="300" />
            </a>
            <h3 class="project-title">{project.title.clone()}</h3>
            {(!fields.is_empty()).then(|| view! {
                <div class="field-tags">
                    {fields
                        .iter()
                        .map(|tag| view! { <span class="field-tag">{tag.clone()}</span> })
                        .collect_view()}
                </div>
            })}
            <p class="project-description">{project.description.clone()}</p>
            <div class="project-footer">
                <span class="skill-list">{project.skills.join(" · ")}</span>
                <a href=project.source_url.clone() target="_blank" rel="noreferrer noopener" class="text-purple">
                    "Source Code"
                </a>
            </div>
        </div>
    }
}
