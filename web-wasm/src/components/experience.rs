//! 職歴コンポーネント

use leptos::prelude::*;
use portfolio_common::data::work_experience;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section class="experience" id="experience">
            <h2 class="heading">"My " <span class="text-purple">"work experience"</span></h2>
            <div class="experience-grid">
                {work_experience()
                    .into_iter()
                    .map(|exp| view! {
                        <div class="experience-card">
                            <img src=exp.thumbnail.clone() alt=exp.thumbnail width="64" height="64" />
                            <div>
                                <h3>{exp.title.trim().to_string()}</h3>
                                <p>{exp.description}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
