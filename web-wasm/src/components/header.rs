//! ヘッダー・ヒーローコンポーネント

use leptos::prelude::*;
use portfolio_common::data::{NAV_ITEMS, SOCIAL_LINKS};

#[component]
pub fn FloatingNav() -> impl IntoView {
    view! {
        <nav class="floating-nav">
            {NAV_ITEMS
                .iter()
                .map(|item| view! { <a href=item.link class="nav-item">{item.name}</a> })
                .collect_view()}
        </nav>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero" id="about">
            <p class="hero-kicker">"Dynamic Web Magic with Next.js"</p>
            <h1>"Transforming Concepts into Seamless User Experiences"</h1>
            <p class="hero-lead">"Hi! I'm a Full-Stack & AI engineer."</p>
            <div class="social-links">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| view! {
                        <a href=link.link_url target="_blank" rel="noopener noreferrer">
                            <img src=link.image_ref alt=link.name width="20" height="20" />
                        </a>
                    })
                    .collect_view()}
            </div>
        </header>
    }
}
