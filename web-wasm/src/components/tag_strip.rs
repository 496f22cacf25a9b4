//! 横スクロールするタグボタン列
//!
//! マウス/タッチのドラッグでスクロールし、ドラッグ直後のクリックは捨てる。

use leptos::html::Div;
use leptos::prelude::*;
use portfolio_common::DragScroll;

#[component]
pub fn TagStrip<FS, FT>(
    label: &'static str,
    tags: Vec<String>,
    is_selected: FS,
    on_toggle: FT,
) -> impl IntoView
where
    FS: Fn(&str) -> bool + 'static + Clone + Send + Sync,
    FT: Fn(String) + 'static + Clone + Send + Sync,
{
    let strip_ref = NodeRef::<Div>::new();
    let drag = RwSignal::new(DragScroll::new());

    let begin = move |x: f64| {
        if let Some(el) = strip_ref.get_untracked() {
            let scroll_left = el.scroll_left() as f64;
            drag.update(|d| d.pointer_down(x, scroll_left));
        }
    };

    let track = move |x: f64| -> bool {
        if !drag.with_untracked(|d| d.is_active()) {
            return false;
        }
        let offset = drag.try_update(|d| d.pointer_move(x)).flatten();
        match (offset, strip_ref.get_untracked()) {
            (Some(offset), Some(el)) => {
                el.set_scroll_left(offset.round() as i32);
                true
            }
            _ => false,
        }
    };

    let finish = move || {
        if drag.with_untracked(|d| d.is_active()) {
            drag.update(|d| d.pointer_up(js_sys::Date::now()));
        }
    };

    let buttons = tags
        .into_iter()
        .map(|tag| {
            let is_selected = is_selected.clone();
            let on_toggle = on_toggle.clone();
            let label_tag = tag.clone();
            let class_tag = tag.clone();
            view! {
                <button
                    class="tag-button"
                    class:active=move || is_selected(&class_tag)
                    on:click=move |_| {
                        if drag.with_untracked(|d| d.allows_click(js_sys::Date::now())) {
                            on_toggle(tag.clone());
                        }
                    }
                >
                    {label_tag}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="tag-row">
            <span class="tag-row-label">{label}</span>
            <div
                class="tag-strip"
                class:dragging=move || drag.with(|d| d.is_dragging())
                node_ref=strip_ref
                on:mousedown=move |ev| begin(ev.page_x() as f64)
                on:mousemove=move |ev| {
                    if track(ev.page_x() as f64) {
                        ev.prevent_default();
                    }
                }
                on:mouseup=move |_| finish()
                on:mouseleave=move |_| finish()
                on:touchstart=move |ev| {
                    if let Some(touch) = ev.touches().get(0) {
                        begin(touch.page_x() as f64);
                    }
                }
                on:touchmove=move |ev| {
                    if let Some(touch) = ev.touches().get(0) {
                        track(touch.page_x() as f64);
                    }
                }
                on:touchend=move |_| finish()
                on:touchcancel=move |_| finish()
            >
                <div class="tag-strip-inner">{buttons}</div>
            </div>
        </div>
    }
}
