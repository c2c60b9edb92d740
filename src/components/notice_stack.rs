//! Notice Stack Component
//!
//! Renders pending notifications; clicking one dismisses it.

use leptos::prelude::*;

use crate::context::use_notifier;
use crate::models::Notice;

#[component]
pub fn NoticeStack() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="notice-stack">
            <For
                each=move || notifier.notices.get()
                key=|notice: &Notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div
                            class=notice.kind.css_class()
                            role="status"
                            on:click=move |_| notifier.dismiss(id)
                        >
                            <div class="notice-title">{notice.title}</div>
                            <div class="notice-description">{notice.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
