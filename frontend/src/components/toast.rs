//! Toast notifications stack.

use leptos::*;

use crate::Toasts;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="toasts">
            <For
                each=move || toasts.entries().get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    let notice = entry.notice;
                    view! {
                        <div
                            class=format!("toast {}", notice.severity.css_class())
                            on:click=move |_| toasts.dismiss(id)
                        >
                            <div class="toast-title">
                                {notice.severity.emoji()} " " {notice.title}
                            </div>
                            <div class="toast-description">{notice.description}</div>
                            <div class="toast-time">{entry.timestamp}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
