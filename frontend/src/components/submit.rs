//! Send button and processing indicator.
//!
//! Runs the submission on the page's event loop. The page's
//! [`SubmissionLatch`] keeps a second click from starting another request
//! while one is out; on success the result is handed to the
//! [`ResultStore`] and the router moves to the result view.

use edital_core::{submit, Notice, UploaderConfig};
use leptos::*;
use leptos_router::use_navigate;

use crate::services::FetchTransport;
use crate::types::{SelectedFile, SubmissionLatch};
use crate::{ResultStore, Toasts, RESULT_ROUTE};

#[component]
pub fn SubmitPanel(
    selected_file: ReadSignal<Option<SelectedFile>>,
    project_name: ReadSignal<String>,
    latch: SubmissionLatch,
) -> impl IntoView {
    let config = store_value(expect_context::<UploaderConfig>());
    let toasts = expect_context::<Toasts>();
    let results = expect_context::<ResultStore>();
    let navigate = use_navigate();

    let is_submitting = latch.is_busy();

    let on_submit = move |_| {
        let Some(ticket) = latch.try_begin() else {
            log::warn!("⚠️ Submission already in flight");
            return;
        };

        let file = selected_file.get_untracked();
        let name = project_name.get_untracked();
        let config = config.get_value();
        let navigate = navigate.clone();

        spawn_local(async move {
            let outcome = submit(&FetchTransport, &config, file.as_ref(), &name).await;

            drop(ticket);

            match outcome {
                Ok(result) => {
                    toasts.push(Notice::submission_succeeded());
                    results.set(result);
                    navigate(RESULT_ROUTE, Default::default());
                }
                Err(e) => toasts.push(Notice::submission_failed(&e)),
            }
        });
    };

    view! {
        <div class="card">
            <div class="submit-panel">
                <p class="file-ready">
                    "Arquivo pronto: "
                    <span class="file-name">
                        {move || selected_file.with(|f| f.as_ref().map(|f| f.name.clone()).unwrap_or_default())}
                    </span>
                </p>
                <button
                    class="btn btn-primary btn-large"
                    disabled=move || is_submitting.get()
                    on:click=on_submit
                >
                    {move || if is_submitting.get() { "Processando..." } else { "Enviar para Análise" }}
                </button>
            </div>
        </div>

        <Show
            when=move || is_submitting.get()
            fallback=|| view! { }
        >
            <div class="card processing">
                <div class="spinner"></div>
                <p class="processing-title">"Analisando seu arquivo..."</p>
                <p class="processing-hint">"Este processo pode levar alguns minutos"</p>
            </div>
        </Show>
    }
}
