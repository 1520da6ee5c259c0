//! Result view: tracking link, copy and open actions.
//!
//! Reached after a successful submission. Without a result in the
//! [`ResultStore`] (page reload, direct navigation) it redirects to `/`.

use edital_core::{Notice, ResultView, SubmissionResult};
use leptos::*;
use leptos_router::{use_navigate, Redirect};

use crate::services::{copy_to_clipboard, open_in_new_tab};
use crate::{ResultStore, Toasts};

#[component]
pub fn ResultPage() -> impl IntoView {
    let results = expect_context::<ResultStore>();

    match ResultView::resolve(results.get_untracked()) {
        ResultView::Show(result) => view! { <ResultCard result=result/> }.into_view(),
        ResultView::RedirectToIntake => {
            log::info!("↩️ No result to show, back to intake");
            view! { <Redirect path="/"/> }.into_view()
        }
    }
}

#[component]
fn ResultCard(result: SubmissionResult) -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let navigate = use_navigate();

    let link = store_value(result.link.clone());

    let on_open = move |_| link.with_value(|link| open_in_new_tab(link));

    let on_copy = move |_| {
        let link = link.get_value();
        spawn_local(async move {
            match copy_to_clipboard(&link).await {
                Ok(()) => toasts.push(Notice::link_copied()),
                Err(e) => {
                    log::error!("❌ {}", e);
                    toasts.push(Notice::clipboard_failed(&e));
                }
            }
        });
    };

    let on_back = move |_| navigate("/", Default::default());

    view! {
        <div class="container narrow">
            <div class="hero">
                <h1>"Processamento Iniciado"</h1>
                <p class="subtitle">
                    "Projeto: " <span class="project-name">{result.project_name.clone()}</span>
                </p>
            </div>

            <div class="card card-success">
                <div class="card-title">"✅ Arquivo Enviado com Sucesso"</div>
                <p class="card-description">"Acompanhe o processamento do seu ponto a ponto no link:"</p>
                <div class="link-box">
                    <p class="link-label">"Link de acompanhamento:"</p>
                    <p class="link-value">{result.link.clone()}</p>
                </div>
                <div class="actions">
                    <button class="btn btn-primary" on:click=on_open>"↗ Abrir Link"</button>
                    <button class="btn btn-outline" on:click=on_copy>"⧉ Copiar"</button>
                </div>
            </div>

            <div class="center">
                <button class="btn btn-secondary" on:click=on_back>"← Voltar ao Início"</button>
            </div>
        </div>
    }
}
