//! Template download card.
//!
//! The template itself is a static asset served from the configured URL;
//! this component only exposes it as a labeled download.

use edital_core::{Notice, UploaderConfig};
use leptos::*;

use crate::Toasts;

/// Filename suggested to the browser for the downloaded template.
const TEMPLATE_FILENAME: &str = "template_edital.csv";

#[component]
pub fn TemplateDownload() -> impl IntoView {
    let config = expect_context::<UploaderConfig>();
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="card">
            <div class="card-title">"📥 Template Excel"</div>
            <p class="card-description">
                "Baixe o modelo padrão para garantir a formatação correta dos seus dados"
            </p>
            <a
                class="btn btn-primary"
                href=config.template_url
                download=TEMPLATE_FILENAME
                on:click=move |_| toasts.push(Notice::template_requested())
            >
                "Baixar Template"
            </a>
        </div>
    }
}
