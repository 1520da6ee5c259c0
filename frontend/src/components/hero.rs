//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Análise de Editais"</h1>
            <p class="subtitle">
                "Envie seu arquivo Excel para análise ponto a ponto "
                "e acompanhe o processamento pelo link de resultado."
            </p>
        </div>
    }
}
