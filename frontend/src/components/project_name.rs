//! Project identification field.

use leptos::*;

#[component]
pub fn ProjectNameInput(
    project_name: ReadSignal<String>,
    set_project_name: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-title">"📝 Identificação do Projeto"</div>
            <p class="card-description">"Dê um nome para identificar este ponto a ponto"</p>
            <label for="projectName" class="field-label">"Nome do Projeto"</label>
            <input
                id="projectName"
                type="text"
                class="field-input"
                placeholder="Ex: Edital Prefeitura 2024"
                prop:value=move || project_name.get()
                on:input=move |ev| set_project_name.set(event_target_value(&ev))
            />
            <p class="field-hint">"Este nome ajudará a identificar o processamento"</p>
        </div>
    }
}
