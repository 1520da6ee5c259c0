//! Spreadsheet upload component with drag & drop support.
//!
//! The drop zone and the hidden file input both feed
//! [`UploadIntake::accept_first`], so validation and the one-file rule live
//! in a single place. Accepted files are reported to the parent through
//! `on_file_accepted`. While `busy` is set the selection is frozen.

use edital_core::{Notice, UploadIntake, UploaderConfig};
use leptos::*;
use web_sys::{DragEvent, Event, FileList, HtmlInputElement};

use crate::types::{candidate_from_file, SelectedFile};
use crate::Toasts;

#[component]
pub fn UploadSection(
    #[prop(into)] on_file_accepted: Callback<SelectedFile>,
    #[prop(into)] on_file_removed: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let config = expect_context::<UploaderConfig>();
    let toasts = expect_context::<Toasts>();

    let (held, set_held) = create_signal(None::<SelectedFile>);
    let (drag_active, set_drag_active) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let intake = store_value(
        UploadIntake::new(config.clone()).on_accept(move |file: &SelectedFile| {
            set_held.set(Some(file.clone()));
            on_file_accepted.call(file.clone());
        }),
    );

    // Single entry point for both input surfaces
    let policy = store_value(config.clone());
    let handle_files = move |files: Option<FileList>| {
        let Some(files) = files else { return };
        if busy.get_untracked() {
            log::warn!("⚠️ Selection locked while a submission is running");
            return;
        }
        log::info!("📂 {} file(s) received", files.length());

        let candidates = (0..files.length())
            .filter_map(|i| files.get(i))
            .map(candidate_from_file);

        let outcome = intake
            .try_update_value(|intake| {
                intake
                    .accept_first(candidates)
                    .map(|accepted| accepted.map(|file| file.name.clone()))
            })
            .unwrap_or(Ok(None));

        match outcome {
            Ok(Some(name)) => toasts.push(Notice::file_accepted(&name)),
            Ok(None) => {}
            Err(rejection) => {
                log::warn!("⚠️ {}", rejection);
                toasts.push(policy.with_value(|config| Notice::file_rejected(&rejection, config)));
            }
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        handle_files(input.files());
        // Allow picking the same file again after a removal
        input.set_value("");
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);
        handle_files(ev.data_transfer().and_then(|transfer| transfer.files()));
    };

    let trigger_file_input = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_remove = move |_| {
        if busy.get_untracked() {
            return;
        }
        intake.update_value(|intake| {
            intake.remove();
        });
        set_held.set(None);
        on_file_removed.call(());
    };

    let accept = config.accept_attribute();
    let hint = format!(
        "Apenas arquivos {} • Máximo {}",
        config.spreadsheet_extension,
        config.max_file_size_label()
    );

    view! {
        <div class="card">
            <div class="card-title">"📤 Upload do Arquivo"</div>
            <p class="card-description">"Arraste e solte seu arquivo Excel ou clique para selecionar"</p>

            <input
                type="file"
                id="fileInput"
                accept=accept
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />

            <Show
                when=move || held.with(Option::is_some)
                fallback=move || view! {
                    <div
                        class="upload-section"
                        class:drag-active=move || drag_active.get()
                        id="uploadZone"
                        on:dragenter=on_drag_over
                        on:dragover=on_drag_over
                        on:dragleave=on_drag_leave
                        on:drop=on_drop
                        on:click=trigger_file_input
                    >
                        <div class="upload-icon">"📤"</div>
                        <div class="upload-text">"Envie seu arquivo Excel"</div>
                        <div class="upload-hint">"Arraste e solte ou clique para selecionar"</div>
                        <div class="upload-hint mt-20">{hint.clone()}</div>
                    </div>
                }
            >
                <div class="file-card">
                    <div class="file-icon">"📊"</div>
                    <div class="file-info">
                        <div class="file-name">
                            {move || held.with(|f| f.as_ref().map(|f| f.name.clone()).unwrap_or_default())}
                        </div>
                        <div class="file-size">
                            {move || held.with(|f| f.as_ref().map(|f| f.size_label()).unwrap_or_default())}
                        </div>
                    </div>
                    <button
                        class="file-remove"
                        title="Remover"
                        disabled=move || busy.get()
                        on:click=on_remove
                    >"✕"</button>
                </div>
            </Show>
        </div>
    }
}
