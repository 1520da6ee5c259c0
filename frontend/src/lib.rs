//! Edital - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for naming a project, uploading a spreadsheet
//! and following the processing through the returned tracking link.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! │  (UploaderConfig, Toasts, ResultStore provided as context)   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  "/"  IntakePage                                             │
//! │  ├── Hero (title, description)                              │
//! │  ├── TemplateDownload                                        │
//! │  ├── ProjectNameInput                                        │
//! │  ├── UploadSection (drag & drop + picker)                   │
//! │  └── SubmitPanel ──────── submit() ──▶ ResultStore          │
//! │      (SubmissionLatch owned by the page)                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  "/resultado"  ResultPage (link, copy, open, back)          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToastHost, Footer                                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Build-time configuration
//! - [`types`] - Shared UI state (toasts, result store)
//! - [`components`] - UI components
//! - [`services`] - Browser integration (HTTP transport, clipboard, tabs)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::types::SelectedFile;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{ResultStore, SubmissionLatch, ToastEntry, Toasts};

// Components
pub use components::*;

// Services
pub use services::*;

/// Route of the result view.
pub const RESULT_ROUTE: &str = "/resultado";

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Page-level state shared through context
    provide_context(uploader_config());
    provide_context(Toasts::new());
    provide_context(ResultStore::new());

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=IntakePage/>
                    <Route path=RESULT_ROUTE view=ResultPage/>
                </Routes>
            </main>
        </Router>
        <ToastHost/>
        <Footer/>
    }
}

#[component]
fn IntakePage() -> impl IntoView {
    let results = expect_context::<ResultStore>();

    let (project_name, set_project_name) = create_signal(String::new());
    let (selected_file, set_selected_file) = create_signal(None::<SelectedFile>);
    // Page-wide so it survives the submit panel being unmounted
    let latch = SubmissionLatch::new();

    let on_file_accepted = move |file: SelectedFile| {
        log::info!("📄 File ready: {}", file.name);
        types::hold_new_file(results, set_selected_file, file);
    };

    let on_file_removed = move |_: ()| set_selected_file.set(None);

    view! {
        <div class="container">
            <Hero/>
            <TemplateDownload/>
            <ProjectNameInput project_name=project_name set_project_name=set_project_name/>
            <UploadSection
                on_file_accepted=on_file_accepted
                on_file_removed=on_file_removed
                busy=latch.is_busy()
            />

            <Show
                when=move || selected_file.with(Option::is_some)
                fallback=|| view! { }
            >
                <SubmitPanel selected_file=selected_file project_name=project_name latch=latch/>
            </Show>
        </div>
    }
}
