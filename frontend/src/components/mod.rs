//! UI Components for the Edital application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//! - [`ToastHost`] - Notification stack
//!
//! # Feature Components
//! - [`TemplateDownload`] - Link to the spreadsheet template
//! - [`ProjectNameInput`] - Project identification field
//! - [`UploadSection`] - Spreadsheet intake with drag & drop
//! - [`SubmitPanel`] - Send button and processing indicator
//! - [`ResultPage`] - Tracking link with copy/open actions

mod hero;
mod template;
mod project_name;
mod upload;
mod submit;
mod result;
mod toast;
mod footer;

pub use hero::*;
pub use template::*;
pub use project_name::*;
pub use upload::*;
pub use submit::*;
pub use result::*;
pub use toast::*;
pub use footer::*;
