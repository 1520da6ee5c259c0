//! Browser services.
//!
//! This module provides services for talking to the outside world:
//!
//! # Services
//!
//! - [`submission`] - Multipart POST to the submission endpoint via `gloo-net`
//! - [`clipboard`] - Async Clipboard API wrapper
//! - [`tabs`] - Opening links in a new browsing context

pub mod submission;
pub mod clipboard;
pub mod tabs;

pub use submission::*;
pub use clipboard::*;
pub use tabs::*;
