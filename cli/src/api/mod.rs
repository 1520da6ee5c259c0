//! Development receiver.
//!
//! A local stand-in for the submission endpoint, started with `edital serve`.

pub mod server;
pub mod types;

pub use server::{router, serve, start_server, ReceiverState};
pub use types::*;
