//! HTTP service and command line entry point for Biotools

pub mod cli;
pub mod i18n;
pub mod server;

pub use server::{router, serve, AppState};
