//! A minimal, read-only client for the Uber rider API.
//!
//! Covers exactly what the gateway needs: the OAuth authorization-code exchange, and
//! bearer-authenticated lookups of ride history, receipts and request details.

mod api;
mod config;
pub mod data_objects;
mod error;

pub use api::UberApi;
pub use config::UberConfig;
pub use error::UberApiError;
