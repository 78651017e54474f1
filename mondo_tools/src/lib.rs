//! A minimal client for the Mondo banking API.
//!
//! Covers webhook registration and removal on a bank account, and posting enriched
//! feed items to the account's transaction feed. Inbound webhook event DTOs live in
//! [`data_objects`] so the server can deserialize deliveries with the same types.

mod api;
mod config;
pub mod data_objects;
mod error;

pub use api::MondoApi;
pub use config::MondoConfig;
pub use error::MondoApiError;
