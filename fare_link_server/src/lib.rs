//! # Fare Link Server
//! The HTTP surface of the fare link gateway. It is responsible for:
//! * The login form that captures the user's bank credentials and starts a linking session.
//! * The OAuth callback that completes the ride-provider handshake and registers the bank webhook.
//! * Receiving bank transaction webhooks and handing them to the correlation engine.
//! * Logout, which unregisters the webhook and discards the session.
//!
//! ## Configuration
//! The server is configured via `FLG_*` environment variables. See [config](config/index.html).
//!
//! ## Routes
//! * `GET /` — landing page with the login form.
//! * `POST /login` — starts a linking session, returns the authorization redirect page.
//! * `GET /uber/callback` — OAuth redirect target (`code` + `state`).
//! * `POST /mondo/webhook/{session_id}` — inbound bank transaction events.
//! * `POST /logout` — unregisters the webhook and removes the session.
//! * `GET /health` — health check.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod integrations;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
