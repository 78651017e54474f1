//! Fare Link Engine
//!
//! The core of the fare link gateway. It owns the linking session lifecycle (one bank identity
//! tied to one ride-hailing identity via an OAuth handshake) and the webhook correlation
//! pipeline that turns an inbound bank transaction event into an enriched feed item.
//!
//! The engine is provider-agnostic: the ride-hailing and banking services are capabilities
//! ([`traits::RideProvider`], [`traits::BankProvider`]) injected into the two public APIs,
//! [`LinkingApi`] and [`CorrelationApi`]. Session state lives behind the
//! [`traits::SessionStore`] capability; [`MemorySessionStore`] is the only backend, since
//! sessions are ephemeral by design and do not survive a restart.

pub mod helpers;
pub mod session_types;
mod store;
pub mod traits;

mod fle_api;

pub use fle_api::{
    correlation_api::{CorrelationApi, CorrelationOutcome, HISTORY_OFFSET, RIDE_MARKER},
    errors::{CorrelationError, LinkingError},
    linking_api::{LinkingApi, LinkingUrls, LoginRedirect},
};
pub use store::MemorySessionStore;
