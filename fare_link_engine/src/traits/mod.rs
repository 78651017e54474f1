//! Capability traits the engine depends on.
//!
//! * [`SessionStore`] is the authoritative mapping from session id to [`crate::session_types::Session`].
//!   It is injected rather than being a process-wide variable so the orchestrator and the
//!   correlation engine can be tested against an in-memory fake, and so a persistent store could
//!   be swapped in later.
//! * [`RideProvider`] and [`BankProvider`] wrap the two external services. They expose exactly
//!   the uniform error surface the engine needs to reason about ([`ProviderError`]).

mod data_objects;
mod providers;
mod session_store;

pub use data_objects::{Coordinate, FeedItem, Place, TransactionEvent, TripReceipt, TripSummary};
pub use providers::{BankProvider, ProviderError, RideProvider};
pub use session_store::{SessionStore, SessionStoreError};
