use thiserror::Error;

use crate::{
    helpers::MapUrlError,
    traits::{ProviderError, SessionStoreError},
};

/// Failures of the linking orchestrator: login, OAuth callback, logout.
#[derive(Debug, Error)]
pub enum LinkingError {
    #[error("{0}")]
    ValidationError(String),
    #[error("No such session {0}")]
    SessionNotFound(String),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    StoreError(#[from] SessionStoreError),
}

/// Failures of the webhook correlation pipeline. An irrelevant event is *not* an error; it is
/// reported as [`crate::CorrelationOutcome::Ignored`].
#[derive(Debug, Error)]
pub enum CorrelationError {
    #[error("No such session {0}")]
    SessionNotFound(String),
    #[error("Session {0} has not completed the ride-provider handshake")]
    SessionNotLinked(String),
    #[error("No eligible trip found in the ride history")]
    NoTripFound,
    #[error(transparent)]
    MalformedCoordinates(#[from] MapUrlError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    StoreError(#[from] SessionStoreError),
}
