use flg_common::Secret;
use thiserror::Error;

use crate::traits::{Coordinate, FeedItem, TripReceipt, TripSummary};

/// The uniform error surface of both provider clients. A non-success HTTP status becomes
/// [`ProviderError::Remote`] carrying the response body verbatim; network-level failures become
/// [`ProviderError::Transport`]; malformed response bodies become [`ProviderError::Decode`].
/// Nothing is retried internally.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("The provider rejected the request. Status {status}. {body}")]
    Remote { status: u16, body: String },
    #[error("Could not reach the provider. {0}")]
    Transport(String),
    #[error("Could not decode the provider response. {0}")]
    Decode(String),
}

/// Read-only access to the ride-hailing provider, plus the OAuth code exchange.
#[allow(async_fn_in_trait)]
pub trait RideProvider {
    /// The authorization URL the user is redirected to. Pure; no network contact.
    fn authorization_url(&self, state: &str, redirect_uri: &str) -> String;

    /// Exchanges an authorization code for an access token. `redirect_uri` must be the exact
    /// URI advertised during authorization; the provider rejects mismatches.
    async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<Secret<String>, ProviderError>;

    /// Ride history, most recent first, with the first `offset` entries excluded.
    async fn trip_history(&self, access_token: &Secret<String>, offset: u32)
        -> Result<Vec<TripSummary>, ProviderError>;

    async fn trip_receipt(&self, access_token: &Secret<String>, request_id: &str)
        -> Result<TripReceipt, ProviderError>;

    /// The drop-off location of a trip, from its request detail record.
    async fn trip_dropoff(&self, access_token: &Secret<String>, request_id: &str)
        -> Result<Coordinate, ProviderError>;
}

/// Webhook management and feed-item creation against the banking provider.
#[allow(async_fn_in_trait)]
pub trait BankProvider {
    /// Registers `url` to receive transaction events for `account_id`. Returns the webhook id.
    async fn register_webhook(
        &self,
        access_token: &Secret<String>,
        account_id: &str,
        url: &str,
    ) -> Result<String, ProviderError>;

    async fn unregister_webhook(&self, access_token: &Secret<String>, webhook_id: &str) -> Result<(), ProviderError>;

    async fn create_feed_item(
        &self,
        access_token: &Secret<String>,
        account_id: &str,
        item: &FeedItem,
    ) -> Result<(), ProviderError>;
}
