//! The webhook correlation engine: matches an inbound bank transaction event to the most
//! recent ride and posts an enriched feed item back to the bank account.

use std::fmt::Debug;

use flg_common::Secret;
use log::*;

use crate::{
    fle_api::errors::CorrelationError,
    helpers::{map_image_url, random_car_emoji},
    session_types::SessionId,
    traits::{BankProvider, FeedItem, RideProvider, SessionStore, TransactionEvent},
};

/// A transaction is relevant iff its description contains this marker, case-insensitively.
pub const RIDE_MARKER: &str = "UBER";

/// Number of most-recent history entries skipped before picking the candidate trip. Masks
/// in-flight and cancelled trips that have no settled receipt yet.
pub const HISTORY_OFFSET: u32 = 3;

/// The two non-error ways a delivery can end. `Ignored` must stay distinguishable from an
/// error: it is a normal no-op, with no external calls made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorrelationOutcome {
    /// The transaction description did not match the ride-provider marker.
    Ignored,
    /// A feed item was submitted to the bank.
    Published(FeedItem),
}

pub struct CorrelationApi<S, R, B> {
    store: S,
    ride: R,
    bank: B,
    maps_api_key: Secret<String>,
}

impl<S: Debug, R, B> Debug for CorrelationApi<S, R, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CorrelationApi ({:?})", self.store)
    }
}

impl<S, R, B> CorrelationApi<S, R, B>
where
    S: SessionStore,
    R: RideProvider,
    B: BankProvider,
{
    pub fn new(store: S, ride: R, bank: B, maps_api_key: Secret<String>) -> Self {
        Self { store, ride, bank, maps_api_key }
    }

    /// Runs the full pipeline for one delivery: relevance gate, session resolution, ride
    /// lookup, enrichment fetch, artifact construction, publish.
    ///
    /// Nothing here is idempotent; re-delivery of the same event produces a duplicate feed
    /// item. The bank's own delivery contract governs retries.
    pub async fn process_event(
        &self,
        session_id: &SessionId,
        event: &TransactionEvent,
    ) -> Result<CorrelationOutcome, CorrelationError> {
        // The gate runs before session resolution; an irrelevant event must cause no lookups.
        if !event.description.to_uppercase().contains(RIDE_MARKER) {
            debug!("📨️ Ignored transaction {}: \"{}\"", event.id, event.description);
            return Ok(CorrelationOutcome::Ignored);
        }
        let session = self
            .store
            .fetch(session_id)
            .await?
            .ok_or_else(|| CorrelationError::SessionNotFound(session_id.to_string()))?;
        let access_token = session
            .uber_access_token
            .as_ref()
            .ok_or_else(|| CorrelationError::SessionNotLinked(session_id.to_string()))?;

        let history = self.ride.trip_history(access_token, HISTORY_OFFSET).await?;
        let trip = history.into_iter().next().ok_or(CorrelationError::NoTripFound)?;
        debug!("📨️ Candidate trip {} ({}) for transaction {}", trip.request_id, trip.status, event.id);

        let receipt = self.ride.trip_receipt(access_token, &trip.request_id).await?;
        let dropoff = self.ride.trip_dropoff(access_token, &trip.request_id).await?;

        let image_url = map_image_url(&trip.start.coordinate, &dropoff, self.maps_api_key.reveal())?;
        let title = format!("{} {} Uber trip from {}", random_car_emoji(), receipt.total_charged, trip.start.display_name);
        let body = format!("{} miles travelled", receipt.distance);
        let item = FeedItem { title, image_url, body };

        self.bank.create_feed_item(&session.mondo_access_token, &session.mondo_account_id, &item).await?;
        info!("📨️ Feed item published for transaction {} on account {}", event.id, session.mondo_account_id);
        Ok(CorrelationOutcome::Published(item))
    }
}
