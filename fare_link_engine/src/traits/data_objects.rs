//! Provider-neutral data carried through the correlation pipeline. All of these are transient:
//! trip records are fetched per correlation, feed items are not retained after submission, and
//! events are evaluated once and discarded.

use chrono::{DateTime, Utc};
use flg_common::Money;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub coordinate: Coordinate,
    pub display_name: String,
}

/// One entry of the user's ride history, most recent first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    pub request_id: String,
    pub status: String,
    pub distance: f64,
    pub start: Place,
}

/// Fare and distance as the provider formats them, e.g. `"12.34"` / `"5.2"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripReceipt {
    pub total_charged: String,
    pub distance: String,
}

/// The enrichment artifact posted back to the bank, scoped to one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: String,
    pub image_url: String,
    pub body: String,
}

/// An inbound bank transaction event, already resolved to its delivery context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionEvent {
    pub event_type: String,
    pub amount: Money,
    pub currency: String,
    pub description: String,
    pub created: DateTime<Utc>,
    pub id: String,
}
