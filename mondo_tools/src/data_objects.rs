//! DTOs for the Mondo API: outbound webhook/feed management and inbound event deliveries.

use chrono::{DateTime, Utc};
use flg_common::Money;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Webhook {
    pub id: String,
    pub account_id: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterWebhookResponse {
    pub webhook: Webhook,
}

/// A feed item as accepted by `POST /feed`. The params are flattened into form fields
/// (`params[title]` etc.) by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFeedItem {
    pub title: String,
    pub image_url: String,
    pub body: String,
}

/// An inbound webhook delivery. Mondo currently only sends `transaction.created`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: TransactionData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionData {
    /// Minor units; negative for debits.
    pub amount: Money,
    pub created: DateTime<Utc>,
    pub currency: String,
    pub description: String,
    pub id: String,
}
