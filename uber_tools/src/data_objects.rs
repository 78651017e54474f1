//! Field-for-field DTOs for the Uber rider API responses the gateway consumes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u32,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub scope: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub offset: i64,
    pub limit: i64,
    pub count: i64,
    pub history: Vec<HistoryItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryItem {
    pub status: String,
    pub distance: f64,
    #[serde(default)]
    pub request_time: i64,
    #[serde(default)]
    pub start_time: i64,
    #[serde(default)]
    pub end_time: i64,
    pub start_city: City,
    pub request_id: String,
    #[serde(default)]
    pub product_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

/// Fare and distance come back as pre-formatted strings, e.g. `"$5.92"` and `"1.49"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptResponse {
    pub request_id: String,
    pub total_charged: String,
    pub distance: String,
    #[serde(default)]
    pub distance_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestDetails {
    pub status: String,
    pub location: Location,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}
