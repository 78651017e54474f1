use fare_link_engine::traits::{Coordinate, Place, ProviderError, RideProvider, TripReceipt, TripSummary};
use flg_common::Secret;
use uber_tools::{data_objects::HistoryItem, UberApi, UberApiError, UberConfig};

use crate::errors::ServerError;

#[derive(Clone)]
pub struct UberProvider {
    api: UberApi,
}

impl UberProvider {
    pub fn new(config: UberConfig) -> Result<Self, ServerError> {
        let api = UberApi::new(config).map_err(|e| ServerError::InitializeError(e.to_string()))?;
        Ok(Self { api })
    }
}

impl RideProvider for UberProvider {
    fn authorization_url(&self, state: &str, redirect_uri: &str) -> String {
        self.api.authorize_url(state, redirect_uri)
    }

    async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<Secret<String>, ProviderError> {
        let token = self.api.exchange_code(code, redirect_uri).await.map_err(provider_error)?;
        Ok(Secret::new(token.access_token))
    }

    async fn trip_history(
        &self,
        access_token: &Secret<String>,
        offset: u32,
    ) -> Result<Vec<TripSummary>, ProviderError> {
        let response = self.api.history(access_token.reveal(), offset).await.map_err(provider_error)?;
        Ok(response.history.into_iter().map(trip_summary).collect())
    }

    async fn trip_receipt(
        &self,
        access_token: &Secret<String>,
        request_id: &str,
    ) -> Result<TripReceipt, ProviderError> {
        let receipt = self.api.receipt(access_token.reveal(), request_id).await.map_err(provider_error)?;
        Ok(TripReceipt { total_charged: receipt.total_charged, distance: receipt.distance })
    }

    async fn trip_dropoff(&self, access_token: &Secret<String>, request_id: &str) -> Result<Coordinate, ProviderError> {
        let details = self.api.request_details(access_token.reveal(), request_id).await.map_err(provider_error)?;
        Ok(Coordinate { latitude: details.location.latitude, longitude: details.location.longitude })
    }
}

fn trip_summary(item: HistoryItem) -> TripSummary {
    TripSummary {
        request_id: item.request_id,
        status: item.status,
        distance: item.distance,
        start: Place {
            coordinate: Coordinate { latitude: item.start_city.latitude, longitude: item.start_city.longitude },
            display_name: item.start_city.display_name,
        },
    }
}

fn provider_error(e: UberApiError) -> ProviderError {
    match e {
        UberApiError::Remote { status, body } => ProviderError::Remote { status, body },
        UberApiError::Decode(msg) => ProviderError::Decode(msg),
        UberApiError::Transport(msg) | UberApiError::Initialization(msg) => ProviderError::Transport(msg),
    }
}
