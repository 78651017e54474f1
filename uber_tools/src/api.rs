use std::sync::Arc;

use log::*;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    config::UberConfig,
    data_objects::{HistoryResponse, ReceiptResponse, RequestDetails, TokenResponse},
    UberApiError,
};

#[derive(Clone)]
pub struct UberApi {
    config: UberConfig,
    client: Arc<Client>,
}

impl UberApi {
    pub fn new(config: UberConfig) -> Result<Self, UberApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| UberApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    /// The URL the user must visit to grant this app access to their ride history.
    /// `state` is carried through the OAuth flow verbatim and returned to the redirect URI.
    pub fn authorize_url(&self, state: &str, redirect_uri: &str) -> String {
        format!(
            "{}/oauth/authorize?client_id={}&response_type=code&state={state}&redirect_uri={redirect_uri}",
            self.config.auth_url, self.config.client_id
        )
    }

    /// Exchanges an authorization code for an access token. The `redirect_uri` must be the exact
    /// URI that was advertised in [`UberApi::authorize_url`], or Uber rejects the exchange.
    pub async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<TokenResponse, UberApiError> {
        let url = format!("{}/oauth/token", self.config.auth_url);
        let form = [
            ("client_secret", self.config.client_secret.reveal().as_str()),
            ("client_id", self.config.client_id.as_str()),
            ("grant_type", "authorization_code"),
            ("redirect_uri", redirect_uri),
            ("code", code),
        ];
        trace!("🚕️ Requesting OAuth token from {url}");
        let response =
            self.client.post(&url).form(&form).send().await.map_err(|e| UberApiError::Transport(e.to_string()))?;
        let token = decode_response::<TokenResponse>(response).await?;
        debug!("🚕️ OAuth token exchange succeeded");
        Ok(token)
    }

    /// Fetches the user's ride history, most recent first, skipping the first `offset` entries.
    pub async fn history(&self, access_token: &str, offset: u32) -> Result<HistoryResponse, UberApiError> {
        let url = format!("{}/v1.2/history?offset={offset}", self.config.api_url);
        self.get(access_token, &url).await
    }

    pub async fn receipt(&self, access_token: &str, request_id: &str) -> Result<ReceiptResponse, UberApiError> {
        let url = format!("{}/v1/requests/{request_id}/receipt", self.config.api_url);
        self.get(access_token, &url).await
    }

    pub async fn request_details(&self, access_token: &str, request_id: &str) -> Result<RequestDetails, UberApiError> {
        let url = format!("{}/v1/requests/{request_id}", self.config.api_url);
        self.get(access_token, &url).await
    }

    async fn get<T: DeserializeOwned>(&self, access_token: &str, url: &str) -> Result<T, UberApiError> {
        trace!("🚕️ GET {url}");
        let response = self
            .client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| UberApiError::Transport(e.to_string()))?;
        decode_response(response).await
    }
}

async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, UberApiError> {
    if response.status().is_success() {
        response.json::<T>().await.map_err(|e| UberApiError::Decode(e.to_string()))
    } else {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| UberApiError::Transport(e.to_string()))?;
        Err(UberApiError::Remote { status, body })
    }
}
