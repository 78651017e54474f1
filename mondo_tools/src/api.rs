use std::sync::Arc;

use log::*;
use reqwest::Client;

use crate::{
    config::MondoConfig,
    data_objects::{NewFeedItem, RegisterWebhookResponse, Webhook},
    MondoApiError,
};

#[derive(Clone)]
pub struct MondoApi {
    config: MondoConfig,
    client: Arc<Client>,
}

impl MondoApi {
    pub fn new(config: MondoConfig) -> Result<Self, MondoApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MondoApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    /// Registers `url` to receive `transaction.created` events for `account_id`.
    pub async fn register_webhook(
        &self,
        access_token: &str,
        account_id: &str,
        url: &str,
    ) -> Result<Webhook, MondoApiError> {
        let endpoint = format!("{}/webhooks", self.config.api_url);
        let form = [("account_id", account_id), ("url", url)];
        debug!("🏦️ Registering webhook {url} for account {account_id}");
        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(access_token)
            .form(&form)
            .send()
            .await
            .map_err(|e| MondoApiError::Transport(e.to_string()))?;
        if !response.status().is_success() {
            return Err(remote_error(response).await);
        }
        let registered =
            response.json::<RegisterWebhookResponse>().await.map_err(|e| MondoApiError::Decode(e.to_string()))?;
        info!("🏦️ Registered webhook id={}", registered.webhook.id);
        Ok(registered.webhook)
    }

    pub async fn unregister_webhook(&self, access_token: &str, webhook_id: &str) -> Result<(), MondoApiError> {
        let endpoint = format!("{}/webhooks/{webhook_id}", self.config.api_url);
        debug!("🏦️ Unregistering webhook id={webhook_id}");
        let response = self
            .client
            .delete(&endpoint)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| MondoApiError::Transport(e.to_string()))?;
        if !response.status().is_success() {
            return Err(remote_error(response).await);
        }
        info!("🏦️ Unregistered webhook id={webhook_id}");
        Ok(())
    }

    /// Attaches an image feed item to the account's transaction feed.
    pub async fn create_feed_item(
        &self,
        access_token: &str,
        account_id: &str,
        item: &NewFeedItem,
    ) -> Result<(), MondoApiError> {
        let endpoint = format!("{}/feed", self.config.api_url);
        let form = [
            ("account_id", account_id),
            ("type", "image"),
            ("params[title]", item.title.as_str()),
            ("params[image_url]", item.image_url.as_str()),
            ("params[body]", item.body.as_str()),
        ];
        debug!("🏦️ Creating feed item \"{}\" on account {account_id}", item.title);
        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(access_token)
            .form(&form)
            .send()
            .await
            .map_err(|e| MondoApiError::Transport(e.to_string()))?;
        if !response.status().is_success() {
            return Err(remote_error(response).await);
        }
        info!("🏦️ Created feed item on account {account_id}");
        Ok(())
    }
}

async fn remote_error(response: reqwest::Response) -> MondoApiError {
    let status = response.status().as_u16();
    match response.text().await {
        Ok(body) => MondoApiError::Remote { status, body },
        Err(e) => MondoApiError::Transport(e.to_string()),
    }
}
