use fare_link_engine::traits::{BankProvider, FeedItem, ProviderError, TransactionEvent};
use flg_common::Secret;
use mondo_tools::{
    data_objects::{NewFeedItem, WebhookEvent},
    MondoApi,
    MondoApiError,
    MondoConfig,
};

use crate::errors::ServerError;

#[derive(Clone)]
pub struct MondoProvider {
    api: MondoApi,
}

impl MondoProvider {
    pub fn new(config: MondoConfig) -> Result<Self, ServerError> {
        let api = MondoApi::new(config).map_err(|e| ServerError::InitializeError(e.to_string()))?;
        Ok(Self { api })
    }
}

impl BankProvider for MondoProvider {
    async fn register_webhook(
        &self,
        access_token: &Secret<String>,
        account_id: &str,
        url: &str,
    ) -> Result<String, ProviderError> {
        let webhook =
            self.api.register_webhook(access_token.reveal(), account_id, url).await.map_err(provider_error)?;
        Ok(webhook.id)
    }

    async fn unregister_webhook(&self, access_token: &Secret<String>, webhook_id: &str) -> Result<(), ProviderError> {
        self.api.unregister_webhook(access_token.reveal(), webhook_id).await.map_err(provider_error)
    }

    async fn create_feed_item(
        &self,
        access_token: &Secret<String>,
        account_id: &str,
        item: &FeedItem,
    ) -> Result<(), ProviderError> {
        let new_item = NewFeedItem {
            title: item.title.clone(),
            image_url: item.image_url.clone(),
            body: item.body.clone(),
        };
        self.api.create_feed_item(access_token.reveal(), account_id, &new_item).await.map_err(provider_error)
    }
}

/// Lifts an inbound delivery into the engine's provider-neutral event type.
pub fn transaction_event(event: WebhookEvent) -> TransactionEvent {
    TransactionEvent {
        event_type: event.event_type,
        amount: event.data.amount,
        currency: event.data.currency,
        description: event.data.description,
        created: event.data.created,
        id: event.data.id,
    }
}

fn provider_error(e: MondoApiError) -> ProviderError {
    match e {
        MondoApiError::Remote { status, body } => ProviderError::Remote { status, body },
        MondoApiError::Decode(msg) => ProviderError::Decode(msg),
        MondoApiError::Transport(msg) | MondoApiError::Initialization(msg) => ProviderError::Transport(msg),
    }
}
