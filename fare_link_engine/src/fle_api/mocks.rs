use flg_common::Secret;
use mockall::mock;

use crate::traits::{BankProvider, Coordinate, FeedItem, ProviderError, RideProvider, TripReceipt, TripSummary};

mock! {
    pub Ride {}
    impl RideProvider for Ride {
        fn authorization_url(&self, state: &str, redirect_uri: &str) -> String;
        async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<Secret<String>, ProviderError>;
        async fn trip_history(&self, access_token: &Secret<String>, offset: u32) -> Result<Vec<TripSummary>, ProviderError>;
        async fn trip_receipt(&self, access_token: &Secret<String>, request_id: &str) -> Result<TripReceipt, ProviderError>;
        async fn trip_dropoff(&self, access_token: &Secret<String>, request_id: &str) -> Result<Coordinate, ProviderError>;
    }
}

mock! {
    pub Bank {}
    impl BankProvider for Bank {
        async fn register_webhook(&self, access_token: &Secret<String>, account_id: &str, url: &str) -> Result<String, ProviderError>;
        async fn unregister_webhook(&self, access_token: &Secret<String>, webhook_id: &str) -> Result<(), ProviderError>;
        async fn create_feed_item(&self, access_token: &Secret<String>, account_id: &str, item: &FeedItem) -> Result<(), ProviderError>;
    }
}
