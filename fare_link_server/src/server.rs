use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use fare_link_engine::{CorrelationApi, LinkingApi, LinkingUrls, MemorySessionStore};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    integrations::{mondo::MondoProvider, uber::UberProvider},
    routes::{health, index, LoginRoute, LogoutRoute, MondoWebhookRoute, UberCallbackRoute},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let store = MemorySessionStore::default();
    let srv = create_server_instance(config, store)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig, store: MemorySessionStore) -> Result<Server, ServerError> {
    // The reqwest clients are connection pools behind an Arc, so building the providers once
    // and cloning them into each worker shares the pools.
    let uber = UberProvider::new(config.uber.clone())?;
    let mondo = MondoProvider::new(config.mondo.clone())?;
    let urls = LinkingUrls::from_public_url(&config.public_url);
    let srv = HttpServer::new(move || {
        let linking_api = LinkingApi::new(store.clone(), uber.clone(), mondo.clone(), urls.clone());
        let correlation_api =
            CorrelationApi::new(store.clone(), uber.clone(), mondo.clone(), config.maps_api_key.clone());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("flg::access_log"))
            .app_data(web::Data::new(linking_api))
            .app_data(web::Data::new(correlation_api))
            .service(health)
            .service(index)
            .service(LoginRoute::<MemorySessionStore, UberProvider, MondoProvider>::new())
            .service(UberCallbackRoute::<MemorySessionStore, UberProvider, MondoProvider>::new())
            .service(MondoWebhookRoute::<MemorySessionStore, UberProvider, MondoProvider>::new())
            .service(LogoutRoute::<MemorySessionStore, UberProvider, MondoProvider>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
