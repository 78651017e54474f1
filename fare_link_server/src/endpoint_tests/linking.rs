use actix_web::{http::StatusCode, web, web::ServiceConfig};
use fare_link_engine::{
    session_types::SessionStatus,
    traits::SessionStore,
    LinkingApi,
    LinkingUrls,
    MemorySessionStore,
};
use flg_common::Secret;

use super::helpers::{extract_state, get_request, post_form};
use crate::{
    endpoint_tests::mocks::{MockBank, MockRide},
    routes::{health, LoginRoute, LogoutRoute, UberCallbackRoute},
};

#[actix_web::test]
async fn health_check() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/health", |cfg| {
        cfg.service(health);
    })
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "👍️\n");
}

#[actix_web::test]
async fn login_with_missing_credentials_is_rejected() {
    let _ = env_logger::try_init().ok();
    let store = MemorySessionStore::default();
    // No expectations; reaching either provider fails the test.
    let (ride, bank) = (MockRide::new(), MockBank::new());
    let store2 = store.clone();
    let (status, body) =
        post_form("/login", &[("mondo-access-token", "acc-tok")], move |cfg| configure(cfg, store2, ride, bank)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("required: mondo-access-token, mondo-account-id"), "unexpected body: {body}");
    assert!(store.is_empty().await);
}

#[actix_web::test]
async fn login_and_callback_link_the_session() {
    let _ = env_logger::try_init().ok();
    let store = MemorySessionStore::default();

    let mut ride = MockRide::new();
    ride.expect_authorization_url()
        .withf(|_, redirect| redirect == "https://flg.test/uber/callback")
        .returning(|state, redirect| {
            format!("https://login.uber.test/oauth/authorize?state={state}&redirect_uri={redirect}")
        });
    let store2 = store.clone();
    let form = [("mondo-access-token", "acc-tok"), ("mondo-account-id", "acc_123")];
    let (status, body) = post_form("/login", &form, move |cfg| configure(cfg, store2, ride, MockBank::new())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("https://login.uber.test/oauth/authorize"), "unexpected body: {body}");
    let state = extract_state(&body);
    assert_eq!(store.fetch(&state.clone().into()).await.unwrap().unwrap().status, SessionStatus::AwaitingRideAuth);

    let mut ride = MockRide::new();
    ride.expect_exchange_code()
        .withf(|code, _| code == "auth-code-1")
        .returning(|_, _| Ok(Secret::new("uber-tok".to_string())));
    let mut bank = MockBank::new();
    let expected_url = format!("https://flg.test/mondo/webhook/{state}");
    bank.expect_register_webhook()
        .withf(move |_, account, url| account == "acc_123" && url == expected_url)
        .times(1)
        .returning(|_, _, _| Ok("hook_1".to_string()));
    let store2 = store.clone();
    let (status, body) = get_request(&format!("/uber/callback?code=auth-code-1&state={state}"), move |cfg| {
        configure(cfg, store2, ride, bank)
    })
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("All set"), "unexpected body: {body}");

    let session = store.fetch(&state.into()).await.unwrap().expect("session vanished");
    assert_eq!(session.status, SessionStatus::Active);
    assert_eq!(session.mondo_webhook_id.as_deref(), Some("hook_1"));
}

#[actix_web::test]
async fn callback_with_unknown_state_is_a_404() {
    let _ = env_logger::try_init().ok();
    let store = MemorySessionStore::default();
    let (status, body) = get_request("/uber/callback?code=auth-code-1&state=sess-unknown", move |cfg| {
        configure(cfg, store, MockRide::new(), MockBank::new())
    })
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("No such session sess-unknown"), "unexpected body: {body}");
}

#[actix_web::test]
async fn logout_unregisters_the_webhook_and_removes_the_session() {
    let _ = env_logger::try_init().ok();
    let store = MemorySessionStore::default();
    let session = store.create(Secret::new("acc-tok".to_string()), "acc_123").await.unwrap();
    store
        .update(&session.session_id, |s| {
            s.uber_access_token = Some(Secret::new("uber-tok".to_string()));
            s.mondo_webhook_id = Some("hook_9".to_string());
            s.advance_to(SessionStatus::Active);
        })
        .await
        .unwrap();

    let mut bank = MockBank::new();
    bank.expect_unregister_webhook()
        .withf(|_, webhook_id| webhook_id == "hook_9")
        .times(1)
        .returning(|_, _| Ok(()));
    let store2 = store.clone();
    let form = [("session_id", session.session_id.to_string())];
    let (status, body) =
        post_form("/logout", &form, move |cfg| configure(cfg, store2, MockRide::new(), bank)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Logged out."), "unexpected body: {body}");
    assert!(store.is_empty().await);
}

fn configure(cfg: &mut ServiceConfig, store: MemorySessionStore, ride: MockRide, bank: MockBank) {
    let api = LinkingApi::new(store, ride, bank, LinkingUrls::from_public_url("https://flg.test"));
    cfg.service(LoginRoute::<MemorySessionStore, MockRide, MockBank>::new())
        .service(UberCallbackRoute::<MemorySessionStore, MockRide, MockBank>::new())
        .service(LogoutRoute::<MemorySessionStore, MockRide, MockBank>::new())
        .app_data(web::Data::new(api));
}
