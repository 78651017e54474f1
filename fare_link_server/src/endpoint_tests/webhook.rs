use actix_web::{http::StatusCode, test, test::TestRequest, web, web::ServiceConfig, App};
use fare_link_engine::{
    session_types::{Session, SessionStatus},
    traits::{Coordinate, Place, SessionStore, TripReceipt, TripSummary},
    CorrelationApi,
    MemorySessionStore,
    HISTORY_OFFSET,
};
use flg_common::Secret;
use serde_json::json;

use super::helpers::post_json;
use crate::{
    endpoint_tests::mocks::{MockBank, MockRide},
    routes::MondoWebhookRoute,
};

#[actix_web::test]
async fn irrelevant_transaction_is_ignored_without_any_lookups() {
    let _ = env_logger::try_init().ok();
    let store = MemorySessionStore::default();
    // The store is empty and the mocks carry no expectations, so any session lookup or
    // provider call fails the test.
    let (status, body) = post_json("/mondo/webhook/sess-1", event("TESCO STORES 3297"), move |cfg| {
        configure(cfg, store, MockRide::new(), MockBank::new())
    })
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Transaction ignored."), "unexpected body: {body}");
}

#[actix_web::test]
async fn relevant_transaction_for_unknown_session_is_a_404() {
    let _ = env_logger::try_init().ok();
    let store = MemorySessionStore::default();
    let (status, body) = post_json("/mondo/webhook/sess-gone", event("UBER HELP.UBER.COM"), move |cfg| {
        configure(cfg, store, MockRide::new(), MockBank::new())
    })
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("No such session sess-gone"), "unexpected body: {body}");
}

#[actix_web::test]
async fn session_without_ride_authorization_is_a_conflict() {
    let _ = env_logger::try_init().ok();
    let store = MemorySessionStore::default();
    let session = seed_session(&store, false).await;
    let path = format!("/mondo/webhook/{}", session.session_id);
    let (status, body) = post_json(&path, event("UBER HELP.UBER.COM"), move |cfg| {
        configure(cfg, store, MockRide::new(), MockBank::new())
    })
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body.contains(session.session_id.as_str()), "unexpected body: {body}");
}

#[actix_web::test]
async fn empty_ride_history_publishes_nothing() {
    let _ = env_logger::try_init().ok();
    let store = MemorySessionStore::default();
    let session = seed_session(&store, true).await;
    let mut ride = MockRide::new();
    ride.expect_trip_history().withf(|_, offset| *offset == HISTORY_OFFSET).returning(|_, _| Ok(vec![]));
    let mut bank = MockBank::new();
    bank.expect_create_feed_item().times(0);
    let path = format!("/mondo/webhook/{}", session.session_id);
    let (status, body) = post_json(&path, event("UBER TRIP 4PVPI"), move |cfg| configure(cfg, store, ride, bank)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("No eligible trip"), "unexpected body: {body}");
}

#[actix_web::test]
async fn matching_transaction_publishes_a_feed_item() {
    let _ = env_logger::try_init().ok();
    let store = MemorySessionStore::default();
    let session = seed_session(&store, true).await;
    let (ride, bank) = correlating_mocks(1);
    let path = format!("/mondo/webhook/{}", session.session_id);
    let (status, body) = post_json(&path, event("UBER TRIP 4PVPI"), move |cfg| configure(cfg, store, ride, bank)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Feed item created."), "unexpected body: {body}");
}

/// Redelivery of the same event is not deduplicated; each delivery runs the full pipeline and
/// publishes its own feed item.
#[actix_web::test]
async fn duplicate_delivery_publishes_twice() {
    let _ = env_logger::try_init().ok();
    let store = MemorySessionStore::default();
    let session = seed_session(&store, true).await;
    let (ride, bank) = correlating_mocks(2);

    let api = CorrelationApi::new(store, ride, bank, Secret::new("maps-key".to_string()));
    let app = App::new()
        .service(MondoWebhookRoute::<MemorySessionStore, MockRide, MockBank>::new())
        .app_data(web::Data::new(api));
    let service = test::init_service(app).await;
    let path = format!("/mondo/webhook/{}", session.session_id);
    for _ in 0..2 {
        let req = TestRequest::post().uri(&path).set_json(&event("UBER TRIP 4PVPI")).to_request();
        let res = test::call_service(&service, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}

#[actix_web::test]
async fn receipt_failure_aborts_the_pipeline() {
    let _ = env_logger::try_init().ok();
    let store = MemorySessionStore::default();
    let session = seed_session(&store, true).await;
    let mut ride = MockRide::new();
    ride.expect_trip_history().returning(|_, _| Ok(vec![trip()]));
    ride.expect_trip_receipt().returning(|_, _| {
        Err(fare_link_engine::traits::ProviderError::Remote { status: 500, body: "boom".to_string() })
    });
    let mut bank = MockBank::new();
    bank.expect_create_feed_item().times(0);
    let path = format!("/mondo/webhook/{}", session.session_id);
    let (status, _) = post_json(&path, event("UBER TRIP 4PVPI"), move |cfg| configure(cfg, store, ride, bank)).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

async fn seed_session(store: &MemorySessionStore, linked: bool) -> Session {
    let session = store.create(Secret::new("acc-tok".to_string()), "acc_123").await.unwrap();
    store
        .update(&session.session_id, |s| {
            if linked {
                s.uber_access_token = Some(Secret::new("uber-tok".to_string()));
                s.mondo_webhook_id = Some("hook_1".to_string());
                s.advance_to(SessionStatus::Active);
            } else {
                s.advance_to(SessionStatus::AwaitingRideAuth);
            }
        })
        .await
        .unwrap()
        .expect("session vanished")
}

fn event(description: &str) -> serde_json::Value {
    json!({
        "type": "transaction.created",
        "data": {
            "amount": -2350,
            "created": "2026-08-14T09:55:00Z",
            "currency": "GBP",
            "description": description,
            "id": "tx_00008zIcpb1TB4yeIFXMzx"
        }
    })
}

fn trip() -> TripSummary {
    TripSummary {
        request_id: "req_77".to_string(),
        status: "completed".to_string(),
        distance: 5.2,
        start: Place {
            coordinate: Coordinate { latitude: 51.5287, longitude: -0.1015 },
            display_name: "Old Street".to_string(),
        },
    }
}

/// Mocks for a fully successful correlation, expecting `times` complete runs.
fn correlating_mocks(times: usize) -> (MockRide, MockBank) {
    let mut ride = MockRide::new();
    ride.expect_trip_history()
        .withf(|_, offset| *offset == HISTORY_OFFSET)
        .times(times)
        .returning(|_, _| Ok(vec![trip()]));
    ride.expect_trip_receipt()
        .withf(|_, request_id| request_id == "req_77")
        .times(times)
        .returning(|_, _| Ok(TripReceipt { total_charged: "23.50".to_string(), distance: "5.2".to_string() }));
    ride.expect_trip_dropoff()
        .withf(|_, request_id| request_id == "req_77")
        .times(times)
        .returning(|_, _| Ok(Coordinate { latitude: 51.5352, longitude: -0.1254 }));
    let mut bank = MockBank::new();
    bank.expect_create_feed_item()
        .withf(|_, account_id, item| {
            account_id == "acc_123" &&
                item.title.contains("23.50 Uber trip from Old Street") &&
                item.body == "5.2 miles travelled" &&
                item.image_url.contains("maps-key")
        })
        .times(times)
        .returning(|_, _, _| Ok(()));
    (ride, bank)
}

fn configure(cfg: &mut ServiceConfig, store: MemorySessionStore, ride: MockRide, bank: MockBank) {
    let api = CorrelationApi::new(store, ride, bank, Secret::new("maps-key".to_string()));
    cfg.service(MondoWebhookRoute::<MemorySessionStore, MockRide, MockBank>::new())
        .app_data(web::Data::new(api));
}
