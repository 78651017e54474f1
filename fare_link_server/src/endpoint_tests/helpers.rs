use actix_web::{http::StatusCode, test, test::TestRequest, web::ServiceConfig, App};
use serde::Serialize;

pub async fn get_request<F>(path: &str, configure: F) -> (StatusCode, String)
where F: FnOnce(&mut ServiceConfig) {
    call(TestRequest::get().uri(path), configure).await
}

pub async fn post_form<F, T>(path: &str, form: &T, configure: F) -> (StatusCode, String)
where
    F: FnOnce(&mut ServiceConfig),
    T: Serialize,
{
    call(TestRequest::post().uri(path).set_form(form), configure).await
}

pub async fn post_json<F>(path: &str, body: serde_json::Value, configure: F) -> (StatusCode, String)
where F: FnOnce(&mut ServiceConfig) {
    call(TestRequest::post().uri(path).set_json(&body), configure).await
}

async fn call<F>(req: TestRequest, configure: F) -> (StatusCode, String)
where F: FnOnce(&mut ServiceConfig) {
    let service = test::init_service(App::new().configure(configure)).await;
    let res = test::call_service(&service, req.to_request()).await;
    let status = res.status();
    let body = String::from_utf8_lossy(&test::read_body(res).await).into_owned();
    (status, body)
}

/// Pulls the `state` query parameter out of the interstitial page returned by `/login`.
pub fn extract_state(body: &str) -> String {
    let start = body.find("state=").map(|i| i + "state=".len()).expect("No state parameter in the page");
    body[start..].chars().take_while(|c| c.is_ascii_alphanumeric() || *c == '-').collect()
}
