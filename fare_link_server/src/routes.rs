//! Request handler definitions
//!
//! Define each route and its handler here. Handlers that are more than a line or two MUST go
//! into a separate module. Keep this module neat and tidy 🙏
//!
//! Every external API call is a suspension point, so all handlers are async; worker threads
//! keep serving other requests while a provider call is in flight.

use actix_web::{get, web, HttpResponse, Responder};
use fare_link_engine::{
    session_types::SessionId,
    traits::{BankProvider, RideProvider, SessionStore},
    CorrelationApi,
    CorrelationOutcome,
    LinkingApi,
};
use log::*;
use mondo_tools::data_objects::WebhookEvent;

use crate::{
    data_objects::{CallbackParams, JsonResponse, LoginForm, LogoutForm},
    errors::ServerError,
    integrations::mondo::transaction_event,
};

// Web-actix cannot handle generics in handlers, so routes are registered manually via the
// `route!` macro.
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

// ----------------------------------------------   Index  -----------------------------------------------------
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(INDEX_PAGE)
}

//----------------------------------------------   Login  ------------------------------------------------------
route!(login => Post "/login" impl SessionStore, RideProvider, BankProvider);
/// Starts a linking session from the user's bank credentials and returns an interstitial page
/// embedding the ride-provider authorization URL. No external API is contacted here; the user
/// still has to grant access on the provider's side.
pub async fn login<TS, TR, TB>(
    form: web::Form<LoginForm>,
    api: web::Data<LinkingApi<TS, TR, TB>>,
) -> Result<HttpResponse, ServerError>
where
    TS: SessionStore,
    TR: RideProvider,
    TB: BankProvider,
{
    let form = form.into_inner();
    debug!("💻️ POST /login for account {}", form.mondo_account_id);
    let redirect = api.login(&form.mondo_access_token, &form.mondo_account_id).await?;
    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(redirect_page(&redirect.authorization_url)))
}

//----------------------------------------------   OAuth callback  ---------------------------------------------
route!(uber_callback => Get "/uber/callback" impl SessionStore, RideProvider, BankProvider);
/// The ride provider redirects here after the user grants access. `state` is the session id
/// advertised at login; an unknown or replayed state yields a 404 naming the session.
pub async fn uber_callback<TS, TR, TB>(
    query: web::Query<CallbackParams>,
    api: web::Data<LinkingApi<TS, TR, TB>>,
) -> Result<HttpResponse, ServerError>
where
    TS: SessionStore,
    TR: RideProvider,
    TB: BankProvider,
{
    let params = query.into_inner();
    let session_id = SessionId::from(params.state);
    debug!("💻️ GET /uber/callback for session {session_id}");
    let session = api.complete_authorization(&session_id, &params.code).await?;
    info!("💻️ Session {} is fully linked", session.session_id);
    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(LOGIN_SUCCESS_PAGE))
}

//----------------------------------------------   Bank webhook  -----------------------------------------------
route!(mondo_webhook => Post "/mondo/webhook/{session_id}" impl SessionStore, RideProvider, BankProvider);
/// Inbound transaction events. The session id is a path segment, embedded at registration time
/// so deliveries self-identify their session. An error status here makes the bank redeliver
/// according to its own policy; this server performs no retries of its own.
pub async fn mondo_webhook<TS, TR, TB>(
    path: web::Path<String>,
    body: web::Json<WebhookEvent>,
    api: web::Data<CorrelationApi<TS, TR, TB>>,
) -> Result<HttpResponse, ServerError>
where
    TS: SessionStore,
    TR: RideProvider,
    TB: BankProvider,
{
    let session_id = SessionId::from(path.into_inner());
    let event = transaction_event(body.into_inner());
    trace!("💻️ Webhook delivery {} for session {session_id}", event.id);
    let outcome = api.process_event(&session_id, &event).await?;
    let response = match outcome {
        CorrelationOutcome::Ignored => JsonResponse::success("Transaction ignored."),
        CorrelationOutcome::Published(item) => {
            info!("💻️ Feed item \"{}\" published for session {session_id}", item.title);
            JsonResponse::success("Feed item created.")
        },
    };
    Ok(HttpResponse::Ok().json(response))
}

//----------------------------------------------   Logout  -----------------------------------------------------
route!(logout => Post "/logout" impl SessionStore, RideProvider, BankProvider);
pub async fn logout<TS, TR, TB>(
    form: web::Form<LogoutForm>,
    api: web::Data<LinkingApi<TS, TR, TB>>,
) -> Result<HttpResponse, ServerError>
where
    TS: SessionStore,
    TR: RideProvider,
    TB: BankProvider,
{
    let session_id = SessionId::from(form.into_inner().session_id);
    debug!("💻️ POST /logout for session {session_id}");
    api.logout(&session_id).await?;
    Ok(HttpResponse::Ok().json(JsonResponse::success("Logged out.")))
}

//----------------------------------------------   Pages  ------------------------------------------------------
// Page rendering is deliberately minimal; the pages carry no state beyond the authorization
// URL on the interstitial.

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Fare Link Gateway</title></head>
  <body>
    <h1>Link your Mondo account to Uber</h1>
    <form action="/login" method="post">
      <label>Access token <input type="password" name="mondo-access-token"></label>
      <label>Account id <input type="text" name="mondo-account-id"></label>
      <button type="submit">Link</button>
    </form>
  </body>
</html>
"#;

const LOGIN_SUCCESS_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Fare Link Gateway</title></head>
  <body>
    <h1>All set 🚗</h1>
    <p>Your Uber receipts will now appear on matching Mondo transactions.</p>
  </body>
</html>
"#;

fn redirect_page(authorization_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>Fare Link Gateway</title>
    <meta http-equiv="refresh" content="0; url={authorization_url}">
  </head>
  <body>
    <p>Continue to <a href="{authorization_url}">Uber</a> to authorize access to your ride history.</p>
  </body>
</html>
"#
    )
}
