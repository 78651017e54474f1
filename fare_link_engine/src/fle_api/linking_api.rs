//! The linking orchestrator: drives a session through
//! `Created → AwaitingRideAuth → RideAuthorized → Active`, and tears it down on logout.

use std::fmt::Debug;

use log::*;

use crate::{
    fle_api::errors::LinkingError,
    session_types::{Session, SessionId, SessionStatus},
    traits::{BankProvider, RideProvider, SessionStore},
};

/// The two public callback locations this deployment advertises. Computed once from the public
/// URL at startup; the OAuth redirect must be byte-identical between the authorize and
/// token-exchange legs.
#[derive(Debug, Clone)]
pub struct LinkingUrls {
    /// e.g. `https://flg.example.com/uber/callback`
    pub oauth_redirect: String,
    /// e.g. `https://flg.example.com/mondo/webhook`; the session id is appended as a path
    /// segment so inbound deliveries self-identify their session.
    pub webhook_base: String,
}

impl LinkingUrls {
    pub fn from_public_url(public_url: &str) -> Self {
        let public_url = public_url.trim_end_matches('/');
        Self {
            oauth_redirect: format!("{public_url}/uber/callback"),
            webhook_base: format!("{public_url}/mondo/webhook"),
        }
    }

    pub fn webhook_url(&self, session_id: &SessionId) -> String {
        format!("{}/{session_id}", self.webhook_base)
    }
}

/// What a successful login hands back to the HTTP layer: the new session and where to send the
/// user next.
#[derive(Debug, Clone)]
pub struct LoginRedirect {
    pub session_id: SessionId,
    pub authorization_url: String,
}

pub struct LinkingApi<S, R, B> {
    store: S,
    ride: R,
    bank: B,
    urls: LinkingUrls,
}

impl<S: Debug, R, B> Debug for LinkingApi<S, R, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LinkingApi ({:?})", self.store)
    }
}

impl<S, R, B> LinkingApi<S, R, B>
where
    S: SessionStore,
    R: RideProvider,
    B: BankProvider,
{
    pub fn new(store: S, ride: R, bank: B, urls: LinkingUrls) -> Self {
        Self { store, ride, bank, urls }
    }

    /// Creates a session from the user's bank credentials and computes the ride-provider
    /// authorization redirect, with the session id as the OAuth `state`. No external API is
    /// contacted yet.
    pub async fn login(
        &self,
        mondo_access_token: &str,
        mondo_account_id: &str,
    ) -> Result<LoginRedirect, LinkingError> {
        if mondo_access_token.is_empty() || mondo_account_id.is_empty() {
            return Err(LinkingError::ValidationError("required: mondo-access-token, mondo-account-id".to_string()));
        }
        let session = self.store.create(mondo_access_token.to_string().into(), mondo_account_id).await?;
        let session_id = session.session_id;
        let authorization_url = self.ride.authorization_url(session_id.as_str(), &self.urls.oauth_redirect);
        self.store.update(&session_id, |s| s.advance_to(SessionStatus::AwaitingRideAuth)).await?;
        info!("🔗️ Session {session_id} created for account {mondo_account_id}, awaiting ride authorization");
        Ok(LoginRedirect { session_id, authorization_url })
    }

    /// Completes the handshake after the ride provider redirects back: exchanges the
    /// authorization code, then synchronously registers the bank webhook. Either sub-step
    /// failing aborts the whole callback; the session stays in its last reached state, with no
    /// rollback and no retry.
    pub async fn complete_authorization(&self, state: &SessionId, code: &str) -> Result<Session, LinkingError> {
        let session = self
            .store
            .fetch(state)
            .await?
            .ok_or_else(|| LinkingError::SessionNotFound(state.to_string()))?;
        let access_token = self.ride.exchange_code(code, &self.urls.oauth_redirect).await?;
        self.store
            .update(state, |s| {
                s.uber_access_token = Some(access_token);
                s.advance_to(SessionStatus::RideAuthorized);
            })
            .await?
            .ok_or_else(|| LinkingError::SessionNotFound(state.to_string()))?;
        debug!("🔗️ Session {state} holds a ride access token");

        let webhook_url = self.urls.webhook_url(state);
        debug!("🔗️ Registering bank webhook {webhook_url}");
        let webhook_id =
            self.bank.register_webhook(&session.mondo_access_token, &session.mondo_account_id, &webhook_url).await?;
        let session = self
            .store
            .update(state, |s| {
                s.mondo_webhook_id = Some(webhook_id.clone());
                s.advance_to(SessionStatus::Active);
            })
            .await?
            .ok_or_else(|| LinkingError::SessionNotFound(state.to_string()))?;
        info!("🔗️ Session {state} is active. Webhook id={webhook_id}");
        Ok(session)
    }

    /// Unregisters the session's webhook and removes the session. If unregistration fails the
    /// session is left in the store untouched, so the link keeps working; losing the session
    /// while the bank keeps delivering would be worse.
    pub async fn logout(&self, session_id: &SessionId) -> Result<Session, LinkingError> {
        let session = self
            .store
            .fetch(session_id)
            .await?
            .ok_or_else(|| LinkingError::SessionNotFound(session_id.to_string()))?;
        if let Some(webhook_id) = &session.mondo_webhook_id {
            self.bank.unregister_webhook(&session.mondo_access_token, webhook_id).await?;
            debug!("🔗️ Unregistered webhook id={webhook_id} for session {session_id}");
        }
        let mut removed = self
            .store
            .remove(session_id)
            .await?
            .ok_or_else(|| LinkingError::SessionNotFound(session_id.to_string()))?;
        removed.advance_to(SessionStatus::LoggedOut);
        info!("🔗️ Session {session_id} logged out");
        Ok(removed)
    }
}
