use flg_common::Secret;
use thiserror::Error;

use crate::session_types::{Session, SessionId};

#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    #[error("Could not generate a session id: {0}")]
    IdGeneration(String),
    #[error("Session store backend error: {0}")]
    Backend(String),
}

/// Authoritative, process-wide mapping from session id to [`Session`].
///
/// Sessions are ownership-exclusive to the store for their whole lifetime: callers get clones
/// and mutate through [`SessionStore::update`], which runs the mutator under the store's write
/// lock, so concurrent mutations of the same session cannot lose updates.
#[allow(async_fn_in_trait)]
pub trait SessionStore {
    /// Inserts a new session in the `Created` state under a freshly generated, unpredictable
    /// id. The only failure mode is id generation / backend failure; it is fatal to the
    /// request and not retried.
    async fn create(
        &self,
        mondo_access_token: Secret<String>,
        mondo_account_id: &str,
    ) -> Result<Session, SessionStoreError>;

    async fn fetch(&self, id: &SessionId) -> Result<Option<Session>, SessionStoreError>;

    /// Applies `mutate` to the session in place and returns the updated copy, or `None` if the
    /// session does not exist (it is never created by this call).
    async fn update<F>(&self, id: &SessionId, mutate: F) -> Result<Option<Session>, SessionStoreError>
    where F: FnOnce(&mut Session) + Send;

    async fn remove(&self, id: &SessionId) -> Result<Option<Session>, SessionStoreError>;
}
