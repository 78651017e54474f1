use std::{collections::HashMap, sync::Arc};

use flg_common::Secret;
use log::*;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    session_types::{Session, SessionId},
    traits::{SessionStore, SessionStoreError},
};

/// The in-memory session store. Sessions live until explicit logout or process restart; there
/// is no eviction, so abandoned logins leak an entry until the process restarts.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    async fn create(
        &self,
        mondo_access_token: Secret<String>,
        mondo_account_id: &str,
    ) -> Result<Session, SessionStoreError> {
        let session_id = SessionId::new(Uuid::new_v4().to_string());
        let session = Session::new(session_id.clone(), mondo_access_token, mondo_account_id.to_string());
        let mut sessions = self.sessions.write().await;
        if sessions.insert(session_id.clone(), session.clone()).is_some() {
            // v4 uuids do not collide in practice; a hit here means the entropy source is broken.
            return Err(SessionStoreError::IdGeneration(format!("session id collision on {session_id}")));
        }
        debug!("🗂️ Created session {session_id} for account {mondo_account_id}");
        Ok(session)
    }

    async fn fetch(&self, id: &SessionId) -> Result<Option<Session>, SessionStoreError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn update<F>(&self, id: &SessionId, mutate: F) -> Result<Option<Session>, SessionStoreError>
    where F: FnOnce(&mut Session) + Send {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.get_mut(id).map(|session| {
            mutate(session);
            session.clone()
        }))
    }

    async fn remove(&self, id: &SessionId) -> Result<Option<Session>, SessionStoreError> {
        let removed = self.sessions.write().await.remove(id);
        if removed.is_some() {
            debug!("🗂️ Removed session {id}");
        }
        Ok(removed)
    }
}
