//! Visitor sessions — one view controller and one chat responder per visitor,
//! kept in process memory only.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

use crate::chat::ChatResponder;
use crate::errors::AppError;
use crate::navigation::ViewController;

pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub view: Mutex<ViewController>,
    pub chat: ChatResponder,
    last_seen: Mutex<Instant>,
}

impl Session {
    pub fn new(reveal_interval: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            view: Mutex::new(ViewController::new()),
            chat: ChatResponder::new(reveal_interval),
            last_seen: Mutex::new(Instant::now()),
        }
    }

    fn touch(&self) {
        *self.last_seen.lock() = Instant::now();
    }

    fn is_idle(&self, ttl: Duration) -> bool {
        self.last_seen.lock().elapsed() > ttl
    }
}

/// Shared map of live sessions, cloned into every handler via `AppState`.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Arc<Session>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, reveal_interval: Duration) -> Arc<Session> {
        let session = Arc::new(Session::new(reveal_interval));
        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        info!("Created session {}", session.id);
        session
    }

    /// Looks up a session and marks it as seen.
    pub async fn get(&self, id: Uuid) -> Result<Arc<Session>, AppError> {
        let session = self
            .sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        session.touch();
        Ok(session)
    }

    /// Removes a session and cancels its in-flight reveals.
    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let session = self
            .sessions
            .write()
            .await
            .remove(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        session.chat.shutdown();
        info!("Removed session {id}");
        Ok(())
    }

    /// Drops every session not seen within `ttl` and returns how many went.
    pub async fn evict_idle(&self, ttl: Duration) -> usize {
        let mut sessions = self.sessions.write().await;

        let idle: Vec<Uuid> = sessions
            .iter()
            .filter(|(_, s)| s.is_idle(ttl))
            .map(|(id, _)| *id)
            .collect();

        for id in &idle {
            if let Some(session) = sessions.remove(id) {
                session.chat.shutdown();
                warn!(session_id = %id, "Evicting idle session");
            }
        }

        idle.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Spawns the background sweep that evicts idle sessions every `every`.
pub fn spawn_session_sweeper(
    store: SessionStore,
    ttl: Duration,
    every: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let removed = store.evict_idle(ttl).await;
            if removed > 0 {
                info!(removed = removed, "Swept idle sessions");
            }
        }
    })
}
