//! In-memory editing sessions.
//!
//! Each session owns one `Resume` behind its own async mutex, so edits to a
//! single instance are serialized while different sessions proceed
//! independently. The map lock is held only long enough to look a handle up.
//!
//! A session untouched for longer than the idle TTL is dropped by
//! [`SessionStore::sweep_idle`], which also runs before every `create`.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use resume_builder::Resume;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct Session {
    pub resume: Resume,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    fn new() -> Self {
        let now = Utc::now();
        Session {
            resume: Resume::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the session as modified.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn idle_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        // A clock that stepped backwards gives a negative age; keep the session.
        (now - self.updated_at).to_std().is_ok_and(|age| age >= ttl)
    }
}

pub type SessionHandle = Arc<Mutex<Session>>;

pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionHandle>>,
    max_sessions: usize,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new(max_sessions: usize, idle_ttl: Duration) -> Self {
        SessionStore {
            sessions: RwLock::new(HashMap::new()),
            max_sessions,
            idle_ttl,
        }
    }

    /// Opens a session holding an empty resume. Idle sessions are swept
    /// first so abandoned ones do not hold slots against the cap.
    pub async fn create(&self) -> Result<(Uuid, DateTime<Utc>), AppError> {
        self.sweep_idle().await;
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.max_sessions {
            return Err(AppError::Validation(format!(
                "Session limit of {} reached; close an existing session first",
                self.max_sessions
            )));
        }

        let id = Uuid::new_v4();
        let session = Session::new();
        let created_at = session.created_at;
        sessions.insert(id, Arc::new(Mutex::new(session)));
        info!("Opened editing session {id} ({} live)", sessions.len());
        Ok((id, created_at))
    }

    pub async fn get(&self, id: Uuid) -> Result<SessionHandle, AppError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::session_not_found(id))
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let mut sessions = self.sessions.write().await;
        match sessions.remove(&id) {
            Some(_) => {
                info!("Closed editing session {id} ({} live)", sessions.len());
                Ok(())
            }
            None => Err(AppError::session_not_found(id)),
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops every session idle for at least the TTL and returns how many
    /// went. A session whose lock is held is in use and is kept.
    pub async fn sweep_idle(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, handle| match handle.try_lock() {
            Ok(session) => !session.idle_at(now, self.idle_ttl),
            Err(_) => true,
        });
        let swept = before - sessions.len();
        if swept > 0 {
            info!("Expired {swept} idle editing session(s) ({} live)", sessions.len());
        } else {
            debug!("No idle editing sessions to expire");
        }
        swept
    }
}
