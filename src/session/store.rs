//! Conversations partitioned by session id.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::conversation::{Conversation, Turn};
use crate::guide::{Guide, Reply};

/// Default cap on concurrently open sessions.
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("session not found: {0}")]
    NotFound(String),
    #[error("too many open sessions (limit {0}); close one first")]
    Full(usize),
    #[error("session store lock poisoned")]
    Poisoned,
}

/// An answer plus the session it was recorded in, if any.
#[derive(Debug, Clone)]
pub struct Answer {
    pub session_id: Option<String>,
    pub reply: Reply,
}

/// Shared, cloneable map of session id to conversation.
///
/// The guide is stateless, so only the conversation map sits behind the lock.
#[derive(Debug, Clone)]
pub struct SessionStore {
    guide: Guide,
    max_sessions: usize,
    sessions: Arc<Mutex<HashMap<String, Conversation>>>,
}

impl SessionStore {
    pub fn new(guide: Guide) -> Self {
        Self::with_capacity(guide, DEFAULT_MAX_SESSIONS)
    }

    /// A store that refuses to open more than `max_sessions` sessions at once.
    pub fn with_capacity(guide: Guide, max_sessions: usize) -> Self {
        Self {
            guide,
            max_sessions,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn guide(&self) -> &Guide {
        &self.guide
    }

    /// Start an empty session and return its id (UUID v7).
    pub fn open(&self) -> Result<String, SessionError> {
        let mut sessions = self.lock()?;
        if sessions.len() >= self.max_sessions {
            tracing::warn!(limit = self.max_sessions, "session limit reached");
            return Err(SessionError::Full(self.max_sessions));
        }
        let id = uuid::Uuid::now_v7().to_string();
        sessions.insert(id.clone(), Conversation::new());
        tracing::debug!(session = %id, "session opened");
        Ok(id)
    }

    /// Ask a question within a session.
    pub fn submit(&self, id: &str, query: &str) -> Result<Reply, SessionError> {
        let mut sessions = self.lock()?;
        let convo = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        Ok(convo.submit(&self.guide, query))
    }

    /// Answer a question from a client that may or may not hold a session.
    ///
    /// With an id the exchange is recorded in that session. Without one, a new
    /// session is opened only when `start` is set; otherwise the question is
    /// answered and nothing is retained.
    pub fn ask(
        &self,
        session_id: Option<&str>,
        start: bool,
        query: &str,
    ) -> Result<Answer, SessionError> {
        let session_id = match session_id {
            Some(id) => Some(id.to_string()),
            None if start => Some(self.open()?),
            None => None,
        };
        let reply = match &session_id {
            Some(id) => self.submit(id, query)?,
            None => self.guide.respond(query),
        };
        Ok(Answer { session_id, reply })
    }

    /// Discard every turn of a session, keeping the session itself.
    pub fn clear(&self, id: &str) -> Result<(), SessionError> {
        let mut sessions = self.lock()?;
        let convo = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        convo.clear();
        tracing::debug!(session = %id, "session cleared");
        Ok(())
    }

    pub fn history(&self, id: &str) -> Result<Vec<Turn>, SessionError> {
        let sessions = self.lock()?;
        sessions
            .get(id)
            .map(|c| c.turns().to_vec())
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    /// Remove a session entirely.
    pub fn close(&self, id: &str) -> Result<(), SessionError> {
        self.lock()?
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        tracing::debug!(session = %id, "session closed");
        Ok(())
    }

    pub fn len(&self) -> Result<usize, SessionError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, SessionError> {
        Ok(self.len()? == 0)
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, Conversation>>, SessionError> {
        self.sessions.lock().map_err(|_| SessionError::Poisoned)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Guide::default())
    }
}
