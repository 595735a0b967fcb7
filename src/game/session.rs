//! In-memory store for pending rock-paper-scissors challenges.
//!
//! One entry per unresolved challenge, keyed by the originating
//! command's interaction id. Entries are deleted when a duel resolves
//! and evicted by age otherwise, so the store cannot grow without
//! bound on a long-lived process.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::game::rps::Choice;

/// Discord interaction tokens expire after 15 minutes; a challenge
/// older than that can no longer be answered, so it is safe to drop.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(15 * 60);

/// State of one pending challenge.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub challenger_id: String,
    pub challenger_choice: Choice,
    created_at: Instant,
}

impl GameSession {
    fn expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Process-wide mapping from interaction id to pending challenge.
///
/// Each operation takes the lock for its own duration only; nothing is
/// held across an await point.
#[derive(Debug)]
pub struct SessionStore {
    ttl: Duration,
    sessions: Mutex<HashMap<String, GameSession>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_SESSION_TTL)
    }

    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Record a new challenge. Overwrites any prior entry with the
    /// same id (last write wins). Expired entries are purged while the
    /// lock is held.
    pub fn create(&self, id: &str, challenger_id: &str, choice: Choice) {
        let mut sessions = self.lock();
        sessions.retain(|_, session| !session.expired(self.ttl));
        sessions.insert(
            id.to_string(),
            GameSession {
                challenger_id: challenger_id.to_string(),
                challenger_choice: choice,
                created_at: Instant::now(),
            },
        );
    }

    /// Look up a pending challenge. An entry past its TTL is removed
    /// and reported as absent.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<GameSession> {
        let mut sessions = self.lock();
        match sessions.get(id) {
            Some(session) if session.expired(self.ttl) => {
                sessions.remove(id);
                None
            }
            Some(session) => Some(session.clone()),
            None => None,
        }
    }

    /// Drop a challenge, typically on the terminal transition of a
    /// duel. Removing an absent id is a no-op.
    pub fn delete(&self, id: &str) {
        self.lock().remove(id);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, GameSession>> {
        // A poisoned lock only means another handler panicked mid-insert;
        // the map itself is still usable.
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
