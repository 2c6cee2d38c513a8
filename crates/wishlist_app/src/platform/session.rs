use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use axum::http::{header::COOKIE, HeaderMap};
use uuid::Uuid;
use wishlist_core::AppState;
use wishlist_logging::{wishlist_debug, wishlist_info};

pub const SESSION_COOKIE: &str = "wishlist_session";

/// Per-session state. Requests of one session are serialized by this lock.
pub type SessionHandle = Arc<tokio::sync::Mutex<AppState>>;

struct SessionEntry {
    state: SessionHandle,
    last_seen: Instant,
}

pub struct ResolvedSession {
    pub id: Uuid,
    pub state: SessionHandle,
    /// The client did not present a live session; the response must set the cookie.
    pub is_new: bool,
}

/// Browser sessions keyed by cookie id. Sessions idle longer than `ttl` are dropped.
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, SessionEntry>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub fn resolve(&self, presented: Option<Uuid>) -> ResolvedSession {
        self.resolve_at(presented, Instant::now())
    }

    fn resolve_at(&self, presented: Option<Uuid>, now: Instant) -> ResolvedSession {
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, entry| now.saturating_duration_since(entry.last_seen) < self.ttl);
        if sessions.len() != before {
            wishlist_debug!("Evicted {} idle sessions", before - sessions.len());
        }

        if let Some(id) = presented {
            if let Some(entry) = sessions.get_mut(&id) {
                entry.last_seen = now;
                return ResolvedSession {
                    id,
                    state: entry.state.clone(),
                    is_new: false,
                };
            }
        }

        let id = Uuid::new_v4();
        let state = SessionHandle::default();
        sessions.insert(
            id,
            SessionEntry {
                state: state.clone(),
                last_seen: now,
            },
        );
        wishlist_info!("Started session {} ({} active)", id, sessions.len());
        ResolvedSession {
            id,
            state,
            is_new: true,
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, SessionEntry>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Session id from the request's `Cookie` headers, if present and well-formed.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

pub fn session_cookie(id: Uuid) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}
