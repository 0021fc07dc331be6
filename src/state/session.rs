//! Session Store
//!
//! The client's locally held belief about current identity and authorization
//! level. The session is persisted as a single serialized record under one
//! storage key, so a page reload can never observe a partially written
//! identity, and concurrent tabs collapse to last-write-wins on one key.

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::config;

/// Identity claims for the logged-in user.
///
/// `username` and `is_admin` are only meaningful together with `token`; the
/// whole record is saved and cleared as a unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential presented on authorized requests
    pub token: String,
    /// Display identity (username or email, as entered at login)
    pub username: String,
    /// Admin capability flag
    pub is_admin: bool,
}

/// Owns the in-memory mirror of the persisted session.
///
/// One instance lives in [`super::GlobalState`] and is handed to consumers
/// through context; nothing else touches the session storage key.
#[derive(Clone, Copy)]
pub struct SessionStore {
    current: RwSignal<Option<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            current: create_rw_signal(None),
        }
    }

    /// Hydrate the in-memory mirror from persisted storage.
    ///
    /// A missing or malformed record means "not authenticated"; this never
    /// fails and never reports to the user.
    pub fn restore(&self) {
        self.current.set(decode(read_storage(config::SESSION_KEY)));
    }

    /// Persist the session record and update the mirror.
    pub fn save(&self, session: Session) {
        write_storage(config::SESSION_KEY, &encode(&session));
        self.current.set(Some(session));
    }

    /// Remove the persisted record and reset the mirror. Always succeeds.
    pub fn clear(&self) {
        remove_storage(config::SESSION_KEY);
        self.current.set(None);
    }

    /// Reactive read of the current session.
    pub fn current(&self) -> Option<Session> {
        self.current.get()
    }

    /// Non-reactive read, for use inside event handlers and async tasks.
    pub fn current_untracked(&self) -> Option<Session> {
        self.current.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.with(|s| s.is_some())
    }
}

// ============ Record codec ============
//
// Kept free of DOM access so the save/restore semantics are testable off-wasm.

fn encode(session: &Session) -> String {
    serde_json::to_string(session).unwrap_or_default()
}

fn decode(raw: Option<String>) -> Option<Session> {
    raw.and_then(|s| serde_json::from_str(&s).ok())
}

// ============ Storage access ============

fn read_storage(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

fn write_storage(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

fn remove_storage(key: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voter() -> Session {
        Session {
            token: "tok-1".to_string(),
            username: "alice".to_string(),
            is_admin: false,
        }
    }

    fn admin() -> Session {
        Session {
            token: "tok-2".to_string(),
            username: "root".to_string(),
            is_admin: true,
        }
    }

    #[test]
    fn restore_yields_last_saved_record() {
        // The storage cell holds whatever was written last
        let mut cell = None;
        for session in [voter(), admin()] {
            cell = Some(encode(&session));
        }
        assert_eq!(decode(cell), Some(admin()));
    }

    #[test]
    fn clear_wins_when_last() {
        let mut cell = Some(encode(&voter()));
        assert_eq!(decode(cell.clone()), Some(voter()));
        cell = None;
        assert_eq!(decode(cell), None);
    }

    #[test]
    fn absent_record_is_unauthenticated() {
        assert_eq!(decode(None), None);
    }

    #[test]
    fn malformed_record_fails_open() {
        assert_eq!(decode(Some("not json".to_string())), None);
        assert_eq!(decode(Some("{\"token\":42}".to_string())), None);
        assert_eq!(decode(Some(String::new())), None);
    }

    #[test]
    fn codec_round_trips() {
        let session = admin();
        assert_eq!(decode(Some(encode(&session))), Some(session));
    }
}
