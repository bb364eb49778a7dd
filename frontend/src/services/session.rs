//! Single read/write boundary for the persisted session.
//!
//! All storage access for the session keys lives here; pages and components
//! never touch local storage directly.

use gloo::storage::{LocalStorage, Storage};
use shared::auth::TokenClaims;

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";
const ROLE_KEY: &str = "userrole";
const FAMILY_KEY: &str = "userfamily";

/// The logged-in identity as persisted client-side.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub role: String,
    pub family_id: String,
}

pub struct SessionStore;

impl SessionStore {
    /// Load the persisted session, if every key is present.
    pub fn load() -> Option<Session> {
        let token: String = LocalStorage::get(TOKEN_KEY).ok()?;
        let username: String = LocalStorage::get(USERNAME_KEY).ok()?;
        let role: String = LocalStorage::get(ROLE_KEY).ok()?;
        let family_id: String = LocalStorage::get(FAMILY_KEY).ok()?;
        Some(Session {
            token,
            username,
            role,
            family_id,
        })
    }

    /// Persist a fresh session after a successful login.
    pub fn store(session: &Session) {
        let entries = [
            (TOKEN_KEY, &session.token),
            (USERNAME_KEY, &session.username),
            (ROLE_KEY, &session.role),
            (FAMILY_KEY, &session.family_id),
        ];
        for (key, value) in entries {
            if let Err(error) = LocalStorage::set(key, value) {
                tracing::warn!("failed to persist session key {key}: {error:?}");
            }
        }
    }

    /// Drop every session key (logout, or an expired token).
    pub fn clear() {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USERNAME_KEY);
        LocalStorage::delete(ROLE_KEY);
        LocalStorage::delete(FAMILY_KEY);
    }

    /// Load the session, rejecting it when the token is missing, malformed
    /// or expired. A rejected session is cleared so stale keys never linger.
    pub fn authenticated() -> Option<Session> {
        let session = Self::load()?;
        match TokenClaims::decode(&session.token) {
            Ok(claims) if !claims.is_expired(chrono::Utc::now()) => Some(session),
            _ => {
                SessionStore::clear();
                None
            }
        }
    }
}
