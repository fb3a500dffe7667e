use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// What the shell holds while a user is logged in. Mirrors the login
/// response: the issued token plus the profile fields shown in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub token: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

/// Storage key for the serialized record.
pub const USER_INFO_KEY: &str = "userInfo";
/// The token is mirrored under its own key so API callers can read it
/// without deserializing the whole record.
pub const TOKEN_KEY: &str = "token";

/// Session-scoped key/value storage. The browser shell backs this with
/// `sessionStorage`; tests use [`MemoryStorage`].
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStorage(HashMap<String, String>);

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.0.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.0.remove(key);
    }
}

/// Explicit session context handed to the views that need it. All reads and
/// writes go through this interface rather than ambient global state, and the
/// in-memory record is kept in step with the storage backend.
#[derive(Debug)]
pub struct SessionStore<S: SessionStorage> {
    current: Option<SessionRecord>,
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Hydrates from storage, which is what a fresh page load does. A record
    /// that fails to deserialize is treated as absent.
    pub fn load(storage: S) -> Self {
        let current = storage
            .get(USER_INFO_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok());
        Self { current, storage }
    }

    pub fn current(&self) -> Option<&SessionRecord> {
        self.current.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|r| r.token.as_str())
    }

    /// Fully replaces any prior session; there are no merge semantics.
    pub fn set_credentials(&mut self, record: SessionRecord) {
        match serde_json::to_string(&record) {
            Ok(raw) => self.storage.set(USER_INFO_KEY, raw),
            Err(e) => tracing::error!("Failed to serialize session record: {}", e),
        }
        self.storage.set(TOKEN_KEY, record.token.clone());
        self.current = Some(record);
    }

    /// Clears both the in-memory record and the storage backend.
    pub fn logout(&mut self) {
        self.current = None;
        self.storage.remove(USER_INFO_KEY);
        self.storage.remove(TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(token: &str) -> SessionRecord {
        SessionRecord {
            token: token.into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            role: "admin".into(),
        }
    }

    #[test]
    fn set_credentials_writes_record_and_token_keys() {
        let mut store = SessionStore::load(MemoryStorage::default());
        store.set_credentials(record("tok-1"));

        assert_eq!(store.token(), Some("tok-1"));
        assert_eq!(store.current().unwrap().first_name, "Ada");

        assert_eq!(store.storage.get(TOKEN_KEY).as_deref(), Some("tok-1"));
        let raw = store.storage.get(USER_INFO_KEY).unwrap();
        let stored: SessionRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, record("tok-1"));
    }

    #[test]
    fn set_credentials_replaces_prior_state() {
        let mut store = SessionStore::load(MemoryStorage::default());
        store.set_credentials(record("tok-1"));

        let mut other = record("tok-2");
        other.first_name = "Grace".into();
        store.set_credentials(other);

        assert_eq!(store.token(), Some("tok-2"));
        assert_eq!(store.current().unwrap().first_name, "Grace");
    }

    #[test]
    fn logout_clears_memory_and_storage() {
        let mut store = SessionStore::load(MemoryStorage::default());
        store.set_credentials(record("tok-1"));
        store.logout();

        assert!(store.current().is_none());
        assert!(store.token().is_none());
        assert!(store.storage.get(USER_INFO_KEY).is_none());
        assert!(store.storage.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn load_hydrates_from_storage() {
        let mut storage = MemoryStorage::default();
        storage.set(
            USER_INFO_KEY,
            serde_json::to_string(&record("tok-1")).unwrap(),
        );

        let store = SessionStore::load(storage);
        assert_eq!(store.token(), Some("tok-1"));
    }

    #[test]
    fn load_treats_corrupt_record_as_absent() {
        let mut storage = MemoryStorage::default();
        storage.set(USER_INFO_KEY, "not json".into());

        let store = SessionStore::load(storage);
        assert!(store.current().is_none());
    }
}
