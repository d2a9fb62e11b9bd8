//! Persisted session: bearer token and user profile in browser storage.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::models::{AuthResponse, User};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Silently does nothing when storage is unavailable
/// (private browsing, sandboxed frames).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session<S> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn user(&self) -> Option<User> {
        let raw = self.store.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn save(&self, auth: &AuthResponse) {
        self.store.set(TOKEN_KEY, &auth.token);
        self.save_user(&auth.user);
    }

    pub fn save_user(&self, user: &User) {
        if let Ok(raw) = serde_json::to_string(user) {
            self.store.set(USER_KEY, &raw);
        }
    }

    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> AuthResponse {
        AuthResponse {
            user: User {
                id: "u1".into(),
                name: "Asha".into(),
                email: "asha@example.com".into(),
            },
            token: "jwt-token".into(),
        }
    }

    #[test]
    fn save_then_read_back() {
        let session = Session::new(MemoryStore::new());
        assert!(!session.is_authenticated());

        session.save(&auth());

        assert_eq!(session.token().as_deref(), Some("jwt-token"));
        assert_eq!(session.user().map(|u| u.name), Some("Asha".to_string()));
    }

    #[test]
    fn clear_removes_both_keys() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());
        session.save(&auth());
        assert_eq!(store.len(), 2);

        session.clear();

        assert!(store.is_empty());
        assert!(session.user().is_none());
    }

    #[test]
    fn empty_token_counts_as_signed_out() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "");
        assert!(!Session::new(store).is_authenticated());
    }
}
