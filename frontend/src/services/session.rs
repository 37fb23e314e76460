use shared::error::SessionError;
use shared::session::{AuthSession, SessionStore};
use web_sys::Storage;

/// Session store over `window.localStorage`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStorageSessionStore;

impl LocalStorageSessionStore {
    fn storage() -> Result<Storage, SessionError> {
        web_sys::window()
            .ok_or_else(|| SessionError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| SessionError::Storage("local storage unavailable".to_string()))
    }
}

impl SessionStore for LocalStorageSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }
}

/// The browser session
pub fn session() -> AuthSession<LocalStorageSessionStore> {
    AuthSession::new(LocalStorageSessionStore)
}
