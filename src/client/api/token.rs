//! Session token persisted in browser local storage.

#[cfg(feature = "web")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(feature = "web")]
use crate::client::constant::TOKEN_STORAGE_KEY;

#[cfg(feature = "web")]
pub fn load() -> Option<String> {
    LocalStorage::get::<String>(TOKEN_STORAGE_KEY).ok()
}

#[cfg(feature = "web")]
pub fn store(token: &str) {
    if let Err(e) = LocalStorage::set(TOKEN_STORAGE_KEY, token) {
        dioxus_logger::tracing::error!("Failed to store session token: {}", e);
    }
}

#[cfg(feature = "web")]
pub fn clear() {
    LocalStorage::delete(TOKEN_STORAGE_KEY);
}

#[cfg(not(feature = "web"))]
pub fn load() -> Option<String> {
    None
}

#[cfg(not(feature = "web"))]
pub fn store(_token: &str) {}

#[cfg(not(feature = "web"))]
pub fn clear() {}
