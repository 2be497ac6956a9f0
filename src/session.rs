//! Session module
//!
//! Persisted key-value state: the auth token and user record, and the
//! language preference. Everything goes through [`KeyValueStore`] so tests
//! and the binary can use different backends.

pub mod auth;
pub mod store;

pub use auth::{AuthSession, Role, User, stored_token};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use crate::locale::Language;

/// Key of the bearer token sent with API requests
pub const TOKEN_KEY: &str = "accessToken";
/// Key of the JSON-encoded signed-in user
pub const USER_KEY: &str = "user";
/// Key of the last chosen language
pub const LANGUAGE_KEY: &str = "language";

/// Read the persisted language preference, ignoring unknown codes
pub fn stored_language(store: &dyn KeyValueStore) -> Option<Language> {
    store
        .get(LANGUAGE_KEY)
        .and_then(|code| Language::from_code(&code))
}

pub fn store_language(store: &mut dyn KeyValueStore, lang: Language) {
    store.set(LANGUAGE_KEY, lang.code());
}
