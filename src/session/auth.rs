//! Signed-in user state
//!
//! The token and user record are stored side by side; one without the other
//! counts as signed out.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{KeyValueStore, TOKEN_KEY, USER_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Moderator,
    Admin,
}

impl Role {
    pub fn key(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Moderator => "moderator",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Auth state derived from the persisted session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSession {
    user: Option<User>,
}

impl AuthSession {
    /// Restore the session from the store
    ///
    /// A user record that fails to parse is removed along with the token.
    pub fn load(store: &mut dyn KeyValueStore) -> Self {
        let (Some(_token), Some(raw_user)) = (store.get(TOKEN_KEY), store.get(USER_KEY)) else {
            return Self::default();
        };

        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => Self { user: Some(user) },
            Err(e) => {
                log::warn!("Discarding corrupted user record: {}", e);
                store.remove(TOKEN_KEY);
                store.remove(USER_KEY);
                Self::default()
            }
        }
    }

    pub fn login(&mut self, store: &mut dyn KeyValueStore, user: User, token: &str) {
        store.set(TOKEN_KEY, token);
        match serde_json::to_string(&user) {
            Ok(json) => store.set(USER_KEY, &json),
            Err(e) => log::warn!("Failed to encode user record: {}", e),
        }
        self.user = Some(user);
    }

    pub fn logout(&mut self, store: &mut dyn KeyValueStore) {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
        self.user = None;
    }

    /// The API rejected the token; drop it the same way a logout does
    pub fn expire(&mut self, store: &mut dyn KeyValueStore) {
        log::info!("Session expired, clearing stored credentials");
        self.logout(store);
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.user, Some(User { role: Role::Admin, .. }))
    }

    /// Moderator rights are also held by admins
    pub fn is_moderator(&self) -> bool {
        matches!(
            self.user,
            Some(User {
                role: Role::Moderator | Role::Admin,
                ..
            })
        )
    }
}

/// Bearer token for API requests, if one is stored
pub fn stored_token(store: &dyn KeyValueStore) -> Option<String> {
    store.get(TOKEN_KEY).filter(|token| !token.trim().is_empty())
}
