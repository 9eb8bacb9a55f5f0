// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;

use crate::domain::account::models::UserProfile;
use crate::domain::shared::models::{AuthState, NotAuthenticatedError, UserId};

pub struct AppContext {
    /// The signed-in user. Not persisted, identity is re-established per
    /// process.
    pub session: RwLock<Option<UserProfile>>,
    pub auth_state: RwLock<AuthState>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            session: Default::default(),
            auth_state: Default::default(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContext {
    pub fn signed_in_user_id(&self) -> Result<UserId, NotAuthenticatedError> {
        self.session
            .read()
            .as_ref()
            .map(|profile| profile.id.clone())
            .ok_or(NotAuthenticatedError)
    }

    pub fn signed_in_user(&self) -> Result<UserProfile, NotAuthenticatedError> {
        self.session.read().clone().ok_or(NotAuthenticatedError)
    }

    pub fn auth_state(&self) -> AuthState {
        self.auth_state.read().clone()
    }
}

impl AppContext {
    pub fn set_session(&self, profile: UserProfile) {
        self.session.write().replace(profile);
    }

    pub fn clear_session(&self) {
        self.session.write().take();
    }

    /// Flags the start of a remote identity operation, clearing a stale
    /// error.
    pub(crate) fn begin_auth_operation(&self) {
        *self.auth_state.write() = AuthState {
            is_loading: true,
            error: None,
        };
    }

    /// Commits the outcome of a remote identity operation. Overlapping
    /// operations resolve last-write-wins.
    pub(crate) fn finish_auth_operation(&self, error: Option<String>) {
        *self.auth_state.write() = AuthState {
            is_loading: false,
            error,
        };
    }
}
