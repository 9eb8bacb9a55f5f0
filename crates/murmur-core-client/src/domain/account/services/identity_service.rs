// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use secrecy::Secret;

use crate::domain::account::models::{ProfilePatch, UserProfile};
use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Identity service failure: {msg}")]
    Failure { msg: String },
}

/// Boundary to the hosted identity/profile backend. Everything behind this
/// trait is a network call that can fail or stay pending; implementations
/// own no client state.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait IdentityService: Send + Sync {
    async fn sign_in(
        &self,
        email: &str,
        password: Secret<String>,
    ) -> Result<UserId, IdentityError>;

    async fn sign_up(
        &self,
        email: &str,
        password: Secret<String>,
    ) -> Result<UserId, IdentityError>;

    async fn sign_out(&self) -> Result<(), IdentityError>;

    async fn load_profile(&self, user_id: &UserId) -> Result<Option<UserProfile>, IdentityError>;

    async fn create_profile(&self, profile: &UserProfile) -> Result<(), IdentityError>;

    async fn update_profile(
        &self,
        user_id: &UserId,
        patch: &ProfilePatch,
    ) -> Result<(), IdentityError>;

    async fn request_password_reset(&self, email: &str) -> Result<(), IdentityError>;

    async fn update_password(&self, new_password: Secret<String>) -> Result<(), IdentityError>;

    /// Deletes both the profile record and the account itself.
    async fn delete_user(&self, user_id: &UserId) -> Result<(), IdentityError>;
}
