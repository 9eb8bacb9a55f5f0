// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::Secret;
use tracing::warn;

use crate::app::deps::*;
use crate::domain::account::models::{ProfilePatch, UserProfile, UserSettings};
use crate::domain::account::services::IdentityError;
use crate::domain::shared::models::{AuthState, Availability, NotAuthenticatedError};
use crate::dtos::AccountInfo;
use crate::ClientEvent;

/// Identity lifecycle. Remote failures never cross this boundary as errors;
/// they end up as the user-visible string in the auth state, which callers
/// observe. Overlapping operations are not guarded against, the one that
/// resolves last wins.
pub struct AccountService {
    ctx: DynAppContext,
    client_event_dispatcher: DynClientEventDispatcher,
    identity_service: DynIdentityService,
    time_provider: DynTimeProvider,
}

impl From<&AppDependencies> for AccountService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            identity_service: deps.identity_service.clone(),
            time_provider: deps.time_provider.clone(),
        }
    }
}

impl AccountService {
    pub async fn sign_in(&self, email: &str, password: Secret<String>) {
        self.ctx.begin_auth_operation();

        let result = self.perform_sign_in(email, password).await;

        match result {
            Ok(profile) => {
                self.ctx.set_session(profile);
                self.ctx.finish_auth_operation(None);
            }
            Err(err) => {
                warn!("Sign-in failed: {err}");
                self.ctx.finish_auth_operation(Some(err.to_string()));
            }
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::AccountInfoChanged);
    }

    pub async fn sign_up(&self, email: &str, password: Secret<String>, username: &str) {
        self.ctx.begin_auth_operation();

        let result = self.perform_sign_up(email, password, username).await;

        match result {
            Ok(profile) => {
                self.ctx.set_session(profile);
                self.ctx.finish_auth_operation(None);
            }
            Err(err) => {
                warn!("Sign-up failed: {err}");
                self.ctx.finish_auth_operation(Some(err.to_string()));
            }
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::AccountInfoChanged);
    }

    pub async fn sign_out(&self) {
        self.ctx.begin_auth_operation();

        match self.identity_service.sign_out().await {
            Ok(()) => {
                self.ctx.clear_session();
                self.ctx.finish_auth_operation(None);
            }
            Err(err) => {
                warn!("Sign-out failed: {err}");
                self.ctx.finish_auth_operation(Some(err.to_string()));
            }
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::AccountInfoChanged);
    }

    /// Pushes the patch to the identity provider, then merges it into the
    /// local session on success.
    pub async fn update_profile(&self, patch: ProfilePatch) -> Result<(), NotAuthenticatedError> {
        let user_id = self.ctx.signed_in_user_id()?;
        self.ctx.begin_auth_operation();

        match self.identity_service.update_profile(&user_id, &patch).await {
            Ok(()) => {
                if let Some(profile) = self.ctx.session.write().as_mut() {
                    profile.apply(patch);
                }
                self.ctx.finish_auth_operation(None);
            }
            Err(err) => {
                warn!("Profile update failed: {err}");
                self.ctx.finish_auth_operation(Some(err.to_string()));
            }
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::AccountInfoChanged);
        Ok(())
    }

    pub async fn request_password_reset(&self, email: &str) {
        self.ctx.begin_auth_operation();

        let error = self
            .identity_service
            .request_password_reset(email)
            .await
            .err()
            .map(|err| err.to_string());
        self.ctx.finish_auth_operation(error);

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::AccountInfoChanged);
    }

    pub async fn update_password(&self, new_password: Secret<String>) {
        self.ctx.begin_auth_operation();

        let error = self
            .identity_service
            .update_password(new_password)
            .await
            .err()
            .map(|err| err.to_string());
        self.ctx.finish_auth_operation(error);

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::AccountInfoChanged);
    }

    /// Deletes the remote account and profile, then drops the session.
    pub async fn delete_account(&self) -> Result<(), NotAuthenticatedError> {
        let user_id = self.ctx.signed_in_user_id()?;
        self.ctx.begin_auth_operation();

        match self.identity_service.delete_user(&user_id).await {
            Ok(()) => {
                self.ctx.clear_session();
                self.ctx.finish_auth_operation(None);
            }
            Err(err) => {
                warn!("Account deletion failed: {err}");
                self.ctx.finish_auth_operation(Some(err.to_string()));
            }
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::AccountInfoChanged);
        Ok(())
    }

    pub fn account_info(&self) -> Result<AccountInfo, NotAuthenticatedError> {
        let profile = self.ctx.signed_in_user()?;
        Ok(AccountInfo {
            id: profile.id,
            username: profile.username,
            avatar: profile.avatar,
            availability: profile.availability,
        })
    }

    pub fn auth_state(&self) -> AuthState {
        self.ctx.auth_state()
    }
}

impl AccountService {
    async fn perform_sign_in(
        &self,
        email: &str,
        password: Secret<String>,
    ) -> Result<UserProfile, IdentityError> {
        let user_id = self.identity_service.sign_in(email, password).await?;

        self.identity_service
            .load_profile(&user_id)
            .await?
            .ok_or_else(|| IdentityError::Failure {
                msg: format!("No profile record exists for user '{user_id}'"),
            })
    }

    async fn perform_sign_up(
        &self,
        email: &str,
        password: Secret<String>,
        username: &str,
    ) -> Result<UserProfile, IdentityError> {
        let user_id = self.identity_service.sign_up(email, password).await?;
        let now = self.time_provider.now();

        let profile = UserProfile {
            id: user_id,
            username: username.to_string(),
            email: email.to_string(),
            avatar: UserProfile::default_avatar(username),
            availability: Availability::Online,
            last_seen: Some(now),
            created_at: now,
            settings: UserSettings::default(),
        };

        self.identity_service.create_profile(&profile).await?;
        Ok(profile)
    }
}
