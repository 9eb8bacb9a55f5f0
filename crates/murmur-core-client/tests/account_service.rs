// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use pretty_assertions::assert_eq;
use secrecy::Secret;

use murmur_core_client::domain::account::services::mocks::MockIdentityService;
use murmur_core_client::domain::account::services::IdentityError;
use murmur_core_client::dtos::{
    Availability, NotAuthenticatedError, ProfilePatch, UserId, UserProfile, UserSettings,
    Visibility,
};
use murmur_core_client::test::{mock_user_profile, ConstantTimeProvider, EventCollector};
use murmur_core_client::{Client, ClientEvent};
use murmur_store::prelude::*;

fn client_with(identity_service: MockIdentityService) -> (Client, EventCollector) {
    let events = EventCollector::new();
    let client = Client::builder()
        .set_store(Store::open(MemoryDriver::new()))
        .set_identity_service(Arc::new(identity_service))
        .set_time_provider(ConstantTimeProvider::ymd(2025, 5, 10))
        .set_delegate(Some(events.delegate()))
        .build();
    (client, events)
}

fn password() -> Secret<String> {
    Secret::new("correct horse battery staple".to_string())
}

#[tokio::test]
async fn test_sign_in_commits_session_after_remote_resolves() -> Result<()> {
    let mut identity_service = MockIdentityService::new();
    identity_service
        .expect_sign_in()
        .return_once(|_, _| Box::pin(async { Ok(UserId::from("user-a")) }));
    identity_service
        .expect_load_profile()
        .return_once(|_| Box::pin(async { Ok(Some(mock_user_profile("user-a", "amelie"))) }));

    let (client, events) = client_with(identity_service);
    assert_eq!(client.signed_in_user_id(), None);

    client
        .account
        .sign_in("amelie@murmur.im", password())
        .await;

    assert_eq!(client.signed_in_user_id(), Some(UserId::from("user-a")));

    let state = client.account.auth_state();
    assert!(!state.is_loading);
    assert_eq!(state.error, None);

    let info = client.account.account_info()?;
    assert_eq!(info.username, "amelie");

    assert_eq!(events.drain(), vec![ClientEvent::AccountInfoChanged]);

    Ok(())
}

#[tokio::test]
async fn test_sign_in_failure_is_observed_not_thrown() -> Result<()> {
    let mut identity_service = MockIdentityService::new();
    identity_service
        .expect_sign_in()
        .return_once(|_, _| Box::pin(async { Err(IdentityError::InvalidCredentials) }));

    let (client, events) = client_with(identity_service);

    client
        .account
        .sign_in("amelie@murmur.im", password())
        .await;

    assert_eq!(client.signed_in_user_id(), None);

    let state = client.account.auth_state();
    assert!(!state.is_loading);
    assert_eq!(state.error, Some("Invalid credentials".to_string()));

    // The next attempt starts from a clean error slate.
    assert_eq!(events.drain(), vec![ClientEvent::AccountInfoChanged]);
    assert_eq!(
        client.account.account_info().unwrap_err(),
        NotAuthenticatedError
    );

    Ok(())
}

#[tokio::test]
async fn test_sign_in_without_profile_record_fails() -> Result<()> {
    let mut identity_service = MockIdentityService::new();
    identity_service
        .expect_sign_in()
        .return_once(|_, _| Box::pin(async { Ok(UserId::from("user-a")) }));
    identity_service
        .expect_load_profile()
        .return_once(|_| Box::pin(async { Ok(None) }));

    let (client, _events) = client_with(identity_service);
    client
        .account
        .sign_in("amelie@murmur.im", password())
        .await;

    assert_eq!(client.signed_in_user_id(), None);
    assert!(client.account.auth_state().error.is_some());

    Ok(())
}

#[tokio::test]
async fn test_sign_up_creates_profile_with_defaults() -> Result<()> {
    let mut identity_service = MockIdentityService::new();
    identity_service
        .expect_sign_up()
        .return_once(|_, _| Box::pin(async { Ok(UserId::from("user-new")) }));
    identity_service
        .expect_create_profile()
        .withf(|profile| {
            profile.id == UserId::from("user-new")
                && profile.username == "jane"
                && profile.avatar == UserProfile::default_avatar("jane")
                && profile.availability == Availability::Online
                && profile.settings == UserSettings::default()
        })
        .return_once(|_| Box::pin(async { Ok(()) }));

    let (client, _events) = client_with(identity_service);

    client
        .account
        .sign_up("jane@murmur.im", password(), "jane")
        .await;

    assert_eq!(client.signed_in_user_id(), Some(UserId::from("user-new")));

    let info = client.account.account_info()?;
    assert_eq!(info.username, "jane");
    assert_eq!(info.avatar, UserProfile::default_avatar("jane"));

    // Defaults per the fixed settings block.
    let settings = UserSettings::default();
    assert_eq!(settings.privacy.profile_visibility, Visibility::Public);
    assert!(settings.privacy.show_read_receipts);
    assert!(settings.notifications.messages);
    assert!(settings.content.autoplay_videos);
    assert!(!settings.content.save_data);

    Ok(())
}

#[tokio::test]
async fn test_update_profile_merges_patch_into_session() -> Result<()> {
    let mut identity_service = MockIdentityService::new();
    identity_service
        .expect_sign_in()
        .return_once(|_, _| Box::pin(async { Ok(UserId::from("user-a")) }));
    identity_service
        .expect_load_profile()
        .return_once(|_| Box::pin(async { Ok(Some(mock_user_profile("user-a", "amelie"))) }));
    identity_service
        .expect_update_profile()
        .return_once(|_, _| Box::pin(async { Ok(()) }));

    let (client, _events) = client_with(identity_service);
    client
        .account
        .sign_in("amelie@murmur.im", password())
        .await;

    client
        .account
        .update_profile(ProfilePatch {
            username: Some("amelie.c".to_string()),
            availability: Some(Availability::Away),
            ..Default::default()
        })
        .await?;

    let info = client.account.account_info()?;
    assert_eq!(info.username, "amelie.c");
    assert_eq!(info.availability, Availability::Away);
    assert_eq!(client.account.auth_state().error, None);

    Ok(())
}

#[tokio::test]
async fn test_update_profile_requires_a_session() -> Result<()> {
    let (client, _events) = client_with(MockIdentityService::new());

    assert_eq!(
        client
            .account
            .update_profile(ProfilePatch::default())
            .await
            .unwrap_err(),
        NotAuthenticatedError
    );

    Ok(())
}

#[tokio::test]
async fn test_sign_out_clears_session() -> Result<()> {
    let mut identity_service = MockIdentityService::new();
    identity_service
        .expect_sign_in()
        .return_once(|_, _| Box::pin(async { Ok(UserId::from("user-a")) }));
    identity_service
        .expect_load_profile()
        .return_once(|_| Box::pin(async { Ok(Some(mock_user_profile("user-a", "amelie"))) }));
    identity_service
        .expect_sign_out()
        .return_once(|| Box::pin(async { Ok(()) }));

    let (client, _events) = client_with(identity_service);
    client
        .account
        .sign_in("amelie@murmur.im", password())
        .await;
    assert!(client.signed_in_user_id().is_some());

    client.account.sign_out().await;

    assert_eq!(client.signed_in_user_id(), None);
    assert_eq!(client.account.auth_state().error, None);

    Ok(())
}

#[tokio::test]
async fn test_failed_sign_out_keeps_session() -> Result<()> {
    let mut identity_service = MockIdentityService::new();
    identity_service
        .expect_sign_in()
        .return_once(|_, _| Box::pin(async { Ok(UserId::from("user-a")) }));
    identity_service
        .expect_load_profile()
        .return_once(|_| Box::pin(async { Ok(Some(mock_user_profile("user-a", "amelie"))) }));
    identity_service.expect_sign_out().return_once(|| {
        Box::pin(async {
            Err(IdentityError::Failure {
                msg: "Connection reset".to_string(),
            })
        })
    });

    let (client, _events) = client_with(identity_service);
    client
        .account
        .sign_in("amelie@murmur.im", password())
        .await;

    client.account.sign_out().await;

    assert_eq!(client.signed_in_user_id(), Some(UserId::from("user-a")));
    assert_eq!(
        client.account.auth_state().error,
        Some("Identity service failure: Connection reset".to_string())
    );

    Ok(())
}

#[tokio::test]
async fn test_delete_account_drops_session() -> Result<()> {
    let mut identity_service = MockIdentityService::new();
    identity_service
        .expect_sign_in()
        .return_once(|_, _| Box::pin(async { Ok(UserId::from("user-a")) }));
    identity_service
        .expect_load_profile()
        .return_once(|_| Box::pin(async { Ok(Some(mock_user_profile("user-a", "amelie"))) }));
    identity_service
        .expect_delete_user()
        .return_once(|_| Box::pin(async { Ok(()) }));

    let (client, _events) = client_with(identity_service);
    client
        .account
        .sign_in("amelie@murmur.im", password())
        .await;

    client.account.delete_account().await?;

    assert_eq!(client.signed_in_user_id(), None);
    assert_eq!(client.account.auth_state().error, None);

    Ok(())
}

#[tokio::test]
async fn test_password_reset_failure_surfaces_as_error_state() -> Result<()> {
    let mut identity_service = MockIdentityService::new();
    identity_service
        .expect_request_password_reset()
        .return_once(|_| {
            Box::pin(async {
                Err(IdentityError::Failure {
                    msg: "Rate limited".to_string(),
                })
            })
        });

    let (client, _events) = client_with(identity_service);

    client.account.request_password_reset("amelie@murmur.im").await;

    assert_eq!(
        client.account.auth_state().error,
        Some("Identity service failure: Rate limited".to_string())
    );
    assert!(!client.account.auth_state().is_loading);

    Ok(())
}
