// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use pretty_assertions::assert_eq;
use secrecy::Secret;

use murmur_core_client::domain::account::services::mocks::MockIdentityService;
use murmur_core_client::dtos::{
    ClientError, NotAuthenticatedError, StoryMediaKind, Url, UserId,
};
use murmur_core_client::test::{
    mock_user_profile, ConstantTimeProvider, EventCollector, IncrementingIDProvider,
};
use murmur_core_client::util::TimeProvider;
use murmur_core_client::{Client, ClientEvent};
use murmur_store::prelude::*;

struct TestClient {
    client: Client,
    events: EventCollector,
    time_provider: Arc<ConstantTimeProvider>,
}

async fn signed_in_client(store: Store, user_id: &str, username: &str) -> TestClient {
    let profile = mock_user_profile(user_id, username);

    let mut identity_service = MockIdentityService::new();
    identity_service.expect_sign_in().return_once({
        let id = profile.id.clone();
        move |_, _| Box::pin(async move { Ok(id) })
    });
    identity_service
        .expect_load_profile()
        .return_once(move |_| Box::pin(async move { Ok(Some(profile)) }));

    let events = EventCollector::new();
    let time_provider = Arc::new(ConstantTimeProvider::ymd_hms(2025, 5, 10, 12, 0, 0));

    let client = Client::builder()
        .set_store(store)
        .set_identity_service(Arc::new(identity_service))
        .set_id_provider(IncrementingIDProvider::new("story"))
        .set_time_provider(time_provider.clone())
        .set_delegate(Some(events.delegate()))
        .build();

    client
        .account
        .sign_in("login@murmur.im", Secret::new("pass".to_string()))
        .await;
    assert_eq!(client.account.auth_state().error, None);
    events.drain();

    TestClient {
        client,
        events,
        time_provider,
    }
}

fn media_url(name: &str) -> Url {
    format!("https://cdn.murmur.im/media/{name}.jpg")
        .parse()
        .unwrap()
}

#[tokio::test]
async fn test_requires_a_session() -> Result<()> {
    let client = Client::builder()
        .set_store(Store::open(MemoryDriver::new()))
        .set_identity_service(Arc::new(MockIdentityService::new()))
        .build();
    let not_authenticated = ClientError::NotAuthenticated(NotAuthenticatedError);

    assert_eq!(
        client
            .stories
            .add_story(media_url("a"), StoryMediaKind::Image, None)
            .unwrap_err(),
        not_authenticated
    );
    assert_eq!(
        client.stories.view_story(&"s1".into()).unwrap_err(),
        not_authenticated
    );

    Ok(())
}

#[tokio::test]
async fn test_add_story_sets_fixed_expiry() -> Result<()> {
    let t = signed_in_client(Store::open(MemoryDriver::new()), "user-a", "amelie").await;

    let story = t.client.stories.add_story(
        media_url("sunset"),
        StoryMediaKind::Image,
        Some("Golden hour".to_string()),
    )?;

    assert_eq!(story.author, UserId::from("user-a"));
    assert_eq!(story.timestamp, t.time_provider.now());
    assert_eq!(
        story.expires_at,
        story.timestamp + chrono::Duration::hours(24)
    );
    assert_eq!(story.viewers, vec![]);

    assert_eq!(t.client.stories.visible_stories(), vec![story]);
    assert_eq!(t.events.drain(), vec![ClientEvent::StoriesChanged]);

    Ok(())
}

#[tokio::test]
async fn test_story_expires_after_24_hours() -> Result<()> {
    let t = signed_in_client(Store::open(MemoryDriver::new()), "user-a", "amelie").await;

    let story = t
        .client
        .stories
        .add_story(media_url("sunset"), StoryMediaKind::Image, None)?;

    // Visible right up to the end of the window…
    t.time_provider.set_ymd_hms(2025, 5, 11, 11, 0, 0);
    assert_eq!(t.client.stories.visible_stories(), vec![story.clone()]);
    assert_eq!(
        t.client.stories.user_stories(&"user-a".into()),
        vec![story.clone()]
    );

    // …and gone from the exact expiry instant on, for good.
    t.time_provider.set_ymd_hms(2025, 5, 11, 12, 0, 0);
    assert_eq!(t.client.stories.visible_stories(), vec![]);

    t.time_provider.set_ymd_hms(2025, 5, 11, 13, 0, 0);
    assert_eq!(t.client.stories.visible_stories(), vec![]);
    assert_eq!(t.client.stories.user_stories(&"user-a".into()), vec![]);

    Ok(())
}

#[tokio::test]
async fn test_view_story_is_idempotent() -> Result<()> {
    let t = signed_in_client(Store::open(MemoryDriver::new()), "user-a", "amelie").await;

    let story = t
        .client
        .stories
        .add_story(media_url("sunset"), StoryMediaKind::Image, None)?;
    t.events.drain();

    t.client.stories.view_story(&story.id)?;
    t.client.stories.view_story(&story.id)?;

    let viewers = t.client.stories.visible_stories().remove(0).viewers;
    assert_eq!(viewers, vec![UserId::from("user-a")]);

    // Only the first view is a change.
    assert_eq!(t.events.drain(), vec![ClientEvent::StoriesChanged]);

    // Viewing an unknown story is a defined no-op.
    t.client.stories.view_story(&"missing".into())?;
    assert_eq!(t.events.drain(), vec![]);

    Ok(())
}

#[tokio::test]
async fn test_active_stories_group_by_author_in_insertion_order() -> Result<()> {
    let store = Store::open(MemoryDriver::new());

    let bob = signed_in_client(store.clone(), "user-b", "bob").await;
    bob.client
        .stories
        .add_story(media_url("b1"), StoryMediaKind::Image, None)?;

    // Amelie's ledger hydrates Bob's story, then her own follow.
    let amelie = signed_in_client(store, "user-a", "amelie").await;
    amelie
        .client
        .stories
        .add_story(media_url("a1"), StoryMediaKind::Image, None)?;
    amelie
        .client
        .stories
        .add_story(media_url("a2"), StoryMediaKind::Video, None)?;

    let grouped = amelie.client.stories.active_stories();

    assert_eq!(
        grouped.keys().cloned().collect::<Vec<_>>(),
        vec![UserId::from("user-b"), UserId::from("user-a")]
    );
    assert_eq!(
        grouped[&UserId::from("user-a")]
            .iter()
            .map(|story| story.media_url.clone())
            .collect::<Vec<_>>(),
        vec![media_url("a1"), media_url("a2")]
    );
    assert_eq!(grouped[&UserId::from("user-b")].len(), 1);

    Ok(())
}
