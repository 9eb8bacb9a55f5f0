// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::IndexMap;
use url::Url;

use crate::app::deps::*;
use crate::domain::shared::models::{ClientError, StoryId, UserId};
use crate::domain::stories::models::{Story, StoryMediaKind};
use crate::ClientEvent;

/// The story ledger surface. Mutations require a session; the read side is
/// open since visibility is a pure function of the clock.
pub struct StoriesService {
    ctx: DynAppContext,
    client_event_dispatcher: DynClientEventDispatcher,
    id_provider: DynIDProvider,
    stories_repo: DynStoriesRepository,
    time_provider: DynTimeProvider,
}

impl From<&AppDependencies> for StoriesService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            id_provider: deps.id_provider.clone(),
            stories_repo: deps.stories_repo.clone(),
            time_provider: deps.time_provider.clone(),
        }
    }
}

impl StoriesService {
    pub fn add_story(
        &self,
        media_url: Url,
        media_kind: StoryMediaKind,
        caption: Option<String>,
    ) -> Result<Story, ClientError> {
        let author = self.ctx.signed_in_user_id()?;
        let now = self.time_provider.now();

        let story = Story {
            id: self.id_provider.new_id().into(),
            author,
            media_url,
            media_kind,
            caption,
            timestamp: now,
            expires_at: now + Story::ttl(),
            viewers: vec![],
        };
        self.stories_repo.put(story.clone());

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::StoriesChanged);

        Ok(story)
    }

    /// Records the signed-in user as a viewer. Unknown story ids and repeat
    /// views are no-ops, not errors.
    pub fn view_story(&self, story_id: &StoryId) -> Result<(), ClientError> {
        let viewer = self.ctx.signed_in_user_id()?;

        if self.stories_repo.add_viewer(story_id, &viewer) {
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::StoriesChanged);
        }

        Ok(())
    }

    /// All stories that have not expired at the time of the call.
    pub fn visible_stories(&self) -> Vec<Story> {
        self.stories_repo.visible_at(self.time_provider.now())
    }

    /// Visible stories by `user_id`, oldest first.
    pub fn user_stories(&self, user_id: &UserId) -> Vec<Story> {
        self.visible_stories()
            .into_iter()
            .filter(|story| &story.author == user_id)
            .collect()
    }

    /// Visible stories grouped by author. Group order follows the insertion
    /// order of the underlying sequence, callers must not read recency into
    /// it.
    pub fn active_stories(&self) -> IndexMap<UserId, Vec<Story>> {
        let mut grouped = IndexMap::new();

        for story in self.visible_stories() {
            grouped
                .entry(story.author.clone())
                .or_insert_with(Vec::new)
                .push(story);
        }

        grouped
    }
}
