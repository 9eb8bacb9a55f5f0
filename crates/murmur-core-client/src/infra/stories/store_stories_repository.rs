// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::warn;

use murmur_store::prelude::*;

use crate::domain::shared::models::{StoryId, UserId};
use crate::domain::stories::models::Story;
use crate::domain::stories::repos::StoriesRepository as StoriesRepositoryTrait;

const COLLECTION: &str = "stories";

pub struct StoreStoriesRepository {
    store: Store,
    stories: RwLock<Vec<Story>>,
}

impl StoreStoriesRepository {
    pub fn new(store: Store) -> Self {
        let stories = store
            .get::<Vec<Story>>(COLLECTION)
            .unwrap_or_else(|err| {
                warn!("Failed to load the stories collection: {err}");
                None
            })
            .unwrap_or_default();

        Self {
            store,
            stories: RwLock::new(stories),
        }
    }

    fn persist(&self, stories: &[Story]) {
        if let Err(err) = self.store.put(COLLECTION, &stories) {
            warn!("Failed to persist the stories collection: {err}");
        }
    }
}

impl StoriesRepositoryTrait for StoreStoriesRepository {
    fn get(&self, id: &StoryId) -> Option<Story> {
        self.stories.read().iter().find(|s| &s.id == id).cloned()
    }

    fn put(&self, story: Story) {
        let mut stories = self.stories.write();
        stories.push(story);
        self.persist(&stories);
    }

    fn add_viewer(&self, id: &StoryId, viewer: &UserId) -> bool {
        let mut stories = self.stories.write();

        let Some(story) = stories.iter_mut().find(|s| &s.id == id) else {
            return false;
        };
        if !story.add_viewer(viewer) {
            return false;
        }

        self.persist(&stories);
        true
    }

    fn visible_at(&self, now: DateTime<Utc>) -> Vec<Story> {
        self.stories
            .read()
            .iter()
            .filter(|s| s.is_visible_at(now))
            .cloned()
            .collect()
    }
}
