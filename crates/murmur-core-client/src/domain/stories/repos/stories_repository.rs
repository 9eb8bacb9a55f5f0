// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::shared::models::{StoryId, UserId};
use crate::domain::stories::models::Story;

/// The story ledger. Stories accumulate in insertion order and are never
/// evicted; queries filter by expiry lazily.
pub trait StoriesRepository: Send + Sync {
    fn get(&self, id: &StoryId) -> Option<Story>;

    fn put(&self, story: Story);

    /// Idempotent viewer append. Returns `false` for an unknown story or a
    /// repeat viewer; neither is an error.
    fn add_viewer(&self, id: &StoryId, viewer: &UserId) -> bool;

    /// Stories whose expiry lies after `now`, in insertion order. Evaluated
    /// per call since the answer changes with the clock.
    fn visible_at(&self, now: DateTime<Utc>) -> Vec<Story>;
}
