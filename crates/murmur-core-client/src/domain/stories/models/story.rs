// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::shared::models::{StoryId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryMediaKind {
    Image,
    Video,
}

/// A self-expiring media post. Expiry is a pure function of the clock read
/// at query time; nothing ever deletes a story, it just stops being visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub author: UserId,
    pub media_url: Url,
    pub media_kind: StoryMediaKind,
    pub caption: Option<String>,
    pub timestamp: DateTime<Utc>,
    /// `timestamp` + 24h. The TTL is fixed and not renewable.
    pub expires_at: DateTime<Utc>,
    /// Append-only, one entry per viewer.
    pub viewers: Vec<UserId>,
}

impl Story {
    pub fn ttl() -> Duration {
        Duration::hours(24)
    }

    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Records a viewer. Returns `false` when they were already recorded.
    pub fn add_viewer(&mut self, viewer: &UserId) -> bool {
        if self.viewers.contains(viewer) {
            return false;
        }
        self.viewers.push(viewer.clone());
        true
    }
}
