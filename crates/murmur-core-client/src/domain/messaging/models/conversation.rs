// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::{ConversationId, UserId};

use super::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationKind {
    Individual,
    /// Reserved data shapes. No operations target these yet.
    Group,
    Channel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub kind: ConversationKind,
    /// Exactly two entries for `Individual` conversations.
    pub participants: Vec<UserId>,
    /// Derived count of messages addressed to the signed-in user that they
    /// have not read yet.
    pub unread_count: u32,
    /// Denormalized copy of the newest message in the sequence. Every
    /// mutation path that can stale this cache refreshes it.
    pub last_message: Option<Message>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    pub fn individual(
        id: ConversationId,
        user_id: UserId,
        participant_id: UserId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            kind: ConversationKind::Individual,
            participants: vec![user_id, participant_id],
            unread_count: 0,
            last_message: None,
            updated_at: now,
        }
    }

    /// Participant-pair identity is unordered; `(a, b)` and `(b, a)` name
    /// the same conversation.
    pub fn is_individual_between(&self, a: &UserId, b: &UserId) -> bool {
        self.kind == ConversationKind::Individual
            && self.participants.contains(a)
            && self.participants.contains(b)
    }

    pub fn other_participant(&self, user_id: &UserId) -> Option<&UserId> {
        if self.kind != ConversationKind::Individual {
            return None;
        }
        self.participants.iter().find(|id| *id != user_id)
    }
}
