// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::shared::models::{ConversationId, MessageId, UserId};

/// Delivery lifecycle of a message. Variant order is the transition order,
/// a status never moves backwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sent,
    Delivered,
    Read,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Text,
    Image,
    Video,
    Audio,
    File,
    Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    /// Always `None` for individual chats. Reserved for group messaging.
    pub group_id: Option<ConversationId>,
    pub content: String,
    pub kind: MessageKind,
    /// Present iff `kind` carries media. Media is opaque to the client.
    pub media_url: Option<Url>,
    pub timestamp: DateTime<Utc>,
    pub status: MessageStatus,
    pub is_edited: bool,
    pub edited_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Advances the delivery status. Regressions are ignored so that marking
    /// an already-read message as delivered (or read again) is a no-op.
    pub fn advance_status(&mut self, status: MessageStatus) {
        self.status = self.status.max(status);
    }

    pub fn apply_edit(&mut self, content: impl Into<String>, edited_at: DateTime<Utc>) {
        self.content = content.into();
        self.is_edited = true;
        self.edited_at = Some(edited_at);
    }

    pub fn is_addressed_to(&self, user_id: &UserId) -> bool {
        &self.receiver_id == user_id
    }

    pub fn is_unread_by(&self, user_id: &UserId) -> bool {
        self.is_addressed_to(user_id) && self.status != MessageStatus::Read
    }
}
