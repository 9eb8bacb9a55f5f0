// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::shared::models::{Availability, UserId};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub user_id: UserId,
    pub username: String,
    pub avatar: Url,
    pub availability: Availability,
    /// Derived counter, kept by the message-send/receive orchestration.
    pub unread_count: u32,
    /// Denormalized copy of the newest message exchanged with this contact.
    pub last_message: Option<LastMessage>,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LastMessage {
    pub content: String,
    pub timestamp: DateTime<Utc>,
}
