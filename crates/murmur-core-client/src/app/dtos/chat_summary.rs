// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::messaging::models::Message;
use crate::domain::shared::models::{ConversationId, UserId};

/// One row of the chat list, derived per read from the conversation ledger
/// and sorted most-recently-updated first.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSummary {
    pub id: ConversationId,
    /// The conversation partner from the signed-in user's perspective.
    pub participant: UserId,
    pub unread_count: u32,
    pub last_message: Option<Message>,
    pub updated_at: DateTime<Utc>,
}
