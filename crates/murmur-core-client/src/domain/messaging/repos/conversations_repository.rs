// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::messaging::models::{Conversation, Message};
use crate::domain::shared::models::{ConversationId, MessageId, UserId};

/// The conversation ledger. Owns the conversation list, each conversation's
/// insertion-ordered message sequence and the active-conversation marker;
/// all three persist as one container.
///
/// Messages keep their insertion order, they are never re-sorted by
/// timestamp. Conversation recency ordering is a read-time concern of the
/// callers, never stored order.
pub trait ConversationsRepository: Send + Sync {
    fn get_all(&self) -> Vec<Conversation>;

    fn get(&self, id: &ConversationId) -> Option<Conversation>;

    /// Looks up the unique individual conversation between the two users,
    /// in either participant order.
    fn find_individual(&self, a: &UserId, b: &UserId) -> Option<Conversation>;

    /// Inserts a new conversation with an empty message sequence. The sole
    /// insertion path; callers guarantee uniqueness per participant pair by
    /// looking up first.
    fn put(&self, conversation: Conversation);

    fn messages(&self, id: &ConversationId) -> Vec<Message>;

    /// Appends to the conversation's sequence and refreshes its
    /// `last_message` and `updated_at` caches.
    fn append_message(&self, id: &ConversationId, message: Message);

    /// Advances every listed message to `Read` (never regressing), then
    /// recomputes unread counts from `reader`'s perspective. Returns the
    /// affected conversations along with the ids whose status actually
    /// changed.
    fn mark_as_read(
        &self,
        reader: &UserId,
        message_ids: &[MessageId],
    ) -> Vec<(ConversationId, Vec<MessageId>)>;

    /// Ids of messages addressed to `reader` that are not read yet, in
    /// sequence order.
    fn unread_message_ids(&self, id: &ConversationId, reader: &UserId) -> Vec<MessageId>;

    /// Removes the message. When it was the cached `last_message`, the cache
    /// is recomputed from the new final element (or cleared). Returns
    /// whether a message was removed.
    fn delete_message(&self, id: &ConversationId, message_id: &MessageId) -> bool;

    /// Mutates the message content in place, marking it edited. Refreshes
    /// the `last_message` cache when the edited message is the cached one.
    /// Returns the updated message.
    fn edit_message(
        &self,
        id: &ConversationId,
        message_id: &MessageId,
        content: &str,
        edited_at: DateTime<Utc>,
    ) -> Option<Message>;

    fn active_conversation(&self) -> Option<ConversationId>;

    fn set_active_conversation(&self, id: Option<&ConversationId>);
}
