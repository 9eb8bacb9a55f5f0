// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::{ConversationId, MessageId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// Infos related to the signed-in user have changed, including the
    /// loading/error state of identity operations.
    AccountInfoChanged,

    /// Contacts were added or removed.
    ContactListChanged,

    /// Infos about a contact have changed.
    ContactChanged { ids: Vec<UserId> },

    /// The derived chat list has changed (ordering, previews or unread
    /// counts).
    ChatListChanged,

    ConversationChanged {
        id: ConversationId,
        r#type: ConversationEventType,
    },

    /// A story was added or a viewer was recorded.
    StoriesChanged,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConversationEventType {
    /// One or many messages were sent.
    MessagesAppended { message_ids: Vec<MessageId> },

    /// One or many messages changed in place (status advance or edit).
    MessagesUpdated { message_ids: Vec<MessageId> },

    /// A message was deleted.
    MessagesDeleted { message_ids: Vec<MessageId> },
}
