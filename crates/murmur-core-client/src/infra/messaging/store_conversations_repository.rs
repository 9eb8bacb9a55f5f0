// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::warn;

use murmur_store::prelude::*;

use crate::domain::messaging::models::{Conversation, Message};
use crate::domain::messaging::repos::ConversationsRepository as ConversationsRepositoryTrait;
use crate::domain::shared::models::{ConversationId, MessageId, UserId};

const COLLECTION: &str = "messaging-data";

/// One persisted container for the whole ledger: the conversation list, the
/// message sequences keyed by conversation and the active marker.
#[derive(Debug, Default, Serialize, Deserialize)]
struct MessagingRecord {
    conversations: Vec<Conversation>,
    messages: HashMap<ConversationId, Vec<Message>>,
    active_conversation: Option<ConversationId>,
}

impl MessagingRecord {
    fn conversation_mut(&mut self, id: &ConversationId) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| &c.id == id)
    }

    /// Re-derives the `last_message` cache from the sequence tail.
    fn refresh_last_message(&mut self, id: &ConversationId) {
        let last = self
            .messages
            .get(id)
            .and_then(|messages| messages.last())
            .cloned();
        if let Some(conversation) = self.conversation_mut(id) {
            conversation.last_message = last;
        }
    }

    /// Re-derives every conversation's unread counter from `reader`'s
    /// perspective.
    fn recompute_unread_counts(&mut self, reader: &UserId) {
        for conversation in &mut self.conversations {
            conversation.unread_count = self
                .messages
                .get(&conversation.id)
                .map(|messages| {
                    messages.iter().filter(|m| m.is_unread_by(reader)).count() as u32
                })
                .unwrap_or_default();
        }
    }
}

pub struct StoreConversationsRepository {
    store: Store,
    record: RwLock<MessagingRecord>,
}

impl StoreConversationsRepository {
    pub fn new(store: Store) -> Self {
        let record = store
            .get::<MessagingRecord>(COLLECTION)
            .unwrap_or_else(|err| {
                warn!("Failed to load the messaging collection: {err}");
                None
            })
            .unwrap_or_default();

        Self {
            store,
            record: RwLock::new(record),
        }
    }

    fn persist(&self, record: &MessagingRecord) {
        if let Err(err) = self.store.put(COLLECTION, record) {
            warn!("Failed to persist the messaging collection: {err}");
        }
    }
}

impl ConversationsRepositoryTrait for StoreConversationsRepository {
    fn get_all(&self) -> Vec<Conversation> {
        self.record.read().conversations.clone()
    }

    fn get(&self, id: &ConversationId) -> Option<Conversation> {
        self.record
            .read()
            .conversations
            .iter()
            .find(|c| &c.id == id)
            .cloned()
    }

    fn find_individual(&self, a: &UserId, b: &UserId) -> Option<Conversation> {
        self.record
            .read()
            .conversations
            .iter()
            .find(|c| c.is_individual_between(a, b))
            .cloned()
    }

    fn put(&self, conversation: Conversation) {
        let mut record = self.record.write();
        record
            .messages
            .entry(conversation.id.clone())
            .or_default();
        record.conversations.push(conversation);
        self.persist(&record);
    }

    fn messages(&self, id: &ConversationId) -> Vec<Message> {
        self.record
            .read()
            .messages
            .get(id)
            .cloned()
            .unwrap_or_default()
    }

    fn append_message(&self, id: &ConversationId, message: Message) {
        let mut record = self.record.write();

        record
            .messages
            .entry(id.clone())
            .or_default()
            .push(message.clone());

        if let Some(conversation) = record.conversation_mut(id) {
            conversation.last_message = Some(message.clone());
            conversation.updated_at = message.timestamp;
        }

        self.persist(&record);
    }

    fn mark_as_read(
        &self,
        reader: &UserId,
        message_ids: &[MessageId],
    ) -> Vec<(ConversationId, Vec<MessageId>)> {
        use crate::domain::messaging::models::MessageStatus;

        let mut record = self.record.write();
        let mut affected = Vec::new();

        for conversation in &record.conversations {
            let Some(messages) = record.messages.get(&conversation.id) else {
                continue;
            };
            let changed = messages
                .iter()
                .filter(|m| message_ids.contains(&m.id) && m.status != MessageStatus::Read)
                .map(|m| m.id.clone())
                .collect::<Vec<_>>();
            if !changed.is_empty() {
                affected.push((conversation.id.clone(), changed));
            }
        }

        if affected.is_empty() {
            return affected;
        }

        for (conversation_id, changed) in &affected {
            if let Some(messages) = record.messages.get_mut(conversation_id) {
                for message in messages.iter_mut().filter(|m| changed.contains(&m.id)) {
                    message.advance_status(MessageStatus::Read);
                }
            }
            record.refresh_last_message(conversation_id);
        }

        record.recompute_unread_counts(reader);
        self.persist(&record);

        affected
    }

    fn unread_message_ids(&self, id: &ConversationId, reader: &UserId) -> Vec<MessageId> {
        self.record
            .read()
            .messages
            .get(id)
            .map(|messages| {
                messages
                    .iter()
                    .filter(|m| m.is_unread_by(reader))
                    .map(|m| m.id.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn delete_message(&self, id: &ConversationId, message_id: &MessageId) -> bool {
        let mut record = self.record.write();

        let Some(messages) = record.messages.get_mut(id) else {
            return false;
        };
        let len_before = messages.len();
        messages.retain(|m| &m.id != message_id);

        if messages.len() == len_before {
            return false;
        }

        record.refresh_last_message(id);
        self.persist(&record);
        true
    }

    fn edit_message(
        &self,
        id: &ConversationId,
        message_id: &MessageId,
        content: &str,
        edited_at: DateTime<Utc>,
    ) -> Option<Message> {
        let mut record = self.record.write();

        let message = record
            .messages
            .get_mut(id)?
            .iter_mut()
            .find(|m| &m.id == message_id)?;
        message.apply_edit(content, edited_at);
        let message = message.clone();

        record.refresh_last_message(id);
        self.persist(&record);

        Some(message)
    }

    fn active_conversation(&self) -> Option<ConversationId> {
        self.record.read().active_conversation.clone()
    }

    fn set_active_conversation(&self, id: Option<&ConversationId>) {
        let mut record = self.record.write();
        record.active_conversation = id.cloned();
        self.persist(&record);
    }
}
