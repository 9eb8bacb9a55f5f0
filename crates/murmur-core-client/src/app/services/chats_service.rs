// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use itertools::Itertools;

use crate::app::deps::*;
use crate::domain::messaging::models::{Conversation, Message, MessageStatus};
use crate::domain::shared::models::{ClientError, ConversationId, MessageId, UserId};
use crate::dtos::{ChatSummary, SendMessageRequest};
use crate::{ClientEvent, ConversationEventType};

/// The conversation and message ledger surface. Every operation that reads
/// or mutates the ledger resolves the acting user first and fails with
/// `ClientError::NotAuthenticated` when no session exists.
pub struct ChatsService {
    ctx: DynAppContext,
    client_event_dispatcher: DynClientEventDispatcher,
    contacts_repo: DynContactsRepository,
    conversations_repo: DynConversationsRepository,
    id_provider: DynIDProvider,
    time_provider: DynTimeProvider,
}

impl From<&AppDependencies> for ChatsService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            contacts_repo: deps.contacts_repo.clone(),
            conversations_repo: deps.conversations_repo.clone(),
            id_provider: deps.id_provider.clone(),
            time_provider: deps.time_provider.clone(),
        }
    }
}

impl ChatsService {
    /// Looks up the individual conversation with `participant_id`. Never
    /// creates one.
    pub fn conversation(
        &self,
        participant_id: &UserId,
    ) -> Result<Option<Conversation>, ClientError> {
        let user_id = self.ctx.signed_in_user_id()?;
        Ok(self
            .conversations_repo
            .find_individual(&user_id, participant_id))
    }

    /// Returns the existing conversation with `participant_id` or creates an
    /// empty one. The only path that creates conversations.
    pub fn start_conversation(
        &self,
        participant_id: &UserId,
    ) -> Result<Conversation, ClientError> {
        let user_id = self.ctx.signed_in_user_id()?;

        if let Some(conversation) = self
            .conversations_repo
            .find_individual(&user_id, participant_id)
        {
            return Ok(conversation);
        }

        let conversation = Conversation::individual(
            self.id_provider.new_id().into(),
            user_id,
            participant_id.clone(),
            self.time_provider.now(),
        );
        self.conversations_repo.put(conversation.clone());

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ChatListChanged);

        Ok(conversation)
    }

    pub fn send_message(&self, request: SendMessageRequest) -> Result<Message, ClientError> {
        let sender_id = self.ctx.signed_in_user_id()?;
        let conversation = self.start_conversation(&request.to)?;
        let now = self.time_provider.now();

        let message = Message {
            id: self.id_provider.new_id().into(),
            sender_id,
            receiver_id: request.to.clone(),
            group_id: None,
            content: request.content,
            kind: request.kind,
            media_url: request.media_url,
            timestamp: now,
            status: MessageStatus::Sent,
            is_edited: false,
            edited_at: None,
        };

        self.conversations_repo
            .append_message(&conversation.id, message.clone());

        // The receiver contact's preview is a denormalized cache of this
        // ledger; sending is one of the paths that must refresh it.
        self.contacts_repo
            .set_last_message(&request.to, &message.content, now);

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConversationChanged {
                id: conversation.id,
                r#type: ConversationEventType::MessagesAppended {
                    message_ids: vec![message.id.clone()],
                },
            });
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ChatListChanged);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ContactChanged {
                ids: vec![request.to],
            });

        Ok(message)
    }

    /// Advances the listed messages to read from the signed-in user's
    /// perspective and re-derives unread counts. Idempotent.
    pub fn mark_as_read(&self, message_ids: &[MessageId]) -> Result<(), ClientError> {
        let reader = self.ctx.signed_in_user_id()?;
        let affected = self.conversations_repo.mark_as_read(&reader, message_ids);

        if affected.is_empty() {
            return Ok(());
        }

        for (conversation_id, message_ids) in affected {
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::ConversationChanged {
                    id: conversation_id,
                    r#type: ConversationEventType::MessagesUpdated { message_ids },
                });
        }
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ChatListChanged);

        Ok(())
    }

    pub fn delete_message(
        &self,
        conversation_id: &ConversationId,
        message_id: &MessageId,
    ) -> Result<(), ClientError> {
        self.ctx.signed_in_user_id()?;

        if !self
            .conversations_repo
            .delete_message(conversation_id, message_id)
        {
            return Ok(());
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConversationChanged {
                id: conversation_id.clone(),
                r#type: ConversationEventType::MessagesDeleted {
                    message_ids: vec![message_id.clone()],
                },
            });
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ChatListChanged);

        Ok(())
    }

    pub fn edit_message(
        &self,
        conversation_id: &ConversationId,
        message_id: &MessageId,
        new_content: &str,
    ) -> Result<(), ClientError> {
        self.ctx.signed_in_user_id()?;

        let Some(message) = self.conversations_repo.edit_message(
            conversation_id,
            message_id,
            new_content,
            self.time_provider.now(),
        ) else {
            return Ok(());
        };

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConversationChanged {
                id: conversation_id.clone(),
                r#type: ConversationEventType::MessagesUpdated {
                    message_ids: vec![message.id],
                },
            });
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ChatListChanged);

        Ok(())
    }

    /// Focuses the conversation. Navigation doubles as a mutation here: every
    /// message addressed to the signed-in user becomes read (through the
    /// regular `mark_as_read` path) and the peer contact's unread counter is
    /// reset.
    pub fn set_active_conversation(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<(), ClientError> {
        let reader = self.ctx.signed_in_user_id()?;

        self.conversations_repo
            .set_active_conversation(Some(conversation_id));

        let unread = self
            .conversations_repo
            .unread_message_ids(conversation_id, &reader);
        if !unread.is_empty() {
            self.mark_as_read(&unread)?;
        }

        if let Some(conversation) = self.conversations_repo.get(conversation_id) {
            if let Some(peer) = conversation.other_participant(&reader) {
                self.contacts_repo.reset_unread_count(peer);
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::ContactChanged {
                        ids: vec![peer.clone()],
                    });
            }
        }

        Ok(())
    }

    pub fn active_conversation(&self) -> Option<ConversationId> {
        self.conversations_repo.active_conversation()
    }

    pub fn messages(&self, conversation_id: &ConversationId) -> Vec<Message> {
        self.conversations_repo.messages(conversation_id)
    }

    /// The chat list, most recently updated first. Recency ordering is
    /// derived here on every read; the ledger stores conversations in
    /// creation order.
    pub fn chat_list(&self) -> Result<Vec<ChatSummary>, ClientError> {
        let user_id = self.ctx.signed_in_user_id()?;

        Ok(self
            .conversations_repo
            .get_all()
            .into_iter()
            .sorted_by(|a, b| b.updated_at.cmp(&a.updated_at))
            .filter_map(|conversation| {
                let participant = conversation.other_participant(&user_id)?.clone();
                Some(ChatSummary {
                    id: conversation.id,
                    participant,
                    unread_count: conversation.unread_count,
                    last_message: conversation.last_message,
                    updated_at: conversation.updated_at,
                })
            })
            .collect())
    }
}
