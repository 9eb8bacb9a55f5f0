// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use url::Url;

pub use account_info::AccountInfo;
pub use chat_summary::ChatSummary;
pub use send_message_request::SendMessageRequest;

pub use crate::domain::{
    account::models::{
        ContentSettings, MessagePrivacy, NotificationSettings, PrivacySettings, ProfilePatch,
        StoryVisibility, UserProfile, UserSettings, Visibility,
    },
    contacts::models::{Contact, LastMessage},
    messaging::models::{Conversation, ConversationKind, Message, MessageKind, MessageStatus},
    shared::models::{
        AuthState, Availability, ClientError, ConversationId, MessageId, NotAuthenticatedError,
        StoryId, UserId,
    },
    stories::models::{Story, StoryMediaKind},
};

mod account_info;
mod chat_summary;
mod send_message_request;
