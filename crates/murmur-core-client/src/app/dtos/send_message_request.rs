// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use url::Url;

use crate::domain::messaging::models::MessageKind;
use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct SendMessageRequest {
    pub to: UserId,
    pub content: String,
    pub kind: MessageKind,
    /// Required for media kinds; the client treats the target as opaque.
    pub media_url: Option<Url>,
}

impl SendMessageRequest {
    pub fn text(to: UserId, content: impl Into<String>) -> Self {
        Self {
            to,
            content: content.into(),
            kind: MessageKind::Text,
            media_url: None,
        }
    }
}
