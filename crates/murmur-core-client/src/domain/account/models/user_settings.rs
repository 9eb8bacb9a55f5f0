// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserSettings {
    pub privacy: PrivacySettings,
    pub notifications: NotificationSettings,
    pub content: ContentSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub profile_visibility: Visibility,
    pub story_visibility: StoryVisibility,
    pub message_privacy: MessagePrivacy,
    pub show_online_status: bool,
    pub show_read_receipts: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub posts: bool,
    pub stories: bool,
    pub messages: bool,
    pub calls: bool,
    pub mentions: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSettings {
    pub autoplay_videos: bool,
    pub save_data: bool,
    pub default_post_visibility: Visibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Followers,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoryVisibility {
    Public,
    Followers,
    CloseFriends,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessagePrivacy {
    Everyone,
    Followers,
    Nobody,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            profile_visibility: Visibility::Public,
            story_visibility: StoryVisibility::Followers,
            message_privacy: MessagePrivacy::Everyone,
            show_online_status: true,
            show_read_receipts: true,
        }
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            posts: true,
            stories: true,
            messages: true,
            calls: true,
            mentions: true,
        }
    }
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            autoplay_videos: true,
            save_data: false,
            default_post_visibility: Visibility::Public,
        }
    }
}
