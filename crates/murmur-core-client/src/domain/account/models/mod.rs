// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use user_profile::{ProfilePatch, UserProfile};
pub use user_settings::{
    ContentSettings, MessagePrivacy, NotificationSettings, PrivacySettings, StoryVisibility,
    UserSettings, Visibility,
};

mod user_profile;
mod user_settings;
