// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::shared::models::{Availability, UserId};

use super::UserSettings;

/// The profile record kept by the identity provider. The client only ever
/// mutates it through `ProfilePatch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub avatar: Url,
    pub availability: Availability,
    pub last_seen: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub settings: UserSettings,
}

/// Partial profile update. Unset fields leave the profile untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<Url>,
    pub availability: Option<Availability>,
    pub settings: Option<UserSettings>,
}

impl UserProfile {
    /// The avatar every fresh account starts with, derived deterministically
    /// from the username so repeated sign-ups render the same image.
    pub fn default_avatar(username: &str) -> Url {
        Url::parse(&format!(
            "https://api.dicebear.com/7.x/avatars/svg?seed={username}"
        ))
        .expect("Invalid default avatar URL")
    }

    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = avatar;
        }
        if let Some(availability) = patch.availability {
            self.availability = availability;
        }
        if let Some(settings) = patch.settings {
            self.settings = settings;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: "u1".into(),
            username: "jane".to_string(),
            email: "jane@murmur.im".to_string(),
            avatar: UserProfile::default_avatar("jane"),
            availability: Availability::Online,
            last_seen: None,
            created_at: Utc::now(),
            settings: UserSettings::default(),
        }
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let mut p = profile();
        let before = p.clone();
        p.apply(ProfilePatch::default());
        assert_eq!(before, p);
    }

    #[test]
    fn test_apply_merges_set_fields() {
        let mut p = profile();
        p.apply(ProfilePatch {
            username: Some("jane.doe".to_string()),
            availability: Some(Availability::Away),
            ..Default::default()
        });

        assert_eq!(p.username, "jane.doe");
        assert_eq!(p.availability, Availability::Away);
        assert_eq!(p.email, "jane@murmur.im");
    }

    #[test]
    fn test_default_avatar_is_seeded_by_username() {
        assert_eq!(
            UserProfile::default_avatar("jane"),
            UserProfile::default_avatar("jane")
        );
        assert_ne!(
            UserProfile::default_avatar("jane"),
            UserProfile::default_avatar("john")
        );
    }
}
