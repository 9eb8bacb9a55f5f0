// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::account::models::{UserProfile, UserSettings};
use crate::domain::shared::models::Availability;

pub use constant_time_provider::ConstantTimeProvider;
pub use event_collector::EventCollector;
pub use incrementing_id_provider::IncrementingIDProvider;
pub use message_builder::MessageBuilder;


pub mod mock_data {
    pub use super::mock_reference_date as reference_date;
}

pub fn mock_reference_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 05, 10, 0, 0, 0).unwrap()
}

pub fn mock_user_profile(id: &str, username: &str) -> UserProfile {
    UserProfile {
        id: id.into(),
        username: username.to_string(),
        email: format!("{username}@murmur.im"),
        avatar: UserProfile::default_avatar(username),
        availability: Availability::Online,
        last_seen: Some(mock_reference_date()),
        created_at: mock_reference_date(),
        settings: UserSettings::default(),
    }
}
