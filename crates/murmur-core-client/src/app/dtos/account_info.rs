// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use url::Url;

use crate::domain::shared::models::{Availability, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct AccountInfo {
    pub id: UserId,
    pub username: String,
    pub avatar: Url,
    pub availability: Availability,
}
