// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::contacts::models::Contact;
use crate::domain::shared::models::{Availability, ClientError, UserId};

/// The contact directory. Mutations that name an unknown user id are defined
/// as no-ops; the directory never reaches into the conversation or story
/// ledgers, callers orchestrate cross-store consistency.
pub trait ContactsRepository: Send + Sync {
    fn get_all(&self) -> Vec<Contact>;

    fn get(&self, user_id: &UserId) -> Option<Contact>;

    /// Inserts the contact with its unread counter reset. Rejects a user id
    /// that is already present.
    fn add(&self, contact: Contact) -> Result<(), ClientError>;

    fn remove(&self, user_id: &UserId);

    fn set_availability(&self, user_id: &UserId, availability: Availability);

    fn increment_unread_count(&self, user_id: &UserId);

    fn reset_unread_count(&self, user_id: &UserId);

    fn set_last_message(&self, user_id: &UserId, content: &str, timestamp: DateTime<Utc>);
}
