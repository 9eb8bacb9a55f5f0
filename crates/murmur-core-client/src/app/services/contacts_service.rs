// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::app::deps::*;
use crate::domain::contacts::models::Contact;
use crate::domain::shared::models::{Availability, ClientError, UserId};
use crate::ClientEvent;

/// Surface over the contact directory. The directory itself never touches
/// the other ledgers; `ChatsService` keeps the derived contact fields in
/// sync when messages flow.
pub struct ContactsService {
    contacts_repo: DynContactsRepository,
    client_event_dispatcher: DynClientEventDispatcher,
}

impl From<&AppDependencies> for ContactsService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            contacts_repo: deps.contacts_repo.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
        }
    }
}

impl ContactsService {
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts_repo.get_all()
    }

    pub fn contact(&self, user_id: &UserId) -> Option<Contact> {
        self.contacts_repo.get(user_id)
    }

    pub fn add_contact(&self, contact: Contact) -> Result<(), ClientError> {
        self.contacts_repo.add(contact)?;
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ContactListChanged);
        Ok(())
    }

    pub fn remove_contact(&self, user_id: &UserId) {
        self.contacts_repo.remove(user_id);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ContactListChanged);
    }

    pub fn set_availability(&self, user_id: &UserId, availability: Availability) {
        self.contacts_repo.set_availability(user_id, availability);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ContactChanged {
                ids: vec![user_id.clone()],
            });
    }

    pub fn increment_unread_count(&self, user_id: &UserId) {
        self.contacts_repo.increment_unread_count(user_id);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ContactChanged {
                ids: vec![user_id.clone()],
            });
    }

    pub fn reset_unread_count(&self, user_id: &UserId) {
        self.contacts_repo.reset_unread_count(user_id);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ContactChanged {
                ids: vec![user_id.clone()],
            });
    }

    pub fn set_last_message(&self, user_id: &UserId, content: &str, timestamp: DateTime<Utc>) {
        self.contacts_repo.set_last_message(user_id, content, timestamp);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ContactChanged {
                ids: vec![user_id.clone()],
            });
    }
}
