// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::warn;

use murmur_store::prelude::*;

use crate::domain::contacts::models::{Contact, LastMessage};
use crate::domain::contacts::repos::ContactsRepository as ContactsRepositoryTrait;
use crate::domain::shared::models::{Availability, ClientError, UserId};

const COLLECTION: &str = "contacts";

/// Contact directory serving reads from memory, hydrated from the store at
/// construction time. Every mutation writes the collection back; a failed
/// write is logged and otherwise ignored.
pub struct StoreContactsRepository {
    store: Store,
    contacts: RwLock<Vec<Contact>>,
}

impl StoreContactsRepository {
    pub fn new(store: Store) -> Self {
        let contacts = store
            .get::<Vec<Contact>>(COLLECTION)
            .unwrap_or_else(|err| {
                warn!("Failed to load the contacts collection: {err}");
                None
            })
            .unwrap_or_default();

        Self {
            store,
            contacts: RwLock::new(contacts),
        }
    }

    fn persist(&self, contacts: &[Contact]) {
        if let Err(err) = self.store.put(COLLECTION, &contacts) {
            warn!("Failed to persist the contacts collection: {err}");
        }
    }

    fn update_contact(&self, user_id: &UserId, update: impl FnOnce(&mut Contact)) {
        let mut contacts = self.contacts.write();
        let Some(contact) = contacts.iter_mut().find(|c| &c.user_id == user_id) else {
            return;
        };
        update(contact);
        self.persist(&contacts);
    }
}

impl ContactsRepositoryTrait for StoreContactsRepository {
    fn get_all(&self) -> Vec<Contact> {
        self.contacts.read().clone()
    }

    fn get(&self, user_id: &UserId) -> Option<Contact> {
        self.contacts
            .read()
            .iter()
            .find(|c| &c.user_id == user_id)
            .cloned()
    }

    fn add(&self, contact: Contact) -> Result<(), ClientError> {
        let mut contacts = self.contacts.write();

        if contacts.iter().any(|c| c.user_id == contact.user_id) {
            return Err(ClientError::ContactExists {
                id: contact.user_id,
            });
        }

        contacts.push(Contact {
            unread_count: 0,
            ..contact
        });
        self.persist(&contacts);
        Ok(())
    }

    fn remove(&self, user_id: &UserId) {
        let mut contacts = self.contacts.write();
        let len_before = contacts.len();
        contacts.retain(|c| &c.user_id != user_id);

        if contacts.len() != len_before {
            self.persist(&contacts);
        }
    }

    fn set_availability(&self, user_id: &UserId, availability: Availability) {
        self.update_contact(user_id, |contact| contact.availability = availability);
    }

    fn increment_unread_count(&self, user_id: &UserId) {
        self.update_contact(user_id, |contact| contact.unread_count += 1);
    }

    fn reset_unread_count(&self, user_id: &UserId) {
        self.update_contact(user_id, |contact| contact.unread_count = 0);
    }

    fn set_last_message(&self, user_id: &UserId, content: &str, timestamp: DateTime<Utc>) {
        self.update_contact(user_id, |contact| {
            contact.last_message = Some(LastMessage {
                content: content.to_string(),
                timestamp,
            })
        });
    }
}
