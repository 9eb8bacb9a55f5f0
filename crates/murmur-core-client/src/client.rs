// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use crate::app::deps::DynAppContext;
use crate::client_builder::{ClientBuilder, UndefinedIdentityService, UndefinedStore};
use crate::domain::shared::models::UserId;
use crate::services::{AccountService, ChatsService, ContactsService, StoriesService};
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

impl Client {
    pub fn builder() -> ClientBuilder<UndefinedStore, UndefinedIdentityService> {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub account: AccountService,
    pub chats: ChatsService,
    pub contacts: ContactsService,
    pub stories: StoriesService,
    pub(crate) ctx: DynAppContext,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    pub fn signed_in_user_id(&self) -> Option<UserId> {
        self.ctx.signed_in_user_id().ok()
    }
}
