// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use murmur_store::Store;

use crate::app::deps::{
    AppContext, AppDependencies, DynIDProvider, DynIdentityService, DynTimeProvider,
};
use crate::app::event_handlers::ClientEventDispatcher;
use crate::client::ClientInner;
use crate::infra::contacts::StoreContactsRepository;
use crate::infra::messaging::StoreConversationsRepository;
use crate::infra::stories::StoreStoriesRepository;
use crate::services::{AccountService, ChatsService, ContactsService, StoriesService};
use crate::util::{IDProvider, SystemTimeProvider, TimeProvider, UUIDProvider};
use crate::{Client, ClientDelegate};

pub struct UndefinedStore;
pub struct UndefinedIdentityService;

pub struct ClientBuilder<S, I> {
    delegate: Option<Box<dyn ClientDelegate>>,
    id_provider: DynIDProvider,
    identity_service: I,
    store: S,
    time_provider: DynTimeProvider,
}

impl ClientBuilder<UndefinedStore, UndefinedIdentityService> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            delegate: None,
            id_provider: Arc::new(UUIDProvider::default()),
            identity_service: UndefinedIdentityService,
            store: UndefinedStore,
            time_provider: Arc::new(SystemTimeProvider::default()),
        }
    }
}

impl<I> ClientBuilder<UndefinedStore, I> {
    pub fn set_store(self, store: Store) -> ClientBuilder<Store, I> {
        ClientBuilder {
            delegate: self.delegate,
            id_provider: self.id_provider,
            identity_service: self.identity_service,
            store,
            time_provider: self.time_provider,
        }
    }
}

impl<S> ClientBuilder<S, UndefinedIdentityService> {
    pub fn set_identity_service(
        self,
        identity_service: DynIdentityService,
    ) -> ClientBuilder<S, DynIdentityService> {
        ClientBuilder {
            delegate: self.delegate,
            id_provider: self.id_provider,
            identity_service,
            store: self.store,
            time_provider: self.time_provider,
        }
    }
}

impl<S, I> ClientBuilder<S, I> {
    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }

    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.id_provider = Arc::new(id_provider);
        self
    }

    pub fn set_time_provider<P: TimeProvider + 'static>(mut self, time_provider: P) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }
}

impl ClientBuilder<Store, DynIdentityService> {
    pub fn build(self) -> Client {
        let client_event_dispatcher = Arc::new(ClientEventDispatcher::new(self.delegate));

        let deps = AppDependencies {
            client_event_dispatcher: client_event_dispatcher.clone(),
            contacts_repo: Arc::new(StoreContactsRepository::new(self.store.clone())),
            conversations_repo: Arc::new(StoreConversationsRepository::new(self.store.clone())),
            ctx: Arc::new(AppContext::new()),
            id_provider: self.id_provider,
            identity_service: self.identity_service,
            stories_repo: Arc::new(StoreStoriesRepository::new(self.store)),
            time_provider: self.time_provider,
        };

        let inner = Arc::new(ClientInner {
            account: AccountService::from(&deps),
            chats: ChatsService::from(&deps),
            contacts: ContactsService::from(&deps),
            stories: StoriesService::from(&deps),
            ctx: deps.ctx.clone(),
        });

        client_event_dispatcher.set_client(Arc::downgrade(&inner));

        inner.into()
    }
}
