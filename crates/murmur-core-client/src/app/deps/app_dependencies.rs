// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::ClientEventDispatcher;
use crate::domain::account::services::IdentityService;
use crate::domain::contacts::repos::ContactsRepository;
use crate::domain::messaging::repos::ConversationsRepository;
use crate::domain::stories::repos::StoriesRepository;
use crate::util::{IDProvider, TimeProvider};

pub type DynAppContext = Arc<AppContext>;
pub type DynClientEventDispatcher = Arc<ClientEventDispatcher>;
pub type DynContactsRepository = Arc<dyn ContactsRepository>;
pub type DynConversationsRepository = Arc<dyn ConversationsRepository>;
pub type DynIDProvider = Arc<dyn IDProvider>;
pub type DynIdentityService = Arc<dyn IdentityService>;
pub type DynStoriesRepository = Arc<dyn StoriesRepository>;
pub type DynTimeProvider = Arc<dyn TimeProvider>;

pub struct AppDependencies {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub contacts_repo: DynContactsRepository,
    pub conversations_repo: DynConversationsRepository,
    pub ctx: DynAppContext,
    pub id_provider: DynIDProvider,
    pub identity_service: DynIdentityService,
    pub stories_repo: DynStoriesRepository,
    pub time_provider: DynTimeProvider,
}
