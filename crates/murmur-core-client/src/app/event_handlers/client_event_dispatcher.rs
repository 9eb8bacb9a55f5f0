// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::{OnceLock, Weak};

use crate::client::ClientInner;
use crate::{ClientDelegate, ClientEvent};

pub struct ClientEventDispatcher {
    client: OnceLock<Weak<ClientInner>>,
    delegate: Option<Box<dyn ClientDelegate>>,
}

impl ClientEventDispatcher {
    pub fn new(delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        Self {
            client: Default::default(),
            delegate,
        }
    }

    pub(crate) fn set_client(&self, client: Weak<ClientInner>) {
        self.client
            .set(client)
            .unwrap_or_else(|_| panic!("Tried to set client on ClientEventDispatcher twice"));
    }

    pub fn dispatch_event(&self, event: ClientEvent) {
        let Some(ref delegate) = self.delegate else {
            return;
        };

        // Not wired to a client yet, e.g. when a service is exercised
        // standalone.
        let Some(client_inner) = self.client.get().and_then(Weak::upgrade) else {
            return;
        };

        delegate.handle_event(client_inner.into(), event)
    }
}
