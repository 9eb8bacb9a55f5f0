// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use super::UserId;

/// Raised synchronously by every operation that needs an acting user while
/// no session is established. Deliberately not a silent no-op, derived state
/// would be meaningless without an identity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No user is signed in")]
pub struct NotAuthenticatedError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    NotAuthenticated(#[from] NotAuthenticatedError),

    #[error("A contact with id '{id}' already exists")]
    ContactExists { id: UserId },
}
