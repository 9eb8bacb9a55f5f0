// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Progress of the identity operations. `error` carries the user-visible
/// message of the last failed remote call; observers poll this snapshot
/// rather than catching errors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthState {
    pub is_loading: bool,
    pub error: Option<String>,
}
