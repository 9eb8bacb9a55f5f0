// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use murmur_utils::id_string;

id_string!(
    /// Identifies a user account. Assigned by the identity provider; opaque
    /// to the client.
    UserId
);
