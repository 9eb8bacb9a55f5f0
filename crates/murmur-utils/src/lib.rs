// murmur-core-client/murmur-utils
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

mod id_string_macro;
