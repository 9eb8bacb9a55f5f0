// murmur-core-client/murmur-core-client
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use store_stories_repository::StoreStoriesRepository;

mod store_stories_repository;
