//! diadanh prelude: bring common types and traits into scope for demos and
//! front-ends.

#![allow(unused_imports)]

pub use crate::common::{DefaultBackend, GazetteerStats, StandardBackend};
pub use crate::error::{GazetteerError, Result};
pub use crate::export::export_csv;
pub use crate::model::{DefaultGazetteer, Gazetteer, PlaceRecord, SearchQuery};
pub use crate::pager::{page, total_pages, DEFAULT_PAGE_SIZE};
pub use crate::persistence::{
    favorite_key, Favorites, FileStore, History, KeyValueStore, MemoryStore,
};
pub use crate::query_string::{parse_query_string, to_query_string};
pub use crate::session::{LookupSession, LookupView};
pub use crate::text::normalize;
pub use crate::traits::{GazetteerBackend, GazetteerSearch};
pub use crate::tree::HierarchyTree;
