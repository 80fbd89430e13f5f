// crates/diadanh-core/src/lib.rs

pub mod common;
pub mod error;
pub mod export;
pub mod loader; // The public loader
pub mod model;
pub mod pager;
pub mod persistence;
pub mod prelude;
pub mod query_string;
pub mod search;
pub mod session; // Query/page state machine used by the front-ends
pub mod suggest;
pub mod text;
pub mod traits;
pub mod tree;
// Shared raw input (used by loaders and tests)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{DiaDanhError, GazetteerError, Result};
pub use model::{DefaultBackend, DefaultGazetteer, Gazetteer, PlaceRecord, SearchQuery};
pub use crate::common::{GazetteerStats, StandardBackend};
pub use crate::search::filter_records;
pub use crate::session::{LookupSession, LookupView};
// Export the search trait (crucial for users!)
pub use crate::traits::{GazetteerBackend, GazetteerSearch};
pub use crate::tree::HierarchyTree;
