// crates/diadanh-core/src/model/mod.rs
pub mod convert;
pub mod load;
pub mod place;

pub use crate::common::DefaultBackend;
pub use place::{Gazetteer, PlaceRecord, SearchQuery};

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "comp.bin";

/// Convenient alias for the default backend.
pub type DefaultGazetteer = Gazetteer<DefaultBackend>;
