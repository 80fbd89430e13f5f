//! diadanh-rs: umbrella crate re-exporting `diadanh-core` for the demos.

pub use diadanh_core::*;
