// crates/diadanh-core/src/common.rs
use crate::traits::GazetteerBackend;
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the gazetteer.
///
/// `records` counts the validated dataset. The other three count distinct
/// names in the hierarchy projection, so records that are excluded from the
/// tree do not contribute to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerStats {
    pub records: usize,
    pub provinces: usize,
    pub districts: usize,
    pub wards: usize,
}

/// Default backend: plain `String`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultBackend;

impl GazetteerBackend for DefaultBackend {
    type Str = String;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }
}

/// Convenient alias used by examples and bindings.
pub type StandardBackend = DefaultBackend;
