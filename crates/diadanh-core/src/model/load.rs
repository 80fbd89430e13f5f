// crates/diadanh-core/src/model/load.rs
use super::convert;
use super::place::Gazetteer;
use crate::traits::GazetteerBackend;
use bincode::Options;

/// Upper bound for a snapshot; the full national dataset is a few MB.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

impl<B: GazetteerBackend> Gazetteer<B> {
    /// Reconstructs the gazetteer from a bincode snapshot.
    ///
    /// The validity filter and the province list are re-applied to the
    /// stored records.
    pub fn from_bytes(data: &[u8]) -> Result<Self, bincode::Error> {
        let snapshot: Gazetteer<B> = bincode::DefaultOptions::new()
            .with_fixint_encoding()
            .with_limit(SNAPSHOT_LIMIT)
            .allow_trailing_bytes()
            .deserialize(data)?;

        Ok(convert::from_records(snapshot.records))
    }

    /// Serializes the gazetteer with the same options [`Self::from_bytes`] reads.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::DefaultOptions::new()
            .with_fixint_encoding()
            .with_limit(SNAPSHOT_LIMIT)
            .serialize(self)
    }
}
