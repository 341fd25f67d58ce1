use crate::{geo::MapPoint, time::Timestamp};
use std::fmt;

/// Deterministic fingerprint of a normalized address.
///
/// Hex encoded SHA-256 digest, see `dgeo_core::util::fingerprint`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryHash(String);

impl QueryHash {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for QueryHash {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<QueryHash> for String {
    fn from(from: QueryHash) -> Self {
        from.0
    }
}

impl fmt::Display for QueryHash {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(&self.0)
    }
}

/// A previously resolved address.
///
/// Entries are immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeCacheEntry {
    pub query_hash: QueryHash,
    pub normalized_address: String,
    pub pos: MapPoint,
    /// Opaque payload of the external lookup, kept for auditing.
    pub raw_result: String,
    pub created_at: Timestamp,
}
