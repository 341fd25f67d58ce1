use crate::{time::Timestamp, weekday::Weekday};
use std::fmt;

/// Handle of a persisted zone.
///
/// Handles are assigned by the persistence layer in ascending
/// order, which defines the evaluation order during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZoneId(i64);

impl ZoneId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn to_inner(self) -> i64 {
        self.0
    }
}

impl From<i64> for ZoneId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// A named polygonal operating area.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    /// GeoJSON geometry (`Polygon` or `MultiPolygon`) in lng/lat order
    pub boundary: String,
    pub operative_days: Vec<Weekday>,
    pub active: bool,
    pub created_at: Timestamp,
}

impl Zone {
    pub fn is_operative_on(&self, day: Weekday) -> bool {
        self.operative_days.contains(&day)
    }
}

/// The editable properties of a zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneProperties {
    pub name: String,
    pub boundary: String,
    pub operative_days: Vec<Weekday>,
    pub active: bool,
}
