use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::ConversionError;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "kebab-case")]
pub enum StopKind {
    #[default]
    Order,
    RecurringService,
}

/// A place to visit, e.g. a delivery or a pickup.
///
/// Only stops with both `lat` and `lng` are geocoded.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Stop {
    pub id: String,
    #[serde(default)]
    pub kind: StopKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_order: Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct RecurringStop {
    #[serde(flatten)]
    pub stop: Stop,
    /// Weekday labels, e.g. `Lunes`
    pub service_days: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Zone {
    pub id: i64,
    pub name: String,
    /// GeoJSON geometry
    pub boundary: String,
    pub operative_days: Vec<String>,
    pub active: bool,
    pub created: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewZone {
    pub name: String,
    pub boundary: String,
    #[serde(default)]
    pub operative_days: Vec<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ZoneDetection {
    AddressNotFound,
    OutsideOperativeArea {
        lat: f64,
        lng: f64,
    },
    Found {
        lat: f64,
        lng: f64,
        zone_id: i64,
        zone_name: String,
    },
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct AddressSuggestion {
    pub display_name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct LocalityBoundary {
    pub display_name: String,
    /// GeoJSON geometry
    pub boundary: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct DayStops {
    #[serde(default)]
    pub orders: Vec<Stop>,
    #[serde(default)]
    pub recurring: Vec<RecurringStop>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct DriverDayPlan {
    pub weekday: String,
    pub zone: Option<Zone>,
    pub orders: Vec<Stop>,
    pub recurring: Vec<RecurringStop>,
}
