use itertools::Itertools;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MapPointParseError {
    #[error("Invalid latitude '{0}'")]
    Lat(String),
    #[error("Invalid longitude '{0}'")]
    Lng(String),
    #[error("Latitude out of range: {0}")]
    LatRange(f64),
    #[error("Longitude out of range: {0}")]
    LngRange(f64),
    #[error("Failed to parse map point: {0}")]
    Format(String),
}

/// Latitude in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub fn is_valid(self) -> bool {
        self.0 >= Self::DEG_MIN && self.0 <= Self::DEG_MAX
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let res = Self(deg.into());
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let res = Self(deg.into());
        // NaN fails both comparisons
        res.is_valid().then_some(res)
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// Longitude in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub fn is_valid(self) -> bool {
        self.0 >= Self::DEG_MIN && self.0 <= Self::DEG_MAX
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let res = Self(deg.into());
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let res = Self(deg.into());
        res.is_valid().then_some(res)
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// A geographical location in plain latitude/longitude degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }

    fn parse_lat_lng_deg(lat_deg_str: &str, lng_deg_str: &str) -> Result<Self, MapPointParseError> {
        let lat_deg = lat_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|_| MapPointParseError::Lat(lat_deg_str.to_owned()))?;
        let lng_deg = lng_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|_| MapPointParseError::Lng(lng_deg_str.to_owned()))?;
        let lat = LatCoord::try_from_deg(lat_deg).ok_or(MapPointParseError::LatRange(lat_deg))?;
        let lng = LngCoord::try_from_deg(lng_deg).ok_or(MapPointParseError::LngRange(lng_deg))?;
        Ok(Self::new(lat, lng))
    }

    /// Euclidean norm over the raw degrees, treating them as
    /// cartesian coordinates.
    ///
    /// Only meaningful for points that are close to each other,
    /// e.g. within a single service area. Neither the curvature
    /// of the earth nor the shrinking of longitudes towards the
    /// poles is taken into account.
    pub fn planar_distance(p1: MapPoint, p2: MapPoint) -> PlanarDistance {
        let (lat1, lng1) = p1.to_lat_lng_deg();
        let (lat2, lng2) = p2.to_lat_lng_deg();
        PlanarDistance((lat1 - lat2).hypot(lng1 - lng2))
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((lat_deg_str, lng_deg_str)) = s.split(',').collect_tuple() {
            MapPoint::parse_lat_lng_deg(lat_deg_str, lng_deg_str)
        } else {
            Err(MapPointParseError::Format(s.to_owned()))
        }
    }
}

/// Distance in degrees on a flat map.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct PlanarDistance(f64);

impl PlanarDistance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }
}
