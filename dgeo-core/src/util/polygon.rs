use crate::entities::MapPoint;
use geo::{BooleanOps as _, Contains as _, Geometry, MultiPolygon, Point};
use geojson::GeoJson;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error(transparent)]
    GeoJson(#[from] Box<geojson::Error>),
    #[error("Feature without geometry")]
    MissingGeometry,
    #[error("Unsupported geometry: expected Polygon or MultiPolygon, got {0}")]
    UnsupportedGeometry(&'static str),
    #[error("Boundary without any polygon")]
    Empty,
}

impl From<geojson::Error> for BoundaryError {
    fn from(err: geojson::Error) -> Self {
        Self::GeoJson(Box::new(err))
    }
}

/// The area of a zone in lng/lat space.
///
/// Every boundary is handled as a multi polygon, a plain
/// polygon is a multi polygon with a single member.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary(MultiPolygon<f64>);

impl Boundary {
    pub fn from_multi_polygon(multi_polygon: MultiPolygon<f64>) -> Result<Self, BoundaryError> {
        if multi_polygon.0.is_empty() {
            return Err(BoundaryError::Empty);
        }
        Ok(Self(multi_polygon))
    }

    pub fn as_multi_polygon(&self) -> &MultiPolygon<f64> {
        &self.0
    }

    pub fn polygon_count(&self) -> usize {
        self.0 .0.len()
    }

    /// Interior containment, points exactly on the boundary
    /// are not contained.
    pub fn contains(&self, pos: MapPoint) -> bool {
        let (lat, lng) = pos.to_lat_lng_deg();
        // x = longitude, y = latitude
        self.0.contains(&Point::new(lng, lat))
    }

    pub fn union(&self, other: &Boundary) -> Boundary {
        Self(self.0.union(&other.0))
    }

    /// GeoJSON geometry text, `Polygon` for a single polygon
    /// and `MultiPolygon` otherwise.
    pub fn to_geojson(&self) -> String {
        let value = match self.0 .0.as_slice() {
            [polygon] => geojson::Value::from(polygon),
            _ => geojson::Value::from(&self.0),
        };
        GeoJson::Geometry(geojson::Geometry::new(value)).to_string()
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(&self.to_geojson())
    }
}

impl FromStr for Boundary {
    type Err = BoundaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let geometry = match s.parse::<GeoJson>()? {
            GeoJson::Geometry(geometry) => geometry,
            GeoJson::Feature(feature) => feature.geometry.ok_or(BoundaryError::MissingGeometry)?,
            GeoJson::FeatureCollection(_) => {
                return Err(BoundaryError::UnsupportedGeometry("FeatureCollection"));
            }
        };
        let multi_polygon = match Geometry::<f64>::try_from(geometry)? {
            Geometry::Polygon(polygon) => MultiPolygon::new(vec![polygon]),
            Geometry::MultiPolygon(multi_polygon) => multi_polygon,
            other => return Err(BoundaryError::UnsupportedGeometry(geometry_type_name(&other))),
        };
        Self::from_multi_polygon(multi_polygon)
    }
}

fn geometry_type_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

pub fn parse_boundary(geojson: &str) -> Result<Boundary, BoundaryError> {
    geojson.parse()
}

pub fn boundary_to_geojson(boundary: &Boundary) -> String {
    boundary.to_geojson()
}

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("No boundaries to merge")]
    Empty,
    #[error("Boundary #{index} is malformed: {source}")]
    Malformed {
        index: usize,
        #[source]
        source: BoundaryError,
    },
}

/// Union of all given GeoJSON polygons or multi polygons.
pub fn merge_boundaries<'a>(
    geojsons: impl IntoIterator<Item = &'a str>,
) -> Result<Boundary, MergeError> {
    let mut merged: Option<Boundary> = None;
    for (index, geojson) in geojsons.into_iter().enumerate() {
        let next = parse_boundary(geojson).map_err(|source| MergeError::Malformed { index, source })?;
        merged = Some(match merged {
            Some(merged) => merged.union(&next),
            None => next,
        });
    }
    merged.ok_or(MergeError::Empty)
}
