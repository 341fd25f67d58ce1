use super::prelude::*;
use crate::util::polygon;

/// Merges zone boundaries into a single GeoJSON geometry.
pub fn merge_boundaries<S: AsRef<str>>(geojsons: &[S]) -> Result<String> {
    let merged = polygon::merge_boundaries(geojsons.iter().map(AsRef::as_ref))?;
    log::debug!(
        "Merged {} boundaries into {} polygon(s)",
        geojsons.len(),
        merged.polygon_count()
    );
    Ok(merged.to_geojson())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::polygon::{parse_boundary, MergeError};

    #[test]
    fn merge_adjacent_zones() {
        let west = r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,1],[0,0]]]}"#;
        let east = r#"{"type":"Polygon","coordinates":[[[0.5,0],[2,0],[2,1],[0.5,1],[0.5,0]]]}"#;
        let merged = merge_boundaries(&[west, east]).unwrap();
        let boundary = parse_boundary(&merged).unwrap();
        assert_eq!(1, boundary.polygon_count());
        assert!(boundary.contains(MapPoint::from_lat_lng_deg(0.5, 1.5)));
    }

    #[test]
    fn merge_nothing() {
        assert!(matches!(
            merge_boundaries::<String>(&[]),
            Err(Error::Merge(MergeError::Empty))
        ));
    }

    #[test]
    fn report_the_malformed_boundary() {
        let ok = r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,1],[0,0]]]}"#;
        let err = merge_boundaries(&[ok, ok, "[]"]).unwrap_err();
        assert!(matches!(
            err,
            Error::Merge(MergeError::Malformed { index: 2, .. })
        ));
        assert!(err.to_string().contains("#2"));
    }
}
