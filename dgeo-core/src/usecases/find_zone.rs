use super::prelude::*;
use crate::util::polygon::parse_boundary;

/// The id of the first active zone that contains the position.
///
/// `None` means the position is outside of the operative area.
pub fn find_zone<R: ZoneRepo>(repo: &R, pos: MapPoint) -> Result<Option<ZoneId>> {
    Ok(find_active_zone(repo, pos)?.map(|zone| zone.id))
}

pub fn find_active_zone<R: ZoneRepo>(repo: &R, pos: MapPoint) -> Result<Option<Zone>> {
    if !pos.is_valid() {
        log::debug!("Cannot find zone for invalid position {pos}");
        return Ok(None);
    }
    let zones = repo.all_active_zones()?;
    Ok(first_zone_containing(zones, pos))
}

/// Returns the first zone in iteration order whose boundary
/// contains the position.
///
/// Zones with a malformed boundary are skipped.
pub fn first_zone_containing<I>(zones: I, pos: MapPoint) -> Option<Zone>
where
    I: IntoIterator<Item = Zone>,
{
    zones.into_iter().find(|zone| match parse_boundary(&zone.boundary) {
        Ok(boundary) => boundary.contains(pos),
        Err(err) => {
            log::warn!(
                "Skipping zone {} '{}' with a malformed boundary: {err}",
                zone.id,
                zone.name
            );
            false
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::prelude::*, *};

    fn zone(id: i64, name: &str, rect: (f64, f64, f64, f64)) -> Zone {
        let (min_lng, min_lat, max_lng, max_lat) = rect;
        Zone::build()
            .id(id)
            .name(name)
            .rect(min_lng, min_lat, max_lng, max_lat)
            .finish()
    }

    fn centro() -> Zone {
        zone(1, "Zona Centro / Guemes", (-64.6, -32.2, -64.4, -32.0))
    }

    fn norte() -> Zone {
        zone(2, "Zona Norte", (-64.6, -32.0, -64.4, -31.8))
    }

    #[test]
    fn point_inside_a_single_zone() {
        let db = MockDb::with_zones(vec![centro(), norte()]);
        let pos = MapPoint::from_lat_lng_deg(-32.1, -64.5);
        assert_eq!(Some(ZoneId::new(1)), find_zone(&db, pos).unwrap());
        let pos = MapPoint::from_lat_lng_deg(-31.9, -64.5);
        assert_eq!(Some(ZoneId::new(2)), find_zone(&db, pos).unwrap());
    }

    #[test]
    fn point_outside_of_all_zones() {
        let db = MockDb::with_zones(vec![centro(), norte()]);
        let pos = MapPoint::from_lat_lng_deg(-33.0, -64.5);
        assert_eq!(None, find_zone(&db, pos).unwrap());
        assert_eq!(None, find_zone(&MockDb::default(), pos).unwrap());
    }

    #[test]
    fn overlapping_zones_resolve_to_the_lowest_id() {
        let db = MockDb::with_zones(vec![
            zone(7, "Grande", (-65.0, -33.0, -64.0, -31.0)),
            zone(3, "Chica", (-64.6, -32.2, -64.4, -32.0)),
        ]);
        let pos = MapPoint::from_lat_lng_deg(-32.1, -64.5);
        for _ in 0..3 {
            assert_eq!(Some(ZoneId::new(3)), find_zone(&db, pos).unwrap());
        }
    }

    #[test]
    fn inactive_zones_are_ignored() {
        let db = MockDb::with_zones(vec![centro()]);
        let pos = MapPoint::from_lat_lng_deg(-32.1, -64.5);
        assert!(find_zone(&db, pos).unwrap().is_some());
        db.set_zone_active(ZoneId::new(1), false).unwrap();
        assert_eq!(None, find_zone(&db, pos).unwrap());
    }

    #[test]
    fn malformed_boundaries_are_skipped() {
        let broken = Zone::build().id(1).name("Rota").boundary("{ nope").finish();
        let db = MockDb::with_zones(vec![broken, zone(2, "Sana", (-64.6, -32.2, -64.4, -32.0))]);
        let pos = MapPoint::from_lat_lng_deg(-32.1, -64.5);
        assert_eq!(Some(ZoneId::new(2)), find_zone(&db, pos).unwrap());
    }

    #[test]
    fn points_on_the_boundary_are_outside() {
        let db = MockDb::with_zones(vec![zone(1, "Cuadrado", (0.0, 0.0, 2.0, 2.0))]);
        assert_eq!(
            None,
            find_zone(&db, MapPoint::from_lat_lng_deg(0.0, 1.0)).unwrap()
        );
        assert_eq!(
            Some(ZoneId::new(1)),
            find_zone(&db, MapPoint::from_lat_lng_deg(1.0, 1.0)).unwrap()
        );
    }
}
