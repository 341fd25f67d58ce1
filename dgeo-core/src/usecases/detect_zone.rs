use super::{find_active_zone, prelude::*, resolve_address};

#[derive(Debug, Clone, PartialEq)]
pub enum ZoneDetection {
    AddressNotFound,
    OutsideOperativeArea { pos: MapPoint },
    Found { pos: MapPoint, zone: Zone },
}

/// Resolves the address and looks up the zone that serves it.
pub fn detect_zone<R, G>(repo: &R, geocoding: &G, address: &str) -> Result<ZoneDetection>
where
    R: GeocodeCacheRepo + ZoneRepo,
    G: GeoCodingGateway,
{
    let Some(pos) = resolve_address(repo, geocoding, address) else {
        return Ok(ZoneDetection::AddressNotFound);
    };
    let detection = match find_active_zone(repo, pos)? {
        Some(zone) => {
            log::debug!("Address '{address}' at {pos} belongs to zone '{}'", zone.name);
            ZoneDetection::Found { pos, zone }
        }
        None => {
            log::info!("Address '{address}' at {pos} is outside of the operative area");
            ZoneDetection::OutsideOperativeArea { pos }
        }
    };
    Ok(detection)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::prelude::*, *};

    fn db() -> MockDb {
        MockDb::with_zones(vec![Zone::build()
            .id(1)
            .name("Zona Centro / Guemes")
            .rect(-64.6, -32.2, -64.4, -32.0)
            .finish()])
    }

    #[test]
    fn detect_zone_of_an_address() {
        let db = db();
        let pos = MapPoint::from_lat_lng_deg(-32.1, -64.5);
        let gw = MockGeoCodingGateway::default().with_result("Güemes 120", pos);
        match detect_zone(&db, &gw, "Güemes 120").unwrap() {
            ZoneDetection::Found { pos: found_pos, zone } => {
                assert_eq!(pos, found_pos);
                assert_eq!(ZoneId::new(1), zone.id);
            }
            other => panic!("Unexpected detection: {other:?}"),
        }
    }

    #[test]
    fn detect_address_outside_of_operative_area() {
        let db = db();
        let pos = MapPoint::from_lat_lng_deg(-31.4, -64.2);
        let gw = MockGeoCodingGateway::default().with_result("Córdoba Capital", pos);
        assert_eq!(
            ZoneDetection::OutsideOperativeArea { pos },
            detect_zone(&db, &gw, "Córdoba Capital").unwrap()
        );
    }

    #[test]
    fn detect_unknown_address() {
        let db = db();
        let gw = MockGeoCodingGateway::default();
        assert_eq!(
            ZoneDetection::AddressNotFound,
            detect_zone(&db, &gw, "Calle Falsa 123").unwrap()
        );
    }
}
