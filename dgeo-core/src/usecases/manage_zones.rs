use super::prelude::*;
use crate::{gateways::geocode::LocalityBoundary, util::polygon::parse_boundary};

// Trims the name, sorts the operative days and normalizes
// the boundary text.
fn validate_zone(props: ZoneProperties) -> Result<ZoneProperties> {
    let ZoneProperties {
        name,
        boundary,
        mut operative_days,
        active,
    } = props;
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::ZoneName);
    }
    let boundary = parse_boundary(&boundary)?.to_geojson();
    operative_days.sort_unstable();
    operative_days.dedup();
    Ok(ZoneProperties {
        name: name.to_string(),
        boundary,
        operative_days,
        active,
    })
}

pub fn create_zone<R: ZoneRepo>(repo: &R, props: ZoneProperties) -> Result<ZoneId> {
    let props = validate_zone(props)?;
    let id = repo.create_zone(&props)?;
    log::info!("Created zone {id} '{}'", props.name);
    Ok(id)
}

pub fn update_zone<R: ZoneRepo>(repo: &R, id: ZoneId, props: ZoneProperties) -> Result<()> {
    let props = validate_zone(props)?;
    repo.update_zone(id, &props)?;
    log::info!("Updated zone {id} '{}'", props.name);
    Ok(())
}

pub fn activate_zone<R: ZoneRepo>(repo: &R, id: ZoneId) -> Result<()> {
    repo.set_zone_active(id, true)?;
    log::info!("Activated zone {id}");
    Ok(())
}

pub fn deactivate_zone<R: ZoneRepo>(repo: &R, id: ZoneId) -> Result<()> {
    repo.set_zone_active(id, false)?;
    log::info!("Deactivated zone {id}");
    Ok(())
}

/// All zones including inactive ones, ordered by id.
pub fn list_zones<R: ZoneRepo>(repo: &R) -> Result<Vec<Zone>> {
    Ok(repo.all_zones()?)
}

/// Fetches the boundary of a locality as a template
/// for drawing a new zone.
pub fn import_locality_boundary<G: GeoCodingGateway>(
    geocoding: &G,
    locality_name: &str,
) -> Result<Option<LocalityBoundary>> {
    let locality_name = locality_name.trim();
    if locality_name.is_empty() {
        return Err(Error::LocalityName);
    }
    let Some(LocalityBoundary {
        display_name,
        boundary,
    }) = geocoding.boundary(locality_name)?
    else {
        log::info!("No boundary found for locality '{locality_name}'");
        return Ok(None);
    };
    let boundary = match parse_boundary(&boundary) {
        Ok(polygon) => polygon.to_geojson(),
        Err(err) => {
            // Nominatim returns a point for some small localities
            log::warn!("Ignoring boundary of locality '{locality_name}': {err}");
            return Ok(None);
        }
    };
    Ok(Some(LocalityBoundary {
        display_name,
        boundary,
    }))
}

#[cfg(test)]
mod tests {
    use super::{super::tests::prelude::*, *};
    use crate::{usecases::find_zone, util::polygon::BoundaryError};

    const CENTRO: &str = r#"{"type":"Feature","properties":{},"geometry":{"type":"Polygon","coordinates":[[[-64.6,-32.0],[-64.4,-32.0],[-64.4,-32.2],[-64.6,-32.2],[-64.6,-32.0]]]}}"#;

    fn props(name: &str, boundary: &str) -> ZoneProperties {
        ZoneProperties {
            name: name.into(),
            boundary: boundary.into(),
            operative_days: vec![Weekday::Thursday, Weekday::Monday, Weekday::Thursday],
            active: true,
        }
    }

    #[test]
    fn create_a_zone() {
        let db = MockDb::default();
        let id = create_zone(&db, props("  Zona Centro / Guemes ", CENTRO)).unwrap();
        let zone = db.get_zone(id).unwrap();
        assert_eq!("Zona Centro / Guemes", zone.name);
        assert_eq!(vec![Weekday::Monday, Weekday::Thursday], zone.operative_days);
        // stored as a plain geometry
        assert!(!zone.boundary.contains("Feature"));
        assert_eq!(
            parse_boundary(CENTRO).unwrap(),
            parse_boundary(&zone.boundary).unwrap()
        );
    }

    #[test]
    fn reject_invalid_zones() {
        let db = MockDb::default();
        assert!(matches!(
            create_zone(&db, props("  ", CENTRO)),
            Err(Error::ZoneName)
        ));
        assert!(matches!(
            create_zone(&db, props("Rota", r#"{"type":"Point","coordinates":[0,0]}"#)),
            Err(Error::Boundary(BoundaryError::UnsupportedGeometry(_)))
        ));
        assert!(db.zones.borrow().is_empty());
    }

    #[test]
    fn reject_duplicate_zone_names() {
        let db = MockDb::default();
        create_zone(&db, props("Centro", CENTRO)).unwrap();
        assert!(matches!(
            create_zone(&db, props("Centro", CENTRO)),
            Err(Error::Repo(RepoError::AlreadyExists))
        ));
    }

    #[test]
    fn update_a_zone() {
        let db = MockDb::default();
        let id = create_zone(&db, props("Centro", CENTRO)).unwrap();
        let mut changed = props("Centro Ampliado", CENTRO);
        changed.operative_days = vec![Weekday::Saturday];
        update_zone(&db, id, changed).unwrap();
        let zone = db.get_zone(id).unwrap();
        assert_eq!("Centro Ampliado", zone.name);
        assert_eq!(vec![Weekday::Saturday], zone.operative_days);

        assert!(matches!(
            update_zone(&db, ZoneId::new(99), props("Otra", CENTRO)),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn deactivate_and_reactivate_a_zone() {
        let db = MockDb::default();
        let id = create_zone(&db, props("Centro", CENTRO)).unwrap();
        let pos = MapPoint::from_lat_lng_deg(-32.1, -64.5);
        assert_eq!(Some(id), find_zone(&db, pos).unwrap());

        deactivate_zone(&db, id).unwrap();
        assert_eq!(None, find_zone(&db, pos).unwrap());
        assert_eq!(1, list_zones(&db).unwrap().len());

        activate_zone(&db, id).unwrap();
        assert_eq!(Some(id), find_zone(&db, pos).unwrap());
    }

    #[test]
    fn import_a_locality_boundary() {
        let gw = MockGeoCodingGateway::default().with_boundary("Villa General Belgrano", CENTRO);
        let imported = import_locality_boundary(&gw, " Villa General Belgrano ")
            .unwrap()
            .unwrap();
        assert_eq!(
            "Villa General Belgrano, Córdoba, Argentina",
            imported.display_name
        );
        assert!(!imported.boundary.contains("Feature"));

        assert_eq!(None, import_locality_boundary(&gw, "Atlantis").unwrap());
        assert!(matches!(
            import_locality_boundary(&gw, ""),
            Err(Error::LocalityName)
        ));

        gw.fail_with_timeout.set(true);
        assert!(matches!(
            import_locality_boundary(&gw, "Villa General Belgrano"),
            Err(Error::Geocoding(_))
        ));
    }

    #[test]
    fn ignore_a_locality_without_an_area() {
        let gw = MockGeoCodingGateway::default()
            .with_boundary("Los Reartes", r#"{"type":"Point","coordinates":[-64.57,-31.92]}"#);
        assert_eq!(None, import_locality_boundary(&gw, "Los Reartes").unwrap());
    }
}
