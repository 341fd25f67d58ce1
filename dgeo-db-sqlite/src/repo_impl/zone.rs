use super::*;

impl ZoneRepo for Db<'_> {
    fn create_zone(&self, zone: &ZoneProperties) -> Result<ZoneId> {
        self.with_writable_conn(|conn| create_zone(conn, zone))
    }
    fn update_zone(&self, id: ZoneId, zone: &ZoneProperties) -> Result<()> {
        self.with_writable_conn(|conn| update_zone(conn, id, zone))
    }
    fn set_zone_active(&self, id: ZoneId, active: bool) -> Result<()> {
        self.with_writable_conn(|conn| set_zone_active(conn, id, active))
    }
    fn get_zone(&self, id: ZoneId) -> Result<Zone> {
        self.with_conn(|conn| get_zone(conn, id))
    }
    fn all_zones(&self) -> Result<Vec<Zone>> {
        self.with_conn(|conn| load_zones(conn, false))
    }
    fn all_active_zones(&self) -> Result<Vec<Zone>> {
        self.with_conn(|conn| load_zones(conn, true))
    }
}

fn load_zone(zone: models::Zone) -> Result<Zone> {
    let models::Zone {
        id,
        name,
        boundary,
        operative_days,
        active,
        created_at,
    } = zone;
    Ok(Zone {
        id: id.into(),
        name,
        boundary,
        operative_days: load_weekdays(&operative_days)?,
        active,
        created_at: load_timestamp(created_at)?,
    })
}

fn create_zone(conn: &mut SqliteConnection, zone: &ZoneProperties) -> Result<ZoneId> {
    let new_zone = models::NewZone {
        name: &zone.name,
        boundary: &zone.boundary,
        operative_days: store_weekdays(&zone.operative_days),
        active: zone.active,
        created_at: Timestamp::now().as_millis(),
    };
    use schema::zones::dsl;
    let id = conn
        .transaction::<_, DieselError, _>(|conn| {
            diesel::insert_into(schema::zones::table)
                .values(&new_zone)
                .execute(conn)?;
            // Names are unique
            dsl::zones
                .select(dsl::id)
                .filter(dsl::name.eq(new_zone.name))
                .first::<i64>(conn)
        })
        .map_err(from_diesel_err)?;
    Ok(id.into())
}

fn update_zone(conn: &mut SqliteConnection, id: ZoneId, zone: &ZoneProperties) -> Result<()> {
    use schema::zones::dsl;
    let changeset = models::ZoneChangeset {
        name: &zone.name,
        boundary: &zone.boundary,
        operative_days: store_weekdays(&zone.operative_days),
        active: zone.active,
    };
    let count = diesel::update(dsl::zones.filter(dsl::id.eq(id.to_inner())))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn set_zone_active(conn: &mut SqliteConnection, id: ZoneId, active: bool) -> Result<()> {
    use schema::zones::dsl;
    let count = diesel::update(dsl::zones.filter(dsl::id.eq(id.to_inner())))
        .set(dsl::active.eq(active))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_zone(conn: &mut SqliteConnection, id: ZoneId) -> Result<Zone> {
    use schema::zones::dsl;
    let zone = dsl::zones
        .filter(dsl::id.eq(id.to_inner()))
        .first::<models::Zone>(conn)
        .map_err(from_diesel_err)?;
    load_zone(zone)
}

fn load_zones(conn: &mut SqliteConnection, only_active: bool) -> Result<Vec<Zone>> {
    use schema::zones::dsl;
    let mut query = dsl::zones.order_by(dsl::id.asc()).into_boxed();
    if only_active {
        query = query.filter(dsl::active.eq(true));
    }
    query
        .load::<models::Zone>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_zone)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dgeo_core::usecases;

    fn props(name: &str, (min_lng, min_lat, max_lng, max_lat): (f64, f64, f64, f64)) -> ZoneProperties {
        ZoneProperties {
            name: name.into(),
            boundary: format!(
                r#"{{"type":"Polygon","coordinates":[[[{min_lng},{min_lat}],[{max_lng},{min_lat}],[{max_lng},{max_lat}],[{min_lng},{max_lat}],[{min_lng},{min_lat}]]]}}"#
            ),
            operative_days: vec![Weekday::Monday, Weekday::Thursday],
            active: true,
        }
    }

    #[test]
    fn create_and_load_zones() {
        let database = crate::tests::in_memory_db();
        let db = database.read_write().unwrap();
        let centro = db.create_zone(&props("Centro", (-64.6, -32.2, -64.4, -32.0))).unwrap();
        let norte = db.create_zone(&props("Norte", (-64.6, -32.0, -64.4, -31.8))).unwrap();
        assert!(centro < norte);

        let zone = db.get_zone(centro).unwrap();
        assert_eq!("Centro", zone.name);
        assert_eq!(vec![Weekday::Monday, Weekday::Thursday], zone.operative_days);
        assert!(zone.active);

        let ids: Vec<_> = db.all_zones().unwrap().into_iter().map(|z| z.id).collect();
        assert_eq!(vec![centro, norte], ids);
    }

    #[test]
    fn update_zone() {
        let database = crate::tests::in_memory_db();
        let db = database.read_write().unwrap();
        let id = db.create_zone(&props("Centro", (0.0, 0.0, 1.0, 1.0))).unwrap();
        let mut changed = props("Centro Nuevo", (0.0, 0.0, 2.0, 2.0));
        changed.operative_days = vec![];
        db.update_zone(id, &changed).unwrap();
        let zone = db.get_zone(id).unwrap();
        assert_eq!("Centro Nuevo", zone.name);
        assert!(zone.operative_days.is_empty());
        assert!(matches!(
            db.update_zone(ZoneId::new(id.to_inner() + 1), &changed),
            Err(repo::Error::NotFound)
        ));
    }

    #[test]
    fn only_active_zones() {
        let database = crate::tests::in_memory_db();
        let db = database.read_write().unwrap();
        let a = db.create_zone(&props("A", (0.0, 0.0, 1.0, 1.0))).unwrap();
        let b = db.create_zone(&props("B", (0.0, 0.0, 1.0, 1.0))).unwrap();
        db.set_zone_active(a, false).unwrap();
        let active: Vec<_> = db.all_active_zones().unwrap().into_iter().map(|z| z.id).collect();
        assert_eq!(vec![b], active);
        assert_eq!(2, db.all_zones().unwrap().len());
        assert!(matches!(
            db.set_zone_active(ZoneId::new(99), true),
            Err(repo::Error::NotFound)
        ));
    }

    #[test]
    fn first_created_zone_wins_on_overlap() {
        let database = crate::tests::in_memory_db();
        let db = database.read_write().unwrap();
        let big = db.create_zone(&props("Grande", (-65.0, -33.0, -64.0, -31.0))).unwrap();
        let small = db.create_zone(&props("Chica", (-64.6, -32.2, -64.4, -32.0))).unwrap();
        let pos = MapPoint::from_lat_lng_deg(-32.1, -64.5);
        assert_eq!(Some(big), usecases::find_zone(&db, pos).unwrap());

        usecases::deactivate_zone(&db, big).unwrap();
        assert_eq!(Some(small), usecases::find_zone(&db, pos).unwrap());
    }

    #[test]
    fn transaction_is_rolled_back_on_failure() {
        let database = crate::tests::in_memory_db();
        let db = database.read_write().unwrap();
        let res = db.transaction(|db| {
            usecases::create_zone(db, props("Temporal", (0.0, 0.0, 1.0, 1.0)))?;
            usecases::create_zone(db, props(" ", (0.0, 0.0, 1.0, 1.0)))
        });
        assert!(matches!(res, Err(usecases::Error::ZoneName)));
        assert!(db.all_zones().unwrap().is_empty());
    }
}
