use super::*;

impl DayRouteRepo for Db<'_> {
    fn create_day_route(&self, route: &DayRoute) -> Result<i64> {
        self.with_writable_conn(|conn| create_day_route(conn, route))
    }
    fn active_day_routes_of_weekday(&self, weekday: Weekday) -> Result<Vec<DayRoute>> {
        self.with_conn(|conn| active_day_routes_of_weekday(conn, weekday))
    }
}

fn create_day_route(conn: &mut SqliteConnection, route: &DayRoute) -> Result<i64> {
    let new_route = models::NewDayRoute {
        weekday: store_weekday(route.weekday),
        zone_id: route.zone_id.to_inner(),
        driver_id: route.driver_id,
        active: route.active,
    };
    use schema::day_routes::dsl;
    conn.transaction::<_, DieselError, _>(|conn| {
        diesel::insert_into(schema::day_routes::table)
            .values(&new_route)
            .execute(conn)?;
        // The most recently inserted route
        dsl::day_routes
            .select(dsl::id)
            .order_by(dsl::id.desc())
            .first::<i64>(conn)
    })
    .map_err(from_diesel_err)
}

fn active_day_routes_of_weekday(
    conn: &mut SqliteConnection,
    weekday: Weekday,
) -> Result<Vec<DayRoute>> {
    use schema::day_routes::dsl;
    dsl::day_routes
        .filter(dsl::weekday.eq(store_weekday(weekday)))
        .filter(dsl::active.eq(true))
        .order_by(dsl::id.asc())
        .load::<models::DayRoute>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::DayRoute {
                 id,
                 weekday,
                 zone_id,
                 driver_id,
                 active,
             }| {
                Ok(DayRoute {
                    id,
                    weekday: load_weekday(weekday)?,
                    zone_id: zone_id.into(),
                    driver_id,
                    active,
                })
            },
        )
        .collect()
}
