use super::*;

impl GeocodeCacheRepo for Db<'_> {
    fn get_geocode_entry(&self, query_hash: &QueryHash) -> Result<GeocodeCacheEntry> {
        self.with_conn(|conn| get_geocode_entry(conn, query_hash))
    }
    fn create_geocode_entry(&self, entry: &GeocodeCacheEntry) -> Result<()> {
        self.with_writable_conn(|conn| create_geocode_entry(conn, entry))
    }
    fn count_geocode_entries(&self) -> Result<usize> {
        self.with_conn(count_geocode_entries)
    }
}

fn get_geocode_entry(conn: &mut SqliteConnection, hash: &QueryHash) -> Result<GeocodeCacheEntry> {
    use schema::geocode_cache::dsl;
    let models::GeocodeCacheEntry {
        query_hash,
        normalized_address,
        lat,
        lng,
        raw_result,
        created_at,
    } = dsl::geocode_cache
        .filter(dsl::query_hash.eq(hash.as_str()))
        .first(conn)
        .map_err(from_diesel_err)?;
    Ok(GeocodeCacheEntry {
        query_hash: query_hash.into(),
        normalized_address,
        pos: load_map_point(lat, lng)?,
        raw_result,
        created_at: load_timestamp(created_at)?,
    })
}

fn create_geocode_entry(conn: &mut SqliteConnection, entry: &GeocodeCacheEntry) -> Result<()> {
    let (lat, lng) = entry.pos.to_lat_lng_deg();
    let new_entry = models::NewGeocodeCacheEntry {
        query_hash: entry.query_hash.as_str(),
        normalized_address: &entry.normalized_address,
        lat,
        lng,
        raw_result: &entry.raw_result,
        created_at: entry.created_at.as_millis(),
    };
    diesel::insert_into(schema::geocode_cache::table)
        .values(&new_entry)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn count_geocode_entries(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::geocode_cache::dsl;
    Ok(dsl::geocode_cache
        .select(diesel::dsl::count(dsl::query_hash))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
