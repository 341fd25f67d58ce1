#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = geocode_cache)]
pub struct NewGeocodeCacheEntry<'a> {
    pub query_hash: &'a str,
    pub normalized_address: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub raw_result: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct GeocodeCacheEntry {
    pub query_hash: String,
    pub normalized_address: String,
    pub lat: f64,
    pub lng: f64,
    pub raw_result: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = zones)]
pub struct NewZone<'a> {
    pub name: &'a str,
    pub boundary: &'a str,
    pub operative_days: String,
    pub active: bool,
    pub created_at: i64,
}

#[derive(AsChangeset)]
#[diesel(table_name = zones)]
pub struct ZoneChangeset<'a> {
    pub name: &'a str,
    pub boundary: &'a str,
    pub operative_days: String,
    pub active: bool,
}

#[derive(Queryable)]
pub struct Zone {
    pub id: i64,
    pub name: String,
    pub boundary: String,
    pub operative_days: String,
    pub active: bool,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = day_routes)]
pub struct NewDayRoute {
    pub weekday: i16,
    pub zone_id: i64,
    pub driver_id: Option<i64>,
    pub active: bool,
}

#[derive(Queryable)]
pub struct DayRoute {
    pub id: i64,
    pub weekday: i16,
    pub zone_id: i64,
    pub driver_id: Option<i64>,
    pub active: bool,
}
