// Low-level database access traits.
// Each repository is responsible for a single entity.
// Related entities are only referenced by their id and
// never modified or loaded by another repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait GeocodeCacheRepo {
    fn get_geocode_entry(&self, query_hash: &QueryHash) -> Result<GeocodeCacheEntry>;

    fn try_get_geocode_entry(&self, query_hash: &QueryHash) -> Result<Option<GeocodeCacheEntry>> {
        match self.get_geocode_entry(query_hash) {
            Ok(entry) => Ok(Some(entry)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    // Fails with `Error::AlreadyExists` if an entry with the
    // same query hash has been created before.
    fn create_geocode_entry(&self, entry: &GeocodeCacheEntry) -> Result<()>;

    fn count_geocode_entries(&self) -> Result<usize>;
}

pub trait ZoneRepo {
    // Returns the id that has been assigned to the new zone.
    fn create_zone(&self, zone: &ZoneProperties) -> Result<ZoneId>;
    fn update_zone(&self, id: ZoneId, zone: &ZoneProperties) -> Result<()>;
    fn set_zone_active(&self, id: ZoneId, active: bool) -> Result<()>;

    fn get_zone(&self, id: ZoneId) -> Result<Zone>;

    // Ordered by ascending id
    fn all_zones(&self) -> Result<Vec<Zone>>;

    // Only active zones, ordered by ascending id
    fn all_active_zones(&self) -> Result<Vec<Zone>>;
}

pub trait DayRouteRepo {
    fn create_day_route(&self, route: &DayRoute) -> Result<i64>;

    // Only active routes of the given weekday, ordered by ascending id
    fn active_day_routes_of_weekday(&self, weekday: Weekday) -> Result<Vec<DayRoute>>;
}
