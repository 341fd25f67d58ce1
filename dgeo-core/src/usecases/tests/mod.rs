use super::prelude::*;
use crate::gateways::geocode::{
    self, AddressSuggestion, GeocodeCandidate, LocalityBoundary,
};
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    result,
};

pub mod prelude {
    pub use super::{MockDb, MockGeoCodingGateway, RepoResult};
    pub use dgeo_entities::builders::Builder;
}

pub type RepoResult<T> = result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub geocode_entries: RefCell<Vec<GeocodeCacheEntry>>,
    pub zones: RefCell<Vec<Zone>>,
    pub day_routes: RefCell<Vec<DayRoute>>,
}

impl MockDb {
    pub fn with_zones(zones: Vec<Zone>) -> Self {
        Self {
            zones: RefCell::new(zones),
            ..Default::default()
        }
    }
}

impl GeocodeCacheRepo for MockDb {
    fn get_geocode_entry(&self, query_hash: &QueryHash) -> RepoResult<GeocodeCacheEntry> {
        self.geocode_entries
            .borrow()
            .iter()
            .find(|e| &e.query_hash == query_hash)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn create_geocode_entry(&self, entry: &GeocodeCacheEntry) -> RepoResult<()> {
        if self.get_geocode_entry(&entry.query_hash).is_ok() {
            return Err(RepoError::AlreadyExists);
        }
        self.geocode_entries.borrow_mut().push(entry.clone());
        Ok(())
    }

    fn count_geocode_entries(&self) -> RepoResult<usize> {
        Ok(self.geocode_entries.borrow().len())
    }
}

impl ZoneRepo for MockDb {
    fn create_zone(&self, props: &ZoneProperties) -> RepoResult<ZoneId> {
        let mut zones = self.zones.borrow_mut();
        if zones.iter().any(|z| z.name == props.name) {
            return Err(RepoError::AlreadyExists);
        }
        let next_id = zones.iter().map(|z| z.id.to_inner()).max().unwrap_or(0) + 1;
        let ZoneProperties {
            name,
            boundary,
            operative_days,
            active,
        } = props.clone();
        zones.push(Zone {
            id: ZoneId::new(next_id),
            name,
            boundary,
            operative_days,
            active,
            created_at: Timestamp::now(),
        });
        Ok(ZoneId::new(next_id))
    }

    fn update_zone(&self, id: ZoneId, props: &ZoneProperties) -> RepoResult<()> {
        let mut zones = self.zones.borrow_mut();
        if zones.iter().any(|z| z.id != id && z.name == props.name) {
            return Err(RepoError::AlreadyExists);
        }
        let zone = zones
            .iter_mut()
            .find(|z| z.id == id)
            .ok_or(RepoError::NotFound)?;
        zone.name = props.name.clone();
        zone.boundary = props.boundary.clone();
        zone.operative_days = props.operative_days.clone();
        zone.active = props.active;
        Ok(())
    }

    fn set_zone_active(&self, id: ZoneId, active: bool) -> RepoResult<()> {
        let mut zones = self.zones.borrow_mut();
        let zone = zones
            .iter_mut()
            .find(|z| z.id == id)
            .ok_or(RepoError::NotFound)?;
        zone.active = active;
        Ok(())
    }

    fn get_zone(&self, id: ZoneId) -> RepoResult<Zone> {
        self.zones
            .borrow()
            .iter()
            .find(|z| z.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_zones(&self) -> RepoResult<Vec<Zone>> {
        let mut zones = self.zones.borrow().clone();
        zones.sort_by_key(|z| z.id);
        Ok(zones)
    }

    fn all_active_zones(&self) -> RepoResult<Vec<Zone>> {
        Ok(self.all_zones()?.into_iter().filter(|z| z.active).collect())
    }
}

impl DayRouteRepo for MockDb {
    fn create_day_route(&self, route: &DayRoute) -> RepoResult<i64> {
        let mut routes = self.day_routes.borrow_mut();
        let id = routes.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        routes.push(DayRoute {
            id,
            ..route.clone()
        });
        Ok(id)
    }

    fn active_day_routes_of_weekday(&self, weekday: Weekday) -> RepoResult<Vec<DayRoute>> {
        let mut routes: Vec<_> = self
            .day_routes
            .borrow()
            .iter()
            .filter(|r| r.active && r.weekday == weekday)
            .cloned()
            .collect();
        routes.sort_by_key(|r| r.id);
        Ok(routes)
    }
}

/// Answers from fixed lookup tables and records every request.
#[derive(Default)]
pub struct MockGeoCodingGateway {
    pub results: RefCell<HashMap<String, MapPoint>>,
    pub boundaries: RefCell<HashMap<String, String>>,
    pub suggestions: RefCell<Vec<AddressSuggestion>>,
    pub queries: RefCell<Vec<String>>,
    pub fail_with_timeout: Cell<bool>,
}

impl MockGeoCodingGateway {
    pub fn with_result(self, address: &str, pos: MapPoint) -> Self {
        self.results.borrow_mut().insert(address.to_string(), pos);
        self
    }

    pub fn with_boundary(self, locality: &str, geojson: &str) -> Self {
        self.boundaries
            .borrow_mut()
            .insert(locality.to_string(), geojson.to_string());
        self
    }

    pub fn search_calls(&self) -> usize {
        self.queries.borrow().len()
    }
}

impl GeoCodingGateway for MockGeoCodingGateway {
    fn search(&self, address: &str) -> geocode::Result<Vec<GeocodeCandidate>> {
        self.queries.borrow_mut().push(address.to_string());
        if self.fail_with_timeout.get() {
            return Err(geocode::Error::Timeout);
        }
        Ok(self
            .results
            .borrow()
            .get(address)
            .map(|pos| GeocodeCandidate {
                pos: *pos,
                display_name: address.to_string(),
                raw: format!(r#"{{"display_name":"{address}"}}"#),
            })
            .into_iter()
            .collect())
    }

    fn boundary(&self, locality: &str) -> geocode::Result<Option<LocalityBoundary>> {
        if self.fail_with_timeout.get() {
            return Err(geocode::Error::Timeout);
        }
        Ok(self
            .boundaries
            .borrow()
            .get(locality)
            .map(|boundary| LocalityBoundary {
                display_name: format!("{locality}, Córdoba, Argentina"),
                boundary: boundary.clone(),
            }))
    }

    fn suggest(&self, _query: &str) -> geocode::Result<Vec<AddressSuggestion>> {
        if self.fail_with_timeout.get() {
            return Err(geocode::Error::Timeout);
        }
        Ok(self.suggestions.borrow().clone())
    }
}
