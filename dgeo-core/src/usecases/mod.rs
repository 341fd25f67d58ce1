mod create_day_route;
mod detect_zone;
mod error;
mod find_zone;
mod manage_zones;
mod merge_boundaries;
mod plan_driver_day;
mod resolve_address;
mod sequence_stops;
mod suggest_addresses;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_day_route::*, detect_zone::*, error::Error, find_zone::*, manage_zones::*,
    merge_boundaries::*, plan_driver_day::*, resolve_address::*, sequence_stops::*,
    suggest_addresses::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::geocode::GeoCodingGateway, repositories::*, RepoError};
}
