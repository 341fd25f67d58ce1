//! # dgeo-core
//!
//! Geocoding with a persistent cache, point-in-polygon zone
//! resolution and stop sequencing for a driver's daily route.
//!
//! All persistence and network access happens through the
//! [`repositories`] and [`gateways`] traits that are implemented
//! by the adapter crates.

pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use dgeo_entities::{
        day_route::*, geo::*, geocode::*, id::*, stop::*, time::*, weekday::*, zone::*,
    };
}

pub use self::repositories::Error as RepoError;
