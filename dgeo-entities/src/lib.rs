#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # dgeo-entities
//!
//! Reusable, agnostic domain entities for geospatial dispatch resolution.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod day_route;
pub mod geo;
pub mod geocode;
pub mod id;
pub mod stop;
pub mod time;
pub mod weekday;
pub mod zone;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
