//! Adapters for external services.

pub mod nominatim;
