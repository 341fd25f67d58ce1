use crate::{
    gateways::geocode,
    repositories,
    util::polygon::{BoundaryError, MergeError},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The zone name is empty")]
    ZoneName,
    #[error("The locality name is empty")]
    LocalityName,
    #[error("Invalid zone boundary: {0}")]
    Boundary(#[from] BoundaryError),
    #[error(transparent)]
    Merge(#[from] MergeError),
    #[error("Geocoding failed: {0}")]
    Geocoding(#[from] geocode::Error),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
