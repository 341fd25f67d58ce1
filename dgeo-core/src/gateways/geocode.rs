use crate::entities::MapPoint;
use thiserror::Error;

/// Any failure of an external lookup.
///
/// Callers handle all variants the same way, i.e. as
/// "no result available". The distinction only serves
/// diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    #[error("The lookup timed out")]
    Timeout,
    #[error("Unexpected response status: {0}")]
    Status(u16),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeCandidate {
    pub pos: MapPoint,
    pub display_name: String,
    /// The unmodified candidate as returned by the service
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocalityBoundary {
    pub display_name: String,
    /// GeoJSON geometry text
    pub boundary: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddressSuggestion {
    pub display_name: String,
    pub pos: MapPoint,
    /// City, town or village
    pub locality: Option<String>,
}

pub trait GeoCodingGateway {
    /// Best matching candidates for a free-text address, best first.
    fn search(&self, query: &str) -> Result<Vec<GeocodeCandidate>>;

    /// Boundary polygon of a named locality.
    fn boundary(&self, locality_name: &str) -> Result<Option<LocalityBoundary>>;

    /// Multiple candidates for an incomplete address.
    fn suggest(&self, query: &str) -> Result<Vec<AddressSuggestion>>;
}

impl<T> GeoCodingGateway for Box<T>
where
    T: GeoCodingGateway + ?Sized,
{
    fn search(&self, query: &str) -> Result<Vec<GeocodeCandidate>> {
        (**self).search(query)
    }

    fn boundary(&self, locality_name: &str) -> Result<Option<LocalityBoundary>> {
        (**self).boundary(locality_name)
    }

    fn suggest(&self, query: &str) -> Result<Vec<AddressSuggestion>> {
        (**self).suggest(query)
    }
}
