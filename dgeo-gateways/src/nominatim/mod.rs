//! Geocoding with [Nominatim](https://nominatim.org/).

use dgeo_core::gateways::geocode::{
    AddressSuggestion, Error, GeoCodingGateway, GeocodeCandidate, LocalityBoundary, Result,
};
use reqwest::blocking::Client;
use std::time::Duration;

mod response;

use self::response::*;

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = "volquetes-gestion-app";
pub const DEFAULT_ADDRESS_REGION: &str = ", Calamuchita, Córdoba, Argentina";
pub const DEFAULT_LOCALITY_REGION: &str = ", Córdoba, Argentina";

#[derive(Debug, Clone, PartialEq)]
pub struct NominatimConfig {
    pub base_url: String,
    /// Nominatim rejects requests without a meaningful user agent
    pub user_agent: String,
    /// Appended to every address search
    pub address_region: String,
    /// Appended to boundary and suggestion queries
    pub locality_region: String,
    pub search_limit: u16,
    pub suggest_limit: u16,
    pub timeout: Duration,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            address_region: DEFAULT_ADDRESS_REGION.to_string(),
            locality_region: DEFAULT_LOCALITY_REGION.to_string(),
            search_limit: 1,
            suggest_limit: 5,
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Nominatim {
    config: NominatimConfig,
    client: Client,
}

impl Nominatim {
    pub fn new(config: NominatimConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &NominatimConfig {
        &self.config
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }

    fn get(&self, params: &[(&str, String)]) -> Result<String> {
        let url = self.search_url();
        log::debug!("Requesting {url} with {params:?}");
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .map_err(from_reqwest_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }
        response.text().map_err(from_reqwest_err)
    }
}

fn from_reqwest_err(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout
    } else if err.is_decode() {
        Error::InvalidResponse(err.to_string())
    } else {
        Error::Other(err.into())
    }
}

fn search_params(config: &NominatimConfig, address: &str) -> Vec<(&'static str, String)> {
    vec![
        ("q", format!("{address}{}", config.address_region)),
        ("format", "json".into()),
        ("limit", config.search_limit.to_string()),
    ]
}

fn boundary_params(config: &NominatimConfig, locality_name: &str) -> Vec<(&'static str, String)> {
    vec![
        ("q", format!("{locality_name}{}", config.locality_region)),
        ("format", "json".into()),
        ("polygon_geojson", "1".into()),
        ("limit", "1".into()),
    ]
}

fn suggest_params(config: &NominatimConfig, query: &str) -> Vec<(&'static str, String)> {
    vec![
        ("q", format!("{query}{}", config.locality_region)),
        ("format", "json".into()),
        ("limit", config.suggest_limit.to_string()),
        ("addressdetails", "1".into()),
    ]
}

impl GeoCodingGateway for Nominatim {
    fn search(&self, address: &str) -> Result<Vec<GeocodeCandidate>> {
        let json = self.get(&search_params(&self.config, address))?;
        let candidates = parse_search_response(&json)?;
        log::debug!("Found {} candidate(s) for '{address}'", candidates.len());
        Ok(candidates)
    }

    fn boundary(&self, locality_name: &str) -> Result<Option<LocalityBoundary>> {
        let json = self.get(&boundary_params(&self.config, locality_name))?;
        parse_boundary_response(&json)
    }

    fn suggest(&self, query: &str) -> Result<Vec<AddressSuggestion>> {
        let json = self.get(&suggest_params(&self.config, query))?;
        parse_suggest_response(&json)
    }
}
