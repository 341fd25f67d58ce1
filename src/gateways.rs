use crate::config::{Geocoding, GeocodingGateway};
use anyhow::Result as Fallible;
use dgeo_core::gateways::geocode::{
    self, AddressSuggestion, GeoCodingGateway, GeocodeCandidate, LocalityBoundary,
};
use dgeo_gateways::nominatim::Nominatim;

pub type GeoCodingGw = Box<dyn GeoCodingGateway>;

pub fn geocoding_gateway(cfg: &Geocoding) -> Fallible<GeoCodingGw> {
    let gw: GeoCodingGw = match &cfg.gateway {
        Some(GeocodingGateway::Nominatim(config)) => {
            log::info!("Use Nominatim gateway ({})", config.base_url);
            Box::new(Nominatim::new(config.clone())?)
        }
        None => {
            log::warn!("No geocoding gateway was configured");
            Box::new(DummyGeoCodingGw)
        }
    };
    Ok(gw)
}

struct DummyGeoCodingGw;

impl GeoCodingGateway for DummyGeoCodingGw {
    fn search(&self, query: &str) -> geocode::Result<Vec<GeocodeCandidate>> {
        log::debug!("Cannot resolve '{query}' because no geocoding gateway was configured");
        Ok(vec![])
    }

    fn boundary(&self, locality_name: &str) -> geocode::Result<Option<LocalityBoundary>> {
        log::debug!(
            "Cannot fetch boundary of '{locality_name}' because no geocoding gateway was configured"
        );
        Ok(None)
    }

    fn suggest(&self, _query: &str) -> geocode::Result<Vec<AddressSuggestion>> {
        log::debug!("Cannot suggest addresses because no geocoding gateway was configured");
        Ok(vec![])
    }
}
