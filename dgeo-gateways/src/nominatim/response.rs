use dgeo_core::{
    entities::MapPoint,
    gateways::geocode::{AddressSuggestion, Error, GeocodeCandidate, LocalityBoundary, Result},
};
use serde::Deserialize;
use serde_json::Value;

// Nominatim sends coordinates as strings
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    geojson: Option<Value>,
    #[serde(default)]
    address: Option<PlaceAddress>,
}

#[derive(Debug, Default, Deserialize)]
struct PlaceAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
}

impl PlaceAddress {
    fn into_locality(self) -> Option<String> {
        let Self {
            city,
            town,
            village,
        } = self;
        city.or(town).or(village)
    }
}

impl Place {
    fn pos(&self) -> Option<MapPoint> {
        let lat = self.lat.trim().parse::<f64>().ok()?;
        let lng = self.lon.trim().parse::<f64>().ok()?;
        MapPoint::try_from_lat_lng_deg(lat, lng)
    }
}

fn parse_places(json: &str) -> Result<Vec<(Place, Value)>> {
    let values: Vec<Value> =
        serde_json::from_str(json).map_err(|err| Error::InvalidResponse(err.to_string()))?;
    values
        .into_iter()
        .map(|value| {
            let place = Place::deserialize(&value)
                .map_err(|err| Error::InvalidResponse(err.to_string()))?;
            Ok((place, value))
        })
        .collect()
}

pub fn parse_search_response(json: &str) -> Result<Vec<GeocodeCandidate>> {
    Ok(parse_places(json)?
        .into_iter()
        .filter_map(|(place, value)| {
            let Some(pos) = place.pos() else {
                log::warn!(
                    "Ignoring candidate '{}' with invalid coordinates ({}, {})",
                    place.display_name,
                    place.lat,
                    place.lon
                );
                return None;
            };
            Some(GeocodeCandidate {
                pos,
                display_name: place.display_name,
                raw: value.to_string(),
            })
        })
        .collect())
}

pub fn parse_boundary_response(json: &str) -> Result<Option<LocalityBoundary>> {
    let Some((place, _)) = parse_places(json)?.into_iter().next() else {
        return Ok(None);
    };
    let Some(geojson) = place.geojson else {
        log::info!("No boundary available for '{}'", place.display_name);
        return Ok(None);
    };
    Ok(Some(LocalityBoundary {
        display_name: place.display_name,
        boundary: geojson.to_string(),
    }))
}

pub fn parse_suggest_response(json: &str) -> Result<Vec<AddressSuggestion>> {
    Ok(parse_places(json)?
        .into_iter()
        .filter_map(|(place, _)| {
            let pos = place.pos()?;
            Some(AddressSuggestion {
                display_name: place.display_name,
                pos,
                locality: place.address.and_then(PlaceAddress::into_locality),
            })
        })
        .collect())
}
