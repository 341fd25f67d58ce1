use anyhow::{Context as _, Result as Fallible};
use dgeo_boundary as json;
use dgeo_core::{gateways::geocode, usecases as uc};
use serde::{de::DeserializeOwned, Serialize};
use std::{fs::File, io::BufReader, path::Path};

pub use dgeo_boundary::*;

pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Fallible<T> {
    let file = File::open(path).with_context(|| format!("Unable to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid JSON in {}", path.display()))
}

pub fn print_json<T: Serialize>(value: &T) -> Fallible<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn zone_detection(from: uc::ZoneDetection) -> json::ZoneDetection {
    match from {
        uc::ZoneDetection::AddressNotFound => json::ZoneDetection::AddressNotFound,
        uc::ZoneDetection::OutsideOperativeArea { pos } => {
            let (lat, lng) = pos.to_lat_lng_deg();
            json::ZoneDetection::OutsideOperativeArea { lat, lng }
        }
        uc::ZoneDetection::Found { pos, zone } => {
            let (lat, lng) = pos.to_lat_lng_deg();
            json::ZoneDetection::Found {
                lat,
                lng,
                zone_id: zone.id.to_inner(),
                zone_name: zone.name,
            }
        }
    }
}

pub fn address_suggestion(from: geocode::AddressSuggestion) -> json::AddressSuggestion {
    let geocode::AddressSuggestion {
        display_name,
        pos,
        locality,
    } = from;
    let (lat, lng) = pos.to_lat_lng_deg();
    json::AddressSuggestion {
        display_name,
        lat,
        lng,
        locality,
    }
}

pub fn locality_boundary(from: geocode::LocalityBoundary) -> json::LocalityBoundary {
    let geocode::LocalityBoundary {
        display_name,
        boundary,
    } = from;
    json::LocalityBoundary {
        display_name,
        boundary,
    }
}

pub fn driver_day_plan(from: uc::DriverDayPlan) -> json::DriverDayPlan {
    let uc::DriverDayPlan {
        weekday,
        zone,
        orders,
        recurring,
    } = from;
    json::DriverDayPlan {
        weekday: weekday.to_string(),
        zone: zone.map(Into::into),
        orders: orders.into_iter().map(Into::into).collect(),
        recurring: recurring.into_iter().map(Into::into).collect(),
    }
}
