use super::{
    connect,
    json::{self, print_json},
};
use crate::{
    cli::{AddressArgs, FindZoneArgs},
    config::Config,
    gateways::geocoding_gateway,
};
use anyhow::{anyhow, Result as Fallible};
use dgeo_core::{entities::MapPoint, usecases as uc};

pub fn resolve_address(args: &AddressArgs, cfg: &Config) -> Fallible<()> {
    let db = connect(&cfg.db)?;
    let geocoding = geocoding_gateway(&cfg.geocoding)?;
    let address = args.address();
    let pos = uc::resolve_address(&db.read_write()?, &geocoding, &address);
    if pos.is_none() {
        log::warn!("Address '{address}' could not be resolved");
    }
    print_json(&pos.map(json::Coordinate::from))
}

pub fn detect_zone(args: &AddressArgs, cfg: &Config) -> Fallible<()> {
    let db = connect(&cfg.db)?;
    let geocoding = geocoding_gateway(&cfg.geocoding)?;
    let detection = uc::detect_zone(&db.read_write()?, &geocoding, &args.address())?;
    print_json(&json::zone_detection(detection))
}

pub fn find_zone(args: &FindZoneArgs, cfg: &Config) -> Fallible<()> {
    let FindZoneArgs { lat, lng } = *args;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
        .ok_or_else(|| anyhow!("Invalid coordinate ({lat}, {lng})"))?;
    let db = connect(&cfg.db)?;
    let zone = uc::find_active_zone(&db.read_only()?, pos)?;
    if zone.is_none() {
        log::info!("{pos} is outside of the operative area");
    }
    print_json(&zone.map(json::Zone::from))
}

pub fn suggest(args: &AddressArgs, cfg: &Config) -> Fallible<()> {
    let geocoding = geocoding_gateway(&cfg.geocoding)?;
    let suggestions: Vec<_> = uc::suggest_addresses(&geocoding, &args.address())
        .into_iter()
        .map(json::address_suggestion)
        .collect();
    print_json(&suggestions)
}
