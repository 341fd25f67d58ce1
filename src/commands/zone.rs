use super::{
    connect,
    json::{self, print_json, read_json_file},
};
use crate::{
    cli::{ImportBoundaryArgs, MergeBoundariesArgs},
    config::Config,
    gateways::geocoding_gateway,
};
use anyhow::{anyhow, Context as _, Result as Fallible};
use dgeo_core::{
    entities::{ZoneId, ZoneProperties},
    repositories::ZoneRepo as _,
    usecases as uc,
};
use std::{fs, path::Path};

pub fn list(only_active: bool, cfg: &Config) -> Fallible<()> {
    let db = connect(&cfg.db)?;
    let zones: Vec<_> = uc::list_zones(&db.read_only()?)?
        .into_iter()
        .filter(|zone| !only_active || zone.active)
        .map(json::Zone::from)
        .collect();
    print_json(&zones)
}

pub fn create(file: &Path, cfg: &Config) -> Fallible<()> {
    let new_zone: json::NewZone = read_json_file(file)?;
    let props = ZoneProperties::try_from(new_zone)?;
    let db = connect(&cfg.db)?;
    let zone = db.read_write()?.transaction(|session| {
        let id = uc::create_zone(session, props)?;
        session.get_zone(id).map_err(uc::Error::from)
    })?;
    print_json(&json::Zone::from(zone))
}

pub fn update(id: i64, file: &Path, cfg: &Config) -> Fallible<()> {
    let new_zone: json::NewZone = read_json_file(file)?;
    let props = ZoneProperties::try_from(new_zone)?;
    let id = ZoneId::new(id);
    let db = connect(&cfg.db)?;
    let zone = db.read_write()?.transaction(|session| {
        uc::update_zone(session, id, props)?;
        session.get_zone(id).map_err(uc::Error::from)
    })?;
    print_json(&json::Zone::from(zone))
}

pub fn set_active(id: i64, active: bool, cfg: &Config) -> Fallible<()> {
    let id = ZoneId::new(id);
    let db = connect(&cfg.db)?;
    let zone = db.read_write()?.transaction(|session| {
        if active {
            uc::activate_zone(session, id)?;
        } else {
            uc::deactivate_zone(session, id)?;
        }
        session.get_zone(id).map_err(uc::Error::from)
    })?;
    print_json(&json::Zone::from(zone))
}

pub fn import_boundary(args: ImportBoundaryArgs, cfg: &Config) -> Fallible<()> {
    let ImportBoundaryArgs {
        locality,
        create,
        days,
    } = args;
    let geocoding = geocoding_gateway(&cfg.geocoding)?;
    let imported = uc::import_locality_boundary(&geocoding, &locality)?
        .ok_or_else(|| anyhow!("No boundary found for locality '{locality}'"))?;
    let Some(name) = create else {
        return print_json(&json::locality_boundary(imported));
    };
    let props = ZoneProperties {
        name,
        boundary: imported.boundary,
        operative_days: days,
        active: true,
    };
    let db = connect(&cfg.db)?;
    let zone = db.read_write()?.transaction(|session| {
        let id = uc::create_zone(session, props)?;
        session.get_zone(id).map_err(uc::Error::from)
    })?;
    print_json(&json::Zone::from(zone))
}

pub fn merge_boundaries(args: &MergeBoundariesArgs) -> Fallible<()> {
    let geojsons = args
        .files
        .iter()
        .map(|path| {
            fs::read_to_string(path).with_context(|| format!("Unable to read {}", path.display()))
        })
        .collect::<Fallible<Vec<_>>>()?;
    let merged = uc::merge_boundaries(&geojsons)?;
    println!("{merged}");
    Ok(())
}
