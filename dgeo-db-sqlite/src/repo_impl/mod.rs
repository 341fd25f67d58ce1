use anyhow::anyhow;
use diesel::{
    self,
    prelude::{Connection as DieselConnection, *},
    result::{DatabaseErrorKind, Error as DieselError},
};

use dgeo_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod day_route;
mod geocode_cache;
mod zone;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

pub fn read_only_err() -> repo::Error {
    anyhow!("Write access through a read-only connection").into()
}

fn load_timestamp(millis: i64) -> Result<Timestamp> {
    Timestamp::try_from_millis(millis).ok_or_else(|| anyhow!("Invalid timestamp: {millis}").into())
}

fn load_map_point(lat: f64, lng: f64) -> Result<MapPoint> {
    MapPoint::try_from_lat_lng_deg(lat, lng)
        .ok_or_else(|| anyhow!("Invalid coordinate: ({lat}, {lng})").into())
}

// Weekdays are stored as comma separated labels, e.g. "Lunes,Jueves"
fn store_weekdays(days: &[Weekday]) -> String {
    days.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn load_weekdays(labels: &str) -> Result<Vec<Weekday>> {
    labels
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(|label| {
            label
                .parse()
                .map_err(|_| repo::Error::from(anyhow!("Invalid weekday: {label}")))
        })
        .collect()
}

fn store_weekday(day: Weekday) -> i16 {
    day.number_from_monday().into()
}

fn load_weekday(number: i16) -> Result<Weekday> {
    u8::try_from(number)
        .ok()
        .and_then(Weekday::try_from_number_from_monday)
        .ok_or_else(|| anyhow!("Invalid weekday number: {number}").into())
}
