use super::prelude::*;

/// Assigns a zone to a weekday, either for a single driver
/// or as the general rule for all drivers.
pub fn create_day_route<R>(
    repo: &R,
    weekday: Weekday,
    zone_id: ZoneId,
    driver_id: Option<DriverId>,
) -> Result<i64>
where
    R: DayRouteRepo + ZoneRepo,
{
    let zone = repo.get_zone(zone_id)?;
    let id = repo.create_day_route(&DayRoute {
        id: 0,
        weekday,
        zone_id,
        driver_id,
        active: true,
    })?;
    match driver_id {
        Some(driver_id) => {
            log::info!("Zone '{}' is visited by driver {driver_id} on {weekday}", zone.name);
        }
        None => {
            log::info!("Zone '{}' is visited on {weekday}", zone.name);
        }
    }
    Ok(id)
}
