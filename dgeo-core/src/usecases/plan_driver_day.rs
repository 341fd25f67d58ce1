use super::{prelude::*, sequence_stops};

#[derive(Debug, Clone, PartialEq)]
pub struct DriverDayPlan {
    pub weekday: Weekday,
    pub zone: Option<Zone>,
    pub orders: Vec<Stop>,
    pub recurring: Vec<RecurringStop>,
}

/// Picks the route rule that applies to a driver.
///
/// A rule for this driver wins over general rules, among
/// multiple candidates the first one wins.
pub fn select_day_route(routes: &[DayRoute], driver_id: Option<DriverId>) -> Option<&DayRoute> {
    driver_id
        .and_then(|driver_id| routes.iter().find(|r| r.driver_id == Some(driver_id)))
        .or_else(|| routes.iter().find(|r| r.is_general()))
}

pub fn zone_of_the_day<R>(
    repo: &R,
    driver_id: Option<DriverId>,
    weekday: Weekday,
) -> Result<Option<Zone>>
where
    R: DayRouteRepo + ZoneRepo,
{
    let routes = repo.active_day_routes_of_weekday(weekday)?;
    let Some(route) = select_day_route(&routes, driver_id) else {
        log::debug!("No route defined for {weekday}");
        return Ok(None);
    };
    match repo.get_zone(route.zone_id) {
        Ok(zone) => Ok(Some(zone)),
        Err(RepoError::NotFound) => {
            log::warn!(
                "Route {} of {weekday} refers to a missing zone {}",
                route.id,
                route.zone_id
            );
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

/// Everything a driver needs to know for a single day.
///
/// Orders and recurring services are sequenced independently.
/// Only recurring services that are due on that weekday are
/// included.
pub fn plan_driver_day<R>(
    repo: &R,
    driver_id: Option<DriverId>,
    weekday: Weekday,
    orders: &[Stop],
    recurring: &[RecurringStop],
) -> Result<DriverDayPlan>
where
    R: DayRouteRepo + ZoneRepo,
{
    let zone = zone_of_the_day(repo, driver_id, weekday)?;
    if let Some(zone) = &zone {
        if !zone.is_operative_on(weekday) {
            log::warn!("Zone '{}' is not operative on {weekday}", zone.name);
        }
    }
    let due: Vec<_> = recurring
        .iter()
        .filter(|r| r.is_due_on(weekday))
        .cloned()
        .collect();
    Ok(DriverDayPlan {
        weekday,
        zone,
        orders: sequence_stops(orders),
        recurring: sequence_stops(&due),
    })
}
