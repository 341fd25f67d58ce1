use super::{
    connect,
    json::{self, print_json, read_json_file},
};
use crate::{
    cli::{PlanDayArgs, SequenceArgs},
    config::Config,
};
use anyhow::Result as Fallible;
use dgeo_core::{
    entities::{DriverId, RecurringStop, Stop, Weekday, ZoneId},
    usecases as uc,
};

pub fn sequence(args: &SequenceArgs) -> Fallible<()> {
    let stops: Vec<json::Stop> = read_json_file(&args.stops)?;
    let stops = stops
        .into_iter()
        .map(Stop::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let sequence: Vec<_> = uc::sequence_stops(&stops)
        .into_iter()
        .map(json::Stop::from)
        .collect();
    print_json(&sequence)
}

pub fn plan_day(args: &PlanDayArgs, cfg: &Config) -> Fallible<()> {
    let json::DayStops { orders, recurring } = read_json_file(&args.stops)?;
    let orders = orders
        .into_iter()
        .map(Stop::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let recurring = recurring
        .into_iter()
        .map(RecurringStop::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let db = connect(&cfg.db)?;
    let plan = uc::plan_driver_day(
        &db.read_only()?,
        args.driver,
        args.weekday,
        &orders,
        &recurring,
    )?;
    print_json(&json::driver_day_plan(plan))
}

pub fn create_day_route(
    weekday: Weekday,
    zone_id: i64,
    driver_id: Option<DriverId>,
    cfg: &Config,
) -> Fallible<()> {
    let db = connect(&cfg.db)?;
    let id = db.read_write()?.transaction(|session| {
        uc::create_day_route(session, weekday, ZoneId::new(zone_id), driver_id)
    })?;
    print_json(&serde_json::json!({ "id": id }))
}
