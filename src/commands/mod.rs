use crate::{
    cli::{Commands, DayRouteCommands, ZoneCommands},
    config::{self, Config},
};
use anyhow::Result as Fallible;
use dgeo_db_sqlite::Database;

mod geocoding;
mod json;
mod route;
mod zone;

pub fn run(command: Commands, cfg: &Config) -> Fallible<()> {
    match command {
        Commands::ResolveAddress(args) => geocoding::resolve_address(&args, cfg),
        Commands::DetectZone(args) => geocoding::detect_zone(&args, cfg),
        Commands::FindZone(args) => geocoding::find_zone(&args, cfg),
        Commands::Suggest(args) => geocoding::suggest(&args, cfg),
        Commands::Sequence(args) => route::sequence(&args),
        Commands::PlanDay(args) => route::plan_day(&args, cfg),
        Commands::MergeBoundaries(args) => zone::merge_boundaries(&args),
        Commands::Zone(command) => match command {
            ZoneCommands::List { active } => zone::list(active, cfg),
            ZoneCommands::Create { file } => zone::create(&file, cfg),
            ZoneCommands::Update { id, file } => zone::update(id, &file, cfg),
            ZoneCommands::Activate { id } => zone::set_active(id, true, cfg),
            ZoneCommands::Deactivate { id } => zone::set_active(id, false, cfg),
            ZoneCommands::ImportBoundary(args) => zone::import_boundary(args, cfg),
        },
        Commands::DayRoute(DayRouteCommands::Create {
            weekday,
            zone,
            driver,
        }) => route::create_day_route(weekday, zone, driver, cfg),
    }
}

/// Opens the database and applies pending migrations.
fn connect(cfg: &config::Db) -> Fallible<Database> {
    log::debug!("Connecting to database {}", cfg.conn_sqlite);
    let db = Database::open(&cfg.conn_sqlite, cfg.conn_pool_size.into())?;
    db.migrate()?;
    Ok(db)
}
