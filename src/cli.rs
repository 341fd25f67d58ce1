use clap::{Args, Parser, Subcommand};
use dgeo_core::entities::{DriverId, Weekday};
use std::path::PathBuf;

/// Geocoding, zone resolution and route sequencing for dispatching.
#[derive(Debug, Parser)]
#[command(name = "dispatchgeo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (TOML).
    #[arg(long, short = 'c', env = "DISPATCHGEO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve an address into a coordinate.
    ResolveAddress(AddressArgs),
    /// Resolve an address and find the zone that serves it.
    DetectZone(AddressArgs),
    /// Find the active zone that contains a coordinate.
    FindZone(FindZoneArgs),
    /// Suggest complete addresses for an incomplete one.
    Suggest(AddressArgs),
    /// Order stops for visitation.
    Sequence(SequenceArgs),
    /// Zone and stops of a driver for a single day.
    PlanDay(PlanDayArgs),
    /// Merge zone boundaries into a single geometry.
    MergeBoundaries(MergeBoundariesArgs),
    /// Manage zones.
    #[command(subcommand)]
    Zone(ZoneCommands),
    /// Manage the assignment of zones to weekdays.
    #[command(subcommand)]
    DayRoute(DayRouteCommands),
}

#[derive(Debug, Args)]
pub struct AddressArgs {
    /// Free-text address, e.g. "Güemes 120".
    #[arg(required = true, num_args = 1..)]
    pub address: Vec<String>,
}

impl AddressArgs {
    pub fn address(&self) -> String {
        self.address.join(" ")
    }
}

#[derive(Debug, Args)]
pub struct FindZoneArgs {
    /// Latitude in degrees.
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,
    /// Longitude in degrees.
    #[arg(allow_negative_numbers = true)]
    pub lng: f64,
}

#[derive(Debug, Args)]
pub struct SequenceArgs {
    /// JSON file with a list of stops.
    pub stops: PathBuf,
}

#[derive(Debug, Args)]
pub struct PlanDayArgs {
    /// Weekday label, e.g. "Lunes".
    #[arg(long, short = 'w', value_parser = parse_weekday)]
    pub weekday: Weekday,
    /// Driver whose route should be used.
    #[arg(long, short = 'd')]
    pub driver: Option<DriverId>,
    /// JSON file with the orders and recurring services.
    pub stops: PathBuf,
}

#[derive(Debug, Args)]
pub struct MergeBoundariesArgs {
    /// Files with GeoJSON geometries.
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum ZoneCommands {
    /// List all zones.
    List {
        /// Only list active zones.
        #[arg(long)]
        active: bool,
    },
    /// Create a zone from a JSON file.
    Create {
        file: PathBuf,
    },
    /// Replace the properties of a zone from a JSON file.
    Update {
        id: i64,
        file: PathBuf,
    },
    Activate {
        id: i64,
    },
    Deactivate {
        id: i64,
    },
    /// Fetch the boundary of a locality.
    ImportBoundary(ImportBoundaryArgs),
}

#[derive(Debug, Args)]
pub struct ImportBoundaryArgs {
    /// Name of the locality, e.g. "Villa General Belgrano".
    pub locality: String,
    /// Create a zone with this name from the boundary.
    #[arg(long)]
    pub create: Option<String>,
    /// Operative days of the created zone.
    #[arg(long, value_delimiter = ',', value_parser = parse_weekday)]
    pub days: Vec<Weekday>,
}

#[derive(Debug, Subcommand)]
pub enum DayRouteCommands {
    /// Assign a zone to a weekday.
    Create {
        #[arg(long, short = 'w', value_parser = parse_weekday)]
        weekday: Weekday,
        #[arg(long, short = 'z')]
        zone: i64,
        /// Only for this driver instead of all drivers.
        #[arg(long, short = 'd')]
        driver: Option<DriverId>,
    },
}

fn parse_weekday(label: &str) -> Result<Weekday, String> {
    label
        .trim()
        .parse()
        .map_err(|_| format!("Unknown weekday '{label}' (expected e.g. 'Lunes')"))
}
