use anyhow::Result as Fallible;
use clap::Parser;

mod cli;
mod commands;
mod config;
mod gateways;

use self::{cli::Cli, config::Config};

fn main() -> Fallible<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Cli { config, command } = Cli::parse();
    let cfg = Config::try_load_from_file_or_default(config.as_ref())?;
    commands::run(command, &cfg)
}
