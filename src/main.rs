use anyhow::{Context, Result};
use clap::Parser;

use minaret::cli::args::{Cli, Commands};
use minaret::cli::handlers;
use minaret::config::AppConfig;
use minaret::db::SqliteRepository;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;

    AppConfig::ensure_data_dir()?;
    let db_path = config.db_path()?;
    let mut repo = SqliteRepository::open(&db_path)?;

    match cli.command {
        Commands::AddMosque { name, address } => {
            handlers::handle_add_mosque(&mut repo, &name, address.as_deref())?;
        }
        Commands::AddMember { mosque, name, role } => {
            handlers::handle_add_member(&mut repo, &config, &mosque, &name, &role)?;
        }
        Commands::AddEvent {
            mosque,
            title,
            date,
        } => {
            handlers::handle_add_event(&mut repo, &config, &mosque, &title, &date)?;
        }
        Commands::SetTime {
            mosque,
            prayer,
            time,
        } => {
            handlers::handle_set_time(&mut repo, &config, &mosque, &prayer, &time)?;
        }
        Commands::Times { mosque } => {
            handlers::handle_times(&repo, &config, mosque.as_deref())?;
        }
        Commands::Next { mosque } => {
            handlers::handle_next(&repo, &config, mosque.as_deref())?;
        }
        Commands::Summary { mosque, json } => {
            handlers::handle_summary(&repo, &config, mosque.as_deref(), json)?;
        }
        Commands::Mosques => {
            handlers::handle_mosques(&repo)?;
        }
        Commands::SetDefault { mosque } => {
            handlers::handle_set_default(&repo, &mut config, &mosque)?;
        }
    }

    Ok(())
}
