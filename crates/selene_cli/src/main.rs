mod cli;
mod config;
mod logging;
mod moon_cmd;
mod settings_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use selene_app::{AppContext, JsonFileStore};

use crate::cli::{Cli, Command};
use crate::config::SeleneConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = SeleneConfig::load(&cli.config)?;
    debug!(store = %config.store.path.display(), device = %config.locale.device, "config loaded");

    let now = chrono::Utc::now();
    let store = JsonFileStore::new(&config.store.path);
    let mut ctx = AppContext::load(store, &config.locale.device, now);

    match cli.command {
        Command::Phase { date } => moon_cmd::phase(&ctx, date),
        Command::Times { date } => moon_cmd::times(&ctx, date),
        Command::Month { year, month } => moon_cmd::month(&ctx, year, month),
        Command::Trend => moon_cmd::trend(&ctx),
        Command::Countdown { date } => moon_cmd::countdown(&ctx, date),
        Command::Day { date } => moon_cmd::day(&ctx, date),
        Command::Locations { search } => settings_cmd::locations(&ctx, search.as_deref()),
        Command::Location { id } => settings_cmd::set_location(&mut ctx, &id),
        Command::Languages => settings_cmd::languages(&ctx),
        Command::Language { code } => settings_cmd::set_language(&mut ctx, &code),
        Command::Subscription { action } => settings_cmd::subscription(&mut ctx, action, now),
    }
}
