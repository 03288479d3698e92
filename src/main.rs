mod cli;

use clap::Parser;
use colored::Colorize;

use hotel_records::config::{LogConfig, StoreConfig};
use hotel_records::{Error, logger, open_json_store};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env();
    if let Some(log_dir) = cli.log_dir.clone() {
        log_config.log_dir = log_dir;
    }
    logger::init(&log_config);

    let store_config = cli.store.clone().map(StoreConfig::new).unwrap_or_else(StoreConfig::from_env);
    log::info!("Using store '{}'.", store_config.path.display());

    let records = open_json_store(&store_config);
    if let Err(e) = cli::run(&records, cli.command) {
        eprintln!("{}", e.to_string().red());

        // Exit code 1: request rejected, 2: store could not be read or written.
        if e.downcast_ref::<Error>().is_some_and(Error::is_rejection) {
            std::process::exit(1);
        }
        log::error!("Command failed: {:#}", e);
        std::process::exit(2);
    }
}
