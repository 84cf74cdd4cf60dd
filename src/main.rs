use std::fs::{self, File};

use clap::Parser;
use numis::cli::{self, Cli};
use numis::core::config;
use numis::core::storage::Storage;
use numis::core::store::CollectionStore;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

fn main() {
    let args = Cli::parse();

    let loaded = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("numis: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&loaded);

    // Initialize file logger - writes into the data directory
    let _ = fs::create_dir_all(&resolved.data_dir);
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("numis starting, data dir {}", resolved.data_dir.display());

    let mut store = CollectionStore::open(Storage::new(&resolved.data_dir));
    if let Err(e) = cli::run(&mut store, args.command) {
        eprintln!("numis: {e}");
        std::process::exit(1);
    }
}
