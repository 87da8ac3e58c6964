use std::env;

use clap::Parser as _;
use gtlparser::GtlResult;
use gtlparser::args::Args;
use gtlparser::config::{Config, read_config};
use gtlparser::logging::{ensure_gtlparser_core_log_level_matches, init_tracing};
use gtlparser::render::write_map;
use log::log_enabled;
use tracing::{error, info};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn start(args: Args) -> GtlResult<()> {
    info!("Starting gtlparser v{VERSION}");

    let env = subst::Env;
    let save_config = args.meta.save_config.clone();
    let output = args.meta.output.clone();
    let mut config = if let Some(ref cfg_filename) = args.meta.config {
        info!("Using {}", cfg_filename.display());
        read_config(cfg_filename, &env)?
    } else {
        info!("Config file is not specified, building the map from the command line");
        Config::default()
    };

    args.merge_into_config(&mut config)?;
    config.finalize()?;
    let map = config.build_map()?;

    if let Some(file_name) = save_config {
        config.save_to_file(file_name.as_path())?;
    } else {
        info!("Use --save-config to save or print the map configuration.");
    }

    write_map(&map, &output)
}

fn main() {
    let filter = ensure_gtlparser_core_log_level_matches(env::var("RUST_LOG").ok(), "gtlparser=");
    init_tracing(&filter, env::var("GTLPARSER_FORMAT").ok());

    let args = Args::parse();
    if let Err(e) = start(args) {
        // Ensure the message is printed, even if the logging is disabled
        if log_enabled!(log::Level::Error) {
            error!("{e}");
        } else {
            eprintln!("{e}");
        }
        std::process::exit(1);
    }
}
