use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::info;
use std::process;

use subscout::cli::Args;
use subscout::engine::SubScoutEngine;
use subscout::types::Config;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().len() == 1 {
        eprintln!("{}", Args::command().render_help());
        process::exit(1);
    }

    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let engine = match SubScoutEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let stats = tokio::select! {
        result = engine.run() => result.map_err(|e| anyhow::anyhow!("scan failed: {}", e))?,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Process interrupted by user. Exiting.");
            process::exit(1);
        }
    };

    info!(
        "scan completed in {:.2}s: {} unique subdomains ({} passive, {} active)",
        stats.duration.as_secs_f64(),
        stats.unique_subdomains,
        stats.passive_found,
        stats.active_found
    );

    Ok(())
}
