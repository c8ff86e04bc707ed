mod cli;
mod config;
mod pipelines;
mod utils;

use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use env_logger::Builder;
use log::{LevelFilter, debug, error, info};

use crate::cli::parse;
use crate::config::defs::{LauncherError, RunConfig};
use crate::config::xml::{ChunkerConfig, MainConfig};
use crate::utils::command::resolve_spark_submit;

#[tokio::main]
async fn main() -> Result<()> {
    let run_start = Instant::now();

    let args = parse();

    let log_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    println!("\n-------------\n StreamBWA Launcher\n-------------\n");

    let run_config = match build_run_config(args) {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    debug!("Using spark-submit at {:?}", run_config.spark_submit);

    if let Err(e) = pipelines::run_all(Arc::clone(&run_config)).await {
        error!(
            "Launcher failed: {} at {} milliseconds.",
            e,
            run_start.elapsed().as_millis()
        );
        std::process::exit(1);
    }

    let time_in_secs = run_start.elapsed().as_secs();
    let mins = time_in_secs / 60;
    let secs = time_in_secs % 60;
    println!("|| Time taken = {} mins {} secs ||", mins, secs);
    Ok(())
}

/// Reads both config files and freezes everything the two launch tasks
/// need into one immutable snapshot. Failures here are fatal and happen
/// before anything is written to the timing log; the folder-match check
/// runs later in `pipelines::run_all`, after the log banner.
fn build_run_config(args: cli::args::Arguments) -> Result<RunConfig, LauncherError> {
    let cwd = env::current_dir()?;
    info!("The current directory is {:?}", cwd);

    let config_path = PathBuf::from(&args.config);
    let chunker_config_path = PathBuf::from(&args.chunker_config);

    let main = MainConfig::from_file(&config_path)?;
    let chunker = ChunkerConfig::from_file(&chunker_config_path)?;

    Ok(RunConfig {
        cwd,
        spark_submit: resolve_spark_submit(),
        config_path,
        chunker_config_path,
        log_file: PathBuf::from(&args.log_file),
        main,
        chunker,
        args,
    })
}
