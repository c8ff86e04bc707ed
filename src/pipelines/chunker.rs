use std::process::ExitStatus;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use log::info;
use tokio::process::Command;

use crate::config::defs::RunConfig;
use crate::utils::command::{render, spark_submit};

/// Launches the chunker job and waits for it to exit. Always a local[*]
/// run on the submitting machine; the command line is echoed to the console
/// but not written to the timing log.
pub async fn run(cfg: Arc<RunConfig>) -> Result<ExitStatus> {
    let args = spark_submit::chunker_args(&cfg);
    let cmd_str = render(&cfg.spark_submit, &args);
    println!("{}", cmd_str);

    let status = Command::new(&cfg.spark_submit)
        .args(&args)
        .status()
        .await
        .map_err(|e| anyhow!("Failed to spawn {}: {}. Is Spark installed?", cfg.spark_submit.display(), e))?;
    info!("Chunker job exited with {}", status);

    Ok(status)
}
