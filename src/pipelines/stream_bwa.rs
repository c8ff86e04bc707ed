use std::fs;
use std::path::Path;
use std::process::ExitStatus;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use log::{info, warn};
use tokio::process::Command;

use crate::config::defs::RunConfig;
use crate::utils::command::{render, spark_submit};
use crate::utils::file::{ensure_dir, stage_config_copy};
use crate::utils::timelog;

/// Launches the StreamBWA alignment job and waits for it to exit.
///
/// In client mode the driver runs on this machine and reads the config by
/// basename, so a copy is staged into the working directory first and the
/// tmp folder is created; the copy is removed once the job exits. A config
/// that already lives in the working directory is left in place untouched.
pub async fn run(cfg: Arc<RunConfig>) -> Result<ExitStatus> {
    let staged = if cfg.in_client_mode() {
        let staged = stage_config_copy(&cfg.config_path, &cfg.cwd)
            .with_context(|| format!("Failed to stage {}", cfg.config_path.display()))?;
        ensure_dir(Path::new(&cfg.main.tmp_folder))?;
        staged
    } else {
        None
    };

    let args = spark_submit::stream_bwa_args(&cfg);
    let cmd_str = render(&cfg.spark_submit, &args);
    println!("{}", cmd_str);
    timelog::append(
        &cfg.log_file,
        &format!("[{}] {}", timelog::timestamp(), cmd_str),
    )?;

    let status = Command::new(&cfg.spark_submit)
        .args(&args)
        .status()
        .await
        .map_err(|e| anyhow!("Failed to spawn {}: {}. Is Spark installed?", cfg.spark_submit.display(), e))?;
    info!("StreamBWA job exited with {}", status);

    if let Some(staged) = staged {
        if let Err(e) = fs::remove_file(&staged) {
            warn!("Could not remove staged config {}: {}", staged.display(), e);
        }
    }

    Ok(status)
}
