pub mod chunker;
pub mod stream_bwa;

use std::process::ExitStatus;
use std::sync::Arc;

use anyhow::Result;
use log::warn;

use crate::config::defs::RunConfig;
use crate::config::xml::validate_folders;
use crate::utils::{hdfs, timelog};

/// Writes the run banner, enforces the folder precondition, removes the
/// stale remote folders, then runs the chunker and StreamBWA launches
/// concurrently and waits for both. Child exit codes are surfaced as
/// warnings but do not fail the run.
pub async fn run_all(run_config: Arc<RunConfig>) -> Result<()> {
    timelog::append(
        &run_config.log_file,
        &format!(
            "########################################\n[{}] Part1 started.",
            timelog::timestamp()
        ),
    )?;

    // The banner precedes this check, so even a rejected run leaves a
    // trace in the timing log.
    validate_folders(&run_config.main, &run_config.chunker)?;

    for folder in [
        &run_config.main.input_folder,
        &run_config.main.output_folder,
    ] {
        if let Err(e) = hdfs::remove_recursive(folder).await {
            warn!("Could not remove remote folder {}: {}", folder, e);
        }
    }

    let chunker_task = tokio::spawn(chunker::run(Arc::clone(&run_config)));
    let stream_bwa_task = tokio::spawn(stream_bwa::run(Arc::clone(&run_config)));

    let (chunker_result, stream_bwa_result) = tokio::join!(chunker_task, stream_bwa_task);
    report_exit("Chunker", chunker_result?);
    report_exit("StreamBWA", stream_bwa_result?);

    timelog::append(
        &run_config.log_file,
        &format!("[{}]", timelog::timestamp()),
    )?;
    Ok(())
}

fn report_exit(job: &str, result: Result<ExitStatus>) {
    match result {
        Ok(status) if status.success() => {}
        Ok(status) => warn!("{} launch exited with {}", job, status),
        Err(e) => warn!("{} launch failed: {}", job, e),
    }
}
