use std::io;
use std::process::ExitStatus;

use tokio::process::Command;

use crate::config::defs::HADOOP_TAG;

/// Recursively removes a remote folder with `hadoop fs -rm -r -f`.
/// -f makes non-existence a no-op; callers treat any failure here as
/// best-effort cleanup, not a fatal condition.
pub async fn remove_recursive(folder: &str) -> io::Result<ExitStatus> {
    Command::new(HADOOP_TAG)
        .args(["fs", "-rm", "-r", "-f", folder])
        .status()
        .await
}
