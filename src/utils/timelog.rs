/// Append-only timing log. One line per call, file opened and closed each
/// time; a single orchestrator process writes to it per run, so there is no
/// locking against concurrent writers.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

pub fn append<P: AsRef<Path>>(path: P, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}

/// ctime-style local timestamp, e.g. "Tue Aug 25 13:00:00 2026".
pub fn timestamp() -> String {
    Local::now().format("%a %b %e %H:%M:%S %Y").to_string()
}
