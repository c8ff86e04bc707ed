use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Last path component as a plain string ("conf/config.xml" -> "config.xml").
pub fn file_name_from_path(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Copies a config file into the working directory so a client-mode driver
/// can read it by basename. Returns the staged path for later removal, or
/// None when the config already lives in the working directory and needs
/// neither copy nor cleanup.
pub fn stage_config_copy(config_path: &Path, cwd: &Path) -> io::Result<Option<PathBuf>> {
    let staged = cwd.join(file_name_from_path(config_path));
    // A same-file copy truncates the destination before the read, which
    // would wipe the config out from under the job.
    if staged.exists() && fs::canonicalize(&staged)? == fs::canonicalize(config_path)? {
        return Ok(None);
    }
    fs::copy(config_path, &staged)?;
    Ok(Some(staged))
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
