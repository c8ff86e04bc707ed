/// XML config deserialization for the two job description files.
///
/// Both files are read once at startup into immutable records. Tags are
/// deserialized as optional strings first so a missing element surfaces as a
/// structured `MissingField` instead of a serde message about the whole
/// document.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::defs::LauncherError;

/// StreamBWA job description (first positional XML file).
#[derive(Debug, Clone, PartialEq)]
pub struct MainConfig {
    pub ref_path: String,
    pub input_folder: String,
    pub output_folder: String,
    pub tmp_folder: String,
    pub num_instances: u32,
    pub num_tasks: u32,
    pub exec_mem_gb: u32,
    pub driver_mem_gb: u32,
}

/// Chunker job description (second positional XML file).
/// `fastq2_path` is empty for single-end input.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkerConfig {
    pub fastq1_path: String,
    pub fastq2_path: String,
    pub output_folder: String,
    pub driver_mem_gb: u32,
}

#[derive(Debug, Deserialize)]
struct RawMainConfig {
    #[serde(rename = "refPath")]
    ref_path: Option<String>,
    #[serde(rename = "inputFolder")]
    input_folder: Option<String>,
    #[serde(rename = "outputFolder")]
    output_folder: Option<String>,
    #[serde(rename = "tmpFolder")]
    tmp_folder: Option<String>,
    #[serde(rename = "numInstances")]
    num_instances: Option<String>,
    #[serde(rename = "numTasks")]
    num_tasks: Option<String>,
    #[serde(rename = "execMemGB")]
    exec_mem_gb: Option<String>,
    #[serde(rename = "driverMemGB")]
    driver_mem_gb: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawChunkerConfig {
    #[serde(rename = "fastq1Path")]
    fastq1_path: Option<String>,
    #[serde(rename = "fastq2Path")]
    fastq2_path: Option<String>,
    #[serde(rename = "outputFolder")]
    output_folder: Option<String>,
    #[serde(rename = "driverMemGB")]
    driver_mem_gb: Option<String>,
}

fn read_xml<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, LauncherError> {
    if !path.is_file() {
        return Err(LauncherError::ConfigFileNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    quick_xml::de::from_str(&text).map_err(|e| LauncherError::Xml {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Element text is trimmed before use, as the Spark job's own config
/// parser does.
fn required(
    field: &Option<String>,
    tag: &'static str,
    path: &Path,
) -> Result<String, LauncherError> {
    match field {
        Some(s) => Ok(s.trim().to_string()),
        None => Err(LauncherError::MissingField {
            tag,
            path: path.to_path_buf(),
        }),
    }
}

fn required_u32(
    field: &Option<String>,
    tag: &'static str,
    path: &Path,
) -> Result<u32, LauncherError> {
    let text = required(field, tag, path)?;
    text.parse()
        .map_err(|_| LauncherError::InvalidValue { tag, text })
}

impl MainConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LauncherError> {
        let path = path.as_ref();
        let raw: RawMainConfig = read_xml(path)?;
        Ok(MainConfig {
            ref_path: required(&raw.ref_path, "refPath", path)?,
            input_folder: required(&raw.input_folder, "inputFolder", path)?,
            output_folder: required(&raw.output_folder, "outputFolder", path)?,
            tmp_folder: required(&raw.tmp_folder, "tmpFolder", path)?,
            num_instances: required_u32(&raw.num_instances, "numInstances", path)?,
            num_tasks: required_u32(&raw.num_tasks, "numTasks", path)?,
            exec_mem_gb: required_u32(&raw.exec_mem_gb, "execMemGB", path)?,
            driver_mem_gb: required_u32(&raw.driver_mem_gb, "driverMemGB", path)?,
        })
    }
}

impl ChunkerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LauncherError> {
        let path = path.as_ref();
        let raw: RawChunkerConfig = read_xml(path)?;
        Ok(ChunkerConfig {
            fastq1_path: required(&raw.fastq1_path, "fastq1Path", path)?,
            // The one optional tag: absent (or empty) means single-end reads.
            fastq2_path: raw
                .fastq2_path
                .as_deref()
                .unwrap_or("")
                .trim()
                .to_string(),
            output_folder: required(&raw.output_folder, "outputFolder", path)?,
            driver_mem_gb: required_u32(&raw.driver_mem_gb, "driverMemGB", path)?,
        })
    }
}

/// The chunker writes where StreamBWA reads. A mismatch would have the two
/// jobs talking past each other, so it is fatal before anything launches.
pub fn validate_folders(
    main: &MainConfig,
    chunker: &ChunkerConfig,
) -> Result<(), LauncherError> {
    if chunker.output_folder != main.input_folder {
        return Err(LauncherError::FolderMismatch {
            chunker_output: chunker.output_folder.clone(),
            input_folder: main.input_folder.clone(),
        });
    }
    Ok(())
}
