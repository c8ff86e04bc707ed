use std::path::PathBuf;
use thiserror::Error;

use crate::cli::args::{Arguments, DeployMode};
use crate::config::xml::{ChunkerConfig, MainConfig};

// External software
pub const SPARK_SUBMIT_TAG: &str = "spark-submit";
pub const HADOOP_TAG: &str = "hadoop";
pub const SPARK_HOME_VAR: &str = "SPARK_HOME";

// Spark job entry classes
pub const STREAMBWA_CLASS: &str = "StreamBWA";
pub const CHUNKER_CLASS: &str = "Chunker";

// Static filenames
pub const STREAMBWA_JAR: &str = "target/scala-2.11/streambwa_2.11-1.0.jar";
pub const CHUNKER_JAR: &str = "chunker_2.11-1.0.jar";
pub const LOG_FILE: &str = "time.txt";

/// Fatal pre-launch failures. Once the jobs are running, nothing escalates
/// past a logged warning.
#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("Config file {0} does not exist!")]
    ConfigFileNotFound(PathBuf),

    #[error("Missing <{tag}> in {path}")]
    MissingField { tag: &'static str, path: PathBuf },

    #[error("Invalid value for <{tag}>: {text}")]
    InvalidValue { tag: &'static str, text: String },

    #[error("The output folder of chunker: {chunker_output}, is different than the input folder: {input_folder}")]
    FolderMismatch {
        chunker_output: String,
        input_folder: String,
    },

    #[error("XML parse error in {path}: {source}")]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Immutable snapshot of one run, built once in main and shared by the two
/// launch tasks.
pub struct RunConfig {
    pub cwd: PathBuf,
    pub spark_submit: PathBuf,
    pub config_path: PathBuf,
    pub chunker_config_path: PathBuf,
    pub log_file: PathBuf,
    pub main: MainConfig,
    pub chunker: ChunkerConfig,
    pub args: Arguments,
}

impl RunConfig {
    pub fn in_client_mode(&self) -> bool {
        self.args.deploy_mode == DeployMode::Client
    }
}
