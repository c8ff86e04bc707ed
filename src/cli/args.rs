use clap::{Parser, ValueEnum};

use crate::config::defs::{CHUNKER_JAR, LOG_FILE, STREAMBWA_JAR};

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq)]
pub enum DeployMode {
    /// Driver runs on the submitting machine (yarn-client).
    #[default]
    Client,
    /// Driver runs inside the cluster; config files must be shipped with --files.
    Cluster,
}

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "streambwa-launcher", version = "1.0")]
pub struct Arguments {

    /// StreamBWA config XML (refPath, inputFolder, outputFolder, ...)
    pub config: String,

    /// Chunker config XML (fastq1Path, fastq2Path, outputFolder, driverMemGB)
    pub chunker_config: String,

    #[arg(short = 'v', long = "verbose", action)]
    pub verbose: bool,

    #[arg(long = "deploy-mode", default_value = "client", value_enum)]
    pub deploy_mode: DeployMode,

    #[arg(long, default_value = STREAMBWA_JAR, help = "StreamBWA application jar passed to spark-submit")]
    pub jar: String,

    #[arg(long = "chunker-jar", default_value = CHUNKER_JAR)]
    pub chunker_jar: String,

    #[arg(long = "log-file", default_value = LOG_FILE, help = "Append-only timing log")]
    pub log_file: String,
}
