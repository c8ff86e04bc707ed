/// Functions for building the spark-submit command lines.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::defs::{SPARK_HOME_VAR, SPARK_SUBMIT_TAG};

pub mod spark_submit {
    use crate::cli::args::DeployMode;
    use crate::config::defs::{CHUNKER_CLASS, RunConfig, STREAMBWA_CLASS};
    use crate::utils::file::file_name_from_path;

    /// Submission arguments for the StreamBWA alignment job.
    ///
    /// Client mode runs the driver locally against yarn-client and the job
    /// reads its config by basename from the working directory; cluster mode
    /// must ship the config file to the driver with --files.
    pub fn stream_bwa_args(cfg: &RunConfig) -> Vec<String> {
        let mut args_vec: Vec<String> = Vec::new();
        args_vec.push("--class".to_string());
        args_vec.push(STREAMBWA_CLASS.to_string());
        args_vec.push("--master".to_string());
        match cfg.args.deploy_mode {
            DeployMode::Client => {
                args_vec.push("yarn-client".to_string());
            }
            DeployMode::Cluster => {
                args_vec.push("yarn-cluster".to_string());
                args_vec.push("--files".to_string());
                args_vec.push(cfg.config_path.to_string_lossy().to_string());
            }
        }
        args_vec.push("--driver-memory".to_string());
        args_vec.push(format!("{}g", cfg.main.driver_mem_gb));
        args_vec.push("--executor-memory".to_string());
        args_vec.push(format!("{}g", cfg.main.exec_mem_gb));
        args_vec.push("--num-executors".to_string());
        args_vec.push(cfg.main.num_instances.to_string());
        args_vec.push("--executor-cores".to_string());
        args_vec.push(cfg.main.num_tasks.to_string());
        args_vec.push(cfg.args.jar.clone());
        args_vec.push(file_name_from_path(&cfg.config_path));
        args_vec
    }

    /// Submission arguments for the chunker job. Always a single-node local
    /// run; the config file is passed by its full path.
    pub fn chunker_args(cfg: &RunConfig) -> Vec<String> {
        let mut args_vec: Vec<String> = Vec::new();
        args_vec.push("--class".to_string());
        args_vec.push(CHUNKER_CLASS.to_string());
        args_vec.push("--master".to_string());
        args_vec.push("local[*]".to_string());
        args_vec.push("--driver-memory".to_string());
        args_vec.push(format!("{}g", cfg.chunker.driver_mem_gb));
        args_vec.push(cfg.args.chunker_jar.clone());
        args_vec.push(cfg.chunker_config_path.to_string_lossy().to_string());
        args_vec
    }
}

/// Locates spark-submit under $SPARK_HOME, falling back to a bare tag so the
/// PATH lookup still has a chance when the variable is unset.
pub fn resolve_spark_submit() -> PathBuf {
    match env::var_os(SPARK_HOME_VAR) {
        Some(home) => PathBuf::from(home).join("bin").join(SPARK_SUBMIT_TAG),
        None => PathBuf::from(SPARK_SUBMIT_TAG),
    }
}

/// Renders the command line the way it is echoed to the console and written
/// to the timing log. Plain space joining; paths with shell metacharacters
/// are not escaped.
pub fn render(program: &Path, args: &[String]) -> String {
    let mut line = program.to_string_lossy().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{Arguments, DeployMode};
    use crate::config::defs::RunConfig;
    use crate::config::xml::{ChunkerConfig, MainConfig};
    use std::path::PathBuf;

    fn test_run_config(deploy_mode: DeployMode) -> RunConfig {
        let main = MainConfig {
            ref_path: "/refs/hg38.fasta".to_string(),
            input_folder: "hdfs:/user/in/".to_string(),
            output_folder: "hdfs:/user/out/".to_string(),
            tmp_folder: "/tmp/streambwa".to_string(),
            num_instances: 4,
            num_tasks: 8,
            exec_mem_gb: 16,
            driver_mem_gb: 4,
        };
        let chunker = ChunkerConfig {
            fastq1_path: "/data/sample_R1.fastq.gz".to_string(),
            fastq2_path: "/data/sample_R2.fastq.gz".to_string(),
            output_folder: "hdfs:/user/in/".to_string(),
            driver_mem_gb: 2,
        };
        let args = Arguments {
            config: "conf/config.xml".to_string(),
            chunker_config: "conf/chunker.xml".to_string(),
            deploy_mode,
            jar: "streambwa.jar".to_string(),
            chunker_jar: "chunker.jar".to_string(),
            log_file: "time.txt".to_string(),
            ..Default::default()
        };
        RunConfig {
            cwd: PathBuf::from("/work"),
            spark_submit: PathBuf::from("spark-submit"),
            config_path: PathBuf::from("conf/config.xml"),
            chunker_config_path: PathBuf::from("conf/chunker.xml"),
            log_file: PathBuf::from("time.txt"),
            main,
            chunker,
            args,
        }
    }

    #[test]
    fn stream_bwa_client_args_interpolate_resources() {
        let cfg = test_run_config(DeployMode::Client);
        let line = render(&cfg.spark_submit, &spark_submit::stream_bwa_args(&cfg));
        assert!(line.contains("--class StreamBWA"));
        assert!(line.contains("--master yarn-client"));
        assert!(line.contains("--num-executors 4 --executor-cores 8"));
        assert!(line.contains("--executor-memory 16g"));
        assert!(line.contains("--driver-memory 4g"));
        assert!(!line.contains("--files"));
        // Client mode passes the config by basename.
        assert!(line.ends_with("streambwa.jar config.xml"));
    }

    #[test]
    fn stream_bwa_cluster_args_ship_config_file() {
        let cfg = test_run_config(DeployMode::Cluster);
        let line = render(&cfg.spark_submit, &spark_submit::stream_bwa_args(&cfg));
        assert!(line.contains("--master yarn-cluster --files conf/config.xml"));
    }

    #[test]
    fn chunker_args_run_local() {
        let cfg = test_run_config(DeployMode::Client);
        let line = render(&cfg.spark_submit, &spark_submit::chunker_args(&cfg));
        assert!(line.contains("--class Chunker"));
        assert!(line.contains("--master local[*]"));
        assert!(line.contains("--driver-memory 2g"));
        // Chunker gets the config by full path, not basename.
        assert!(line.ends_with("chunker.jar conf/chunker.xml"));
    }
}
