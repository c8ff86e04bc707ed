pub mod command;
pub mod file;
pub mod hdfs;
pub mod timelog;
