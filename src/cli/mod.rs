pub mod args;

use clap::Parser;
pub use args::{Arguments, DeployMode};

pub fn parse() -> Arguments {
    Arguments::parse()
}
