use std::path::PathBuf;

use clap::Parser;

use crate::leo::DEFAULT_DEPTH;

#[derive(Parser, Debug)]
#[command(name = "Leo")]
#[command(version)]
pub struct Args {
    /// Write debug logs to this file.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// Number of plies every search explores.
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    pub depth: u8,
}
