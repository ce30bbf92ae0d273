mod args;
mod leo;

use args::Args;
use clap::Parser;
use leo::Leo;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use std::error::Error;
use std::fs::File;
use uci::{spawn_stdin_reader, spawn_stdout_writer};

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let lines = spawn_stdin_reader();
    let (output, writer) = spawn_stdout_writer();

    Leo::new(lines, output, args.depth).run();

    // The loop dropped its output sender; wait for queued lines to reach
    // stdout before exiting.
    let _ = writer.join();

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )
        .unwrap();
    }

    Ok(args)
}
