#![doc = include_str!("../README.md")]

#[macro_use]
mod quantity;

mod cli;
mod client;
mod core;
mod history;
mod prelude;
mod report;
mod tables;

use clap::{Parser, crate_version};

use crate::{cli::Args, prelude::*};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    args.command.run(&args.report)?;

    info!("done!");
    Ok(())
}
