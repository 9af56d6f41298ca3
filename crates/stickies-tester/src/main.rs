#![warn(missing_docs)]

//! Entry point for the `stickies-tester` binary.

mod cli;
mod commands;
mod error;
mod parse;

use std::{io, process};

use clap::Parser;
use tracing::error;

use crate::{
    cli::{Cli, Commands},
    error::Result,
};

fn main() {
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, and dispatch to the chosen subcommand.
fn run() -> Result<()> {
    let Cli {
        log,
        setup,
        command,
    } = Cli::parse();
    logging::init(&log.spec());

    let mut engine = commands::build_engine(&setup)?;
    let mut out = io::stdout().lock();
    match command {
        Commands::Place(args) => commands::place(&mut engine, &args, &mut out),
        Commands::Arrange(args) => commands::arrange(&mut engine, &args, &mut out),
        Commands::Snap(args) => commands::snap(&engine, &args, &mut out),
        Commands::Drag(args) => commands::drag(&mut engine, &args, &mut out),
        Commands::Forget => commands::forget(&mut engine, &mut out),
        Commands::Screen => commands::screen(&engine, &mut out),
    }
}
