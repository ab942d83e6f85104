// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mygrep CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use mygrep::cli::Cli;
use mygrep::error::ExitCode;

fn init_logging() {
    let filter = EnvFilter::try_from_env("MYGREP_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("mygrep: {}", e);
            match e.downcast_ref::<mygrep::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::Error,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    if let Err(e) = cli.validate() {
        e.exit();
    }

    let code = mygrep::cmd_grep::run(&cli, std::io::stdin().lock())?;
    Ok(code)
}
