//! Compare the latency of the five CRC-16 algorithms.
//!
//! Usage:
//!   cargo run --release -p crc16-bench
//!   cargo run --release -p crc16-bench -- --quick
//!   cargo run --release -p crc16-bench -- --format tsv --seed 42

use std::{env, process::ExitCode};

use crc16_bench::{BenchRunner, Command, config::USAGE, logging, parse_args, print_report};

fn main() -> ExitCode {
  let config = match parse_args(env::args().skip(1)) {
    Ok(Command::Run(config)) => config,
    Ok(Command::Help) => {
      eprint!("{USAGE}");
      return ExitCode::SUCCESS;
    }
    Err(err) => {
      eprintln!("Error: {err}");
      eprintln!("Run with --help for usage information.");
      return ExitCode::FAILURE;
    }
  };

  if let Err(err) = logging::init(config.verbose) {
    eprintln!("Error: {err}");
    return ExitCode::FAILURE;
  }

  let format = config.format;
  let results = match BenchRunner::new(config).run() {
    Ok(results) => results,
    Err(err) => {
      tracing::error!("benchmark failed: {err}");
      return ExitCode::FAILURE;
    }
  };

  if let Err(err) = print_report(&results, format) {
    tracing::error!("failed to print report: {err}");
    return ExitCode::FAILURE;
  }

  ExitCode::SUCCESS
}
