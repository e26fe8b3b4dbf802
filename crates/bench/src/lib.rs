//! Latency harness for the five CRC-16 algorithms of the [`crc16`] crate.
//!
//! # Overview
//!
//! One [`Crc16Engine`](crc16::Crc16Engine) is built, a random input buffer
//! is generated, and each selected algorithm is timed call-by-call over that
//! same buffer. Results are checked for family agreement and printed as a
//! table or TSV.
//!
//! # Quick Start
//!
//! ```text
//! cargo run --release -p crc16-bench
//! cargo run --release -p crc16-bench -- --quick --format tsv
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod report;
pub mod runner;
pub mod sampler;
pub mod stats;

pub use config::{BenchConfig, Command, parse_args};
pub use error::{BenchError, Result};
pub use input::generate_input;
pub use report::{OutputFormat, Report, print_report};
pub use runner::{BenchRunner, RunResults, check_family_agreement};
pub use sampler::{Measurement, Sampler, SamplerConfig};
pub use stats::{SampleStats, VarianceQuality};
