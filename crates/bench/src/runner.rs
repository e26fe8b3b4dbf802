//! Runs the sampler over every selected algorithm on one shared buffer.

use crc16::{Crc16Engine, Family};
use tracing::{debug, info};

use crate::{
  config::BenchConfig,
  error::{BenchError, Result},
  input::generate_input,
  sampler::{Measurement, Sampler},
};

/// Everything a report needs from one benchmark run.
#[derive(Clone, Debug)]
pub struct RunResults {
  pub data_size: usize,
  pub runs: usize,
  /// Untimed calls made per algorithm before timing started.
  pub warmup_runs: usize,
  pub seed: Option<u64>,
  /// One entry per algorithm, in configuration order.
  pub measurements: Vec<Measurement>,
}

/// Benchmark runner: one engine, one input buffer, N algorithms.
#[derive(Clone, Debug)]
pub struct BenchRunner {
  config: BenchConfig,
}

impl BenchRunner {
  #[must_use]
  pub fn new(config: BenchConfig) -> Self {
    Self { config }
  }

  /// Generate the configured input and measure every algorithm over it.
  pub fn run(&self) -> Result<RunResults> {
    self.config.validate()?;

    info!(
      bytes = self.config.data_size,
      runs = self.config.runs,
      seed = ?self.config.seed,
      "generating input"
    );
    let data = generate_input(self.config.data_size, self.config.seed);
    self.run_on(&data)
  }

  /// Measure every configured algorithm over caller-supplied `data`.
  ///
  /// The configured `data_size` is ignored; results report `data.len()`.
  pub fn run_on(&self, data: &[u8]) -> Result<RunResults> {
    self.config.validate()?;

    let engine = Crc16Engine::new();
    let sampler_config = self.config.sampler();
    let sampler = Sampler::new(&sampler_config);

    let mut measurements = Vec::with_capacity(self.config.algorithms.len());
    for &algorithm in &self.config.algorithms {
      debug!(algorithm = algorithm.name(), "measuring");
      measurements.push(sampler.measure(&engine, algorithm, data)?);
    }

    check_family_agreement(&measurements)?;
    info!(algorithms = measurements.len(), "benchmark complete");

    Ok(RunResults {
      data_size: data.len(),
      runs: self.config.runs,
      warmup_runs: self.config.warmup_runs,
      seed: self.config.seed,
      measurements,
    })
  }
}

/// Every measured algorithm must agree with the others of its family.
pub fn check_family_agreement(measurements: &[Measurement]) -> Result<()> {
  for family in [Family::Direct, Family::Reflected] {
    let mut members = measurements.iter().filter(|m| m.algorithm.family() == family);
    let Some(first) = members.next() else {
      continue;
    };

    if let Some(other) = members.find(|m| m.checksum != first.checksum) {
      return Err(BenchError::FamilyMismatch {
        family: family.as_str(),
        left: first.algorithm,
        left_crc: first.checksum,
        right: other.algorithm,
        right_crc: other.checksum,
      });
    }
  }
  Ok(())
}
