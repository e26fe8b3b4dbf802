//! Average-latency measurement for a single checksum function.
//!
//! The sampler:
//! 1. Runs untimed warmup calls so tables and input are cache-resident
//! 2. Times each of `runs` calls individually
//! 3. Checks that every call returned the same checksum
//! 4. Reports the raw mean plus outlier-filtered statistics
//!
//! The same loop serves all five algorithms; only the called function differs.

use core::time::Duration;
use std::{hint::black_box, time::Instant};

use crc16::{Algorithm, Crc16Engine};
use tracing::{debug, warn};

use crate::{
  error::{BenchError, Result},
  stats::{DEFAULT_CV_THRESHOLD, SampleStats},
};

/// Default number of timed calls per algorithm.
pub const DEFAULT_RUNS: usize = 1000;

/// Default number of untimed calls before measuring.
pub const DEFAULT_WARMUP_RUNS: usize = 1;

/// Sampler configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplerConfig {
  /// Timed calls per measurement. Must be at least 1.
  pub runs: usize,

  /// Untimed calls before the first timed one.
  pub warmup_runs: usize,

  /// Coefficient of variation above which a warning is logged.
  pub cv_threshold: f64,
}

impl Default for SamplerConfig {
  fn default() -> Self {
    Self {
      runs: DEFAULT_RUNS,
      warmup_runs: DEFAULT_WARMUP_RUNS,
      cv_threshold: DEFAULT_CV_THRESHOLD,
    }
  }
}

/// Outcome of measuring one algorithm over one buffer.
#[derive(Clone, Debug)]
pub struct Measurement {
  pub algorithm: Algorithm,

  /// Checksum returned by every timed call.
  pub checksum: u16,

  /// Length of the measured buffer.
  pub bytes: usize,

  /// One entry per timed call.
  pub samples: Vec<Duration>,

  /// Outlier-filtered statistics, in microseconds.
  pub stats: SampleStats,
}

impl Measurement {
  /// Sum of all timed calls.
  #[must_use]
  pub fn total(&self) -> Duration {
    self.samples.iter().sum()
  }

  /// Arithmetic mean over all timed calls, in microseconds.
  #[must_use]
  pub fn mean_micros(&self) -> f64 {
    if self.samples.is_empty() {
      return 0.0;
    }
    self.total().as_secs_f64() * 1e6 / self.samples.len() as f64
  }

  /// Throughput implied by the mean, in MiB/s.
  #[must_use]
  pub fn throughput_mib_s(&self) -> f64 {
    let mean_secs = self.mean_micros() / 1e6;
    if mean_secs <= 0.0 {
      return 0.0;
    }
    self.bytes as f64 / (1024.0 * 1024.0) / mean_secs
  }
}

/// Measures checksum latency according to a [`SamplerConfig`].
pub struct Sampler<'a> {
  config: &'a SamplerConfig,
}

impl<'a> Sampler<'a> {
  #[inline]
  #[must_use]
  pub const fn new(config: &'a SamplerConfig) -> Self {
    Self { config }
  }

  /// Measure `algorithm` as computed by `engine`.
  pub fn measure(&self, engine: &Crc16Engine, algorithm: Algorithm, data: &[u8]) -> Result<Measurement> {
    self.measure_with(algorithm, data, |d| engine.compute(algorithm, d))
  }

  /// Measure an arbitrary checksum function, reported under `algorithm`.
  pub fn measure_with<F>(&self, algorithm: Algorithm, data: &[u8], mut checksum: F) -> Result<Measurement>
  where
    F: FnMut(&[u8]) -> u16,
  {
    if self.config.runs == 0 {
      return Err(BenchError::ZeroRuns);
    }

    let mut expected: Option<u16> = None;
    let mut check = |crc: u16| match expected {
      Some(first) if first != crc => Err(BenchError::Nondeterministic {
        algorithm,
        first,
        second: crc,
      }),
      Some(_) => Ok(()),
      None => {
        expected = Some(crc);
        Ok(())
      }
    };

    for _ in 0..self.config.warmup_runs {
      check(black_box(checksum(black_box(data))))?;
    }

    let mut samples = Vec::with_capacity(self.config.runs);
    for _ in 0..self.config.runs {
      let start = Instant::now();
      let crc = black_box(checksum(black_box(data)));
      samples.push(start.elapsed());
      check(crc)?;
    }

    let stats = SampleStats::from_durations(&samples);
    let measurement = Measurement {
      algorithm,
      checksum: expected.unwrap_or_default(),
      bytes: data.len(),
      samples,
      stats,
    };

    debug!(
      algorithm = algorithm.name(),
      checksum = measurement.checksum,
      mean_us = measurement.mean_micros(),
      median_us = measurement.stats.median,
      outliers = measurement.stats.outliers_rejected,
      "measured"
    );
    if measurement.stats.is_high_variance(self.config.cv_threshold) {
      warn!(
        algorithm = algorithm.name(),
        cv = measurement.stats.cv,
        quality = measurement.stats.variance_quality(self.config.cv_threshold).as_str(),
        "noisy measurement"
      );
    }

    Ok(measurement)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn config(runs: usize, warmup_runs: usize) -> SamplerConfig {
    SamplerConfig {
      runs,
      warmup_runs,
      ..SamplerConfig::default()
    }
  }

  #[test]
  fn collects_one_sample_per_run() {
    let cfg = config(25, 3);
    let engine = Crc16Engine::new();
    let m = Sampler::new(&cfg)
      .measure(&engine, Algorithm::Arc, b"123456789")
      .unwrap();

    assert_eq!(m.samples.len(), 25);
    assert_eq!(m.checksum, 0xBB3D);
    assert_eq!(m.bytes, 9);
    assert_eq!(m.algorithm, Algorithm::Arc);
    assert!(m.mean_micros() >= 0.0);
  }

  #[test]
  fn warmup_calls_are_not_timed() {
    let cfg = config(4, 6);
    let mut calls = 0usize;
    let m = Sampler::new(&cfg)
      .measure_with(Algorithm::DirectTable, b"abc", |_| {
        calls += 1;
        7
      })
      .unwrap();

    assert_eq!(calls, 10);
    assert_eq!(m.samples.len(), 4);
    assert_eq!(m.checksum, 7);
  }

  #[test]
  fn zero_runs_is_rejected() {
    let cfg = config(0, 1);
    let engine = Crc16Engine::new();
    let err = Sampler::new(&cfg)
      .measure(&engine, Algorithm::DirectBitwise, b"x")
      .unwrap_err();
    assert!(matches!(err, BenchError::ZeroRuns));
  }

  #[test]
  fn changing_checksum_is_reported() {
    let cfg = config(10, 0);
    let mut n = 0u16;
    let err = Sampler::new(&cfg)
      .measure_with(Algorithm::ReflectedTable, b"x", |_| {
        n += 1;
        if n == 5 { 0xDEAD } else { 0x1234 }
      })
      .unwrap_err();

    match err {
      BenchError::Nondeterministic {
        algorithm,
        first,
        second,
      } => {
        assert_eq!(algorithm, Algorithm::ReflectedTable);
        assert_eq!(first, 0x1234);
        assert_eq!(second, 0xDEAD);
      }
      other => panic!("unexpected error: {other}"),
    }
  }

  #[test]
  fn empty_input_measures_zero_checksum() {
    let cfg = config(5, 1);
    let engine = Crc16Engine::new();
    for algo in Algorithm::ALL {
      let m = Sampler::new(&cfg).measure(&engine, algo, &[]).unwrap();
      assert_eq!(m.checksum, 0, "{algo}");
      assert!(m.throughput_mib_s() >= 0.0);
    }
  }

  #[test]
  fn mean_and_throughput_from_samples() {
    let m = Measurement {
      algorithm: Algorithm::Arc,
      checksum: 0,
      bytes: 1024 * 1024,
      samples: vec![Duration::from_micros(500), Duration::from_micros(1500)],
      stats: SampleStats::default(),
    };
    assert!((m.mean_micros() - 1000.0).abs() < 1e-9);
    assert!((m.throughput_mib_s() - 1000.0).abs() < 1e-6);
    assert_eq!(m.total(), Duration::from_millis(2));
  }
}
