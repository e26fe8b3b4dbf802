//! Harness error type.

use crc16::Algorithm;
use thiserror::Error;

/// Result alias for harness operations.
pub type Result<T, E = BenchError> = core::result::Result<T, E>;

/// Errors raised while configuring, running, or reporting a benchmark.
///
/// The checksum engine itself cannot fail; everything here comes from the
/// command line, the measurement loop, or the output stream.
#[derive(Debug, Error)]
pub enum BenchError {
  /// A flag that takes a value was the last argument.
  #[error("{flag} requires a value")]
  MissingValue { flag: String },

  /// A numeric flag value did not parse.
  #[error("invalid value for {flag}: {value}")]
  InvalidNumber { flag: String, value: String },

  #[error("unknown algorithm: {0}")]
  UnknownAlgorithm(String),

  #[error("unknown format: {0}")]
  UnknownFormat(String),

  #[error("unknown argument: {0}")]
  UnknownArgument(String),

  /// At least one timed run is needed to produce an average.
  #[error("number of timed runs must be at least 1")]
  ZeroRuns,

  /// The same algorithm produced two different checksums for one buffer.
  #[error("{algorithm} returned 0x{first:04X} and then 0x{second:04X} for the same input")]
  Nondeterministic {
    algorithm: Algorithm,
    first: u16,
    second: u16,
  },

  /// Two algorithms of the same family disagreed.
  #[error("{family} family disagrees: {left} = 0x{left_crc:04X}, {right} = 0x{right_crc:04X}")]
  FamilyMismatch {
    family: &'static str,
    left: Algorithm,
    left_crc: u16,
    right: Algorithm,
    right_crc: u16,
  },

  #[error("failed to install log subscriber: {0}")]
  Logging(#[from] tracing_subscriber::util::TryInitError),

  #[error("failed to write report: {0}")]
  Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_messages() {
    let err = BenchError::MissingValue { flag: "--runs".into() };
    assert_eq!(err.to_string(), "--runs requires a value");

    let err = BenchError::Nondeterministic {
      algorithm: Algorithm::Arc,
      first: 0xBB3D,
      second: 0x0001,
    };
    assert_eq!(
      err.to_string(),
      "arc returned 0xBB3D and then 0x0001 for the same input"
    );

    let err = BenchError::FamilyMismatch {
      family: "direct",
      left: Algorithm::DirectBitwise,
      left_crc: 0xFEE8,
      right: Algorithm::DirectTable,
      right_crc: 0x0000,
    };
    assert_eq!(
      err.to_string(),
      "direct family disagrees: direct-bitwise = 0xFEE8, direct-table = 0x0000"
    );
  }

  #[test]
  fn io_errors_convert() {
    fn fails() -> Result<()> {
      let write: std::io::Result<()> = Err(std::io::Error::other("pipe closed"));
      write?;
      Ok(())
    }
    assert!(matches!(fails(), Err(BenchError::Io(_))));
  }
}
