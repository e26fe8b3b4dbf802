//! Harness configuration and command-line parsing.

use crc16::Algorithm;

use crate::{
  error::{BenchError, Result},
  input::DEFAULT_DATA_SIZE,
  report::OutputFormat,
  sampler::{DEFAULT_RUNS, DEFAULT_WARMUP_RUNS, SamplerConfig},
  stats::DEFAULT_CV_THRESHOLD,
};

/// Quick mode input length.
const QUICK_DATA_SIZE: usize = 10_000;

/// Quick mode timed runs.
const QUICK_RUNS: usize = 100;

/// Full benchmark configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchConfig {
  /// Input length in bytes.
  pub data_size: usize,

  /// Timed calls per algorithm.
  pub runs: usize,

  /// Untimed calls per algorithm before timing starts.
  pub warmup_runs: usize,

  /// Input generator seed. `None` draws from OS entropy.
  pub seed: Option<u64>,

  /// Algorithms to measure, in report order.
  pub algorithms: Vec<Algorithm>,

  pub format: OutputFormat,

  /// Log at debug level instead of info.
  pub verbose: bool,
}

impl Default for BenchConfig {
  fn default() -> Self {
    Self {
      data_size: DEFAULT_DATA_SIZE,
      runs: DEFAULT_RUNS,
      warmup_runs: DEFAULT_WARMUP_RUNS,
      seed: None,
      algorithms: Algorithm::ALL.to_vec(),
      format: OutputFormat::default(),
      verbose: false,
    }
  }
}

impl BenchConfig {
  /// Smaller input and fewer runs (faster, noisier).
  #[must_use]
  pub fn quick() -> Self {
    Self {
      data_size: QUICK_DATA_SIZE,
      runs: QUICK_RUNS,
      ..Self::default()
    }
  }

  /// Reject configurations that cannot produce an average.
  pub fn validate(&self) -> Result<()> {
    if self.runs == 0 {
      return Err(BenchError::ZeroRuns);
    }
    Ok(())
  }

  /// Sampler settings derived from this configuration.
  #[must_use]
  pub fn sampler(&self) -> SamplerConfig {
    SamplerConfig {
      runs: self.runs,
      warmup_runs: self.warmup_runs,
      cv_threshold: DEFAULT_CV_THRESHOLD,
    }
  }
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
  Run(BenchConfig),
  Help,
}

/// Parse command-line arguments (without the program name).
///
/// `--quick` picks the base configuration; explicit `--size`/`--runs`
/// override it regardless of argument order.
pub fn parse_args<I>(args: I) -> Result<Command>
where
  I: IntoIterator<Item = String>,
{
  let mut quick = false;
  let mut data_size = None;
  let mut runs = None;
  let mut warmup_runs = None;
  let mut seed = None;
  let mut algorithms = Vec::new();
  let mut format = OutputFormat::default();
  let mut verbose = false;

  let mut iter = args.into_iter();
  while let Some(arg) = iter.next() {
    match arg.as_str() {
      "--" => continue,
      "--help" | "-h" => return Ok(Command::Help),
      "--quick" | "-q" => quick = true,
      "--verbose" | "-v" => verbose = true,
      "--size" | "-s" => data_size = Some(parse_number(&arg, iter.next())?),
      "--runs" | "-n" => runs = Some(parse_number(&arg, iter.next())?),
      "--warmup" => warmup_runs = Some(parse_number(&arg, iter.next())?),
      "--seed" => seed = Some(parse_number(&arg, iter.next())?),
      "--algorithm" | "-a" => {
        let value = require_value(&arg, iter.next())?;
        for name in value.split(',') {
          let Some(algorithm) = Algorithm::parse(name) else {
            return Err(BenchError::UnknownAlgorithm(name.to_string()));
          };
          if !algorithms.contains(&algorithm) {
            algorithms.push(algorithm);
          }
        }
      }
      "--format" | "-f" => {
        let value = require_value(&arg, iter.next())?;
        format = OutputFormat::parse(&value).ok_or(BenchError::UnknownFormat(value))?;
      }
      other => return Err(BenchError::UnknownArgument(other.to_string())),
    }
  }

  let base = if quick {
    BenchConfig::quick()
  } else {
    BenchConfig::default()
  };
  if algorithms.is_empty() {
    algorithms = base.algorithms;
  }

  let config = BenchConfig {
    data_size: data_size.unwrap_or(base.data_size),
    runs: runs.unwrap_or(base.runs),
    warmup_runs: warmup_runs.unwrap_or(base.warmup_runs),
    seed,
    algorithms,
    format,
    verbose,
  };
  config.validate()?;

  Ok(Command::Run(config))
}

fn require_value(flag: &str, value: Option<String>) -> Result<String> {
  value.ok_or_else(|| BenchError::MissingValue {
    flag: flag.to_string(),
  })
}

fn parse_number<T: core::str::FromStr>(flag: &str, value: Option<String>) -> Result<T> {
  let value = require_value(flag, value)?;
  let digits = value.replace('_', "");
  digits.parse().map_err(|_| BenchError::InvalidNumber {
    flag: flag.to_string(),
    value,
  })
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
crc16-bench: compare the latency of five CRC-16 (poly 0x8005) algorithms

USAGE:
    crc16-bench [OPTIONS]

OPTIONS:
    -s, --size BYTES        Input length (default: 100000, quick: 10000)
    -n, --runs N            Timed calls per algorithm (default: 1000, quick: 100)
        --warmup N          Untimed calls before timing (default: 1)
        --seed N            Seed the input generator for reproducible data
    -a, --algorithm LIST    Comma-separated names or numbers; repeatable
                            (direct-bitwise, direct-table, reflected-bitwise,
                             reflected-table, arc)
    -f, --format FORMAT     Output format: summary (default), tsv
    -q, --quick             Smaller input and fewer runs
    -v, --verbose           Debug logging (RUST_LOG overrides)
    -h, --help              Show this help message
";
