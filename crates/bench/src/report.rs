//! Output formatters for benchmark results.
//!
//! - [`OutputFormat::Summary`]: boxed table for humans (default)
//! - [`OutputFormat::Tsv`]: tab-separated values with full statistics
//!
//! Use [`Report`] for any `Write` destination, or [`print_report`] for stdout.

use std::io::{self, Write};

use crc16::constants::POLYNOMIAL;

use crate::runner::RunResults;

/// Output format for benchmark results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
  /// Human-readable table (default).
  #[default]
  Summary,

  /// Tab-separated values.
  Tsv,
}

impl OutputFormat {
  /// Parse format from string.
  #[must_use]
  pub fn parse(s: &str) -> Option<Self> {
    match s.to_lowercase().as_str() {
      "summary" | "text" | "table" => Some(Self::Summary),
      "tsv" | "tab" => Some(Self::Tsv),
      _ => None,
    }
  }
}

const RULE: &str = "---------------------------------------------------------";

/// Report generator for benchmark results.
pub struct Report<W: Write> {
  writer: W,
  format: OutputFormat,
}

impl<W: Write> Report<W> {
  pub fn new(writer: W, format: OutputFormat) -> Self {
    Self { writer, format }
  }

  /// Write the complete results.
  pub fn write(&mut self, results: &RunResults) -> io::Result<()> {
    match self.format {
      OutputFormat::Summary => self.write_summary(results),
      OutputFormat::Tsv => self.write_tsv(results),
    }
  }

  /// Recover the underlying writer.
  pub fn into_inner(self) -> W {
    self.writer
  }

  fn write_summary(&mut self, results: &RunResults) -> io::Result<()> {
    let w = &mut self.writer;

    writeln!(w, "CRC-16 Analysis (Poly 0x{POLYNOMIAL:04X})")?;
    writeln!(w, "Data size: {} bytes", results.data_size)?;
    if let Some(seed) = results.seed {
      writeln!(w, "Input seed: {seed}")?;
    }
    writeln!(w, "Averaging over {} runs.", results.runs)?;
    writeln!(w, "Warmup runs: {}", results.warmup_runs)?;
    writeln!(w, "{RULE}")?;
    writeln!(w, "| Algorithm Type       | CRC Result | Avg Time          |")?;
    writeln!(w, "{RULE}")?;

    for m in &results.measurements {
      writeln!(
        w,
        "| {}. {:<17} | 0x{:04X}     | {:>17.2} |",
        m.algorithm.number(),
        m.algorithm.label(),
        m.checksum,
        m.mean_micros()
      )?;
    }

    writeln!(w, "{RULE}")?;
    writeln!(w, "All times are in microseconds.")?;
    Ok(())
  }

  fn write_tsv(&mut self, results: &RunResults) -> io::Result<()> {
    let w = &mut self.writer;

    writeln!(
      w,
      "algorithm\tfamily\tcrc\tbytes\truns\twarmup\tmean_us\tmedian_us\tmin_us\tmax_us\tstd_dev_us\tcv\toutliers\tmib_s"
    )?;

    for m in &results.measurements {
      let s = &m.stats;
      writeln!(
        w,
        "{}\t{}\t0x{:04X}\t{}\t{}\t{}\t{:.3}\t{:.3}\t{:.3}\t{:.3}\t{:.3}\t{:.4}\t{}\t{:.1}",
        m.algorithm.name(),
        m.algorithm.family().as_str(),
        m.checksum,
        m.bytes,
        m.samples.len(),
        results.warmup_runs,
        m.mean_micros(),
        s.median,
        s.min,
        s.max,
        s.std_dev,
        s.cv,
        s.outliers_rejected,
        m.throughput_mib_s()
      )?;
    }

    Ok(())
  }
}

/// Write results to stdout in `format`.
pub fn print_report(results: &RunResults, format: OutputFormat) -> io::Result<()> {
  let stdout = io::stdout();
  let mut report = Report::new(stdout.lock(), format);
  report.write(results)?;
  report.into_inner().flush()
}
