//! Summary statistics over per-call latency samples.
//!
//! One stray interrupt or page fault can add tens of microseconds to a
//! single call. Alongside the raw mean, the harness reports statistics over
//! the samples that survive IQR outlier rejection (Tukey fences), plus the
//! coefficient of variation as a noise indicator.

use core::time::Duration;

/// Below this many surviving calls the latency spread is not graded.
pub const MIN_SAMPLES: usize = 5;

/// Call-to-call jitter (CV of the per-call latency) tolerated before the
/// sampler warns. 5% of a 100 µs call is 5 µs.
pub const DEFAULT_CV_THRESHOLD: f64 = 0.05;

/// Width of the Tukey fences, in IQRs past Q1 and Q3. Calls slower or faster
/// than the fences are left out of the statistics.
pub const IQR_MULTIPLIER: f64 = 1.5;

/// Statistics over a set of samples after outlier rejection.
///
/// All values share the unit of the input samples (microseconds when built
/// with [`SampleStats::from_durations`]).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleStats {
  /// Samples kept after outlier rejection.
  pub sample_count: usize,
  pub outliers_rejected: usize,
  pub mean: f64,
  /// Sample standard deviation (Bessel's correction).
  pub std_dev: f64,
  /// `std_dev / mean`.
  pub cv: f64,
  pub min: f64,
  pub max: f64,
  pub q1: f64,
  pub median: f64,
  pub q3: f64,
}

impl SampleStats {
  /// Statistics over per-call durations, in microseconds.
  #[must_use]
  pub fn from_durations(samples: &[Duration]) -> Self {
    let micros: Vec<f64> = samples.iter().map(|d| d.as_secs_f64() * 1e6).collect();
    compute_stats(&micros)
  }

  /// True when per-call latency jitters by more than `threshold` (a CV).
  #[inline]
  #[must_use]
  pub fn is_high_variance(&self, threshold: f64) -> bool {
    self.cv > threshold
  }

  /// Grade the jitter of this latency series against `threshold`.
  #[must_use]
  pub fn variance_quality(&self, threshold: f64) -> VarianceQuality {
    if self.sample_count < MIN_SAMPLES {
      VarianceQuality::InsufficientSamples
    } else if self.cv <= threshold / 2.0 {
      VarianceQuality::Excellent
    } else if self.cv <= threshold {
      VarianceQuality::Good
    } else if self.cv <= threshold * 2.0 {
      VarianceQuality::Moderate
    } else {
      VarianceQuality::High
    }
  }
}

/// How steady an algorithm's per-call latency was during a run.
///
/// Logged next to the high-variance warning so a noisy average is visible
/// in the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VarianceQuality {
  /// Too few calls survived outlier rejection to say.
  InsufficientSamples,
  /// Jitter within half the threshold.
  Excellent,
  /// Jitter within the threshold.
  Good,
  /// Jitter within twice the threshold; the average is usable but rough.
  Moderate,
  /// Jitter beyond twice the threshold; rerun on a quieter machine.
  High,
}

impl VarianceQuality {
  /// Lowercase tag for log fields.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::InsufficientSamples => "insufficient",
      Self::Excellent => "excellent",
      Self::Good => "good",
      Self::Moderate => "moderate",
      Self::High => "high",
    }
  }
}

#[inline]
#[must_use]
pub fn mean(samples: &[f64]) -> f64 {
  if samples.is_empty() {
    return 0.0;
  }
  samples.iter().sum::<f64>() / samples.len() as f64
}

/// Sample standard deviation around `mean_value`.
#[must_use]
pub fn std_dev(samples: &[f64], mean_value: f64) -> f64 {
  if samples.len() < 2 {
    return 0.0;
  }

  let sum_sq: f64 = samples.iter().map(|&x| (x - mean_value) * (x - mean_value)).sum();
  (sum_sq / (samples.len() - 1) as f64).sqrt()
}

/// `std_dev / mean`, or 0.0 when the mean is effectively zero.
#[inline]
#[must_use]
pub fn coefficient_of_variation(std_dev: f64, mean: f64) -> f64 {
  if mean.abs() < f64::EPSILON {
    return 0.0;
  }
  std_dev / mean
}

/// Linear-interpolated percentile of an ascending slice.
fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
  match sorted {
    [] => 0.0,
    [only] => *only,
    _ => {
      let pos = p * (sorted.len() - 1) as f64;
      let lower = pos.floor() as usize;
      let upper = pos.ceil() as usize;
      let frac = pos - lower as f64;
      sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
  }
}

fn sorted_copy(samples: &[f64]) -> Vec<f64> {
  let mut sorted = samples.to_vec();
  sorted.sort_by(f64::total_cmp);
  sorted
}

/// `(Q1, median, Q3)` of `samples`.
#[must_use]
pub fn quartiles(samples: &[f64]) -> (f64, f64, f64) {
  let sorted = sorted_copy(samples);
  (
    percentile_sorted(&sorted, 0.25),
    percentile_sorted(&sorted, 0.50),
    percentile_sorted(&sorted, 0.75),
  )
}

/// Drop values outside the Tukey fences for multiplier `k`.
///
/// Fewer than four samples are returned unchanged.
#[must_use]
pub fn reject_outliers_iqr(samples: &[f64], k: f64) -> Vec<f64> {
  if samples.len() < 4 {
    return samples.to_vec();
  }

  let (q1, _, q3) = quartiles(samples);
  let iqr = q3 - q1;
  let (lo, hi) = (q1 - k * iqr, q3 + k * iqr);

  samples.iter().copied().filter(|x| (lo..=hi).contains(x)).collect()
}

/// Outlier rejection with [`IQR_MULTIPLIER`], then summary statistics.
#[must_use]
pub fn compute_stats(samples: &[f64]) -> SampleStats {
  compute_stats_with_iqr(samples, IQR_MULTIPLIER)
}

#[must_use]
pub fn compute_stats_with_iqr(samples: &[f64], k: f64) -> SampleStats {
  if samples.is_empty() {
    return SampleStats::default();
  }

  let kept = reject_outliers_iqr(samples, k);
  if kept.is_empty() {
    return summarize(samples, 0);
  }
  summarize(&kept, samples.len() - kept.len())
}

fn summarize(samples: &[f64], outliers_rejected: usize) -> SampleStats {
  let sorted = sorted_copy(samples);
  let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
    return SampleStats::default();
  };

  let mean_value = mean(&sorted);
  let sd = std_dev(&sorted, mean_value);

  SampleStats {
    sample_count: sorted.len(),
    outliers_rejected,
    mean: mean_value,
    std_dev: sd,
    cv: coefficient_of_variation(sd, mean_value),
    min,
    max,
    q1: percentile_sorted(&sorted, 0.25),
    median: percentile_sorted(&sorted, 0.50),
    q3: percentile_sorted(&sorted, 0.75),
  }
}
