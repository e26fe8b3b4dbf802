//! Log subscriber setup.
//!
//! Logs go to stderr so the report on stdout can be piped cleanly.
//! `RUST_LOG` takes precedence over the `--verbose` default.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::Result;

/// Default filter directive for a verbosity setting.
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
  if verbose { "debug" } else { "info" }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(verbose: bool) -> Result<()> {
  let filter = match EnvFilter::try_from_default_env() {
    Ok(filter) => filter,
    Err(_) => EnvFilter::new(default_directive(verbose)),
  };

  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
    .with(filter)
    .try_init()?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn directives() {
    assert_eq!(default_directive(false), "info");
    assert_eq!(default_directive(true), "debug");
  }

  #[test]
  fn second_init_fails() {
    // Whichever call comes second must report the existing subscriber.
    let first = init(false);
    let second = init(false);
    assert!(first.is_err() || second.is_err());
  }
}
