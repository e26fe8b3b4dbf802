//! Random input buffers.

use rand::{RngCore, SeedableRng, rngs::StdRng};

/// Default input length, in bytes.
pub const DEFAULT_DATA_SIZE: usize = 100_000;

/// Generate `len` uniformly distributed bytes.
///
/// With a seed the buffer is reproducible; without one the generator is
/// seeded from the operating system.
#[must_use]
pub fn generate_input(len: usize, seed: Option<u64>) -> Vec<u8> {
  let mut rng = match seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };

  let mut data = vec![0u8; len];
  rng.fill_bytes(&mut data);
  data
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn length_is_respected() {
    assert!(generate_input(0, Some(1)).is_empty());
    assert_eq!(generate_input(1, Some(1)).len(), 1);
    assert_eq!(generate_input(DEFAULT_DATA_SIZE, None).len(), DEFAULT_DATA_SIZE);
  }

  #[test]
  fn seeded_input_is_reproducible() {
    assert_eq!(generate_input(4096, Some(42)), generate_input(4096, Some(42)));
    assert_ne!(generate_input(4096, Some(42)), generate_input(4096, Some(43)));
  }

  #[test]
  fn bytes_cover_the_range() {
    let data = generate_input(64 * 1024, Some(7));
    let mut seen = [false; 256];
    for &b in &data {
      seen[usize::from(b)] = true;
    }
    assert!(seen.iter().all(|&s| s), "uniform bytes should hit every value");
  }
}
