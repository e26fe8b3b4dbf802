//! Table-less CRC-16 computation, one bit at a time.
//!
//! These loops are the literal definition of the checksum: every input bit
//! costs one shift and at most one XOR. They need no memory beyond the
//! 16-bit register, which also makes them the reference the table-driven
//! paths are checked against.
//!
//! # Algorithm
//!
//! For each byte `b`:
//!
//! - **direct**: `crc ^= b << 8`, then 8 MSB-first rounds with `0x8005`
//! - **reflected**: `crc ^= b`, then 8 LSB-first rounds with `0xA001`
//!
//! The register starts at zero and the result is returned as-is.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::tables::{direct_step, reflected_step};

/// Bit-serial CRC over the direct polynomial `0x8005` (MSB-first).
#[must_use]
pub const fn direct(data: &[u8]) -> u16 {
  let mut crc: u16 = 0;
  let mut i = 0usize;
  while i < data.len() {
    crc ^= (data[i] as u16) << 8;
    let mut bit = 0;
    while bit < 8 {
      crc = direct_step(crc);
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Bit-serial CRC over the reflected polynomial `0xA001` (LSB-first).
#[must_use]
pub const fn reflected(data: &[u8]) -> u16 {
  let mut crc: u16 = 0;
  let mut i = 0usize;
  while i < data.len() {
    crc ^= data[i] as u16;
    let mut bit = 0;
    while bit < 8 {
      crc = reflected_step(crc);
      bit += 1;
    }
    i += 1;
  }
  crc
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::{DIRECT_CHECK, crc16_arc};

  #[test]
  fn test_check_string() {
    assert_eq!(direct(b"123456789"), DIRECT_CHECK);
    assert_eq!(reflected(b"123456789"), crc16_arc::CHECK);
  }

  #[test]
  fn test_empty() {
    assert_eq!(direct(b""), 0x0000);
    assert_eq!(reflected(b""), 0x0000);
  }

  #[test]
  fn test_zeros() {
    assert_eq!(direct(&[0u8]), 0x0000);
    assert_eq!(reflected(&[0u8]), 0x0000);
    assert_eq!(direct(&[0u8; 32]), 0x0000);
    assert_eq!(reflected(&[0u8; 32]), 0x0000);
  }

  #[test]
  fn test_ones() {
    assert_eq!(direct(&[0xFFu8; 32]), 0x8025);
    assert_eq!(reflected(&[0xFFu8; 32]), 0xA401);
  }

  #[test]
  fn test_single_byte_equals_table_entry() {
    for b in 0..=u8::MAX {
      assert_eq!(direct(&[b]), crate::tables::direct_table_entry(b));
      assert_eq!(reflected(&[b]), crate::tables::reflected_table_entry(b));
    }
  }

  #[test]
  fn test_const_evaluable() {
    const CHECK: u16 = reflected(b"123456789");
    assert_eq!(CHECK, 0xBB3D);
  }
}
