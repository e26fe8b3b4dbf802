//! Const-fn lookup table generation.
//!
//! Both tables map a byte `i` to the register value left after pushing that
//! byte through eight rounds of polynomial division:
//!
//! | Table | Seed | Test bit | Shift | Polynomial |
//! |-------|------|----------|-------|------------|
//! | direct | `i << 8` | bit 15 | left | `0x8005` |
//! | reflected | `i` | bit 0 | right | `0xA001` |
//!
//! Tables are computed with `const fn` so an engine can be built in a `const`
//! or `static` context as well as at run time.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::constants::{Aligned64, POLYNOMIAL, REFLECTED_POLYNOMIAL, TABLE_LEN};

/// One round of MSB-first division: shift left, reduce if bit 15 fell out.
#[inline]
#[must_use]
pub(crate) const fn direct_step(crc: u16) -> u16 {
  if crc & 0x8000 != 0 {
    (crc << 1) ^ POLYNOMIAL
  } else {
    crc << 1
  }
}

/// One round of LSB-first division: shift right, reduce if bit 0 fell out.
#[inline]
#[must_use]
pub(crate) const fn reflected_step(crc: u16) -> u16 {
  if crc & 1 != 0 {
    (crc >> 1) ^ REFLECTED_POLYNOMIAL
  } else {
    crc >> 1
  }
}

/// Direct table entry for `index`.
#[must_use]
pub const fn direct_table_entry(index: u8) -> u16 {
  let mut crc = (index as u16) << 8;
  let mut bit = 0;
  while bit < 8 {
    crc = direct_step(crc);
    bit += 1;
  }
  crc
}

/// Reflected table entry for `index`.
#[must_use]
pub const fn reflected_table_entry(index: u8) -> u16 {
  let mut crc = index as u16;
  let mut bit = 0;
  while bit < 8 {
    crc = reflected_step(crc);
    bit += 1;
  }
  crc
}

/// Generate the 256-entry direct (MSB-first) table.
#[must_use]
pub const fn generate_direct_table() -> [u16; TABLE_LEN] {
  let mut table = [0u16; TABLE_LEN];
  let mut i = 0usize;
  while i < TABLE_LEN {
    table[i] = direct_table_entry(i as u8);
    i += 1;
  }
  table
}

/// Generate the 256-entry reflected (LSB-first) table.
#[must_use]
pub const fn generate_reflected_table() -> [u16; TABLE_LEN] {
  let mut table = [0u16; TABLE_LEN];
  let mut i = 0usize;
  while i < TABLE_LEN {
    table[i] = reflected_table_entry(i as u8);
    i += 1;
  }
  table
}

/// The pair of lookup tables read by the table-driven algorithms.
///
/// Built once by [`LookupTables::build`] and never mutated afterwards, so a
/// shared reference can be handed to any number of threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupTables {
  direct: Aligned64<[u16; TABLE_LEN]>,
  reflected: Aligned64<[u16; TABLE_LEN]>,
}

impl LookupTables {
  /// Build both tables from the fixed polynomials.
  #[inline]
  #[must_use]
  pub const fn build() -> Self {
    Self {
      direct: Aligned64(generate_direct_table()),
      reflected: Aligned64(generate_reflected_table()),
    }
  }

  /// Table for the direct polynomial `0x8005`.
  #[inline]
  #[must_use]
  pub const fn direct(&self) -> &[u16; TABLE_LEN] {
    &self.direct.0
  }

  /// Table for the reflected polynomial `0xA001`.
  #[inline]
  #[must_use]
  pub const fn reflected(&self) -> &[u16; TABLE_LEN] {
    &self.reflected.0
  }
}

impl Default for LookupTables {
  #[inline]
  fn default() -> Self {
    Self::build()
  }
}
