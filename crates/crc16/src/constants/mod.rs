//! Fixed parameters of the CRC-16 family implemented by this crate.
//!
//! Polynomial: x^16 + x^15 + x^2 + 1
//!
//! | Form | Value | Shift direction |
//! |------|-------|-----------------|
//! | Direct | `0x8005` | MSB-first (left) |
//! | Reflected | `0xA001` | LSB-first (right) |
//!
//! The reflected value is the direct polynomial with its 16 bits reversed:
//! `reverse16(0x8005) == 0xA001`.
//!
//! # Cache Alignment
//!
//! Lookup tables are 64-byte (cache line) aligned using [`Aligned64`] so a
//! table never straddles more cache lines than it has to.

pub mod crc16_arc;

/// Generator polynomial in direct (MSB-first) form.
pub const POLYNOMIAL: u16 = 0x8005;

/// Generator polynomial in reflected (LSB-first) form.
pub const REFLECTED_POLYNOMIAL: u16 = 0xA001;

/// Number of entries in each byte-indexed lookup table.
pub const TABLE_LEN: usize = 256;

/// Check value of the direct family over `"123456789"`.
///
/// Direct polynomial, init 0x0000, no reflection, no final XOR
/// (catalogued as CRC-16/UMTS, a.k.a. BUYPASS).
pub const DIRECT_CHECK: u16 = 0xFEE8;

/// Wrapper type to force 64-byte (cache line) alignment.
///
/// The inner value is accessible via `.0`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[repr(align(64))]
pub struct Aligned64<T>(pub T);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::reflect::reverse16;

  #[test]
  fn test_polynomials_are_mirror_images() {
    assert_eq!(reverse16(POLYNOMIAL), REFLECTED_POLYNOMIAL);
    assert_eq!(reverse16(REFLECTED_POLYNOMIAL), POLYNOMIAL);
  }

  #[test]
  fn test_aligned64() {
    assert_eq!(core::mem::align_of::<Aligned64<[u16; TABLE_LEN]>>(), 64);
    assert_eq!(core::mem::size_of::<Aligned64<[u16; TABLE_LEN]>>(), 512);
  }
}
