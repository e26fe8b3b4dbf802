//! Table-driven CRC-16 update loops (one table lookup per byte).

// SAFETY: Table indices are `u8` values widened to `usize`, always < 256.
#![allow(clippy::indexing_slicing)]

use crate::constants::TABLE_LEN;

/// Feed `data` into a direct (MSB-first) register.
///
/// The table index is the register's high byte XOR the input byte.
#[inline]
#[must_use]
pub(crate) fn update_direct(mut crc: u16, table: &[u16; TABLE_LEN], data: &[u8]) -> u16 {
  for &byte in data {
    let index = ((crc >> 8) as u8) ^ byte;
    crc = (crc << 8) ^ table[usize::from(index)];
  }
  crc
}

/// Feed `data` into a reflected (LSB-first) register.
///
/// The table index is the register's low byte XOR the input byte.
#[inline]
#[must_use]
pub(crate) fn update_reflected(mut crc: u16, table: &[u16; TABLE_LEN], data: &[u8]) -> u16 {
  for &byte in data {
    let index = (crc as u8) ^ byte;
    crc = (crc >> 8) ^ table[usize::from(index)];
  }
  crc
}
