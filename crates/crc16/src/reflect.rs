//! Bit-order reversal helpers.
//!
//! The checksum paths never call these: they exist to relate the two halves
//! of the crate. Reversing the direct polynomial gives the reflected one, and
//! reversing a direct table entry (looked up at the reversed index) gives the
//! reflected table entry.

/// Reverse the order of the 8 bits within `b`.
///
/// `0b1011_0000` becomes `0b0000_1101`.
#[inline]
#[must_use]
pub const fn reverse_byte(b: u8) -> u8 {
  let b = ((b & 0xF0) >> 4) | ((b & 0x0F) << 4);
  let b = ((b & 0xCC) >> 2) | ((b & 0x33) << 2);
  ((b & 0xAA) >> 1) | ((b & 0x55) << 1)
}

/// Reverse the order of all 16 bits of `w`.
///
/// Each byte is reversed and the two bytes trade places.
#[inline]
#[must_use]
pub const fn reverse16(w: u16) -> u16 {
  let [high, low] = w.to_be_bytes();
  u16::from_be_bytes([reverse_byte(low), reverse_byte(high)])
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_reverse_byte_examples() {
    assert_eq!(reverse_byte(0b1011_0000), 0b0000_1101);
    assert_eq!(reverse_byte(0x00), 0x00);
    assert_eq!(reverse_byte(0xFF), 0xFF);
    assert_eq!(reverse_byte(0x01), 0x80);
  }

  #[test]
  fn test_reverse_byte_matches_core() {
    for b in 0..=u8::MAX {
      assert_eq!(reverse_byte(b), b.reverse_bits(), "b = {b:#04x}");
    }
  }

  #[test]
  fn test_reverse_byte_involution() {
    for b in 0..=u8::MAX {
      assert_eq!(reverse_byte(reverse_byte(b)), b);
    }
  }

  #[test]
  fn test_reverse16_examples() {
    assert_eq!(reverse16(0x8005), 0xA001);
    assert_eq!(reverse16(0x0001), 0x8000);
    assert_eq!(reverse16(0x00FF), 0xFF00);
  }

  #[test]
  fn test_reverse16_involution_exhaustive() {
    for w in 0..=u16::MAX {
      assert_eq!(reverse16(reverse16(w)), w, "w = {w:#06x}");
      assert_eq!(reverse16(w), w.reverse_bits(), "w = {w:#06x}");
    }
  }
}
