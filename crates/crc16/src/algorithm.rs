//! The five checksum algorithms as a closed set.

use core::fmt;

/// Bit order shared by a group of algorithms.
///
/// Every algorithm in a family produces the same checksum for the same input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
  /// Polynomial `0x8005`, MSB-first.
  Direct,
  /// Polynomial `0xA001`, LSB-first.
  Reflected,
}

impl Family {
  /// Short lowercase name.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Direct => "direct",
      Self::Reflected => "reflected",
    }
  }
}

/// Selects one of the engine's checksum functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
  /// Bit-serial, direct polynomial.
  DirectBitwise,
  /// Byte table, direct polynomial.
  DirectTable,
  /// Bit-serial, reflected polynomial.
  ReflectedBitwise,
  /// Byte table, reflected polynomial.
  ReflectedTable,
  /// Byte table under the CRC-16/ARC profile.
  Arc,
}

impl Algorithm {
  /// All algorithms, in report order.
  pub const ALL: [Self; 5] = [
    Self::DirectBitwise,
    Self::DirectTable,
    Self::ReflectedBitwise,
    Self::ReflectedTable,
    Self::Arc,
  ];

  /// Stable machine-readable name.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::DirectBitwise => "direct-bitwise",
      Self::DirectTable => "direct-table",
      Self::ReflectedBitwise => "reflected-bitwise",
      Self::ReflectedTable => "reflected-table",
      Self::Arc => "arc",
    }
  }

  /// Human-readable label used in reports.
  #[must_use]
  pub const fn label(self) -> &'static str {
    match self {
      Self::DirectBitwise => "Direct Bitwise",
      Self::DirectTable => "Direct Table",
      Self::ReflectedBitwise => "Reflected Bitwise",
      Self::ReflectedTable => "Reflected Table",
      Self::Arc => "Standard (ARC)",
    }
  }

  #[must_use]
  pub const fn family(self) -> Family {
    match self {
      Self::DirectBitwise | Self::DirectTable => Family::Direct,
      Self::ReflectedBitwise | Self::ReflectedTable | Self::Arc => Family::Reflected,
    }
  }

  /// 1-based position in [`Self::ALL`].
  #[must_use]
  pub const fn number(self) -> usize {
    match self {
      Self::DirectBitwise => 1,
      Self::DirectTable => 2,
      Self::ReflectedBitwise => 3,
      Self::ReflectedTable => 4,
      Self::Arc => 5,
    }
  }

  /// Parse an algorithm from its name or its 1-based position in [`Self::ALL`].
  #[must_use]
  pub fn parse(s: &str) -> Option<Self> {
    let s = s.trim();
    if let Ok(n) = s.parse::<usize>() {
      return Self::ALL.into_iter().find(|a| a.number() == n);
    }
    Self::ALL.into_iter().find(|a| a.name().eq_ignore_ascii_case(s))
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
