//! The CRC-16 engine: five checksum functions over one pair of tables.

use crate::{algorithm::Algorithm, bitwise, bytewise, constants::crc16_arc, tables::LookupTables};

/// CRC-16 engine for the `0x8005` / `0xA001` polynomial pair.
///
/// The engine owns its [`LookupTables`] and never mutates them, so every
/// method takes `&self` and the engine can be shared across threads without
/// synchronization. Each call starts from a fresh register; nothing carries
/// over between calls.
///
/// # Example
///
/// ```
/// use crc16::Crc16Engine;
///
/// let engine = Crc16Engine::new();
/// let data = b"123456789";
///
/// assert_eq!(engine.direct_bitwise(data), engine.direct_table(data));
/// assert_eq!(engine.reflected_table(data), 0xBB3D);
/// assert_eq!(engine.arc(data), 0xBB3D);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Crc16Engine {
  tables: LookupTables,
}

impl Crc16Engine {
  /// Build an engine, computing both lookup tables.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self {
      tables: LookupTables::build(),
    }
  }

  /// The engine's lookup tables.
  #[inline]
  #[must_use]
  pub const fn tables(&self) -> &LookupTables {
    &self.tables
  }

  /// Bit-serial CRC, direct polynomial. Does not touch the tables.
  #[inline]
  #[must_use]
  pub fn direct_bitwise(&self, data: &[u8]) -> u16 {
    bitwise::direct(data)
  }

  /// Table-driven CRC, direct polynomial.
  #[inline]
  #[must_use]
  pub fn direct_table(&self, data: &[u8]) -> u16 {
    bytewise::update_direct(0, self.tables.direct(), data)
  }

  /// Bit-serial CRC, reflected polynomial. Does not touch the tables.
  #[inline]
  #[must_use]
  pub fn reflected_bitwise(&self, data: &[u8]) -> u16 {
    bitwise::reflected(data)
  }

  /// Table-driven CRC, reflected polynomial.
  #[inline]
  #[must_use]
  pub fn reflected_table(&self, data: &[u8]) -> u16 {
    bytewise::update_reflected(0, self.tables.reflected(), data)
  }

  /// CRC-16/ARC: the reflected table algorithm seeded with the profile's
  /// `INIT` and finished with its `XOR_OUT`.
  #[inline]
  #[must_use]
  pub fn arc(&self, data: &[u8]) -> u16 {
    bytewise::update_reflected(crc16_arc::INIT, self.tables.reflected(), data) ^ crc16_arc::XOR_OUT
  }

  /// Run the function selected by `algorithm`.
  #[inline]
  #[must_use]
  pub fn compute(&self, algorithm: Algorithm, data: &[u8]) -> u16 {
    match algorithm {
      Algorithm::DirectBitwise => self.direct_bitwise(data),
      Algorithm::DirectTable => self.direct_table(data),
      Algorithm::ReflectedBitwise => self.reflected_bitwise(data),
      Algorithm::ReflectedTable => self.reflected_table(data),
      Algorithm::Arc => self.arc(data),
    }
  }
}
