//! CRC-16 checksums over the `0x8005` polynomial, five ways.
//!
//! This crate computes the same 16-bit CRC family with bit-serial and
//! table-driven algorithms, in both direct (MSB-first) and reflected
//! (LSB-first) bit order, plus the standardized CRC-16/ARC profile.
//!
//! # Algorithms
//!
//! | [`Algorithm`] | Polynomial | Per byte | Memory | `"123456789"` |
//! |---------------|------------|----------|--------|---------------|
//! | `DirectBitwise` | 0x8005 | 8 shift/XOR rounds | none | `0xFEE8` |
//! | `DirectTable` | 0x8005 | 1 lookup | 512 B table | `0xFEE8` |
//! | `ReflectedBitwise` | 0xA001 | 8 shift/XOR rounds | none | `0xBB3D` |
//! | `ReflectedTable` | 0xA001 | 1 lookup | 512 B table | `0xBB3D` |
//! | `Arc` | 0xA001 | 1 lookup | 512 B table | `0xBB3D` |
//!
//! Algorithms in the same [`Family`] always agree bit-for-bit.
//!
//! # Example
//!
//! ```rust
//! use crc16::{Algorithm, Crc16Engine};
//!
//! let engine = Crc16Engine::new();
//! let data = b"123456789";
//!
//! assert_eq!(engine.arc(data), 0xBB3D);
//! assert_eq!(engine.direct_table(data), 0xFEE8);
//!
//! for algo in Algorithm::ALL {
//!   let crc = engine.compute(algo, data);
//!   assert!(crc == 0xBB3D || crc == 0xFEE8);
//! }
//! ```
//!
//! # no_std Support
//!
//! The crate is `no_std` and never allocates.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(test)]
extern crate std;

mod algorithm;
pub mod bitwise;
mod bytewise;
pub mod constants;
mod engine;
pub mod reflect;
pub mod tables;

#[cfg(test)]
mod proptests;

pub use algorithm::{Algorithm, Family};
pub use engine::Crc16Engine;
pub use reflect::{reverse_byte, reverse16};
pub use tables::LookupTables;
