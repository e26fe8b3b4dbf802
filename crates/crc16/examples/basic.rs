//! Basic usage: one engine, five algorithms, one input.
//!
//! Run with: `cargo run --example basic -p crc16`

use crc16::{Algorithm, Crc16Engine, Family, reverse16};

fn main() {
  println!("=== CRC-16 Basic Example ===\n");

  let engine = Crc16Engine::new();
  let data = b"123456789";

  for algo in Algorithm::ALL {
    let crc = engine.compute(algo, data);
    println!("{:<20} 0x{crc:04X}", algo.label());
  }

  let direct = engine.direct_table(data);
  let arc = engine.arc(data);
  assert_eq!(direct, 0xFEE8);
  assert_eq!(arc, 0xBB3D);

  println!();
  println!("Direct polynomial 0x8005 reversed: 0x{:04X}", reverse16(0x8005));
  println!(
    "{} and {} families differ on the same input: 0x{direct:04X} vs 0x{arc:04X}",
    Family::Direct.as_str(),
    Family::Reflected.as_str()
  );
}
