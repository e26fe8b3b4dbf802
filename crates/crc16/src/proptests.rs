use std::vec::Vec;

use crc::{CRC_16_ARC, CRC_16_UMTS, Crc};
use proptest::prelude::*;

use super::*;

const REFERENCE_ARC: Crc<u16> = Crc::<u16>::new(&CRC_16_ARC);
const REFERENCE_DIRECT: Crc<u16> = Crc::<u16>::new(&CRC_16_UMTS);

static ENGINE: Crc16Engine = Crc16Engine::new();

proptest! {
  #[test]
  fn direct_family_agrees(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(ENGINE.direct_bitwise(&data), ENGINE.direct_table(&data));
  }

  #[test]
  fn reflected_family_agrees(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let bitwise = ENGINE.reflected_bitwise(&data);
    prop_assert_eq!(bitwise, ENGINE.reflected_table(&data));
    prop_assert_eq!(bitwise, ENGINE.arc(&data));
  }

  #[test]
  fn every_algorithm_is_deterministic(data in proptest::collection::vec(any::<u8>(), 0..=1024)) {
    for algo in Algorithm::ALL {
      prop_assert_eq!(ENGINE.compute(algo, &data), ENGINE.compute(algo, &data));
    }
  }

  #[test]
  fn families_are_bit_mirrors(data in proptest::collection::vec(any::<u8>(), 0..=1024)) {
    let mirrored: Vec<u8> = data.iter().map(|&b| reverse_byte(b)).collect();
    prop_assert_eq!(ENGINE.reflected_bitwise(&data), reverse16(ENGINE.direct_bitwise(&mirrored)));
  }

  #[test]
  fn all_zero_input_stays_zero(len in 0usize..=512) {
    let data = std::vec![0u8; len];
    for algo in Algorithm::ALL {
      prop_assert_eq!(ENGINE.compute(algo, &data), 0);
    }
  }

  #[test]
  fn reverse_byte_is_involution(b in any::<u8>()) {
    prop_assert_eq!(reverse_byte(reverse_byte(b)), b);
  }

  #[test]
  fn reverse16_is_involution(w in any::<u16>()) {
    prop_assert_eq!(reverse16(reverse16(w)), w);
  }

  // ─────────────────────────────────────────────────────────────────────────────
  // Cross-validation against the `crc` crate
  // ─────────────────────────────────────────────────────────────────────────────

  #[test]
  fn arc_matches_crc_crate(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(ENGINE.arc(&data), REFERENCE_ARC.checksum(&data));
  }

  #[test]
  fn direct_table_matches_crc_crate(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(ENGINE.direct_table(&data), REFERENCE_DIRECT.checksum(&data));
  }
}

#[test]
fn test_vectors_against_crc_crate() {
  assert_eq!(REFERENCE_ARC.checksum(b"123456789"), constants::crc16_arc::CHECK);
  assert_eq!(REFERENCE_DIRECT.checksum(b"123456789"), constants::DIRECT_CHECK);
}
