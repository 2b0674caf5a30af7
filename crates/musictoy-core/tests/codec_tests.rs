// Host-side tests for the grid state codec.

use musictoy_core::codec::{decode_bits, decode_for, encode_bits, encoded_len};
use musictoy_core::CodecError;
use rand::prelude::*;

#[test]
fn four_bits_pack_lsb_first() {
    // bit0=1, bit1=0, bit2=1, bit3=0 -> 5 -> 'a' + 5
    assert_eq!(encode_bits([true, false, true, false]), "f");
    assert_eq!(encode_bits([false, false, false, true]), "i");
    assert_eq!(encode_bits([true, true, true, true]), "p");
}

#[test]
fn all_off_encodes_to_base_characters() {
    for n in [1usize, 4, 5, 32, 480] {
        let s = encode_bits(std::iter::repeat(false).take(n));
        assert_eq!(s.len(), encoded_len(n));
        assert!(s.chars().all(|c| c == 'a'), "unexpected chars in {s}");
    }
}

#[test]
fn partial_group_is_flushed() {
    assert_eq!(encode_bits([true]), "b");
    assert_eq!(encode_bits([true, true, true, true, false, true]), "pc");
    assert_eq!(encode_bits(std::iter::empty()), "");
}

#[test]
fn output_length_is_ceil_of_quarter() {
    for n in 0..40 {
        let s = encode_bits(std::iter::repeat(true).take(n));
        assert_eq!(s.len(), (n + 3) / 4, "n = {n}");
    }
}

#[test]
fn round_trip_random_sequences() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let n = rng.gen_range(0..600);
        let bits: Vec<bool> = (0..n).map(|_| rng.gen_bool(0.3)).collect();
        let encoded = encode_bits(bits.iter().copied());
        let decoded = decode_for(&encoded, n).expect("valid encoding");
        assert_eq!(decoded, bits);
    }
}

#[test]
fn decode_includes_padding_bits() {
    let bits = decode_bits("b").expect("valid");
    assert_eq!(bits, vec![true, false, false, false]);
}

#[test]
fn decode_rejects_characters_outside_range() {
    assert_eq!(
        decode_bits("aq"),
        Err(CodecError::InvalidChar { index: 1, ch: 'q' })
    );
    assert_eq!(
        decode_bits("A"),
        Err(CodecError::InvalidChar { index: 0, ch: 'A' })
    );
    assert!(decode_bits("é").is_err());
}

#[test]
fn decode_for_rejects_overlong_state() {
    assert_eq!(
        decode_for("aaa", 8),
        Err(CodecError::TooLong { chars: 3, max: 2 })
    );
    // padding within the final character is fine
    assert_eq!(decode_for("ab", 5).map(|b| b.len()), Ok(5));
}

#[test]
fn decode_for_short_state_yields_prefix() {
    let bits = decode_for("p", 12).expect("valid");
    assert_eq!(bits, vec![true; 4]);
}
