//! Fixed-precision 384-bit bridge between 243-trit blocks and 48-byte
//! big-endian two's-complement integers, as Kerl requires.
//!
//! Trit 242 is zero on both directions, so 242 balanced digits carry the
//! value and every magnitude stays below 2^383. The unbalanced offset is
//! `HALF_3 = (3^242 - 1) / 2`; subtracting it with wrapping arithmetic
//! yields the two's-complement encoding directly.

use crate::constants::HASH_LENGTH;
use crate::trits::Trit;

const WORDS: usize = 12;
pub(crate) const KERL_BYTES: usize = 48;

/// (3^242 - 1) / 2 as little-endian 32-bit words.
const HALF_3: [u32; WORDS] = [
    0xa5ce_8964,
    0x9f00_7669,
    0x1484_504f,
    0x3ade_00d9,
    0x0c24_486e,
    0x5097_9d57,
    0x79a4_c702,
    0x48bb_ae36,
    0xa9f6_808b,
    0xaa06_a805,
    0xa87f_abdf,
    0x5e69_ebef,
];

fn sub_words(accum: &mut [u32; WORDS], other: &[u32; WORDS]) {
    let mut borrow = false;
    for (word, &sub) in accum.iter_mut().zip(other) {
        let (mid, mid_borrow) = word.overflowing_sub(sub);
        let (low, low_borrow) = mid.overflowing_sub(u32::from(borrow));
        *word = low;
        borrow = mid_borrow | low_borrow;
    }
}

fn add_small(accum: &mut [u32; WORDS], digit: u32) {
    let mut carry = digit;
    for word in accum.iter_mut() {
        let (low, over) = word.overflowing_add(carry);
        *word = low;
        carry = u32::from(over);
        if carry == 0 {
            break;
        }
    }
}

fn mul3_add(accum: &mut [u32; WORDS], digit: u32) {
    let mut carry = u64::from(digit);
    for word in accum.iter_mut() {
        let wide = u64::from(*word) * 3 + carry;
        *word = wide as u32;
        carry = wide >> 32;
    }
}

fn divmod3(accum: &mut [u32; WORDS]) -> u32 {
    let mut remainder = 0_u64;
    for word in accum.iter_mut().rev() {
        let wide = (remainder << 32) | u64::from(*word);
        *word = (wide / 3) as u32;
        remainder = wide % 3;
    }
    remainder as u32
}

fn negate(accum: &mut [u32; WORDS]) {
    for word in accum.iter_mut() {
        *word = !*word;
    }
    add_small(accum, 1);
}

/// Encode a 243-trit block as 48 big-endian two's-complement bytes. The
/// final trit is ignored (it is zero for every Kerl block).
#[must_use]
pub fn bytes_from_trits(trits: &[Trit; HASH_LENGTH]) -> [u8; KERL_BYTES] {
    let mut accum = [0_u32; WORDS];
    for &trit in trits[..HASH_LENGTH - 1].iter().rev() {
        mul3_add(&mut accum, (trit + 1) as u32);
    }
    sub_words(&mut accum, &HALF_3);
    let mut out = [0_u8; KERL_BYTES];
    for (chunk, word) in out.chunks_exact_mut(4).zip(accum.iter().rev()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
}

/// Decode 48 big-endian two's-complement bytes into a 243-trit block with
/// the final trit forced to zero.
#[must_use]
pub fn trits_from_bytes(bytes: &[u8; KERL_BYTES]) -> [Trit; HASH_LENGTH] {
    let mut words = [0_u32; WORDS];
    for (word, chunk) in words.iter_mut().rev().zip(bytes.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    let negative = words[WORDS - 1] >> 31 == 1;
    if negative {
        negate(&mut words);
    }
    let mut out = [0_i8; HASH_LENGTH];
    for slot in out.iter_mut().take(HASH_LENGTH - 1) {
        let digit = divmod3(&mut words);
        *slot = if digit == 2 {
            add_small(&mut words, 1);
            -1
        } else {
            digit as i8
        };
    }
    if negative {
        for trit in &mut out {
            *trit = -*trit;
        }
    }
    out
}
