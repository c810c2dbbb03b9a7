//! Trit/tryte codec: byte strings of the 27-symbol alphabet on one side,
//! balanced-ternary digit buffers on the other.

use crate::constants::{TRYTE_ALPHABET, TRYTE_WIDTH};
use crate::errors::IssError;

/// A balanced-ternary digit, -1, 0 or 1.
pub type Trit = i8;

/// Per-symbol trit triples (little-endian within the triple). Entry 0 is
/// `9` = [0,0,0]; each subsequent entry is the balanced-ternary increment
/// of the previous one, covering the tryte values 0, 1..13, -13..-1.
const TRYTE_TO_TRITS: [[Trit; 3]; 27] = [
    [0, 0, 0],    // 9 ->  0
    [1, 0, 0],    // A ->  1
    [-1, 1, 0],   // B ->  2
    [0, 1, 0],    // C ->  3
    [1, 1, 0],    // D ->  4
    [-1, -1, 1],  // E ->  5
    [0, -1, 1],   // F ->  6
    [1, -1, 1],   // G ->  7
    [-1, 0, 1],   // H ->  8
    [0, 0, 1],    // I ->  9
    [1, 0, 1],    // J -> 10
    [-1, 1, 1],   // K -> 11
    [0, 1, 1],    // L -> 12
    [1, 1, 1],    // M -> 13
    [-1, -1, -1], // N -> -13
    [0, -1, -1],  // O -> -12
    [1, -1, -1],  // P -> -11
    [-1, 0, -1],  // Q -> -10
    [0, 0, -1],   // R -> -9
    [1, 0, -1],   // S -> -8
    [-1, 1, -1],  // T -> -7
    [0, 1, -1],   // U -> -6
    [1, 1, -1],   // V -> -5
    [-1, -1, 0],  // W -> -4
    [0, -1, 0],   // X -> -3
    [1, -1, 0],   // Y -> -2
    [-1, 0, 0],   // Z -> -1
];

fn tryte_index(symbol: char) -> Option<usize> {
    match symbol {
        '9' => Some(0),
        'A'..='Z' => Some(symbol as usize - 'A' as usize + 1),
        _ => None,
    }
}

/// Signed value of a single tryte symbol, in -13..=13.
pub(crate) fn tryte_value(symbol: char) -> Option<i8> {
    let index = tryte_index(symbol)?;
    Some(if index <= 13 {
        index as i8
    } else {
        index as i8 - 27
    })
}

/// Reject the first character outside the tryte alphabet.
pub(crate) fn ensure_trytes(trytes: &str) -> Result<(), IssError> {
    match trytes.chars().find(|&c| tryte_index(c).is_none()) {
        Some(c) => Err(IssError::InvalidTryte(c)),
        None => Ok(()),
    }
}

/// Convert a tryte string to trits, three per symbol.
pub fn trits_from_trytes(trytes: &str) -> Result<Vec<Trit>, IssError> {
    let mut out = Vec::with_capacity(trytes.len() * TRYTE_WIDTH);
    for symbol in trytes.chars() {
        let index = tryte_index(symbol).ok_or(IssError::InvalidTryte(symbol))?;
        out.extend_from_slice(&TRYTE_TO_TRITS[index]);
    }
    Ok(out)
}

/// Convert trits back to trytes. The length must be a multiple of three and
/// every trit must be -1, 0 or 1.
pub fn trytes_from_trits(trits: &[Trit]) -> Result<String, IssError> {
    if trits.len() % TRYTE_WIDTH != 0 {
        return Err(IssError::TritLength {
            got: trits.len(),
            multiple: TRYTE_WIDTH,
        });
    }
    let mut out = String::with_capacity(trits.len() / TRYTE_WIDTH);
    for group in trits.chunks_exact(TRYTE_WIDTH) {
        for &trit in group {
            if !(-1..=1).contains(&trit) {
                return Err(IssError::InvalidTrit(trit));
            }
        }
        let value = group[0] + group[1] * 3 + group[2] * 9;
        let index = value.rem_euclid(27) as usize;
        out.push(TRYTE_ALPHABET.as_bytes()[index] as char);
    }
    Ok(out)
}

/// Balanced-ternary value, little-endian (index 0 least significant).
/// Saturates nowhere: callers keep lengths within the ~40 trits an `i64`
/// can carry.
#[must_use]
pub fn value(trits: &[Trit]) -> i64 {
    trits
        .iter()
        .rev()
        .fold(0_i64, |accum, &trit| accum * 3 + i64::from(trit))
}

/// Fixed-length balanced-ternary representation of `value`. High trits that
/// do not fit in `length` digits are truncated.
#[must_use]
pub fn trits_from_value(value: i64, length: usize) -> Vec<Trit> {
    let mut remainder = value;
    let mut out = vec![0_i8; length];
    for slot in &mut out {
        let digit = remainder.rem_euclid(3);
        remainder = remainder.div_euclid(3);
        *slot = if digit == 2 {
            remainder += 1;
            -1
        } else {
            digit as i8
        };
    }
    out
}

/// Add one to a balanced-ternary buffer in place, propagating the carry.
pub fn increment(trits: &mut [Trit]) {
    for trit in trits.iter_mut() {
        *trit += 1;
        if *trit > 1 {
            *trit = -1;
        } else {
            break;
        }
    }
}
