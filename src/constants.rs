#![forbid(unsafe_code)]

/// The 27-symbol tryte alphabet; `9` encodes zero, `A`..`Z` the values
/// 1..13 and -13..-1.
pub const TRYTE_ALPHABET: &str = "9ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const TRYTE_WIDTH: usize = 3;
pub const TRYTE_SPACE: usize = 27;
pub const MIN_TRYTE_VALUE: i8 = -13;
pub const MAX_TRYTE_VALUE: i8 = 13;

/// Trits per hash (one sponge block).
pub const HASH_LENGTH: usize = 243;
/// Trits of Curl sponge state.
pub const STATE_LENGTH: usize = 3 * HASH_LENGTH;

/// Blocks per key fragment, and symbols per normalized bundle chunk.
pub const KEY_FRAGMENT_BLOCKS: usize = 27;
/// Trits per key fragment (one fragment per security level).
pub const KEY_LENGTH: usize = KEY_FRAGMENT_BLOCKS * HASH_LENGTH;

pub const HASH_TRYTES: usize = HASH_LENGTH / TRYTE_WIDTH;
pub const SIGNATURE_FRAGMENT_TRYTES: usize = KEY_LENGTH / TRYTE_WIDTH;

pub const ADDRESS_TRYTES: usize = HASH_TRYTES;
pub const CHECKSUM_TRYTES: usize = 9;
pub const ADDRESS_WITH_CHECKSUM_TRYTES: usize = ADDRESS_TRYTES + CHECKSUM_TRYTES;

/// Canonical seed length; shorter seeds are right-padded with `9` at the
/// string API, longer seeds are absorbed in 243-trit chunks.
pub const SEED_TRYTES: usize = 81;

pub const MIN_SECURITY_LEVEL: usize = 1;
pub const MAX_SECURITY_LEVEL: usize = 3;

pub const NORMALIZED_FRAGMENT_LENGTH: usize = 27;
