//! Pure predicates on tryte strings, for callers that want a yes/no answer
//! before handing input to the fallible APIs.

use crate::checksum;
use crate::constants::{
    ADDRESS_WITH_CHECKSUM_TRYTES, HASH_TRYTES, MAX_SECURITY_LEVEL, MIN_SECURITY_LEVEL, SEED_TRYTES,
};
use crate::trits;

/// Every character is in the tryte alphabet.
#[must_use]
pub fn is_trytes(input: &str) -> bool {
    trits::ensure_trytes(input).is_ok()
}

/// Trytes of exactly `length` symbols.
#[must_use]
pub fn is_trytes_of_length(input: &str, length: usize) -> bool {
    input.len() == length && is_trytes(input)
}

/// An 81-tryte hash (also an address without checksum).
#[must_use]
pub fn is_hash(input: &str) -> bool {
    is_trytes_of_length(input, HASH_TRYTES)
}

/// A 90-tryte address whose checksum verifies.
#[must_use]
pub fn is_address_with_checksum(input: &str) -> bool {
    input.len() == ADDRESS_WITH_CHECKSUM_TRYTES
        && checksum::is_valid_checksum(input).unwrap_or(false)
}

/// A canonical seed: non-empty trytes of at most 81 symbols. Longer inputs
/// are still accepted by the signing APIs (absorbed in 243-trit chunks) but
/// are not canonical seeds.
#[must_use]
pub fn is_seed(input: &str) -> bool {
    !input.is_empty() && input.len() <= SEED_TRYTES && is_trytes(input)
}

/// Security level in 1..=3.
#[must_use]
pub fn is_security_level(security: usize) -> bool {
    (MIN_SECURITY_LEVEL..=MAX_SECURITY_LEVEL).contains(&security)
}
