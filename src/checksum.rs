//! The 9-tryte address checksum: the tail of the Kerl hash of the address.

use subtle::ConstantTimeEq;

use crate::constants::{
    ADDRESS_TRYTES, ADDRESS_WITH_CHECKSUM_TRYTES, CHECKSUM_TRYTES, HASH_LENGTH, HASH_TRYTES,
};
use crate::errors::IssError;
use crate::kerl::Kerl;
use crate::sponge::Sponge;
use crate::trits;

fn checksum_of(address: &str) -> Result<String, IssError> {
    let mut kerl = Kerl::new();
    kerl.absorb(&trits::trits_from_trytes(address)?)?;
    let hash = trits::trytes_from_trits(&kerl.squeeze(HASH_LENGTH)?)?;
    Ok(hash[HASH_TRYTES - CHECKSUM_TRYTES..].to_string())
}

/// Append the 9-tryte checksum to an 81-tryte address.
pub fn add_checksum(address: &str) -> Result<String, IssError> {
    if address.len() != ADDRESS_TRYTES {
        return Err(IssError::InvalidLength {
            expected: ADDRESS_TRYTES,
            got: address.len(),
        });
    }
    let checksum = checksum_of(address)?;
    Ok(format!("{address}{checksum}"))
}

/// Recompute the checksum of a 90-tryte address and compare the tail in
/// constant time.
pub fn is_valid_checksum(address: &str) -> Result<bool, IssError> {
    if address.len() != ADDRESS_WITH_CHECKSUM_TRYTES {
        return Err(IssError::InvalidLength {
            expected: ADDRESS_WITH_CHECKSUM_TRYTES,
            got: address.len(),
        });
    }
    trits::ensure_trytes(address)?;
    let (body, given) = address.split_at(ADDRESS_TRYTES);
    let expected = checksum_of(body)?;
    Ok(expected.as_bytes().ct_eq(given.as_bytes()).into())
}

/// Strip a verified checksum; a present-but-wrong checksum is an error.
pub fn remove_checksum(address: &str) -> Result<String, IssError> {
    if is_valid_checksum(address)? {
        Ok(address[..ADDRESS_TRYTES].to_string())
    } else {
        Err(IssError::InvalidChecksum)
    }
}
