//! The signing engine: subseed, key, key digests, address, Winternitz
//! signature fragments and their verification, plus bundle-hash
//! normalization and the tryte-string entry points.

use subtle::ConstantTimeEq;

use crate::checksum;
use crate::constants::{
    ADDRESS_TRYTES, HASH_LENGTH, HASH_TRYTES, KEY_LENGTH, MAX_SECURITY_LEVEL, MAX_TRYTE_VALUE,
    MIN_SECURITY_LEVEL, MIN_TRYTE_VALUE, NORMALIZED_FRAGMENT_LENGTH, SEED_TRYTES,
    SIGNATURE_FRAGMENT_TRYTES, TRYTE_WIDTH,
};
use crate::errors::IssError;
use crate::kerl::Kerl;
use crate::sponge::{check_trit_len, Sponge};
use crate::trits::{self, Trit};

/// One-time signing over a cloned sponge template. Every operation clones
/// the template and resets the clone, so a `Signing` value can be shared
/// and re-entered freely; `Signing::default()` is the production (Kerl)
/// configuration.
#[derive(Clone)]
pub struct Signing<S = Kerl> {
    template: S,
}

impl Default for Signing<Kerl> {
    fn default() -> Self {
        Self::new(Kerl::new())
    }
}

impl<S: Sponge + Clone> Signing<S> {
    pub fn new(template: S) -> Self {
        Self { template }
    }

    fn sponge(&self) -> S {
        let mut sponge = self.template.clone();
        sponge.reset();
        sponge
    }

    /// Derive the subseed for `index`: add `index` to the seed in balanced
    /// ternary, then hash it. The result has the seed's own length, so
    /// multi-chunk seeds keep their full entropy. Index 0 is valid.
    pub fn subseed(&self, seed: &[Trit], index: u64) -> Result<Vec<Trit>, IssError> {
        check_trit_len(seed.len())?;
        let mut subseed = seed.to_vec();
        for _ in 0..index {
            trits::increment(&mut subseed);
        }
        let mut sponge = self.sponge();
        sponge.absorb(&subseed)?;
        sponge.squeeze_into(&mut subseed)?;
        Ok(subseed)
    }

    /// Derive the private key: absorb the subseed, then squeeze
    /// `27 x security` blocks of 243 trits. Each squeeze spans the subseed
    /// length; only its first block enters the key, which is what makes
    /// long-seed keys line up with the reference client.
    pub fn key(&self, seed: &[Trit], index: u64, security: usize) -> Result<Vec<Trit>, IssError> {
        check_security(security)?;
        let subseed = self.subseed(seed, index)?;
        let mut sponge = self.sponge();
        sponge.absorb(&subseed)?;
        let mut key = vec![0_i8; security * KEY_LENGTH];
        let mut buffer = vec![0_i8; subseed.len()];
        for block in key.chunks_exact_mut(HASH_LENGTH) {
            sponge.squeeze_into(&mut buffer)?;
            block.copy_from_slice(&buffer[..HASH_LENGTH]);
        }
        Ok(key)
    }

    /// Hash every key block 26 times, then hash each 6561-trit fragment
    /// down to its 243-trit digest.
    pub fn digests(&self, key: &[Trit]) -> Result<Vec<Trit>, IssError> {
        if key.is_empty() || key.len() % KEY_LENGTH != 0 {
            return Err(IssError::TritLength {
                got: key.len(),
                multiple: KEY_LENGTH,
            });
        }
        let mut digests = vec![0_i8; key.len() / KEY_LENGTH * HASH_LENGTH];
        for (fragment, digest) in key
            .chunks_exact(KEY_LENGTH)
            .zip(digests.chunks_exact_mut(HASH_LENGTH))
        {
            let mut buffer = fragment.to_vec();
            for block in buffer.chunks_exact_mut(HASH_LENGTH) {
                for _ in 0..26 {
                    let mut sponge = self.sponge();
                    sponge.absorb(block)?;
                    sponge.squeeze_into(block)?;
                }
            }
            let mut sponge = self.sponge();
            sponge.absorb(&buffer)?;
            sponge.squeeze_into(digest)?;
        }
        Ok(digests)
    }

    /// Hash the concatenated key digests into the 243-trit address.
    pub fn address(&self, digests: &[Trit]) -> Result<Vec<Trit>, IssError> {
        check_trit_len(digests.len())?;
        let mut sponge = self.sponge();
        sponge.absorb(digests)?;
        sponge.squeeze(HASH_LENGTH)
    }

    /// Sign one 27-symbol normalized chunk with one 6561-trit key fragment:
    /// block `j` is hashed `13 - h[j]` times.
    pub fn signature_fragment(
        &self,
        normalized: &[i8],
        key_fragment: &[Trit],
    ) -> Result<Vec<Trit>, IssError> {
        check_fragment_pair(normalized, key_fragment)?;
        let mut signature = key_fragment.to_vec();
        for (block, &symbol) in signature.chunks_exact_mut(HASH_LENGTH).zip(normalized) {
            for _ in 0..(MAX_TRYTE_VALUE - symbol) {
                let mut sponge = self.sponge();
                sponge.absorb(block)?;
                sponge.squeeze_into(block)?;
            }
        }
        Ok(signature)
    }

    /// Recover the fragment digest from a signature fragment: block `j` is
    /// hashed the remaining `13 + h[j]` times, then the whole fragment is
    /// hashed down to 243 trits.
    pub fn digest(
        &self,
        normalized: &[i8],
        signature_fragment: &[Trit],
    ) -> Result<Vec<Trit>, IssError> {
        check_fragment_pair(normalized, signature_fragment)?;
        let mut buffer = signature_fragment.to_vec();
        let mut outer = self.sponge();
        for (block, &symbol) in buffer.chunks_exact_mut(HASH_LENGTH).zip(normalized) {
            for _ in 0..(MAX_TRYTE_VALUE + symbol) {
                let mut sponge = self.sponge();
                sponge.absorb(block)?;
                sponge.squeeze_into(block)?;
            }
            outer.absorb(block)?;
        }
        outer.squeeze(HASH_LENGTH)
    }

    /// Recompute the address from the signature fragments (fragment `i`
    /// uses normalized chunk `i mod 3`) and compare it with the expected
    /// address in constant time. A semantic mismatch is `Ok(false)`;
    /// malformed input is an error.
    pub fn validate_signatures<T: AsRef<str>>(
        &self,
        expected_address: &str,
        fragments: &[T],
        bundle_hash: &str,
    ) -> Result<bool, IssError> {
        if expected_address.len() != ADDRESS_TRYTES {
            return Err(IssError::InvalidLength {
                expected: ADDRESS_TRYTES,
                got: expected_address.len(),
            });
        }
        trits::ensure_trytes(expected_address)?;
        let normalized = normalized_bundle(bundle_hash)?;
        let mut digests = vec![0_i8; fragments.len() * HASH_LENGTH];
        for (i, fragment) in fragments.iter().enumerate() {
            let fragment = fragment.as_ref();
            if fragment.len() != SIGNATURE_FRAGMENT_TRYTES {
                return Err(IssError::InvalidLength {
                    expected: SIGNATURE_FRAGMENT_TRYTES,
                    got: fragment.len(),
                });
            }
            let signature = trits::trits_from_trytes(fragment)?;
            let chunk = (i % 3) * NORMALIZED_FRAGMENT_LENGTH;
            let digest = self.digest(
                &normalized[chunk..chunk + NORMALIZED_FRAGMENT_LENGTH],
                &signature,
            )?;
            digests[i * HASH_LENGTH..(i + 1) * HASH_LENGTH].copy_from_slice(&digest);
        }
        let address = trits::trytes_from_trits(&self.address(&digests)?)?;
        Ok(address
            .as_bytes()
            .ct_eq(expected_address.as_bytes())
            .into())
    }
}

fn check_security(security: usize) -> Result<(), IssError> {
    if !(MIN_SECURITY_LEVEL..=MAX_SECURITY_LEVEL).contains(&security) {
        return Err(IssError::InvalidSecurity(security));
    }
    Ok(())
}

fn check_fragment_pair(normalized: &[i8], fragment: &[Trit]) -> Result<(), IssError> {
    if normalized.len() != NORMALIZED_FRAGMENT_LENGTH {
        return Err(IssError::InvalidLength {
            expected: NORMALIZED_FRAGMENT_LENGTH,
            got: normalized.len(),
        });
    }
    if fragment.len() != KEY_LENGTH {
        return Err(IssError::InvalidLength {
            expected: KEY_LENGTH,
            got: fragment.len(),
        });
    }
    Ok(())
}

/// Normalize a bundle hash to 81 signed symbols: each 27-symbol chunk is
/// rebalanced until it sums to zero, one unit at a time, lowest index
/// first. Values stay within -13..=13.
pub fn normalized_bundle(bundle_hash: &str) -> Result<[i8; HASH_TRYTES], IssError> {
    if bundle_hash.len() != HASH_TRYTES {
        return Err(IssError::InvalidBundleHash {
            got: bundle_hash.len(),
        });
    }
    let mut normalized = [0_i8; HASH_TRYTES];
    for (slot, symbol) in normalized.iter_mut().zip(bundle_hash.chars()) {
        *slot = trits::tryte_value(symbol).ok_or(IssError::InvalidTryte(symbol))?;
    }
    for chunk in normalized.chunks_exact_mut(NORMALIZED_FRAGMENT_LENGTH) {
        let mut sum: i32 = chunk.iter().map(|&v| i32::from(v)).sum();
        while sum > 0 {
            for value in chunk.iter_mut() {
                if *value > MIN_TRYTE_VALUE {
                    *value -= 1;
                    break;
                }
            }
            sum -= 1;
        }
        while sum < 0 {
            for value in chunk.iter_mut() {
                if *value < MAX_TRYTE_VALUE {
                    *value += 1;
                    break;
                }
            }
            sum += 1;
        }
    }
    Ok(normalized)
}

/// Validate a seed string and right-pad it with `9` to the next multiple of
/// 81 trytes before conversion; longer seeds stay whole. Never truncates.
fn padded_seed_trits(seed: &str) -> Result<Vec<Trit>, IssError> {
    if seed.is_empty() {
        return Err(IssError::InvalidLength {
            expected: SEED_TRYTES,
            got: 0,
        });
    }
    let mut trits = trits::trits_from_trytes(seed)?;
    let chunks = seed.len().div_ceil(SEED_TRYTES);
    trits.resize(chunks * SEED_TRYTES * TRYTE_WIDTH, 0);
    Ok(trits)
}

/// Derive the address for (`seed`, `security`, `index`), as 81 trytes, or
/// 90 with the checksum appended.
pub fn new_address(
    seed: &str,
    security: usize,
    index: u64,
    with_checksum: bool,
) -> Result<String, IssError> {
    let signing = Signing::default();
    let key = signing.key(&padded_seed_trits(seed)?, index, security)?;
    let digests = signing.digests(&key)?;
    let address = trits::trytes_from_trits(&signing.address(&digests)?)?;
    if with_checksum {
        checksum::add_checksum(&address)
    } else {
        Ok(address)
    }
}

/// Sign `bundle_hash` with the key at (`seed`, `security`, `index`). One
/// 2187-tryte fragment per security level.
pub fn sign(
    seed: &str,
    security: usize,
    index: u64,
    bundle_hash: &str,
) -> Result<Vec<String>, IssError> {
    let signing = Signing::default();
    let normalized = normalized_bundle(bundle_hash)?;
    let key = signing.key(&padded_seed_trits(seed)?, index, security)?;
    let mut fragments = Vec::with_capacity(security);
    for (i, key_fragment) in key.chunks_exact(KEY_LENGTH).enumerate() {
        let chunk = (i % 3) * NORMALIZED_FRAGMENT_LENGTH;
        let fragment = signing.signature_fragment(
            &normalized[chunk..chunk + NORMALIZED_FRAGMENT_LENGTH],
            key_fragment,
        )?;
        fragments.push(trits::trytes_from_trits(&fragment)?);
    }
    Ok(fragments)
}

/// Check `fragments` against `address` (81 trytes, no checksum) for
/// `bundle_hash`.
pub fn verify<T: AsRef<str>>(
    address: &str,
    fragments: &[T],
    bundle_hash: &str,
) -> Result<bool, IssError> {
    Signing::default().validate_signatures(address, fragments, bundle_hash)
}
