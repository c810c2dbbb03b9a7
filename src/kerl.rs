//! Kerl: the ternary sponge interface over binary Keccak-384.

use sha3::{Digest, Keccak384};

use crate::bigint::{bytes_from_trits, trits_from_bytes, KERL_BYTES};
use crate::constants::HASH_LENGTH;
use crate::errors::IssError;
use crate::sponge::{check_trit_len, Sponge};
use crate::trits::Trit;

/// Each absorbed 243-trit block has its last trit forced to zero and is fed
/// to Keccak-384 as 48 bytes. Squeezing finalizes to 48 bytes, emits them
/// as 243 trits (last trit zero), then re-seeds a fresh Keccak-384 with the
/// bitwise complement of the digest so squeezing extends past one block.
#[derive(Clone, Default)]
pub struct Kerl {
    keccak: Keccak384,
}

impl Kerl {
    #[must_use]
    pub fn new() -> Self {
        Self {
            keccak: Keccak384::new(),
        }
    }
}

impl Sponge for Kerl {
    fn reset(&mut self) {
        self.keccak = Keccak384::new();
    }

    fn absorb(&mut self, input: &[Trit]) -> Result<(), IssError> {
        check_trit_len(input.len())?;
        for chunk in input.chunks_exact(HASH_LENGTH) {
            let mut block = [0_i8; HASH_LENGTH];
            block.copy_from_slice(chunk);
            block[HASH_LENGTH - 1] = 0;
            self.keccak.update(bytes_from_trits(&block));
        }
        Ok(())
    }

    fn squeeze_into(&mut self, out: &mut [Trit]) -> Result<(), IssError> {
        check_trit_len(out.len())?;
        for chunk in out.chunks_exact_mut(HASH_LENGTH) {
            let digest = self.keccak.finalize_reset();
            let mut bytes = [0_u8; KERL_BYTES];
            bytes.copy_from_slice(&digest);
            chunk.copy_from_slice(&trits_from_bytes(&bytes));
            for byte in &mut bytes {
                *byte = !*byte;
            }
            self.keccak.update(bytes);
        }
        Ok(())
    }
}
