//! Curl-P: the ternary permutation sponge over a 729-trit state.

use crate::constants::{HASH_LENGTH, STATE_LENGTH};
use crate::errors::IssError;
use crate::sponge::{check_trit_len, Sponge};
use crate::trits::Trit;

pub const CURL_27_ROUNDS: usize = 27;
pub const CURL_81_ROUNDS: usize = 81;

/// S-box lookup, indexed `a + (b << 2) + 5` for the trit pair `(a, b)`.
/// The 2 entries are padding and never addressed.
const TRUTH_TABLE: [i8; 11] = [1, 0, -1, 2, 1, -1, 0, 2, -1, 1, 0];

/// Permutation-based sponge; 27 rounds for the legacy transaction flows,
/// 81 rounds for transaction hashing.
#[derive(Clone)]
pub struct Curl {
    state: [Trit; STATE_LENGTH],
    rounds: usize,
}

impl Curl {
    #[must_use]
    pub fn new(rounds: usize) -> Self {
        Self {
            state: [0; STATE_LENGTH],
            rounds,
        }
    }

    /// The production 81-round variant.
    #[must_use]
    pub fn p81() -> Self {
        Self::new(CURL_81_ROUNDS)
    }

    fn transform(&mut self) {
        // the index walk visits all 729 cells once per round and ends where
        // it started
        let mut index = 0_usize;
        for _ in 0..self.rounds {
            let scratch = self.state;
            for slot in &mut self.state {
                let a = scratch[index];
                index = if index < 365 { index + 364 } else { index - 365 };
                let b = scratch[index];
                *slot = TRUTH_TABLE[(a + (b << 2) + 5) as usize];
            }
        }
    }
}

impl Sponge for Curl {
    fn reset(&mut self) {
        self.state = [0; STATE_LENGTH];
    }

    fn absorb(&mut self, input: &[Trit]) -> Result<(), IssError> {
        check_trit_len(input.len())?;
        for block in input.chunks_exact(HASH_LENGTH) {
            self.state[..HASH_LENGTH].copy_from_slice(block);
            self.transform();
        }
        Ok(())
    }

    fn squeeze_into(&mut self, out: &mut [Trit]) -> Result<(), IssError> {
        check_trit_len(out.len())?;
        for block in out.chunks_exact_mut(HASH_LENGTH) {
            block.copy_from_slice(&self.state[..HASH_LENGTH]);
            self.transform();
        }
        Ok(())
    }
}
