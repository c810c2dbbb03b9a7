//! The common sponge contract and the closed sum of constructions.

use crate::constants::HASH_LENGTH;
use crate::curl::{Curl, CURL_27_ROUNDS, CURL_81_ROUNDS};
use crate::errors::IssError;
use crate::kerl::Kerl;
use crate::trits::Trit;

/// Absorb/squeeze over 243-trit blocks. Lengths must be positive multiples
/// of 243. Calls on one instance are sequential; deep copy is `Clone`.
pub trait Sponge {
    /// Zero the internal state.
    fn reset(&mut self);

    /// Absorb `input`, one 243-trit block at a time.
    fn absorb(&mut self, input: &[Trit]) -> Result<(), IssError>;

    /// Squeeze trits into `out`, advancing the state per 243-trit block.
    fn squeeze_into(&mut self, out: &mut [Trit]) -> Result<(), IssError>;

    /// Squeeze `length` trits into a fresh buffer.
    fn squeeze(&mut self, length: usize) -> Result<Vec<Trit>, IssError> {
        let mut out = vec![0_i8; length];
        self.squeeze_into(&mut out)?;
        Ok(out)
    }
}

/// Sponge variants the factory can construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpongeMode {
    CurlP27,
    CurlP81,
    Kerl,
}

/// Closed sum over the two constructions; dispatch is by `match`, not by
/// trait objects, so templates stay `Clone`.
#[derive(Clone)]
pub enum AnySponge {
    Curl(Curl),
    Kerl(Kerl),
}

/// Construct a fresh sponge of the requested variant.
#[must_use]
pub fn create(mode: SpongeMode) -> AnySponge {
    match mode {
        SpongeMode::CurlP27 => AnySponge::Curl(Curl::new(CURL_27_ROUNDS)),
        SpongeMode::CurlP81 => AnySponge::Curl(Curl::new(CURL_81_ROUNDS)),
        SpongeMode::Kerl => AnySponge::Kerl(Kerl::new()),
    }
}

impl Sponge for AnySponge {
    fn reset(&mut self) {
        match self {
            Self::Curl(curl) => curl.reset(),
            Self::Kerl(kerl) => kerl.reset(),
        }
    }

    fn absorb(&mut self, input: &[Trit]) -> Result<(), IssError> {
        match self {
            Self::Curl(curl) => curl.absorb(input),
            Self::Kerl(kerl) => kerl.absorb(input),
        }
    }

    fn squeeze_into(&mut self, out: &mut [Trit]) -> Result<(), IssError> {
        match self {
            Self::Curl(curl) => curl.squeeze_into(out),
            Self::Kerl(kerl) => kerl.squeeze_into(out),
        }
    }
}

/// Sponge traffic must come in whole 243-trit blocks.
pub(crate) fn check_trit_len(len: usize) -> Result<(), IssError> {
    if len == 0 || len % HASH_LENGTH != 0 {
        return Err(IssError::TritLength {
            got: len,
            multiple: HASH_LENGTH,
        });
    }
    Ok(())
}
