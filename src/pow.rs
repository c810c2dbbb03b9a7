//! Injectable proof-of-work collaborator. The scheme itself never searches
//! for nonces; deployments plug their own implementation.

use crate::errors::IssError;

/// Nonce search over transaction trytes. `search` returns the input with a
/// nonce substituted such that the Curl-P-81 hash of the result ends in at
/// least `min_weight_magnitude` zero trits.
pub trait PowProvider {
    fn search(&self, trytes: &str, min_weight_magnitude: usize) -> Result<String, IssError>;
}
