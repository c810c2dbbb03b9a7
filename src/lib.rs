#![forbid(unsafe_code)]
#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::redundant_pub_crate,
    clippy::multiple_crate_versions
)]

//! iota-iss: the IOTA signing scheme (byte-precise, deterministic)
//!
//! Everything here is pure computation over balanced ternary:
//!
//! - trit/tryte codec over the fixed alphabet `9A..Z`
//! - two 729-trit-state sponges behind one contract: the Curl-P
//!   permutation (27/81 rounds) and Kerl, the ternary face of binary
//!   Keccak-384
//! - Winternitz one-time signing: seed -> subseed -> key -> key digests ->
//!   address, fragment signing and verification over the normalized bundle
//!   hash
//! - the 9-tryte address checksum
//!
//! Keys and signatures are deterministic functions of (seed, index,
//! security); there is no RNG, no I/O and no ambient state. Sponge
//! templates are cloned per operation, so a [`Signing`] value is safe to
//! share across threads.
//!
//! ```
//! use iota_iss::{new_address, sign, verify, remove_checksum};
//!
//! let seed = "IHDEENZYITYVYSPKAURUZAQKGVJEREFDJMYTANNXXGPZ9GJWTEOJJ9IPMXOGZNQLSNMFDSQOTZAEETUEA";
//! let address = new_address(seed, 2, 0, true)?;
//! let bundle_hash = remove_checksum(&address)?;
//! let fragments = sign(seed, 2, 5, &bundle_hash)?;
//! let signer_address = new_address(seed, 2, 5, false)?;
//! assert!(verify(&signer_address, &fragments, &bundle_hash)?);
//! # Ok::<(), iota_iss::IssError>(())
//! ```
//!
//! Proof-of-work, transport and bundle assembly live elsewhere; the only
//! trace of them here is the injectable [`PowProvider`] interface.

pub mod bigint;
pub mod checksum;
pub mod constants;
pub mod curl;
pub mod errors;
pub mod kerl;
pub mod pow;
pub mod signing;
pub mod sponge;
pub mod trits;
pub mod validate;

pub use checksum::{add_checksum, is_valid_checksum, remove_checksum};
pub use curl::Curl;
pub use errors::IssError;
pub use kerl::Kerl;
pub use pow::PowProvider;
pub use signing::{new_address, normalized_bundle, sign, verify, Signing};
pub use sponge::{create, AnySponge, Sponge, SpongeMode};
pub use trits::Trit;
