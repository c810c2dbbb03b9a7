use thiserror::Error;

/// Error variants for malformed inputs. Validation is front-loaded; every
/// failure is returned to the caller, never retried and never logged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IssError {
    #[error("invalid tryte '{0}'")]
    InvalidTryte(char),

    #[error("invalid trit {0}")]
    InvalidTrit(i8),

    #[error("invalid length: expected {expected} got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("invalid trit count {got}: expected a positive multiple of {multiple}")]
    TritLength { got: usize, multiple: usize },

    #[error("invalid security level {0}, expected 1..=3")]
    InvalidSecurity(usize),

    #[error("invalid checksum")]
    InvalidChecksum,

    #[error("invalid bundle hash length {got}, expected 81 trytes")]
    InvalidBundleHash { got: usize },
}
