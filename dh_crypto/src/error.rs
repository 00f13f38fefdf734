use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DhError {
    #[error("none of the candidate generators 2, 3, 5, 7, 11 satisfies g^(p-1) = 1 mod p")]
    NoPrimitiveRootFound,

    #[error("randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    #[error("invalid Diffie-Hellman parameters: {0}")]
    InvalidParameters(&'static str),

    #[error("invalid key: {0}")]
    InvalidKey(&'static str),

    #[error("unsupported prime size of {0} bits")]
    InvalidBitLength(u64),
}

pub type DhResult<T> = std::result::Result<T, DhError>;
