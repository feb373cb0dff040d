use thiserror::Error;

use crate::algorithm::Algorithm;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MultihashError {
    #[error("unrecognized multihash algorithm code 0x{0:02x}")]
    UnrecognizedAlgorithm(u8),
    #[error("unknown multihash algorithm name {0:?}")]
    UnknownAlgorithmName(String),
    #[error("size mismatch: declared {declared}, digest has {actual} bytes")]
    SizeMismatch { declared: u8, actual: usize },
    #[error("length mismatch: {algorithm} digest must be {expected} bytes, got {actual}")]
    LengthMismatch {
        algorithm: Algorithm,
        actual: usize,
        expected: usize,
    },
    #[error("truncated input: {len} bytes, a multihash needs at least 2")]
    TruncatedInput { len: usize },
    #[error("malformed hex: {0}")]
    MalformedHex(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, MultihashError>;
