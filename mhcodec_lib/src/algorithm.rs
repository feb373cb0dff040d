//! Algorithm registry
//!
//! The set of hash functions a multihash may name is closed. Each one has a single-byte code
//! that goes on the wire and a digest length that every multihash of that kind must have.
//! These codes are shared with existing encoded data, so they must never change.

use std::{fmt, str::FromStr};

use crate::error::{MultihashError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    Sha1,
    Sha2_256,
    Sha2_512,
    Sha3,
    Blake2b,
    Blake2s,
}

impl Algorithm {
    /// Every registered algorithm, ordered by code.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Sha1,
        Algorithm::Sha2_256,
        Algorithm::Sha2_512,
        Algorithm::Sha3,
        Algorithm::Blake2b,
        Algorithm::Blake2s,
    ];

    pub const fn code(&self) -> u8 {
        match self {
            Algorithm::Sha1 => 0x11,
            Algorithm::Sha2_256 => 0x12,
            Algorithm::Sha2_512 => 0x13,
            Algorithm::Sha3 => 0x14,
            Algorithm::Blake2b => 0x40,
            Algorithm::Blake2s => 0x41,
        }
    }

    /// Length in bytes a digest of this algorithm must have.
    pub const fn digest_len(&self) -> usize {
        match self {
            Algorithm::Sha1 => 20,
            Algorithm::Sha2_256 | Algorithm::Blake2s => 32,
            Algorithm::Sha2_512 | Algorithm::Sha3 | Algorithm::Blake2b => 64,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha2_256 => "sha2-256",
            Algorithm::Sha2_512 => "sha2-512",
            Algorithm::Sha3 => "sha3",
            Algorithm::Blake2b => "blake2b",
            Algorithm::Blake2s => "blake2s",
        }
    }

    /// Look up an algorithm by its wire code.
    pub fn from_code(code: u8) -> Result<Algorithm> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.code() == code)
            .ok_or(MultihashError::UnrecognizedAlgorithm(code))
    }
}

impl TryFrom<u8> for Algorithm {
    type Error = MultihashError;

    fn try_from(code: u8) -> Result<Self> { Algorithm::from_code(code) }
}

impl From<Algorithm> for u8 {
    fn from(algorithm: Algorithm) -> u8 { algorithm.code() }
}

// Names are matched exactly, except that `_` may stand in for `-` ("sha2_256").
impl FromStr for Algorithm {
    type Err = MultihashError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.replace('_', "-");
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == normalized)
            .ok_or_else(|| MultihashError::UnknownAlgorithmName(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}
