//! Multihash type
//!
//! A multihash is a digest prefixed with the code of the algorithm that produced it and the
//! digest's length: `[code][len][digest...]`. Both header fields are a single byte, so the
//! binary form is always `digest.len() + 2` bytes.
//!
//! The digest length is checked against the algorithm on construction, and there is no way to
//! mutate a value afterwards, so every `Multihash` in existence is well-formed.

use log::debug;

use crate::{
    algorithm::Algorithm,
    error::{MultihashError, Result},
};

const HEADER_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multihash {
    algorithm: Algorithm,
    size: u8,
    digest: Vec<u8>,
}

impl Multihash {
    /// Build a multihash from its three fields.
    ///
    /// `size` must equal `digest.len()`, and `digest.len()` must equal the length `algorithm`
    /// mandates. The first check wins if both fail.
    pub fn new(algorithm: Algorithm, size: u8, digest: Vec<u8>) -> Result<Multihash> {
        if size as usize != digest.len() {
            return Err(MultihashError::SizeMismatch {
                declared: size,
                actual: digest.len(),
            });
        }
        if digest.len() != algorithm.digest_len() {
            return Err(MultihashError::LengthMismatch {
                algorithm,
                actual: digest.len(),
                expected: algorithm.digest_len(),
            });
        }
        Ok(Multihash { algorithm, size, digest })
    }

    /// Like [`Multihash::new`], with the size byte taken from the digest.
    pub fn wrap(algorithm: Algorithm, digest: Vec<u8>) -> Result<Multihash> {
        let size = u8::try_from(digest.len()).map_err(|_| MultihashError::LengthMismatch {
            algorithm,
            actual: digest.len(),
            expected: algorithm.digest_len(),
        })?;
        Multihash::new(algorithm, size, digest)
    }

    /// Decode the binary form. The digest is copied out of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Multihash> {
        let (code, size, digest) = match bytes {
            [code, size, digest @ ..] => (*code, *size, digest),
            _ => {
                debug!("rejecting multihash of {} bytes", bytes.len());
                return Err(MultihashError::TruncatedInput { len: bytes.len() });
            }
        };
        debug!("decoding multihash: code 0x{:02x}, size {}, {} digest bytes", code, size, digest.len());

        let algorithm = Algorithm::from_code(code)?;
        Multihash::new(algorithm, size, digest.to_vec())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        buf.push(self.algorithm.code());
        // Same value as `size`, guaranteed by construction.
        buf.push(self.digest.len() as u8);
        buf.extend_from_slice(&self.digest);
        buf
    }

    pub fn algorithm(&self) -> Algorithm { self.algorithm }
    pub fn code(&self) -> u8 { self.algorithm.code() }
    pub fn size(&self) -> u8 { self.size }
    pub fn digest(&self) -> &[u8] { &self.digest }
    pub fn into_digest(self) -> Vec<u8> { self.digest }

    /// Length of the binary form.
    pub fn encoded_len(&self) -> usize { HEADER_LEN + self.digest.len() }
}

// Implement Hash manually so it visibly covers the same fields as Eq
impl std::hash::Hash for Multihash {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.algorithm.code().hash(state);
        self.size.hash(state);
        self.digest.hash(state);
    }
}

impl TryFrom<&[u8]> for Multihash {
    type Error = MultihashError;

    fn try_from(bytes: &[u8]) -> Result<Self> { Multihash::from_bytes(bytes) }
}

impl From<&Multihash> for Vec<u8> {
    fn from(mh: &Multihash) -> Vec<u8> { mh.to_bytes() }
}

// Tests
#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{RngCore, SeedableRng};

    use super::*;

    fn random_digests(seed: u64, len: usize) -> impl Iterator<Item = Vec<u8>> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        std::iter::from_fn(move || {
            let mut buf = vec![0u8; len];
            rng.fill_bytes(&mut buf);
            Some(buf)
        })
    }

    #[test]
    fn test_sha2_256_zero_vector() {
        let mh = Multihash::new(Algorithm::Sha2_256, 32, vec![0; 32]).unwrap();
        let bytes = mh.to_bytes();

        assert_eq!(bytes.len(), 34);
        assert_eq!(&bytes[..2], &[0x12, 0x20]);
        assert!(bytes[2..].iter().all(|b| *b == 0));
        assert_eq!(mh.encoded_len(), 34);
    }

    #[test]
    fn test_bytes_roundtrip_all_algorithms() {
        for (i, algorithm) in Algorithm::ALL.into_iter().enumerate() {
            for digest in random_digests(i as u64, algorithm.digest_len()).take(50) {
                let mh = Multihash::new(algorithm, digest.len() as u8, digest.clone()).unwrap();
                let decoded = Multihash::from_bytes(&mh.to_bytes()).unwrap();
                assert_eq!(decoded, mh);
                assert_eq!(decoded.algorithm(), algorithm);
                assert_eq!(decoded.size() as usize, algorithm.digest_len());
                assert_eq!(decoded.digest(), &digest[..]);
            }
        }
    }

    #[test]
    fn test_declared_size_matches_but_algorithm_length_does_not() {
        let err = Multihash::new(Algorithm::Sha2_256, 31, vec![7; 31]).unwrap_err();
        assert_eq!(
            err,
            MultihashError::LengthMismatch {
                algorithm: Algorithm::Sha2_256,
                actual: 31,
                expected: 32
            }
        );
    }

    #[test]
    fn test_declared_size_differs_from_digest() {
        let err = Multihash::new(Algorithm::Sha2_256, 32, vec![7; 20]).unwrap_err();
        assert_eq!(err, MultihashError::SizeMismatch { declared: 32, actual: 20 });
    }

    #[test]
    fn test_size_checked_before_length() {
        let err = Multihash::new(Algorithm::Sha1, 32, vec![0; 31]).unwrap_err();
        assert_eq!(err, MultihashError::SizeMismatch { declared: 32, actual: 31 });
    }

    #[test]
    fn test_wrap() {
        let mh = Multihash::wrap(Algorithm::Blake2s, vec![1; 32]).unwrap();
        assert_eq!(mh, Multihash::new(Algorithm::Blake2s, 32, vec![1; 32]).unwrap());

        let err = Multihash::wrap(Algorithm::Blake2s, vec![1; 300]).unwrap_err();
        assert_eq!(
            err,
            MultihashError::LengthMismatch {
                algorithm: Algorithm::Blake2s,
                actual: 300,
                expected: 32
            }
        );
    }

    #[test]
    fn test_truncated_input() {
        assert_eq!(
            Multihash::from_bytes(&[]),
            Err(MultihashError::TruncatedInput { len: 0 })
        );
        assert_eq!(
            Multihash::from_bytes(&[0x11]),
            Err(MultihashError::TruncatedInput { len: 1 })
        );
    }

    #[test]
    fn test_header_only_is_validated() {
        // A bare header parses but an empty digest can't satisfy any algorithm.
        assert_eq!(
            Multihash::from_bytes(&[0x11, 0x00]),
            Err(MultihashError::LengthMismatch {
                algorithm: Algorithm::Sha1,
                actual: 0,
                expected: 20
            })
        );
    }

    #[test]
    fn test_from_bytes_unknown_code() {
        let mut bytes = vec![0x00, 32];
        bytes.extend_from_slice(&[0; 32]);
        assert_eq!(
            Multihash::try_from(&bytes[..]),
            Err(MultihashError::UnrecognizedAlgorithm(0x00))
        );
    }

    #[test]
    fn test_from_bytes_size_byte_is_unsigned() {
        let mut bytes = vec![0x12, 0xff];
        bytes.extend_from_slice(&[0; 32]);
        assert_eq!(
            Multihash::from_bytes(&bytes),
            Err(MultihashError::SizeMismatch { declared: 255, actual: 32 })
        );
    }

    #[test]
    fn test_trailing_bytes_count_as_digest() {
        let mut bytes = Multihash::wrap(Algorithm::Sha1, vec![3; 20]).unwrap().to_bytes();
        bytes.push(0);
        assert_eq!(
            Multihash::from_bytes(&bytes),
            Err(MultihashError::SizeMismatch { declared: 20, actual: 21 })
        );
    }

    #[test]
    fn test_equality_and_hash() {
        let a = Multihash::wrap(Algorithm::Sha2_256, vec![5; 32]).unwrap();
        let b = Multihash::wrap(Algorithm::Blake2s, vec![5; 32]).unwrap();
        let c = Multihash::wrap(Algorithm::Sha2_256, vec![5; 32]).unwrap();

        assert_ne!(a, b);
        assert_eq!(a, c);

        let set = [a, b, c].into_iter().collect::<HashSet<_>>();
        assert_eq!(set.len(), 2);
    }
}
