//! Self-describing hash values.
//!
//! A [`Multihash`] pairs a digest with the [`Algorithm`] that produced it, and converts to and
//! from a compact binary form and its hex text rendering. Digests are computed elsewhere; this
//! crate only wraps and validates them.

pub mod algorithm;
pub mod error;
pub mod multihash;
pub mod text;

pub use crate::algorithm::Algorithm;
pub use crate::error::{MultihashError, Result};
pub use crate::multihash::Multihash;
