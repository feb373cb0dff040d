//! Hex text form of a multihash: the binary form as lowercase hex, two digits per byte, with
//! no prefix or separators. Parsing accepts either case.

use std::{fmt, str::FromStr};

use log::debug;

use crate::{
    error::{MultihashError, Result},
    multihash::Multihash,
};

impl Multihash {
    pub fn to_hex(&self) -> String { hex::encode(self.to_bytes()) }

    pub fn from_hex(text: &str) -> Result<Multihash> {
        let bytes = hex::decode(text).map_err(|e| {
            debug!("rejecting multihash hex of {} chars: {}", text.len(), e);
            MultihashError::from(e)
        })?;
        Multihash::from_bytes(&bytes)
    }
}

impl fmt::Display for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_hex()) }
}

impl FromStr for Multihash {
    type Err = MultihashError;

    fn from_str(s: &str) -> Result<Self> { Multihash::from_hex(s) }
}
