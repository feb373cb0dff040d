use mhcodec::{Algorithm, Multihash, MultihashError};
use wasm_bindgen::prelude::*;

fn to_js_error(e: MultihashError) -> JsError { JsError::new(&format!("Error: {}", e)) }

#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() { wasm_logger::init(wasm_logger::Config::default()); }

/// Names of the supported algorithms, ordered by code.
#[wasm_bindgen]
pub fn algorithms() -> Vec<String> {
    Algorithm::ALL.iter().map(|a| a.name().to_string()).collect()
}

#[wasm_bindgen(js_name = Multihash)]
pub struct JsMultihash {
    inner: Multihash,
}

#[wasm_bindgen(js_class = Multihash)]
impl JsMultihash {
    #[wasm_bindgen(js_name = fromHex)]
    pub fn from_hex(hex: &str) -> Result<JsMultihash, JsError> {
        let inner = Multihash::from_hex(hex).map_err(to_js_error)?;
        Ok(JsMultihash { inner })
    }

    #[wasm_bindgen(js_name = fromBytes)]
    pub fn from_bytes(bytes: &[u8]) -> Result<JsMultihash, JsError> {
        let inner = Multihash::from_bytes(bytes).map_err(to_js_error)?;
        Ok(JsMultihash { inner })
    }

    pub fn wrap(algorithm: &str, digest: &[u8]) -> Result<JsMultihash, JsError> {
        let algorithm = algorithm.parse::<Algorithm>().map_err(to_js_error)?;
        log::debug!("wrapping {} byte digest as {}", digest.len(), algorithm);
        let inner = Multihash::wrap(algorithm, digest.to_vec()).map_err(to_js_error)?;
        Ok(JsMultihash { inner })
    }

    #[wasm_bindgen(js_name = toHex)]
    pub fn to_hex(&self) -> String { self.inner.to_hex() }

    #[wasm_bindgen(js_name = toBytes)]
    pub fn to_bytes(&self) -> Vec<u8> { self.inner.to_bytes() }

    pub fn code(&self) -> u8 { self.inner.code() }

    pub fn algorithm(&self) -> String { self.inner.algorithm().name().to_string() }

    pub fn size(&self) -> u8 { self.inner.size() }

    pub fn digest(&self) -> Vec<u8> { self.inner.digest().to_vec() }

    pub fn equals(&self, other: &JsMultihash) -> bool { self.inner == other.inner }
}
