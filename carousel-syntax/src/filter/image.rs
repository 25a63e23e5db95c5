//! Image codecs.
//!
//! Image payloads are handed to the caller as they are stored, decoding them
//! is left to image libraries.

use crate::error::Result;
use crate::filter::Codec;
use crate::object::Dict;

pub(crate) struct Passthrough(&'static str);

pub(crate) static DCT: Passthrough = Passthrough("DCTDecode");
pub(crate) static JPX: Passthrough = Passthrough("JPXDecode");
pub(crate) static JBIG2: Passthrough = Passthrough("JBIG2Decode");
pub(crate) static CCITT_FAX: Passthrough = Passthrough("CCITTFaxDecode");

impl Codec for Passthrough {
    fn name(&self) -> &'static str {
        self.0
    }

    fn decode(&self, encoded: &[u8], _: &Dict, _: usize) -> Result<Vec<u8>> {
        Ok(encoded.to_vec())
    }

    fn encode(&self, raw: &[u8], _: &Dict, _: usize) -> Result<Vec<u8>> {
        Ok(raw.to_vec())
    }
}
