use crate::error::{Error, Result};
use crate::filter::predictor::{self, PredictorParams};
use crate::filter::{Codec, decode_params};
use crate::object::Dict;
use crate::object::keys::EARLY_CHANGE;
use weezl::BitOrder;
use weezl::decode::Decoder;
use weezl::encode::Encoder;

pub(crate) struct Lzw;

pub(crate) static LZW: Lzw = Lzw;

/// Whether the code width grows one code early, which is the default.
fn early_change(params: &Dict) -> bool {
    params.get_int(EARLY_CHANGE, 1) != 0
}

impl Codec for Lzw {
    fn name(&self) -> &'static str {
        "LZWDecode"
    }

    fn decode(&self, encoded: &[u8], dict: &Dict, index: usize) -> Result<Vec<u8>> {
        let params = decode_params(dict, index);

        let mut decoder = if early_change(&params) {
            Decoder::with_tiff_size_switch(BitOrder::Msb, 8)
        } else {
            Decoder::new(BitOrder::Msb, 8)
        };

        let mut decoded = Vec::new();
        let result = decoder.into_vec(&mut decoded).decode(encoded);

        if let Err(e) = result.status {
            if decoded.is_empty() {
                return Err(Error::codec(self.name(), e.to_string()));
            }

            lwarn!("LZW stream is corrupt, keeping {} decoded bytes: {}", decoded.len(), e);
        }

        predictor::apply(decoded, &PredictorParams::from_params(&params))
    }

    fn encode(&self, raw: &[u8], dict: &Dict, index: usize) -> Result<Vec<u8>> {
        let params = decode_params(dict, index);
        let predicted = predictor::predict(raw.to_vec(), &PredictorParams::from_params(&params))?;

        let mut encoder = if early_change(&params) {
            Encoder::with_tiff_size_switch(BitOrder::Msb, 8)
        } else {
            Encoder::new(BitOrder::Msb, 8)
        };

        encoder
            .encode(&predicted)
            .map_err(|e| Error::codec(self.name(), e.to_string()))
    }
}
