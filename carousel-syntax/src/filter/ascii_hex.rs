use crate::error::{Error, Result};
use crate::filter::Codec;
use crate::object::Dict;
use crate::trivia::{hex_value, is_white_space_character};

pub(crate) struct AsciiHex;

pub(crate) static ASCII_HEX: AsciiHex = AsciiHex;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

impl Codec for AsciiHex {
    fn name(&self) -> &'static str {
        "ASCIIHexDecode"
    }

    fn decode(&self, encoded: &[u8], _: &Dict, _: usize) -> Result<Vec<u8>> {
        let mut decoded = Vec::with_capacity(encoded.len() / 2);
        let mut high = None;

        // We are lenient and don't require a > at the end.
        for &byte in encoded {
            match byte {
                b'>' => break,
                b if is_white_space_character(b) => {}
                b => {
                    let value = hex_value(b).ok_or_else(|| {
                        Error::codec(self.name(), format!("invalid hex digit 0x{b:02x}"))
                    })?;

                    match high.take() {
                        Some(h) => decoded.push(h << 4 | value),
                        None => high = Some(value),
                    }
                }
            }
        }

        // An odd number of digits behaves as if a 0 followed.
        if let Some(h) = high {
            decoded.push(h << 4);
        }

        Ok(decoded)
    }

    fn encode(&self, raw: &[u8], _: &Dict, _: usize) -> Result<Vec<u8>> {
        let mut encoded = Vec::with_capacity(raw.len() * 2 + 1);

        for &b in raw {
            encoded.push(HEX_DIGITS[(b >> 4) as usize]);
            encoded.push(HEX_DIGITS[(b & 0x0f) as usize]);
        }

        encoded.push(b'>');

        Ok(encoded)
    }
}
