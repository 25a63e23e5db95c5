use crate::error::{Error, Result};
use crate::filter::predictor::{self, PredictorParams};
use crate::filter::{Codec, decode_params};
use crate::object::Dict;
use flate2::Compression;
use flate2::read::{DeflateDecoder, ZlibDecoder};
use flate2::write::ZlibEncoder;
use std::io::{Read, Write};

pub(crate) struct Flate;

pub(crate) static FLATE: Flate = Flate;

impl Codec for Flate {
    fn name(&self) -> &'static str {
        "FlateDecode"
    }

    fn decode(&self, encoded: &[u8], dict: &Dict, index: usize) -> Result<Vec<u8>> {
        let params = PredictorParams::from_params(&decode_params(dict, index));
        let inflated = inflate(encoded)?;

        predictor::apply(inflated, &params)
    }

    fn encode(&self, raw: &[u8], dict: &Dict, index: usize) -> Result<Vec<u8>> {
        let params = PredictorParams::from_params(&decode_params(dict, index));
        let predicted = predictor::predict(raw.to_vec(), &params)?;

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&predicted).map_err(io_error)?;

        encoder.finish().map_err(io_error)
    }
}

fn inflate(data: &[u8]) -> Result<Vec<u8>> {
    match read_lenient(ZlibDecoder::new(data)) {
        Ok(decoded) => Ok(decoded),
        // Some producers omit the zlib header.
        Err(_) => read_lenient(DeflateDecoder::new(data)),
    }
}

/// Read everything from `reader`, keeping what was decoded before a
/// corrupt or truncated tail.
fn read_lenient(mut reader: impl Read) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut chunk = [0; 4096];

    loop {
        match reader.read(&mut chunk) {
            Ok(0) => return Ok(out),
            Ok(n) => out.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) if !out.is_empty() => {
                lwarn!("flate stream is corrupt, keeping {} decoded bytes: {}", out.len(), e);

                return Ok(out);
            }
            Err(e) => return Err(io_error(e)),
        }
    }
}

fn io_error(e: std::io::Error) -> Error {
    Error::codec("FlateDecode", e.to_string())
}

#[cfg(test)]
mod tests {
    use super::FLATE;
    use crate::error::Error;
    use crate::filter::Codec;
    use crate::object::keys::{COLUMNS, DECODE_PARMS, FILTER, PREDICTOR};
    use crate::object::{Dict, Name};
    use flate2::Compression;
    use flate2::write::DeflateEncoder;
    use std::io::{Read, Write};

    fn flate_dict() -> Dict {
        let mut dict = Dict::new();
        dict.set(FILTER, Name::new(b"FlateDecode"));
        dict
    }

    #[test]
    fn roundtrip() {
        let dict = flate_dict();
        let data = b"0 0 m 100 100 l S ".repeat(50);
        let encoded = FLATE.encode(&data, &dict, 0).unwrap();

        assert!(encoded.len() < data.len());
        assert_eq!(FLATE.decode(&encoded, &dict, 0).unwrap(), data);
    }

    #[test]
    fn raw_deflate_fallback() {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"no zlib header").unwrap();
        let encoded = encoder.finish().unwrap();

        assert_eq!(FLATE.decode(&encoded, &flate_dict(), 0).unwrap(), b"no zlib header");
    }

    #[test]
    fn truncated_keeps_prefix() {
        let dict = flate_dict();
        let mut state = 1u32;
        let data: Vec<u8> = (0..20_000)
            .map(|_| {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                (state >> 16) as u8
            })
            .collect();
        let encoded = FLATE.encode(&data, &dict, 0).unwrap();

        let decoded = FLATE.decode(&encoded[..encoded.len() / 2], &dict, 0).unwrap();
        assert!(!decoded.is_empty());
        assert!(data.starts_with(&decoded));
    }

    #[test]
    fn garbage() {
        assert!(matches!(
            FLATE.decode(b"\xff\xfe\xfd", &flate_dict(), 0),
            Err(Error::Codec { filter: "FlateDecode", .. })
        ));
    }

    #[test]
    fn with_png_predictor() {
        let mut params = Dict::new();
        params.set_int(PREDICTOR, 12);
        params.set_int(COLUMNS, 2);
        let mut dict = flate_dict();
        dict.set(DECODE_PARMS, params);

        let rows = [1, 2, 2, 3];
        let encoded = FLATE.encode(&rows, &dict, 0).unwrap();

        let mut inflated = Vec::new();
        flate2::read::ZlibDecoder::new(encoded.as_slice())
            .read_to_end(&mut inflated)
            .unwrap();
        assert_eq!(inflated, [2, 1, 2, 2, 1, 1]);

        assert_eq!(FLATE.decode(&encoded, &dict, 0).unwrap(), rows);
    }
}
