//! Stream filters.
//!
//! A [`Codec`] turns the encoded bytes of a stream into raw bytes and back.
//! Codecs are looked up by name through the process-wide registry, which
//! knows all standard filters under their full and abbreviated names.

mod ascii_85;
mod ascii_hex;
mod crypt;
mod flate;
mod image;
mod lzw;
mod predictor;
mod run_length;

use crate::error::{Error, Result};
use crate::object::keys::*;
use crate::object::{Dict, Name, Object};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// A stream filter.
pub trait Codec: Send + Sync {
    /// The full name of the filter, like `FlateDecode`.
    fn name(&self) -> &'static str;

    /// Decode `encoded`.
    ///
    /// `dict` is the stream dictionary and `index` the position of this
    /// codec in its `/Filter` chain, which selects the decode parameters.
    fn decode(&self, encoded: &[u8], dict: &Dict, index: usize) -> Result<Vec<u8>>;

    /// Encode `raw`. The arguments have the same meaning as for
    /// [`Codec::decode`].
    fn encode(&self, raw: &[u8], dict: &Dict, index: usize) -> Result<Vec<u8>>;
}

impl std::fmt::Debug for dyn Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

static REGISTRY: LazyLock<FxHashMap<&'static [u8], &'static dyn Codec>> = LazyLock::new(|| {
    let entries: [(&[&'static [u8]], &'static dyn Codec); 10] = [
        (&[FLATE_DECODE, FLATE_DECODE_ABBREVIATION], &flate::FLATE),
        (&[LZW_DECODE, LZW_DECODE_ABBREVIATION], &lzw::LZW),
        (&[ASCII_HEX_DECODE, ASCII_HEX_DECODE_ABBREVIATION], &ascii_hex::ASCII_HEX),
        (&[ASCII85_DECODE, ASCII85_DECODE_ABBREVIATION], &ascii_85::ASCII_85),
        (&[RUN_LENGTH_DECODE, RUN_LENGTH_DECODE_ABBREVIATION], &run_length::RUN_LENGTH),
        (&[CCITTFAX_DECODE, CCITTFAX_DECODE_ABBREVIATION], &image::CCITT_FAX),
        (&[DCT_DECODE, DCT_DECODE_ABBREVIATION], &image::DCT),
        (&[JPX_DECODE], &image::JPX),
        (&[JBIG2_DECODE], &image::JBIG2),
        (&[CRYPT], &crypt::CRYPT),
    ];

    entries
        .into_iter()
        .flat_map(|(names, codec)| names.iter().map(move |name| (*name, codec)))
        .collect()
});

/// Return the codec registered under `name`.
///
/// Full and abbreviated names yield the same instance.
pub fn get(name: &[u8]) -> Result<&'static dyn Codec> {
    REGISTRY.get(name).copied().ok_or_else(|| {
        let name = String::from_utf8_lossy(name).into_owned();
        lwarn!("unsupported filter: {}", name);

        Error::UnsupportedFilter(name)
    })
}

/// The names of all registered filters.
pub fn names() -> impl Iterator<Item = &'static [u8]> {
    REGISTRY.keys().copied()
}

/// The filter names of `dict`, in decoding order.
///
/// Only `/Filter` is consulted. In a stream dictionary `/F` names an
/// external file, the abbreviation is reserved for inline images.
pub fn filter_names(dict: &Dict) -> Result<Vec<Name>> {
    match dict.get(FILTER) {
        None => Ok(vec![]),
        Some(Object::Name(name)) => Ok(vec![name]),
        Some(Object::Array(array)) => (0..array.len())
            .filter_map(|i| array.get_object(i))
            .map(|o| match o {
                Object::Name(name) => Ok(name),
                _ => Err(Error::InvalidFilterEntry),
            })
            .collect(),
        Some(_) => Err(Error::InvalidFilterEntry),
    }
}

/// The codecs of `dict`, in decoding order.
pub fn codecs(dict: &Dict) -> Result<Vec<&'static dyn Codec>> {
    filter_names(dict)?
        .iter()
        .map(|name| get(name))
        .collect()
}

/// Apply all filters of `dict` to `encoded`, in order.
pub fn decode(encoded: &[u8], dict: &Dict) -> Result<Vec<u8>> {
    let codecs = codecs(dict)?;
    let mut data = encoded.to_vec();

    for (index, codec) in codecs.iter().enumerate() {
        ltrace!("applying {} at chain index {}", codec.name(), index);
        data = codec.decode(&data, dict, index)?;
    }

    Ok(data)
}

/// Encode `raw` with all filters of `dict`, in reverse order.
pub fn encode(raw: &[u8], dict: &Dict) -> Result<Vec<u8>> {
    let codecs = codecs(dict)?;
    let mut data = raw.to_vec();

    for (index, codec) in codecs.iter().enumerate().rev() {
        data = codec.encode(&data, dict, index)?;
    }

    Ok(data)
}

/// The decode parameters of the filter at `index` in the chain of `dict`.
///
/// A single filter name pairs with a dictionary in `/DecodeParms`, a filter
/// array with an array whose entries are dictionaries or `null`. Missing or
/// mismatched parameters yield an empty dictionary.
pub fn decode_params(dict: &Dict, index: usize) -> Dict {
    let filter = dict.get(FILTER);
    let params = dict.get(DECODE_PARMS);

    match (filter, params) {
        (Some(Object::Name(_)), Some(Object::Dict(params))) => params,
        (Some(Object::Array(_)), Some(Object::Array(params))) => {
            match params.get_object(index) {
                Some(Object::Dict(params)) => params,
                _ => Dict::new(),
            }
        }
        (Some(_), Some(params)) => {
            lwarn!("decode parameters {:?} don't match the filter entry", params);

            Dict::new()
        }
        _ => Dict::new(),
    }
}
