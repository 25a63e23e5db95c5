//! Streams.

use crate::error::{Error, Result};
use crate::filter::{self, Codec};
use crate::object::keys::{DECODE_PARMS, FILTER, LENGTH};
use crate::object::{Dict, Object, Visitor};
use crate::sync::MutexExt;
use carousel_io::{RandomAccess, RandomAccessBuffer, ScratchFile};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex};

type RawBuffer = Box<dyn RandomAccess + Send>;

/// The filter entries a decoded result was produced with.
#[derive(PartialEq)]
struct Chain {
    filter: Option<Object>,
    params: Option<Object>,
}

impl Chain {
    fn of(dict: &Dict) -> Self {
        Self {
            filter: dict.get(FILTER),
            params: dict.get(DECODE_PARMS),
        }
    }
}

struct StreamData {
    raw: RawBuffer,
    scratch: Option<Arc<ScratchFile>>,
    decoded: Option<(Chain, Arc<[u8]>)>,
    closed: bool,
}

impl StreamData {
    fn check_closed(&self) -> Result<()> {
        if self.closed {
            Err(Error::StreamClosed)
        } else {
            Ok(())
        }
    }
}

/// A PDF stream: a dictionary together with its encoded data.
///
/// The encoded bytes live in a buffer owned by the stream, either in plain
/// memory or in pages of a shared [`ScratchFile`]. Like dictionaries and
/// arrays, cloned streams share their buffer until one of them writes new
/// data or is closed. That handle then moves to a buffer of its own, so
/// changes never show through another clone.
///
/// The stream dereferences to its dictionary.
#[derive(Clone)]
pub struct Stream {
    dict: Dict,
    data: Arc<Mutex<StreamData>>,
}

impl Stream {
    /// Create an empty stream whose data is kept in memory.
    pub fn new() -> Self {
        Self::from_buffer(Dict::new(), RandomAccessBuffer::new())
    }

    /// Create an empty stream whose data is kept in pages of `scratch`.
    pub fn with_scratch(scratch: &Arc<ScratchFile>) -> Result<Self> {
        Ok(Self::from_parts(
            Dict::new(),
            Box::new(scratch.create_buffer()?),
            Some(scratch.clone()),
        ))
    }

    /// Create a stream from a dictionary and its encoded data.
    ///
    /// The dictionary is taken as is, in particular `/Length` is not
    /// updated.
    pub fn from_raw(dict: Dict, raw: Vec<u8>) -> Self {
        Self::from_buffer(dict, RandomAccessBuffer::from(raw))
    }

    /// Create a stream from a dictionary and a buffer holding the encoded
    /// data.
    ///
    /// Data written through a clone of the stream is kept in memory.
    pub fn from_buffer(dict: Dict, buffer: impl RandomAccess + Send + 'static) -> Self {
        Self::from_parts(dict, Box::new(buffer), None)
    }

    pub(crate) fn from_parts(
        dict: Dict,
        raw: RawBuffer,
        scratch: Option<Arc<ScratchFile>>,
    ) -> Self {
        Self {
            dict,
            data: Arc::new(Mutex::new(StreamData {
                raw,
                scratch,
                decoded: None,
                closed: false,
            })),
        }
    }

    /// The dictionary of the stream.
    pub fn dict(&self) -> &Dict {
        &self.dict
    }

    /// Consume the stream, returning its dictionary.
    pub fn into_dict(self) -> Dict {
        self.dict
    }

    /// The length of the encoded data.
    pub fn length(&self) -> Result<u64> {
        let data = self.data.get();
        data.check_closed()?;

        Ok(data.raw.len()?)
    }

    /// A copy of the encoded data.
    pub fn raw_data(&self) -> Result<Vec<u8>> {
        let mut data = self.data.get();
        data.check_closed()?;

        Ok(data.raw.to_vec()?)
    }

    /// Replace the encoded data, leaving the filter entries untouched.
    pub fn set_raw_data(&mut self, raw: &[u8]) -> Result<()> {
        self.write_raw(raw, None)?;
        self.dict.set_int(LENGTH, raw.len() as i64);

        Ok(())
    }

    /// The decoded data.
    ///
    /// All filters are applied in order. The result is cached until the
    /// data or the filter entries of the dictionary change.
    pub fn decoded(&self) -> Result<Arc<[u8]>> {
        let chain = Chain::of(&self.dict);
        let mut data = self.data.get();
        data.check_closed()?;

        if let Some((cached, decoded)) = &data.decoded
            && *cached == chain
        {
            return Ok(decoded.clone());
        }

        let raw = data.raw.to_vec()?;
        let decoded: Arc<[u8]> = Arc::from(filter::decode(&raw, &self.dict)?);
        data.decoded = Some((chain, decoded.clone()));

        Ok(decoded)
    }

    /// Replace the data of the stream with `decoded`, encoded through
    /// `filter`.
    ///
    /// `filter` becomes the new `/Filter` entry and may be a name or an
    /// array of names. Passing `None` stores the data unencoded. The filters
    /// are applied in reverse order, so that decoding in order yields
    /// `decoded` again. If encoding fails, the stream is left unchanged.
    pub fn set_data(&mut self, decoded: &[u8], filter: Option<Object>) -> Result<()> {
        let mut dict = self.dict.clone();
        dict.set(FILTER, filter);

        let encoded = filter::encode(decoded, &dict)?;
        self.write_raw(&encoded, Some((Chain::of(&dict), Arc::from(decoded))))?;

        dict.set_int(LENGTH, encoded.len() as i64);
        self.dict = dict;

        Ok(())
    }

    /// The codecs of the `/Filter` entry, in decoding order.
    pub fn filters(&self) -> Result<Vec<&'static dyn Codec>> {
        filter::codecs(&self.dict)
    }

    /// Release the buffer of the stream. Every later access to the data
    /// fails.
    ///
    /// The pages of a buffer that is still shared with a clone are released
    /// once the last clone is closed or dropped.
    pub fn close(&mut self) -> Result<()> {
        if Arc::strong_count(&self.data) > 1 {
            let mut raw: RawBuffer = Box::new(RandomAccessBuffer::new());
            raw.close()?;

            self.data = Arc::new(Mutex::new(StreamData {
                raw,
                scratch: None,
                decoded: None,
                closed: true,
            }));

            return Ok(());
        }

        let mut data = self.data.get();

        if data.closed {
            return Ok(());
        }

        data.closed = true;
        data.decoded = None;

        Ok(data.raw.close()?)
    }

    /// Whether the stream was closed.
    pub fn is_closed(&self) -> bool {
        self.data.get().closed
    }

    /// Copy the dictionary and the encoded data into a new in-memory
    /// stream.
    pub fn deep_clone(&self) -> Result<Self> {
        Ok(Self::from_raw(self.dict.deep_clone(), self.raw_data()?))
    }

    /// Dispatch to [`Visitor::visit_stream`].
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_stream(self)
    }

    fn write_raw(&mut self, raw: &[u8], decoded: Option<(Chain, Arc<[u8]>)>) -> Result<()> {
        let scratch = {
            let data = self.data.get();
            data.check_closed()?;

            data.scratch.clone()
        };

        // A buffer shared with a clone is left to the clone.
        if Arc::strong_count(&self.data) > 1 {
            let raw: RawBuffer = match &scratch {
                Some(scratch) => Box::new(scratch.create_buffer()?),
                None => Box::new(RandomAccessBuffer::new()),
            };

            *self = Self::from_parts(std::mem::take(&mut self.dict), raw, scratch);
        }

        let mut data = self.data.get();
        data.raw.clear()?;
        data.raw.write(raw)?;
        data.decoded = decoded;

        Ok(())
    }
}

impl Default for Stream {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Stream {
    type Target = Dict;

    fn deref(&self) -> &Self::Target {
        &self.dict
    }
}

impl DerefMut for Stream {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.dict
    }
}

impl PartialEq for Stream {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data) && self.dict == other.dict
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("dict", &self.dict)
            .field("length", &self.length().ok())
            .finish()
    }
}
