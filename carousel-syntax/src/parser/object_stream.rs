use super::{Diagnostic, Parser, RandomAccessSource};
use crate::error::{Error, Result};
use crate::object::keys::{FIRST, N, OBJ_STM, TYPE};
use crate::object::{ObjRef, Object, Resolver, Stream};
use carousel_io::RandomAccessBuffer;
use std::sync::Arc;

/// Parses the objects packed into an object stream.
///
/// The decoded data of an object stream starts with `/N` pairs of object
/// numbers and offsets. Each offset is relative to `/First`. All objects
/// in an object stream have generation number zero.
pub struct ObjectStreamParser {
    parser: Parser<RandomAccessSource<RandomAccessBuffer>>,
    count: u64,
    first: u64,
}

impl ObjectStreamParser {
    /// Decode `stream` and prepare to parse its objects.
    pub fn new(stream: &Stream) -> Result<Self> {
        let dict = stream.dict();

        if dict.get_name(TYPE).is_some_and(|t| t != OBJ_STM) {
            lwarn!("object stream has wrong /Type");
        }

        let count = dict.get_int(N, -1);

        if count < 0 {
            return Err(Error::syntax(0, "/N entry missing in object stream"));
        }

        let first = dict.get_int(FIRST, -1);

        if first < 0 {
            return Err(Error::syntax(0, "/First entry missing in object stream"));
        }

        let decoded = stream.decoded()?;
        let buffer = RandomAccessBuffer::from(decoded.to_vec());

        Ok(Self {
            parser: Parser::new(RandomAccessSource::new(buffer)),
            count: count as u64,
            first: first as u64,
        })
    }

    /// Resolve references inside of the packed objects against `pool`.
    pub fn with_pool(mut self, pool: Arc<dyn Resolver>) -> Self {
        self.parser = self.parser.with_pool(pool);
        self
    }

    /// Parse all objects of the stream.
    pub fn parse(&mut self) -> Result<Vec<(ObjRef, Object)>> {
        let mut offsets = Vec::with_capacity(self.count.min(1024) as usize);

        for _ in 0..self.count {
            let obj_number = self.parser.read_unsigned()?;
            let offset = self.parser.read_unsigned()?;
            offsets.push((obj_number, offset));
        }

        let mut objects = Vec::with_capacity(offsets.len());

        for (obj_number, offset) in offsets {
            let position = self
                .first
                .checked_add(offset)
                .ok_or_else(|| Error::syntax(offset, "object offset out of range"))?;
            self.parser.seek(position)?;

            match self.parser.parse_object()? {
                Some(object) => objects.push((ObjRef::new(obj_number, 0), object)),
                None => {
                    lwarn!("no object {} at offset {} of object stream", obj_number, position);
                }
            }
        }

        Ok(objects)
    }

    /// The anomalies recovered from while parsing.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.parser.diagnostics()
    }
}
