use super::{DiagnosticKind, ENDOBJ, ENDSTREAM, Parser, Source};
use crate::error::{Error, Result};
use crate::object::keys::LENGTH;
use crate::object::{Dict, ObjRef, Object, Stream};
use carousel_io::{PAGE_SIZE, RandomAccess, RandomAccessBuffer};

const MAX_OBJECT_NUMBER: u64 = 10_000_000_000;
const MAX_GENERATION_NUMBER: u64 = 65535;

/// The longest suffix the end scan has to hold back: a keyword plus CRLF.
const SCAN_TAIL: usize = ENDSTREAM.len() + 2;

impl<S: Source> Parser<S> {
    /// Parse an indirect object definition `n g obj ... endobj`.
    pub fn parse_indirect_object(&mut self) -> Result<(ObjRef, Object)> {
        let offset = self.offset();
        let obj_number = self.read_unsigned()?;

        if obj_number >= MAX_OBJECT_NUMBER {
            return Err(Error::syntax(offset, "object number out of range"));
        }

        let offset = self.offset();
        let gen_number = self.read_unsigned()?;

        if gen_number > MAX_GENERATION_NUMBER {
            return Err(Error::syntax(offset, "generation number out of range"));
        }

        self.read_expected_string(b"obj")?;

        let id = ObjRef::new(obj_number, gen_number as u32);
        let mut object = self.parse_object()?.unwrap_or_default();
        let mut keyword = self.read_token()?;

        if keyword.as_slice() == b"stream" {
            self.source.unread_bytes(&keyword)?;

            let Object::Dict(dict) = object else {
                return Err(Error::syntax(
                    self.offset(),
                    "stream not preceded by a dictionary",
                ));
            };

            object = Object::Stream(self.parse_stream(dict)?);
            keyword = self.read_token()?;
        }

        if !keyword.starts_with(ENDOBJ) {
            self.diagnose(DiagnosticKind::MissingEndobj);
            self.source.unread_bytes(&keyword)?;
        }

        ltrace!("parsed object {}", id);

        Ok((id, object))
    }

    /// Parse the data of a stream whose dictionary was just parsed.
    ///
    /// The source must be positioned before the `stream` keyword. If the
    /// `/Length` of the stream is missing or doesn't point to `endstream`,
    /// the data is taken up to the next `endstream` or `endobj` keyword
    /// and `/Length` is corrected.
    pub fn parse_stream(&mut self, mut dict: Dict) -> Result<Stream> {
        let keyword = self.read_token()?;

        if keyword.as_slice() != b"stream" {
            return Err(Error::syntax(self.offset(), "expected 'stream'"));
        }

        self.skip_stream_eol()?;

        let length = dict.get(LENGTH).and_then(|l| l.as_i64());

        let valid = match length {
            Some(length) if length >= 0 => self.validate_stream_length(length as u64)?,
            _ => false,
        };

        let mut raw: Box<dyn RandomAccess + Send> = match &self.scratch {
            Some(scratch) => Box::new(scratch.create_buffer()?),
            None => Box::new(RandomAccessBuffer::new()),
        };

        match (valid, length) {
            (true, Some(length)) => self.copy_stream_data(length as u64, raw.as_mut())?,
            _ => {
                self.diagnose(DiagnosticKind::InvalidStreamLength);

                self.read_until_end_stream(raw.as_mut())?;
                dict.set_int(LENGTH, raw.len()? as i64);
            }
        }

        let end = self.read_token()?;

        if end.as_slice() == ENDOBJ {
            self.diagnose(DiagnosticKind::MissingEndstream);
            self.source.unread_bytes(&end)?;
        } else if end.len() > ENDSTREAM.len() && end.starts_with(ENDSTREAM) {
            // Something glued to the keyword, like `endstreamendobj`.
            self.diagnose(DiagnosticKind::MissingEndstream);
            self.source.unread_bytes(&end[ENDSTREAM.len()..])?;
        } else if end.as_slice() != ENDSTREAM {
            return Err(Error::syntax(self.offset(), "expected 'endstream'"));
        }

        Ok(Stream::from_parts(dict, raw, self.scratch.clone()))
    }

    /// Copy `length` bytes into `raw`, one page at a time.
    fn copy_stream_data(
        &mut self,
        length: u64,
        raw: &mut (dyn RandomAccess + Send),
    ) -> Result<()> {
        let mut remaining = length;

        while remaining > 0 {
            let count = remaining.min(PAGE_SIZE as u64) as usize;
            raw.write(&self.source.read_fully(count)?)?;
            remaining -= count as u64;
        }

        Ok(())
    }

    /// The `stream` keyword must be followed by CRLF or LF.
    fn skip_stream_eol(&mut self) -> Result<()> {
        let mut c = self.source.read()?;

        while c == Some(b' ') {
            c = self.source.read()?;
        }

        match c {
            Some(b'\r') => match self.source.read()? {
                Some(b'\n') => {}
                next => {
                    self.diagnose(DiagnosticKind::BareCarriageReturn);

                    if let Some(next) = next {
                        self.source.unread(next)?;
                    }
                }
            },
            Some(b'\n') | None => {}
            Some(other) => self.source.unread(other)?,
        }

        Ok(())
    }

    fn validate_stream_length(&mut self, length: u64) -> Result<bool> {
        let origin = self.source.position()?;

        let Some(end) = origin.checked_add(length) else {
            return Ok(false);
        };

        if end > self.source.len()? {
            ldebug!("stream length {} exceeds the data at offset {}", length, origin);

            return Ok(false);
        }

        self.source.seek(end)?;
        self.skip_spaces()?;
        let valid = self.is_next(ENDSTREAM)?;
        self.source.seek(origin)?;

        Ok(valid)
    }

    fn is_next(&mut self, expected: &[u8]) -> Result<bool> {
        let mut read = Vec::with_capacity(expected.len());

        while read.len() < expected.len() {
            match self.source.read()? {
                Some(c) => read.push(c),
                None => break,
            }
        }

        self.source.unread_bytes(&read)?;

        Ok(read == expected)
    }

    /// Copy everything up to the next `endstream` or `endobj` into `raw`.
    ///
    /// The keyword is left in the source. A single trailing end-of-line
    /// marker is not part of the data.
    fn read_until_end_stream(&mut self, raw: &mut (dyn RandomAccess + Send)) -> Result<()> {
        let mut pending = Vec::with_capacity(PAGE_SIZE + SCAN_TAIL);

        while let Some(c) = self.source.read()? {
            pending.push(c);

            if let Some(keyword) = [ENDSTREAM, ENDOBJ]
                .into_iter()
                .find(|k| pending.ends_with(k))
            {
                pending.truncate(pending.len() - keyword.len());
                self.source.unread_bytes(keyword)?;

                break;
            }

            if pending.len() == PAGE_SIZE + SCAN_TAIL {
                raw.write(&pending[..PAGE_SIZE])?;
                pending.drain(..PAGE_SIZE);
            }
        }

        if pending.ends_with(b"\r\n") {
            pending.truncate(pending.len() - 2);
        } else if pending.ends_with(b"\n") || pending.ends_with(b"\r") {
            pending.truncate(pending.len() - 1);
        }

        raw.write(&pending)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::object::keys::LENGTH;
    use crate::object::{ObjRef, Object, ObjectPool, Resolver};
    use crate::parser::{DiagnosticKind, Parser};
    use carousel_io::{PAGE_SIZE, ScratchFile};
    use std::sync::Arc;

    fn kinds(parser: &Parser<impl crate::parser::Source>) -> Vec<DiagnosticKind> {
        parser.diagnostics().iter().map(|d| d.kind).collect()
    }

    #[test]
    fn stream_with_length() {
        let data = b"1 0 obj\n<< /Length 5 >>\nstream\r\nhello\r\nendstream\nendobj";
        let mut parser = Parser::from_bytes(data);
        let (id, object) = parser.parse_indirect_object().unwrap();

        assert_eq!(id, ObjRef::new(1, 0));
        let stream = object.as_stream().unwrap();
        assert_eq!(stream.raw_data().unwrap(), b"hello");
        assert!(parser.diagnostics().is_empty());
    }

    #[test]
    fn stream_with_wrong_length() {
        let data = b"<< /Length 100 >>\nstream\nhello world\nendstream";
        let mut parser = Parser::from_bytes(data);
        let dict = parser.parse_dict().unwrap();
        let stream = parser.parse_stream(dict).unwrap();

        assert_eq!(stream.raw_data().unwrap(), b"hello world");
        assert_eq!(stream.dict().get_int(LENGTH, 0), 11);
        assert_eq!(kinds(&parser), vec![DiagnosticKind::InvalidStreamLength]);
    }

    #[test]
    fn stream_without_length() {
        let data = b"<< >>stream\r\nabc\r\nendstream";
        let mut parser = Parser::from_bytes(data);
        let dict = parser.parse_dict().unwrap();
        let stream = parser.parse_stream(dict).unwrap();

        assert_eq!(stream.raw_data().unwrap(), b"abc");
    }

    #[test]
    fn stream_with_referenced_length() {
        let pool = ObjectPool::new();
        pool.insert(ObjRef::new(2, 0), 3);

        let data = b"<< /Length 2 0 R >>\nstream\nabc\nendstream";
        let mut parser = Parser::from_bytes(data).with_pool(pool.clone() as Arc<dyn Resolver>);
        let dict = parser.parse_dict().unwrap();
        let stream = parser.parse_stream(dict).unwrap();

        assert_eq!(stream.raw_data().unwrap(), b"abc");
        assert!(parser.diagnostics().is_empty());
    }

    #[test]
    fn stream_bare_carriage_return() {
        let data = b"<< /Length 3 >>\nstream\rabc\nendstream";
        let mut parser = Parser::from_bytes(data);
        let dict = parser.parse_dict().unwrap();
        let stream = parser.parse_stream(dict).unwrap();

        assert_eq!(stream.raw_data().unwrap(), b"abc");
        assert_eq!(kinds(&parser), vec![DiagnosticKind::BareCarriageReturn]);
    }

    #[test]
    fn stream_terminated_by_endobj() {
        let data = b"1 0 obj << >> stream\nabc\nendobj";
        let mut parser = Parser::from_bytes(data);
        let (_, object) = parser.parse_indirect_object().unwrap();

        assert_eq!(object.as_stream().unwrap().raw_data().unwrap(), b"abc");
        assert_eq!(
            kinds(&parser),
            vec![
                DiagnosticKind::InvalidStreamLength,
                DiagnosticKind::MissingEndstream
            ]
        );
        assert!(parser.is_eof().unwrap());
    }

    #[test]
    fn stream_in_scratch_file() {
        let scratch = Arc::new(ScratchFile::main_memory_only());
        let data = b"<< /Length 4 >>\nstream\nabcd\nendstream";
        let mut parser = Parser::from_bytes(data).with_scratch(scratch.clone());
        let dict = parser.parse_dict().unwrap();
        let stream = parser.parse_stream(dict).unwrap();

        assert_eq!(stream.raw_data().unwrap(), b"abcd");
        assert_eq!(scratch.page_count() - scratch.free_page_count(), 1);
    }

    #[test]
    fn long_stream_without_length() {
        let body: Vec<u8> = (0..3 * PAGE_SIZE + 100).map(|i| b'a' + (i % 26) as u8).collect();
        let mut data = b"<< >>\nstream\n".to_vec();
        data.extend_from_slice(&body);
        data.extend_from_slice(b"\r\nendstream");

        let scratch = Arc::new(ScratchFile::main_memory_only());
        let mut parser = Parser::from_bytes(&data).with_scratch(scratch.clone());
        let dict = parser.parse_dict().unwrap();
        let stream = parser.parse_stream(dict).unwrap();

        assert_eq!(stream.raw_data().unwrap(), body);
        assert_eq!(stream.get_int(LENGTH, 0), body.len() as i64);
        assert_eq!(scratch.page_count() - scratch.free_page_count(), 4);
    }

    #[test]
    fn long_stream_with_length() {
        let body = vec![7; 2 * PAGE_SIZE + 1];
        let mut data = format!("<< /Length {} >>\nstream\n", body.len()).into_bytes();
        data.extend_from_slice(&body);
        data.extend_from_slice(b"\nendstream");

        let scratch = Arc::new(ScratchFile::main_memory_only());
        let mut parser = Parser::from_bytes(&data).with_scratch(scratch.clone());
        let dict = parser.parse_dict().unwrap();
        let stream = parser.parse_stream(dict).unwrap();

        assert_eq!(stream.raw_data().unwrap(), body);
        assert_eq!(scratch.page_count() - scratch.free_page_count(), 3);
        assert!(parser.diagnostics().is_empty());
    }

    #[test]
    fn stream_without_dict() {
        let data = b"1 0 obj 5 stream\nabc\nendstream endobj";
        assert!(matches!(
            Parser::from_bytes(data).parse_indirect_object(),
            Err(Error::Syntax { .. })
        ));
    }

    #[test]
    fn indirect_object() {
        let mut parser = Parser::from_bytes(b"12 3 obj\n(text)\nendobj\n13 0 obj 7 endobj");

        let (id, object) = parser.parse_indirect_object().unwrap();
        assert_eq!(id, ObjRef::new(12, 3));
        assert_eq!(object, Object::from(crate::object::PdfString::from("text")));

        let (id, object) = parser.parse_indirect_object().unwrap();
        assert_eq!(id, ObjRef::new(13, 0));
        assert_eq!(object, Object::from(7));
    }

    #[test]
    fn indirect_object_missing_endobj() {
        let mut parser = Parser::from_bytes(b"1 0 obj 42 2 0 obj null endobj");
        let (_, object) = parser.parse_indirect_object().unwrap();

        assert_eq!(object, Object::from(42));
        assert_eq!(kinds(&parser), vec![DiagnosticKind::MissingEndobj]);

        let (id, object) = parser.parse_indirect_object().unwrap();
        assert_eq!(id, ObjRef::new(2, 0));
        assert!(object.is_null());
    }

    #[test]
    fn generation_out_of_range() {
        assert!(
            Parser::from_bytes(b"1 65536 obj null endobj")
                .parse_indirect_object()
                .is_err()
        );
    }
}
