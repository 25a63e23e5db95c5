//! A lenient recursive-descent parser for PDF objects.
//!
//! The parser follows the lexical rules of PDF, but recovers from the kinds
//! of damage that are common in real-world files. Every recovery is recorded
//! as a [`Diagnostic`], while malformed input without a recovery path aborts
//! the current call with an [`Error`].

mod object_stream;
mod source;
mod stream;
mod string;

pub use object_stream::ObjectStreamParser;
pub use source::{RandomAccessSource, Reader, Source};

use crate::error::{Error, Result};
use crate::object::{Array, Dict, Name, Number, ObjRef, Object, Reference, Resolver};
use crate::trivia::{
    is_end_of_name, is_eol_character, is_number_character, is_white_space_character,
};
use carousel_io::ScratchFile;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

pub(crate) const ENDOBJ: &[u8] = b"endobj";
pub(crate) const ENDSTREAM: &[u8] = b"endstream";

type Token = SmallVec<[u8; 16]>;

/// The kind of a recoverable anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Something other than a name appeared where a dictionary key was
    /// expected. The parser skipped to the next key or the end of the
    /// dictionary.
    InvalidDictionaryKey,
    /// A dictionary key was not followed by a usable value.
    MissingDictionaryValue,
    /// An `R` that wasn't preceded by an object and generation number.
    CorruptReference,
    /// A token that doesn't start any object was skipped.
    StrayToken,
    /// The `stream` keyword was followed by a carriage return without a
    /// line feed.
    BareCarriageReturn,
    /// Stream data was terminated by something other than `endstream`.
    MissingEndstream,
    /// An indirect object was not terminated by `endobj`.
    MissingEndobj,
    /// The `/Length` of a stream was missing or wrong.
    InvalidStreamLength,
    /// The data ended inside of an array.
    UnterminatedArray,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidDictionaryKey => "invalid dictionary, expected a name",
            Self::MissingDictionaryValue => "bad dictionary declaration",
            Self::CorruptReference => "corrupt object reference",
            Self::StrayToken => "skipped unknown token",
            Self::BareCarriageReturn => "stream keyword followed by a bare carriage return",
            Self::MissingEndstream => "stream not terminated by 'endstream'",
            Self::MissingEndobj => "object not terminated by 'endobj'",
            Self::InvalidStreamLength => "missing or invalid stream length",
            Self::UnterminatedArray => "unterminated array",
        })
    }
}

/// A recoverable anomaly encountered while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    /// The byte offset at which the anomaly was detected.
    pub offset: u64,
    /// What went wrong.
    pub kind: DiagnosticKind,
}

enum Parsed {
    Object(Object),
    /// The `R` keyword, which is only meaningful after two integers.
    R,
}

/// Parses PDF objects from a [`Source`].
///
/// Indirect references are resolved against the object pool passed to
/// [`Parser::with_pool`]. Parsing a reference without a pool is an error.
/// Stream data is buffered in the [`ScratchFile`] passed to
/// [`Parser::with_scratch`], or in plain memory otherwise.
pub struct Parser<S> {
    source: S,
    pool: Option<Arc<dyn Resolver>>,
    scratch: Option<Arc<ScratchFile>>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<Reader<'a>> {
    /// Create a parser over a byte slice.
    pub fn from_bytes(data: &'a [u8]) -> Self {
        Self::new(Reader::new(data))
    }
}

impl<S: Source> Parser<S> {
    /// Create a parser reading from `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            pool: None,
            scratch: None,
            diagnostics: vec![],
        }
    }

    /// Resolve indirect references against `pool`.
    pub fn with_pool(mut self, pool: Arc<dyn Resolver>) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Buffer stream data in pages of `scratch`.
    pub fn with_scratch(mut self, scratch: Arc<ScratchFile>) -> Self {
        self.scratch = Some(scratch);
        self
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consume the parser, returning its source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// The current position in the source.
    pub fn position(&self) -> Result<u64> {
        self.source.position()
    }

    /// Move to `position` in the source.
    pub fn seek(&mut self, position: u64) -> Result<()> {
        self.source.seek(position)
    }

    /// Whether the source is exhausted.
    pub fn is_eof(&mut self) -> Result<bool> {
        self.source.is_eof()
    }

    /// The anomalies recovered from so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Remove and return the anomalies recovered from so far.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    fn offset(&self) -> u64 {
        self.source.position().unwrap_or_default()
    }

    fn diagnose(&mut self, kind: DiagnosticKind) {
        let offset = self.offset();
        lwarn!("{} at offset {}", kind, offset);

        self.diagnostics.push(Diagnostic { offset, kind });
    }

    /// Skip white space and comments.
    pub fn skip_spaces(&mut self) -> Result<()> {
        while let Some(c) = self.source.read()? {
            if is_white_space_character(c) {
                continue;
            }

            if c == b'%' {
                while let Some(c) = self.source.peek()? {
                    if is_eol_character(c) {
                        break;
                    }

                    self.source.read()?;
                }

                continue;
            }

            return self.source.unread(c);
        }

        Ok(())
    }

    /// Skip white space, then read a bare token up to the next delimiter.
    pub fn read_token(&mut self) -> Result<Token> {
        self.skip_spaces()?;
        let mut token = Token::new();

        while let Some(c) = self.source.peek()? {
            if is_end_of_name(c) {
                break;
            }

            token.push(c);
            self.source.read()?;
        }

        Ok(token)
    }

    fn read_expected_char(&mut self, expected: u8) -> Result<()> {
        match self.source.read()? {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(Error::syntax(
                self.offset(),
                format!(
                    "expected '{}' but found '{}'",
                    expected as char,
                    c.escape_ascii()
                ),
            )),
            None => Err(Error::UnexpectedEof {
                offset: self.offset(),
            }),
        }
    }

    fn read_expected_string(&mut self, expected: &[u8]) -> Result<()> {
        self.skip_spaces()?;

        for &b in expected {
            self.read_expected_char(b)?;
        }

        Ok(())
    }

    fn is_digit(&mut self) -> Result<bool> {
        Ok(self.source.peek()?.is_some_and(|c| c.is_ascii_digit()))
    }

    /// Parse the next object.
    ///
    /// Returns `None` at the end of the data and when a token that doesn't
    /// start an object was skipped. A trailing `endobj` or `endstream` is
    /// left in the source.
    pub fn parse_object(&mut self) -> Result<Option<Object>> {
        match self.parse_dir_object()? {
            Some(Parsed::Object(object)) => Ok(Some(object)),
            Some(Parsed::R) => {
                self.diagnose(DiagnosticKind::CorruptReference);

                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn parse_dir_object(&mut self) -> Result<Option<Parsed>> {
        self.skip_spaces()?;

        let Some(c) = self.source.peek()? else {
            return Ok(None);
        };

        let object = match c {
            b'<' => {
                self.source.read()?;
                let next = self.source.peek()?;
                self.source.unread(b'<')?;

                if next == Some(b'<') {
                    let dict = self.parse_dict()?;
                    self.skip_spaces()?;

                    Object::Dict(dict)
                } else {
                    Object::String(self.parse_string()?)
                }
            }
            b'[' => Object::Array(self.parse_array()?),
            b'(' => Object::String(self.parse_string()?),
            b'/' => Object::Name(self.parse_name()?),
            b'n' => {
                self.read_expected_string(b"null")?;

                Object::Null
            }
            b't' | b'f' => Object::Boolean(self.parse_boolean()?),
            b'R' => {
                self.source.read()?;

                return Ok(Some(Parsed::R));
            }
            c if c.is_ascii_digit() || matches!(c, b'-' | b'+' | b'.') => {
                Object::Number(self.parse_number()?)
            }
            _ => {
                let token = self.read_token()?;

                if token.is_empty() {
                    return Err(Error::syntax(
                        self.offset(),
                        format!("unexpected character '{}'", c.escape_ascii()),
                    ));
                }

                if token.as_slice() == ENDOBJ || token.as_slice() == ENDSTREAM {
                    self.source.unread_bytes(&token)?;
                } else {
                    self.diagnose(DiagnosticKind::StrayToken);
                }

                return Ok(None);
            }
        };

        Ok(Some(Parsed::Object(object)))
    }

    /// Parse a dictionary.
    pub fn parse_dict(&mut self) -> Result<Dict> {
        self.read_expected_char(b'<')?;
        self.read_expected_char(b'<')?;
        self.skip_spaces()?;

        let mut dict = Dict::new();

        loop {
            self.skip_spaces()?;

            match self.source.peek()? {
                Some(b'>') => break,
                Some(b'/') => self.parse_dict_entry(&mut dict)?,
                _ => {
                    self.diagnose(DiagnosticKind::InvalidDictionaryKey);

                    if self.read_until_end_of_dict()? {
                        return Ok(dict);
                    }
                }
            }
        }

        self.read_expected_char(b'>')?;
        self.read_expected_char(b'>')?;

        Ok(dict)
    }

    /// Skip to the next `/` or `>`, which are left in the source.
    ///
    /// Returns `true` if an `endobj` or `endstream` keyword was found
    /// instead. The keyword is left in the source as well.
    fn read_until_end_of_dict(&mut self) -> Result<bool> {
        let mut window = SmallVec::<[u8; 9]>::new();

        loop {
            let Some(c) = self.source.read()? else {
                return Err(Error::UnexpectedEof {
                    offset: self.offset(),
                });
            };

            if c == b'/' || c == b'>' {
                self.source.unread(c)?;

                return Ok(false);
            }

            if window.len() == window.inline_size() {
                window.remove(0);
            }
            window.push(c);

            for keyword in [ENDSTREAM, ENDOBJ] {
                if window.ends_with(keyword) {
                    self.source.unread_bytes(keyword)?;

                    return Ok(true);
                }
            }
        }
    }

    fn parse_dict_entry(&mut self, dict: &mut Dict) -> Result<()> {
        let key = self.parse_name()?;
        let value = self.parse_dict_value()?;
        self.skip_spaces()?;

        // CMaps embedded as dictionaries carry PostScript `def`s.
        if self.source.peek()? == Some(b'd') {
            let token = self.read_token()?;

            if token.as_slice() == b"def" {
                self.skip_spaces()?;
            } else {
                self.source.unread_bytes(&token)?;
            }
        }

        match value {
            Some(mut value) => {
                value.set_direct(true);
                dict.set(key, value);
            }
            None => self.diagnose(DiagnosticKind::MissingDictionaryValue),
        }

        Ok(())
    }

    fn parse_dict_value(&mut self) -> Result<Option<Object>> {
        self.skip_spaces()?;
        let number_offset = self.offset();
        let number = self.parse_dir_object()?;
        self.skip_spaces()?;

        if !self.is_digit()? {
            return Ok(match number {
                Some(Parsed::Object(object)) => Some(object),
                Some(Parsed::R) => {
                    self.diagnose(DiagnosticKind::CorruptReference);

                    None
                }
                None => None,
            });
        }

        let generation_offset = self.offset();
        let generation = self.parse_dir_object()?;
        self.skip_spaces()?;
        self.read_expected_char(b'R')?;

        let Some(number) = reference_part(number) else {
            return Err(Error::syntax(number_offset, "expected an object number"));
        };

        let Some(generation) = reference_part(generation).and_then(|g| u32::try_from(g).ok())
        else {
            return Err(Error::syntax(generation_offset, "expected a generation number"));
        };

        self.reference(number as u64, generation, number_offset).map(Some)
    }

    /// Parse an array.
    ///
    /// Object references inside of the array are resolved against the
    /// object pool.
    pub fn parse_array(&mut self) -> Result<Array> {
        self.read_expected_char(b'[')?;
        self.skip_spaces()?;

        let mut array = Array::new();

        loop {
            match self.source.peek()? {
                Some(b']') => break,
                Some(_) => {}
                None => {
                    self.diagnose(DiagnosticKind::UnterminatedArray);

                    return Ok(array);
                }
            }

            let offset = self.offset();

            let element = match self.parse_dir_object()? {
                Some(Parsed::Object(object)) => Some(object),
                Some(Parsed::R) => self.pop_reference(&mut array, offset)?,
                None => None,
            };

            match element {
                Some(mut element) => {
                    element.set_direct(true);
                    array.push(element);
                }
                None => {
                    // An `endobj` or `endstream` means that the array was
                    // never closed.
                    let token = self.read_token()?;
                    self.source.unread_bytes(&token)?;

                    if token.as_slice() == ENDOBJ || token.as_slice() == ENDSTREAM {
                        return Ok(array);
                    }
                }
            }

            self.skip_spaces()?;
        }

        self.source.read()?;
        self.skip_spaces()?;

        Ok(array)
    }

    /// Replace the last two entries of `array`, which must be integers, with
    /// a reference.
    fn pop_reference(&mut self, array: &mut Array, offset: u64) -> Result<Option<Object>> {
        let Some(generation) = last_integer(array) else {
            self.diagnose(DiagnosticKind::CorruptReference);

            return Ok(None);
        };
        array.remove_at(array.len() - 1);

        let Some(number) = last_integer(array) else {
            self.diagnose(DiagnosticKind::CorruptReference);

            return Ok(None);
        };
        array.remove_at(array.len() - 1);

        let (Ok(number), Ok(generation)) = (u64::try_from(number), u32::try_from(generation))
        else {
            self.diagnose(DiagnosticKind::CorruptReference);

            return Ok(None);
        };

        self.reference(number, generation, offset).map(Some)
    }

    fn reference(&self, number: u64, generation: u32, offset: u64) -> Result<Object> {
        let pool = self
            .pool
            .as_ref()
            .ok_or(Error::ReferenceWithoutPool { offset })?;

        let id = ObjRef::new(number, generation);

        Ok(Object::Reference(Reference::new(id, pool)))
    }

    /// Parse a name.
    ///
    /// `#` followed by two hex digits is decoded as an escaped byte. Any
    /// other `#` is taken literally, as was common before PDF 1.2.
    pub fn parse_name(&mut self) -> Result<Name> {
        self.read_expected_char(b'/')?;

        let mut buffer = SmallVec::<[u8; 32]>::new();

        while let Some(c) = self.source.read()? {
            if c == b'#' {
                let first = self.source.read()?;
                let second = self.source.read()?;

                if let (Some(h), Some(l)) = (first, second)
                    && let (Some(high), Some(low)) = (hex_digit(h), hex_digit(l))
                {
                    buffer.push((high << 4) | low);
                    continue;
                }

                if let Some(second) = second {
                    self.source.unread(second)?;
                }

                if let Some(first) = first {
                    self.source.unread(first)?;
                }

                buffer.push(c);
            } else if is_end_of_name(c) {
                self.source.unread(c)?;
                break;
            } else {
                buffer.push(c);
            }
        }

        Ok(Name::new(&buffer))
    }

    /// Parse `true` or `false`.
    pub fn parse_boolean(&mut self) -> Result<bool> {
        let offset = self.offset();

        let (expected, value): (&[u8], bool) = match self.source.peek()? {
            Some(b't') => (b"true", true),
            Some(b'f') => (b"false", false),
            _ => return Err(Error::syntax(offset, "expected a boolean")),
        };

        let actual = self.source.read_fully(expected.len())?;

        if actual != expected {
            return Err(Error::syntax(
                offset,
                format!(
                    "expected '{}' but found '{}'",
                    expected.escape_ascii(),
                    actual.escape_ascii()
                ),
            ));
        }

        Ok(value)
    }

    fn parse_number(&mut self) -> Result<Number> {
        let mut token = Token::new();

        while let Some(c) = self.source.peek()? {
            if !is_number_character(c) {
                break;
            }

            token.push(c);
            self.source.read()?;
        }

        Ok(Number::from_token(&token))
    }

    /// Read an unsigned decimal integer.
    pub(crate) fn read_unsigned(&mut self) -> Result<u64> {
        self.skip_spaces()?;

        let offset = self.offset();
        let mut value: u64 = 0;
        let mut digits = 0;

        while let Some(c) = self.source.peek()? {
            if !c.is_ascii_digit() {
                break;
            }

            self.source.read()?;
            digits += 1;
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add((c - b'0') as u64))
                .ok_or_else(|| Error::syntax(offset, "number too large"))?;
        }

        if digits == 0 {
            return Err(Error::syntax(offset, "expected an integer"));
        }

        Ok(value)
    }
}

fn hex_digit(c: u8) -> Option<u8> {
    crate::trivia::hex_value(c)
}

fn last_integer(array: &Array) -> Option<i64> {
    match array.get(array.len().checked_sub(1)?)? {
        Object::Number(Number::Integer(i)) => Some(*i),
        _ => None,
    }
}

fn reference_part(parsed: Option<Parsed>) -> Option<i64> {
    match parsed? {
        Parsed::Object(Object::Number(Number::Integer(i))) if i >= 0 => Some(i),
        _ => None,
    }
}

impl<S> fmt::Debug for Parser<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("has_pool", &self.pool.is_some())
            .field("diagnostics", &self.diagnostics)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{DiagnosticKind, Parser};
    use crate::error::Error;
    use crate::object::keys::{CATALOG, COUNT, KIDS, PAGES, TYPE};
    use crate::object::{Name, Number, ObjRef, Object, ObjectPool, Resolver};
    use std::sync::Arc;

    fn parse(data: &[u8]) -> Object {
        Parser::from_bytes(data).parse_object().unwrap().unwrap()
    }

    fn kinds(parser: &Parser<super::Reader<'_>>) -> Vec<DiagnosticKind> {
        parser.diagnostics().iter().map(|d| d.kind).collect()
    }

    #[test]
    fn simple_objects() {
        assert_eq!(parse(b"null"), Object::Null);
        assert_eq!(parse(b"true"), Object::Boolean(true));
        assert_eq!(parse(b"  false "), Object::Boolean(false));
        assert_eq!(parse(b"42"), Object::from(42));
        assert_eq!(parse(b"-.5"), Object::from(-0.5));
        assert_eq!(parse(b"+17"), Object::from(17));
        assert_eq!(parse(b"/Type"), Object::from(Name::from(TYPE)));
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(parse(b"% a comment\n  % another\r 12"), Object::from(12));
    }

    #[test]
    fn end_of_data() {
        assert!(Parser::from_bytes(b"   % only a comment").parse_object().unwrap().is_none());
    }

    #[test]
    fn invalid_boolean() {
        assert!(matches!(
            Parser::from_bytes(b"trve").parse_object(),
            Err(Error::Syntax { .. })
        ));
    }

    #[test]
    fn catalog() {
        let pool = ObjectPool::new();
        let mut pages = crate::object::Dict::new();
        pages.set_name(TYPE, PAGES);
        pool.insert(ObjRef::new(3, 0), pages);

        let mut parser = Parser::from_bytes(b"<< /Type /Catalog /Pages 3 0 R >>")
            .with_pool(pool as Arc<dyn Resolver>);
        let object = parser.parse_object().unwrap().unwrap();
        let dict = object.as_dict().unwrap();

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get_name(TYPE).unwrap(), CATALOG);

        let reference = dict.get_raw(PAGES).unwrap().as_reference().unwrap().clone();
        assert_eq!(reference.id(), ObjRef::new(3, 0));
        assert_eq!(dict.get_dict(PAGES).unwrap().get_name(TYPE).unwrap(), PAGES);
        assert!(parser.diagnostics().is_empty());
    }

    #[test]
    fn reference_without_pool() {
        assert!(matches!(
            Parser::from_bytes(b"<< /Pages 3 0 R >>").parse_object(),
            Err(Error::ReferenceWithoutPool { offset: 10 })
        ));
        assert!(matches!(
            Parser::from_bytes(b"[3 0 R]").parse_object(),
            Err(Error::ReferenceWithoutPool { .. })
        ));
    }

    #[test]
    fn references_in_array() {
        let pool = ObjectPool::new();
        pool.insert(ObjRef::new(4, 0), 7);

        let mut parser =
            Parser::from_bytes(b"[1 4 0 R 2.5 (s)]").with_pool(pool as Arc<dyn Resolver>);
        let object = parser.parse_object().unwrap().unwrap();
        let array = object.as_array().unwrap();

        assert_eq!(array.len(), 4);
        assert_eq!(array.get(0), Some(&Object::from(1)));
        assert_eq!(array.get_object(1), Some(Object::from(7)));
        assert_eq!(array.get(2), Some(&Object::Number(Number::Real(2.5))));
    }

    #[test]
    fn unbalanced_paren_in_dict() {
        let object = parse(b"<< /Title ( (5)\r\n/Creator (x) >>");
        let dict = object.as_dict().unwrap();

        assert_eq!(dict.get_string(b"Title").unwrap().as_bytes(), b" (5");
        assert_eq!(dict.get_string(b"Creator").unwrap().as_bytes(), b"x");
    }

    #[test]
    fn hex_strings() {
        assert_eq!(
            parse(b"<4E6F2074>").as_string().unwrap().as_bytes(),
            b"No t"
        );
        assert_eq!(parse(b"<4E6>").as_string().unwrap().as_bytes(), b"N");
    }

    #[test]
    fn name_escapes() {
        assert_eq!(parse(b"/A#20B").as_name().unwrap().as_bytes(), b"A B");
        assert_eq!(parse(b"/A#2").as_name().unwrap().as_bytes(), b"A#2");
        assert_eq!(parse(b"/A#xy").as_name().unwrap().as_bytes(), b"A#xy");
        assert_eq!(parse(b"/#").as_name().unwrap().as_bytes(), b"#");
        assert_eq!(parse(b"/").as_name().unwrap().as_bytes(), b"");
    }

    #[test]
    fn name_ends_at_delimiter() {
        let object = parse(b"[/A/B(c)]");
        let array = object.as_array().unwrap();

        assert_eq!(array.len(), 3);
        assert_eq!(array.get_name(1).unwrap(), b"B");
    }

    #[test]
    fn nested_containers() {
        let object = parse(b"<< /Kids [ << /Count 1 >> [ ] ] /Count 2 >>");
        let dict = object.as_dict().unwrap();
        let kids = dict.get_array(KIDS).unwrap();

        assert_eq!(dict.get_int(COUNT, 0), 2);
        assert_eq!(kids.len(), 2);
        assert!(kids.get(0).unwrap().is_direct());
        assert_eq!(kids.get(0).unwrap().as_dict().unwrap().get_int(COUNT, 0), 1);
    }

    #[test]
    fn null_value_removes_key() {
        let object = parse(b"<< /A null /B 1 >>");
        let dict = object.as_dict().unwrap();

        assert!(!dict.contains_key(b"A"));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn invalid_dictionary_key() {
        let mut parser = Parser::from_bytes(b"<< /A 1 garbage /B 2 >>");
        let object = parser.parse_object().unwrap().unwrap();
        let dict = object.as_dict().unwrap();

        assert_eq!(dict.get_int(b"A", 0), 1);
        assert_eq!(dict.get_int(b"B", 0), 2);
        assert_eq!(kinds(&parser), vec![DiagnosticKind::InvalidDictionaryKey]);
    }

    #[test]
    fn dictionary_cut_off_by_endobj() {
        let mut parser = Parser::from_bytes(b"<< /A 1 ) endobj");
        let object = parser.parse_object().unwrap().unwrap();

        assert_eq!(object.as_dict().unwrap().get_int(b"A", 0), 1);
        assert_eq!(parser.read_token().unwrap().as_slice(), b"endobj");
    }

    #[test]
    fn dictionary_recovery_hits_eof() {
        assert!(matches!(
            Parser::from_bytes(b"<< /A 1 )").parse_object(),
            Err(Error::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn missing_dictionary_value() {
        let mut parser = Parser::from_bytes(b"<< /A xyz /B 2 >>");
        let object = parser.parse_object().unwrap().unwrap();
        let dict = object.as_dict().unwrap();

        assert!(!dict.contains_key(b"A"));
        assert_eq!(dict.get_int(b"B", 0), 2);
        assert_eq!(
            kinds(&parser),
            vec![
                DiagnosticKind::StrayToken,
                DiagnosticKind::MissingDictionaryValue
            ]
        );
    }

    #[test]
    fn postscript_def_is_skipped() {
        let mut parser = Parser::from_bytes(b"<< /Registry (Adobe) def /Ordering (Identity) def >>");
        let object = parser.parse_object().unwrap().unwrap();
        let dict = object.as_dict().unwrap();

        assert_eq!(dict.len(), 2);
        assert!(parser.diagnostics().is_empty());
    }

    #[test]
    fn invalid_reference_in_dict() {
        assert!(matches!(
            Parser::from_bytes(b"<< /A -1 0 R >>")
                .with_pool(ObjectPool::new() as Arc<dyn Resolver>)
                .parse_object(),
            Err(Error::Syntax { .. })
        ));
    }

    #[test]
    fn generation_out_of_range_in_dict() {
        let pool = ObjectPool::new() as Arc<dyn Resolver>;

        assert!(matches!(
            Parser::from_bytes(b"<< /A 1 4294967296 R >>")
                .with_pool(pool.clone())
                .parse_object(),
            Err(Error::Syntax { offset: 8, .. })
        ));

        let object = Parser::from_bytes(b"<< /A 1 4294967295 R >>")
            .with_pool(pool)
            .parse_object()
            .unwrap()
            .unwrap();
        let reference = object.as_dict().unwrap().get_raw(b"A").unwrap().clone();
        assert_eq!(
            reference.as_reference().unwrap().id(),
            ObjRef::new(1, u32::MAX)
        );
    }

    #[test]
    fn generation_out_of_range_in_array() {
        let mut parser = Parser::from_bytes(b"[1 4294967296 R 5]")
            .with_pool(ObjectPool::new() as Arc<dyn Resolver>);
        let object = parser.parse_object().unwrap().unwrap();

        assert_eq!(object.as_array().unwrap().len(), 1);
        assert_eq!(kinds(&parser), vec![DiagnosticKind::CorruptReference]);
    }

    #[test]
    fn stray_r_in_array() {
        let mut parser = Parser::from_bytes(b"[/A R 5]");
        let object = parser.parse_object().unwrap().unwrap();
        let array = object.as_array().unwrap();

        assert_eq!(array.len(), 2);
        assert_eq!(kinds(&parser), vec![DiagnosticKind::CorruptReference]);
    }

    #[test]
    fn unterminated_array() {
        let mut parser = Parser::from_bytes(b"[1 2");
        let object = parser.parse_object().unwrap().unwrap();

        assert_eq!(object.as_array().unwrap().len(), 2);
        assert_eq!(kinds(&parser), vec![DiagnosticKind::UnterminatedArray]);
    }

    #[test]
    fn array_cut_off_by_endobj() {
        let mut parser = Parser::from_bytes(b"[1 2 endobj");
        let object = parser.parse_object().unwrap().unwrap();

        assert_eq!(object.as_array().unwrap().len(), 2);
        assert_eq!(parser.read_token().unwrap().as_slice(), b"endobj");
    }

    #[test]
    fn stray_token_in_array() {
        let mut parser = Parser::from_bytes(b"[1 xyz 2]");
        let object = parser.parse_object().unwrap().unwrap();

        assert_eq!(object.as_array().unwrap().len(), 2);
        assert_eq!(kinds(&parser), vec![DiagnosticKind::StrayToken]);
    }

    #[test]
    fn diagnostics_can_be_taken() {
        let mut parser = Parser::from_bytes(b"[1 xyz]");
        parser.parse_object().unwrap();

        let diagnostics = parser.take_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].offset, 6);
        assert!(parser.diagnostics().is_empty());
    }

    #[test]
    fn unexpected_delimiter() {
        assert!(matches!(
            Parser::from_bytes(b")").parse_object(),
            Err(Error::Syntax { .. })
        ));
    }
}
