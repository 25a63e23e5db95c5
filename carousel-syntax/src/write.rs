//! Serialization of objects into PDF syntax.

use crate::error::Result;
use crate::object::keys::LENGTH;
use crate::object::{Array, Dict, Name, Number, ObjRef, Object, PdfString, Reference, Stream, Visitor};

/// Serializes objects into a byte buffer.
///
/// The output can be read back by the [`Parser`](crate::parser::Parser).
/// References are written as `n g R`, without touching their referents.
#[derive(Debug, Default)]
pub struct Writer {
    out: Vec<u8>,
}

impl Writer {
    /// Create a writer with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `object`.
    pub fn write(&mut self, object: &Object) -> Result<()> {
        object.accept(self)
    }

    /// Append `object` as the indirect object `id`.
    pub fn write_indirect(&mut self, id: ObjRef, object: &Object) -> Result<()> {
        self.out.extend_from_slice(
            format!("{} {} obj\n", id.obj_number, id.gen_number).as_bytes(),
        );
        self.write(object)?;
        self.out.extend_from_slice(b"\nendobj\n");

        Ok(())
    }

    /// The bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.out
    }

    /// Consume the writer, returning its buffer.
    pub fn finish(self) -> Vec<u8> {
        self.out
    }

    fn write_literal_string(&mut self, bytes: &[u8]) {
        self.out.push(b'(');

        for &b in bytes {
            match b {
                b'(' | b')' | b'\\' => self.out.extend_from_slice(&[b'\\', b]),
                b'\n' => self.out.extend_from_slice(b"\\n"),
                b'\r' => self.out.extend_from_slice(b"\\r"),
                b'\t' => self.out.extend_from_slice(b"\\t"),
                0x08 => self.out.extend_from_slice(b"\\b"),
                0x0c => self.out.extend_from_slice(b"\\f"),
                _ if is_printable(b) => self.out.push(b),
                // Always three digits, so that a following digit isn't
                // taken as part of the escape.
                _ => self.out.extend_from_slice(format!("\\{b:03o}").as_bytes()),
            }
        }

        self.out.push(b')');
    }

    fn write_hex_string(&mut self, bytes: &[u8]) {
        const HEX: &[u8; 16] = b"0123456789ABCDEF";

        self.out.push(b'<');

        for &b in bytes {
            self.out.push(HEX[(b >> 4) as usize]);
            self.out.push(HEX[(b & 0xf) as usize]);
        }

        self.out.push(b'>');
    }
}

impl Visitor for Writer {
    type Output = Result<()>;

    fn visit_null(&mut self) -> Self::Output {
        self.out.extend_from_slice(b"null");

        Ok(())
    }

    fn visit_boolean(&mut self, value: bool) -> Self::Output {
        self.out
            .extend_from_slice(if value { b"true" } else { b"false" });

        Ok(())
    }

    fn visit_number(&mut self, number: &Number) -> Self::Output {
        number.write_pdf(&mut self.out);

        Ok(())
    }

    fn visit_name(&mut self, name: &Name) -> Self::Output {
        name.write_pdf(&mut self.out);

        Ok(())
    }

    fn visit_string(&mut self, string: &PdfString) -> Self::Output {
        let bytes = string.as_bytes();
        let binary = bytes.iter().filter(|&&b| !is_printable(b)).count();

        if binary * 2 > bytes.len() {
            self.write_hex_string(bytes);
        } else {
            self.write_literal_string(bytes);
        }

        Ok(())
    }

    fn visit_array(&mut self, array: &Array) -> Self::Output {
        self.out.push(b'[');

        for (i, item) in array.iter().enumerate() {
            if i > 0 {
                self.out.push(b' ');
            }

            item.accept(self)?;
        }

        self.out.push(b']');

        Ok(())
    }

    fn visit_dict(&mut self, dict: &Dict) -> Self::Output {
        self.out.extend_from_slice(b"<<\n");

        for (key, value) in dict.iter() {
            key.write_pdf(&mut self.out);
            self.out.push(b' ');
            value.accept(self)?;
            self.out.push(b'\n');
        }

        self.out.extend_from_slice(b">>");

        Ok(())
    }

    fn visit_stream(&mut self, stream: &Stream) -> Self::Output {
        let raw = stream.raw_data()?;

        let mut dict = stream.dict().clone();
        dict.set_int(LENGTH, raw.len() as i64);
        self.visit_dict(&dict)?;

        self.out.extend_from_slice(b"\nstream\r\n");
        self.out.extend_from_slice(&raw);
        self.out.extend_from_slice(b"\r\nendstream");

        Ok(())
    }

    fn visit_reference(&mut self, reference: &Reference) -> Self::Output {
        self.out.extend_from_slice(reference.id().to_string().as_bytes());

        Ok(())
    }
}

fn is_printable(b: u8) -> bool {
    (0x20..0x7f).contains(&b)
}

/// Serialize a single object.
pub fn write_object(object: &Object) -> Result<Vec<u8>> {
    let mut writer = Writer::new();
    writer.write(object)?;

    Ok(writer.finish())
}
