/*!
A lenient parser and object model for the low-level syntax of PDF files.

This crate covers the COS layer of PDF: the object model of names, numbers,
strings, arrays, dictionaries, streams and indirect references, a parser
that reads these objects from raw bytes and recovers from common damage,
and the stream filters needed to encode and decode stream data.

It does not know anything about documents, pages or cross-reference tables.

```
use carousel_syntax::Parser;

let mut parser = Parser::from_bytes(b"<< /Type /Example /Size [1 2.5] >>");
let object = parser.parse_object()?.unwrap_or_default();
let dict = object.as_dict().unwrap();

assert_eq!(dict.get_name(b"Type").unwrap(), b"Example");
assert_eq!(dict.get_array(b"Size").unwrap().to_f64_vec(), vec![1.0, 2.5]);
# Ok::<(), carousel_syntax::Error>(())
```

Stream data can be buffered in a [`ScratchFile`](carousel_io::ScratchFile)
by passing one to [`Parser::with_scratch`].

## Cargo features
- `logging`: Emit diagnostics through the `log` crate.
*/

#[macro_use]
mod log;

mod error;
mod sync;

pub mod filter;
pub mod object;
pub mod parser;
pub mod trivia;
pub mod write;

pub use error::{Error, Result};
pub use filter::Codec;
pub use object::{
    Array, Dict, Name, NameRegistry, Number, ObjRef, Object, ObjectPool, PdfString, Reference,
    Resolver, Stream, Visitor, keys,
};
pub use parser::{
    Diagnostic, DiagnosticKind, ObjectStreamParser, Parser, RandomAccessSource, Reader, Source,
};
pub use write::{Writer, write_object};
