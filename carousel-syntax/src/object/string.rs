//! Byte strings.

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A PDF string.
///
/// Strings are plain byte sequences. Whether they were written in literal or
/// hexadecimal form in the source is not retained.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PdfString(Arc<[u8]>);

impl PdfString {
    /// Create a new string from its decoded bytes.
    pub fn new(bytes: &[u8]) -> Self {
        Self(Arc::from(bytes))
    }

    /// The bytes of the string.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Decode the string as text.
    ///
    /// Strings starting with a UTF-16BE byte order mark are decoded as
    /// UTF-16, everything else is interpreted as Latin-1.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self.as_bytes() {
            [0xfe, 0xff, rest @ ..] => {
                let units = rest
                    .chunks_exact(2)
                    .map(|c| u16::from_be_bytes([c[0], c[1]]));

                Cow::Owned(
                    char::decode_utf16(units)
                        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
                        .collect(),
                )
            }
            bytes if bytes.is_ascii() => Cow::Owned(String::from_utf8_lossy(bytes).into_owned()),
            bytes => Cow::Owned(bytes.iter().map(|b| *b as char).collect()),
        }
    }
}

impl Deref for PdfString {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for PdfString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for PdfString {
    fn from(value: &[u8]) -> Self {
        Self::new(value)
    }
}

impl From<Vec<u8>> for PdfString {
    fn from(value: Vec<u8>) -> Self {
        Self(Arc::from(value))
    }
}

impl From<&str> for PdfString {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl<const N: usize> From<&[u8; N]> for PdfString {
    fn from(value: &[u8; N]) -> Self {
        Self::new(value)
    }
}

impl PartialEq<[u8]> for PdfString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for PdfString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for PdfString {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl fmt::Debug for PdfString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.escape_ascii())
    }
}
