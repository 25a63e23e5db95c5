//! Byte sources the parser reads from.

use crate::error::{Error, Result};
use carousel_io::RandomAccess;

/// A seekable sequence of bytes with pushback.
///
/// Pushback is implemented by moving the position back, so the bytes passed
/// to [`Source::unread_bytes`] must be exactly the ones that were read last.
pub trait Source {
    /// Read the next byte.
    fn read(&mut self) -> Result<Option<u8>>;

    /// Return the next byte without consuming it.
    fn peek(&mut self) -> Result<Option<u8>>;

    /// Push back the bytes that were just read.
    fn unread_bytes(&mut self, bytes: &[u8]) -> Result<()>;

    /// The current position.
    fn position(&self) -> Result<u64>;

    /// Move to `position`, which may be at most the length.
    fn seek(&mut self, position: u64) -> Result<()>;

    /// The total number of bytes.
    fn len(&self) -> Result<u64>;

    /// Read exactly `count` bytes.
    fn read_fully(&mut self, count: usize) -> Result<Vec<u8>>;

    /// Push back the byte that was just read.
    fn unread(&mut self, byte: u8) -> Result<()> {
        self.unread_bytes(&[byte])
    }

    /// Whether the source is exhausted.
    fn is_eof(&mut self) -> Result<bool> {
        Ok(self.peek()?.is_none())
    }

    /// Whether the source is empty.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// A source over a byte slice.
#[derive(Clone, Debug)]
pub struct Reader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    /// Create a reader positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }
}

impl Source for Reader<'_> {
    fn read(&mut self) -> Result<Option<u8>> {
        let byte = self.data.get(self.offset).copied();

        if byte.is_some() {
            self.offset += 1;
        }

        Ok(byte)
    }

    fn peek(&mut self) -> Result<Option<u8>> {
        Ok(self.data.get(self.offset).copied())
    }

    fn unread_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        debug_assert!(self.data[..self.offset].ends_with(bytes));
        self.offset = self.offset.saturating_sub(bytes.len());

        Ok(())
    }

    fn position(&self) -> Result<u64> {
        Ok(self.offset as u64)
    }

    fn seek(&mut self, position: u64) -> Result<()> {
        if position > self.data.len() as u64 {
            return Err(carousel_io::Error::SeekOutOfBounds {
                position,
                len: self.data.len() as u64,
            }
            .into());
        }

        self.offset = position as usize;

        Ok(())
    }

    fn len(&self) -> Result<u64> {
        Ok(self.data.len() as u64)
    }

    fn read_fully(&mut self, count: usize) -> Result<Vec<u8>> {
        let bytes = self
            .offset
            .checked_add(count)
            .and_then(|end| self.data.get(self.offset..end))
            .ok_or(Error::UnexpectedEof {
                offset: self.data.len() as u64,
            })?;
        self.offset += count;

        Ok(bytes.to_vec())
    }
}

/// A source over any [`RandomAccess`] buffer.
#[derive(Debug)]
pub struct RandomAccessSource<R> {
    inner: R,
}

impl<R: RandomAccess> RandomAccessSource<R> {
    /// Wrap `inner`, reading from its current position.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Return the wrapped buffer.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RandomAccess> Source for RandomAccessSource<R> {
    fn read(&mut self) -> Result<Option<u8>> {
        Ok(self.inner.read_byte()?)
    }

    fn peek(&mut self) -> Result<Option<u8>> {
        Ok(self.inner.peek()?)
    }

    fn unread_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        Ok(self.inner.rewind(bytes.len() as u64)?)
    }

    fn position(&self) -> Result<u64> {
        Ok(self.inner.position()?)
    }

    fn seek(&mut self, position: u64) -> Result<()> {
        Ok(self.inner.seek(position)?)
    }

    fn len(&self) -> Result<u64> {
        Ok(self.inner.len()?)
    }

    fn read_fully(&mut self, count: usize) -> Result<Vec<u8>> {
        match self.inner.read_fully(count) {
            Ok(bytes) => Ok(bytes),
            Err(carousel_io::Error::UnexpectedEof { .. }) => Err(Error::UnexpectedEof {
                offset: self.inner.len()?,
            }),
            Err(e) => Err(e.into()),
        }
    }
}
