//! The random-access contract shared by all buffers.

use crate::error::{Error, Result};

/// A seekable, growable byte store.
///
/// Reads return `Ok(None)` or `Ok(0)` at the end of the data, all other
/// failures (including any use after [`RandomAccess::close`]) are errors.
pub trait RandomAccess {
    /// Read the next byte and advance the position.
    fn read_byte(&mut self) -> Result<Option<u8>>;

    /// Read up to `buf.len()` bytes, returning how many were read.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Write a single byte at the current position.
    fn write_byte(&mut self, byte: u8) -> Result<()>;

    /// Write all of `data` at the current position.
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Move to `position`, which may be at most the current length.
    fn seek(&mut self, position: u64) -> Result<()>;

    /// The current position.
    fn position(&self) -> Result<u64>;

    /// The number of bytes stored.
    fn len(&self) -> Result<u64>;

    /// Discard all content.
    fn clear(&mut self) -> Result<()>;

    /// Release all storage. Every later operation fails.
    fn close(&mut self) -> Result<()>;

    /// Whether the buffer was closed.
    fn is_closed(&self) -> bool;

    /// Whether the buffer is empty.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Whether the position is at the end of the data.
    fn is_eof(&self) -> Result<bool> {
        Ok(self.position()? >= self.len()?)
    }

    /// The number of bytes between the position and the end of the data.
    fn available(&self) -> Result<u64> {
        Ok(self.len()?.saturating_sub(self.position()?))
    }

    /// Return the next byte without consuming it.
    fn peek(&mut self) -> Result<Option<u8>> {
        let byte = self.read_byte()?;

        if byte.is_some() {
            self.rewind(1)?;
        }

        Ok(byte)
    }

    /// Move the position back by `count` bytes.
    fn rewind(&mut self, count: u64) -> Result<()> {
        let position = self.position()?;
        self.seek(position.saturating_sub(count))
    }

    /// Read exactly `count` bytes, failing if the data ends before.
    fn read_fully(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut out = vec![0; count];
        let mut filled = 0;

        while filled < count {
            let read = self.read(&mut out[filled..])?;

            if read == 0 {
                return Err(Error::UnexpectedEof {
                    expected: count,
                    available: filled,
                });
            }

            filled += read;
        }

        Ok(out)
    }

    /// Read everything from the start, leaving the position at the end.
    fn to_vec(&mut self) -> Result<Vec<u8>> {
        self.seek(0)?;
        let len = self.len()? as usize;
        self.read_fully(len)
    }
}

/// Implement `std::io::{Read, Write, Seek}` for a [`RandomAccess`] type.
macro_rules! impl_std_io {
    ($ty:ty) => {
        impl std::io::Read for $ty {
            fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
                Ok($crate::RandomAccess::read(self, buf)?)
            }
        }

        impl std::io::Write for $ty {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                $crate::RandomAccess::write(self, buf)?;
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        impl std::io::Seek for $ty {
            fn seek(&mut self, pos: std::io::SeekFrom) -> std::io::Result<u64> {
                let len = $crate::RandomAccess::len(self)?;
                let current = $crate::RandomAccess::position(self)?;
                let target = match pos {
                    std::io::SeekFrom::Start(offset) => Some(offset),
                    std::io::SeekFrom::End(delta) => len.checked_add_signed(delta),
                    std::io::SeekFrom::Current(delta) => current.checked_add_signed(delta),
                }
                .ok_or_else(|| {
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        "seek to a negative position",
                    )
                })?;

                $crate::RandomAccess::seek(self, target)?;
                Ok(target)
            }
        }
    };
}

pub(crate) use impl_std_io;
