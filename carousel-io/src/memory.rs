//! A random-access buffer held entirely in main memory.

use crate::access::{RandomAccess, impl_std_io};
use crate::error::{Error, Result};

/// The default size of a single chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// A random-access buffer built from equally sized chunks of main memory.
///
/// Unlike [`ScratchFileBuffer`](crate::ScratchFileBuffer) it owns its storage
/// outright and is not limited by any budget.
#[derive(Debug, Clone)]
pub struct RandomAccessBuffer {
    chunks: Vec<Vec<u8>>,
    chunk_size: usize,
    position: u64,
    size: u64,
    closed: bool,
}

impl RandomAccessBuffer {
    /// Create a new, empty buffer.
    pub fn new() -> Self {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE)
    }

    /// Create a new, empty buffer with chunks of `chunk_size` bytes.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        let chunk_size = chunk_size.max(1);

        Self {
            chunks: vec![vec![0; chunk_size]],
            chunk_size,
            position: 0,
            size: 0,
            closed: false,
        }
    }

    /// Create an independent copy of this buffer, including its position.
    pub fn duplicate(&self) -> Result<Self> {
        self.check_closed()?;

        Ok(self.clone())
    }

    fn check_closed(&self) -> Result<()> {
        if self.closed {
            Err(Error::BufferClosed)
        } else {
            Ok(())
        }
    }

    fn locate(&self, position: u64) -> (usize, usize) {
        let chunk_size = self.chunk_size as u64;
        ((position / chunk_size) as usize, (position % chunk_size) as usize)
    }
}

impl Default for RandomAccessBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for RandomAccessBuffer {
    /// Wrap existing data in a single chunk.
    fn from(data: Vec<u8>) -> Self {
        if data.is_empty() {
            return Self::new();
        }

        Self {
            chunk_size: data.len(),
            size: data.len() as u64,
            chunks: vec![data],
            position: 0,
            closed: false,
        }
    }
}

impl From<&[u8]> for RandomAccessBuffer {
    fn from(data: &[u8]) -> Self {
        Self::from(data.to_vec())
    }
}

impl RandomAccess for RandomAccessBuffer {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        self.check_closed()?;

        if self.position >= self.size {
            return Ok(None);
        }

        let (chunk, offset) = self.locate(self.position);
        self.position += 1;

        Ok(Some(self.chunks[chunk][offset]))
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.check_closed()?;

        let total = (buf.len() as u64).min(self.size.saturating_sub(self.position)) as usize;
        let mut read = 0;

        while read < total {
            let (chunk, offset) = self.locate(self.position);
            let count = (total - read).min(self.chunk_size - offset);
            buf[read..read + count].copy_from_slice(&self.chunks[chunk][offset..offset + count]);
            read += count;
            self.position += count as u64;
        }

        Ok(read)
    }

    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.write(&[byte])
    }

    fn write(&mut self, mut data: &[u8]) -> Result<()> {
        self.check_closed()?;

        while !data.is_empty() {
            let (chunk, offset) = self.locate(self.position);

            if chunk == self.chunks.len() {
                self.chunks.push(vec![0; self.chunk_size]);
            }

            let count = data.len().min(self.chunk_size - offset);
            self.chunks[chunk][offset..offset + count].copy_from_slice(&data[..count]);
            self.position += count as u64;
            self.size = self.size.max(self.position);

            data = &data[count..];
        }

        Ok(())
    }

    fn seek(&mut self, position: u64) -> Result<()> {
        self.check_closed()?;

        if position > self.size {
            return Err(Error::SeekOutOfBounds {
                position,
                len: self.size,
            });
        }

        self.position = position;

        Ok(())
    }

    fn position(&self) -> Result<u64> {
        self.check_closed()?;

        Ok(self.position)
    }

    fn len(&self) -> Result<u64> {
        self.check_closed()?;

        Ok(self.size)
    }

    fn clear(&mut self) -> Result<()> {
        self.check_closed()?;

        self.chunks.truncate(1);
        self.position = 0;
        self.size = 0;

        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        self.chunks = Vec::new();
        self.position = 0;
        self.size = 0;

        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

impl_std_io!(RandomAccessBuffer);
