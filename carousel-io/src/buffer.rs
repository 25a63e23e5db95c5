//! A growable byte buffer assembled from scratch file pages.

use crate::access::{RandomAccess, impl_std_io};
use crate::error::{Error, Result};
use crate::scratch::{PAGE_SIZE, Page, PageIndex, ScratchFile};
use std::fmt;
use std::sync::Arc;

const PAGE_SIZE_U64: u64 = PAGE_SIZE as u64;

/// A random-access buffer whose content is stored in pages of a
/// [`ScratchFile`].
///
/// Only the current page is held by the buffer itself, all other pages are
/// written to the scratch file when the buffer moves away from them.
/// Closing or dropping the buffer returns its pages to the scratch file.
pub struct ScratchFileBuffer {
    scratch: Arc<ScratchFile>,
    page_indexes: Vec<PageIndex>,
    /// Position of the current page in `page_indexes`.
    current_page_position: usize,
    /// Byte offset of the start of the current page.
    current_page_offset: u64,
    current_page: Page,
    position_in_page: usize,
    current_page_changed: bool,
    size: u64,
    closed: bool,
}

impl ScratchFileBuffer {
    /// Create a new buffer, allocating its first page from `scratch`.
    pub fn new(scratch: Arc<ScratchFile>) -> Result<Self> {
        scratch.check_closed()?;

        let mut buffer = Self {
            scratch,
            page_indexes: Vec::with_capacity(16),
            current_page_position: 0,
            current_page_offset: 0,
            current_page: Box::new([0; PAGE_SIZE]),
            position_in_page: 0,
            current_page_changed: false,
            size: 0,
            closed: false,
        };
        buffer.add_page()?;

        Ok(buffer)
    }

    /// The number of pages currently assigned to this buffer.
    pub fn page_count(&self) -> usize {
        self.page_indexes.len()
    }

    fn check_closed(&self) -> Result<()> {
        if self.closed {
            return Err(Error::BufferClosed);
        }

        self.scratch.check_closed()
    }

    fn add_page(&mut self) -> Result<()> {
        let index = self.scratch.new_page()?;

        self.page_indexes.push(index);
        self.current_page_position = self.page_indexes.len() - 1;
        self.current_page_offset = self.current_page_position as u64 * PAGE_SIZE_U64;
        self.current_page = Box::new([0; PAGE_SIZE]);
        self.position_in_page = 0;

        Ok(())
    }

    fn flush_current_page(&mut self) -> Result<()> {
        if self.current_page_changed {
            self.scratch.write_page(
                self.page_indexes[self.current_page_position],
                &self.current_page,
            )?;
            self.current_page_changed = false;
        }

        Ok(())
    }

    /// Make sure there is at least one byte left in the current page, moving
    /// to the next page if required. Returns `false` if the end of the last
    /// page was reached and `add_new_page` is not set.
    fn ensure_available_bytes_in_page(&mut self, add_new_page: bool) -> Result<bool> {
        if self.position_in_page < PAGE_SIZE {
            return Ok(true);
        }

        self.flush_current_page()?;

        if self.current_page_position + 1 < self.page_indexes.len() {
            // A backward seek left pages behind the current one.
            self.current_page_position += 1;
            self.current_page = self
                .scratch
                .read_page(self.page_indexes[self.current_page_position])?;
            self.current_page_offset = self.current_page_position as u64 * PAGE_SIZE_U64;
            self.position_in_page = 0;
        } else if add_new_page {
            self.add_page()?;
        } else {
            return Ok(false);
        }

        Ok(true)
    }

    fn current_position(&self) -> u64 {
        self.current_page_offset + self.position_in_page as u64
    }

    fn release_pages(&mut self) -> Result<()> {
        let pages = std::mem::take(&mut self.page_indexes);

        if self.scratch.is_closed() {
            return Ok(());
        }

        self.scratch.free_pages(&pages)
    }
}

impl RandomAccess for ScratchFileBuffer {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        self.check_closed()?;

        if self.current_position() >= self.size {
            return Ok(None);
        }

        if !self.ensure_available_bytes_in_page(false)? {
            return Err(Error::UnexpectedEof {
                expected: 1,
                available: 0,
            });
        }

        let byte = self.current_page[self.position_in_page];
        self.position_in_page += 1;

        Ok(Some(byte))
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.check_closed()?;

        let position = self.current_position();

        if position >= self.size {
            return Ok(0);
        }

        let total = (buf.len() as u64).min(self.size - position) as usize;
        let mut read = 0;

        while read < total {
            if !self.ensure_available_bytes_in_page(false)? {
                return Err(Error::UnexpectedEof {
                    expected: total,
                    available: read,
                });
            }

            let count = (total - read).min(PAGE_SIZE - self.position_in_page);
            buf[read..read + count].copy_from_slice(
                &self.current_page[self.position_in_page..self.position_in_page + count],
            );
            self.position_in_page += count;
            read += count;
        }

        Ok(read)
    }

    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.write(&[byte])
    }

    fn write(&mut self, mut data: &[u8]) -> Result<()> {
        self.check_closed()?;

        while !data.is_empty() {
            self.ensure_available_bytes_in_page(true)?;

            let count = data.len().min(PAGE_SIZE - self.position_in_page);
            self.current_page[self.position_in_page..self.position_in_page + count]
                .copy_from_slice(&data[..count]);
            self.position_in_page += count;
            self.current_page_changed = true;
            self.size = self.size.max(self.current_position());

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

        if position >= self.current_page_offset
            && position <= self.current_page_offset + PAGE_SIZE_U64
        {
            self.position_in_page = (position - self.current_page_offset) as usize;

            return Ok(());
        }

        self.flush_current_page()?;

        // Seeking to the exact end of a full last page stays on that page.
        let new_position = ((position / PAGE_SIZE_U64) as usize).min(self.page_indexes.len() - 1);
        self.current_page = self.scratch.read_page(self.page_indexes[new_position])?;
        self.current_page_position = new_position;
        self.current_page_offset = new_position as u64 * PAGE_SIZE_U64;
        self.position_in_page = (position - self.current_page_offset) as usize;

        Ok(())
    }

    fn position(&self) -> Result<u64> {
        self.check_closed()?;

        Ok(self.current_position())
    }

    fn len(&self) -> Result<u64> {
        self.check_closed()?;

        Ok(self.size)
    }

    /// Discard the content, keeping only the first page.
    fn clear(&mut self) -> Result<()> {
        self.check_closed()?;

        self.scratch.free_pages(&self.page_indexes[1..])?;
        self.page_indexes.truncate(1);

        self.current_page = Box::new([0; PAGE_SIZE]);
        self.current_page_position = 0;
        self.current_page_offset = 0;
        self.position_in_page = 0;
        self.current_page_changed = false;
        self.size = 0;

        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        self.closed = true;
        self.size = 0;
        self.current_page_changed = false;

        self.release_pages()
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

impl_std_io!(ScratchFileBuffer);

impl Drop for ScratchFileBuffer {
    fn drop(&mut self) {
        if let Err(_e) = self.close() {
            lwarn!("failed to release scratch buffer pages: {}", _e);
        }
    }
}

impl fmt::Debug for ScratchFileBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScratchFileBuffer")
            .field("pages", &self.page_indexes)
            .field("size", &self.size)
            .field("position", &self.current_position())
            .field("closed", &self.closed)
            .finish()
    }
}
