//! A page allocator backed by main memory and/or a temporary file.

use crate::buffer::ScratchFileBuffer;
use crate::error::{Error, Result};
use crate::setting::MemoryUsageSetting;
use crate::sync::MutexExt;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// The size of a single scratch page in bytes.
pub const PAGE_SIZE: usize = 4096;
/// The number of pages the backing file grows by when it runs full.
pub const ENLARGE_PAGE_COUNT: usize = 16;
/// The initial number of page slots when main memory is unrestricted.
pub const INIT_UNRESTRICTED_MAINMEM_PAGECOUNT: usize = 100_000;

/// The index of a page handed out by a [`ScratchFile`].
pub type PageIndex = usize;

/// The content of a single page.
pub type Page = Box<[u8; PAGE_SIZE]>;

struct PageTable {
    /// The number of valid page indices, in memory and in the backing file.
    page_count: usize,
    /// Indices at or above this one were never handed out.
    high_water: usize,
    /// Indices below `high_water` that were freed again.
    free: BTreeSet<PageIndex>,
    memory: Vec<Option<Page>>,
}

impl PageTable {
    fn take_free(&mut self) -> Option<PageIndex> {
        if let Some(index) = self.free.pop_first() {
            return Some(index);
        }

        if self.high_water < self.page_count {
            let index = self.high_water;
            self.high_water += 1;

            return Some(index);
        }

        None
    }

    fn free_count(&self) -> usize {
        self.free.len() + (self.page_count - self.high_water)
    }
}

struct Backing {
    file: NamedTempFile,
}

impl Backing {
    fn file(&mut self) -> &mut File {
        self.file.as_file_mut()
    }
}

/// Hands out fixed-size pages of [`PAGE_SIZE`] bytes.
///
/// Pages with an index below the in-memory limit are kept in main memory,
/// all others live in a temporary file that is created when first needed.
/// Page allocation and freeing are synchronized, so one scratch file can
/// back many buffers. Dropping or closing the scratch file deletes the
/// temporary file and invalidates every buffer created from it.
pub struct ScratchFile {
    setting: MemoryUsageSetting,
    scratch_dir: Option<PathBuf>,
    in_memory_max_page_count: usize,
    max_page_count: usize,
    memory_restricted: bool,
    use_scratch_file: bool,
    closed: AtomicBool,
    table: Mutex<PageTable>,
    backing: Mutex<Option<Backing>>,
}

impl ScratchFile {
    /// Create a new scratch file with the given memory usage setting.
    pub fn new(setting: MemoryUsageSetting) -> Result<Self> {
        if let Some(dir) = setting.temp_dir()
            && setting.use_temp_file()
            && !dir.is_dir()
        {
            return Err(Error::MissingDirectory(dir.to_path_buf()));
        }

        let scratch = Self::build(setting);

        if scratch.in_memory_max_page_count == 0 && !scratch.use_scratch_file {
            return Err(Error::NoStorage);
        }

        ldebug!("creating scratch file: {}", scratch.setting);

        Ok(scratch)
    }

    /// Create a scratch file that only uses unrestricted main memory.
    pub fn main_memory_only() -> Self {
        Self::build(MemoryUsageSetting::main_memory_only(None))
    }

    fn build(setting: MemoryUsageSetting) -> Self {
        let memory_restricted = !setting.use_main_memory() || setting.is_main_memory_restricted();
        let use_scratch_file = memory_restricted && setting.use_temp_file();
        let scratch_dir = setting
            .temp_dir()
            .filter(|_| use_scratch_file)
            .map(Path::to_path_buf);

        let max_page_count = setting.max_storage_bytes().map_or(usize::MAX, pages_in);

        let in_memory_max_page_count = if setting.use_main_memory() {
            setting.max_main_memory_bytes().map_or(usize::MAX, pages_in)
        } else {
            0
        };

        let page_count = if memory_restricted {
            in_memory_max_page_count.min(max_page_count)
        } else {
            INIT_UNRESTRICTED_MAINMEM_PAGECOUNT.min(max_page_count)
        };

        Self {
            setting,
            scratch_dir,
            in_memory_max_page_count,
            max_page_count,
            memory_restricted,
            use_scratch_file,
            closed: AtomicBool::new(false),
            table: Mutex::new(PageTable {
                page_count,
                high_water: 0,
                free: BTreeSet::new(),
                memory: Vec::new(),
            }),
            backing: Mutex::new(None),
        }
    }

    /// The setting this scratch file was created with.
    pub fn setting(&self) -> &MemoryUsageSetting {
        &self.setting
    }

    /// Fail if the scratch file was closed.
    pub fn check_closed(&self) -> Result<()> {
        if self.closed.load(Ordering::Acquire) {
            Err(Error::AllocatorClosed)
        } else {
            Ok(())
        }
    }

    /// Whether the scratch file was closed.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// The number of valid page indices.
    pub fn page_count(&self) -> usize {
        self.table.get().page_count
    }

    /// The number of page indices that are currently not handed out.
    pub fn free_page_count(&self) -> usize {
        self.table.get().free_count()
    }

    /// The path of the temporary file, if one was created.
    pub fn backing_file_path(&self) -> Option<PathBuf> {
        self.backing
            .get()
            .as_ref()
            .map(|b| b.file.path().to_path_buf())
    }

    /// Create a new, empty buffer backed by this scratch file.
    pub fn create_buffer(self: &Arc<Self>) -> Result<ScratchFileBuffer> {
        ScratchFileBuffer::new(self.clone())
    }

    /// Create a buffer backed by this scratch file and fill it with the
    /// content of `input`. The position of the buffer is reset to the start.
    pub fn create_buffer_from(self: &Arc<Self>, mut input: impl Read) -> Result<ScratchFileBuffer> {
        let mut buffer = self.create_buffer()?;
        let mut chunk = vec![0; PAGE_SIZE];

        loop {
            let read = match input.read(&mut chunk) {
                Ok(0) => break,
                Ok(read) => read,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            crate::RandomAccess::write(&mut buffer, &chunk[..read])?;
        }

        crate::RandomAccess::seek(&mut buffer, 0)?;

        Ok(buffer)
    }

    /// Return the index of a free page, enlarging the storage if necessary.
    pub fn new_page(&self) -> Result<PageIndex> {
        self.check_closed()?;

        let mut table = self.table.get();

        if let Some(index) = table.take_free() {
            return Ok(index);
        }

        self.enlarge(&mut table)?;

        table.take_free().ok_or(Error::StorageExhausted {
            max_pages: self.max_page_count,
        })
    }

    fn enlarge(&self, table: &mut PageTable) -> Result<()> {
        if table.page_count >= self.max_page_count {
            return Ok(());
        }

        if self.use_scratch_file {
            let mut backing = self.backing.get();

            if backing.is_none() {
                *backing = Some(self.create_backing()?);
            }

            let Some(backing) = backing.as_mut() else {
                return Ok(());
            };

            let grow = ENLARGE_PAGE_COUNT.min(self.max_page_count - table.page_count);
            let file_pages = table.page_count - self.in_memory_max_page_count + grow;
            backing.file().set_len((file_pages * PAGE_SIZE) as u64)?;
            table.page_count += grow;

            ldebug!("enlarged scratch file to {} pages", file_pages);
        } else if !self.memory_restricted {
            let target = table
                .page_count
                .saturating_mul(2)
                .max(ENLARGE_PAGE_COUNT)
                .min(self.max_page_count);
            table.page_count = target;

            ldebug!("enlarged in-memory page table to {} pages", target);
        }

        Ok(())
    }

    fn create_backing(&self) -> Result<Backing> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("carousel").suffix(".tmp");

        let file = match &self.scratch_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };

        ldebug!("created scratch file at {}", file.path().display());

        Ok(Backing { file })
    }

    fn check_index(&self, table: &PageTable, index: PageIndex) -> Result<()> {
        if index >= table.page_count {
            return Err(Error::InvalidPageIndex {
                index,
                page_count: table.page_count,
            });
        }

        Ok(())
    }

    fn file_offset(&self, index: PageIndex) -> u64 {
        ((index - self.in_memory_max_page_count) * PAGE_SIZE) as u64
    }

    /// Read the content of the page with the given index.
    pub fn read_page(&self, index: PageIndex) -> Result<Page> {
        self.check_closed()?;

        {
            let table = self.table.get();
            self.check_index(&table, index)?;

            if index < self.in_memory_max_page_count {
                return table
                    .memory
                    .get(index)
                    .and_then(Option::as_ref)
                    .cloned()
                    .ok_or(Error::PageNotWritten(index));
            }
        }

        ltrace!("reading page {} from scratch file", index);

        let mut backing = self.backing.get();
        let backing = backing.as_mut().ok_or(Error::PageNotWritten(index))?;
        let mut page = Box::new([0; PAGE_SIZE]);
        let file = backing.file();
        file.seek(SeekFrom::Start(self.file_offset(index)))?;
        file.read_exact(&mut page[..])?;

        Ok(page)
    }

    /// Write `data` to the page with the given index.
    pub fn write_page(&self, index: PageIndex, data: &[u8; PAGE_SIZE]) -> Result<()> {
        self.check_closed()?;

        {
            let mut table = self.table.get();
            self.check_index(&table, index)?;

            if index < self.in_memory_max_page_count {
                if table.memory.len() <= index {
                    table.memory.resize_with(index + 1, || None);
                }

                table.memory[index] = Some(Box::new(*data));

                return Ok(());
            }
        }

        ltrace!("writing page {} to scratch file", index);

        let mut backing = self.backing.get();
        let backing = backing.as_mut().ok_or(Error::InvalidPageIndex {
            index,
            page_count: self.in_memory_max_page_count,
        })?;
        let file = backing.file();
        file.seek(SeekFrom::Start(self.file_offset(index)))?;
        file.write_all(data)?;

        Ok(())
    }

    /// Mark the given pages as free, so that they can be handed out again.
    ///
    /// Memory-resident pages release their content.
    pub fn free_pages(&self, indices: &[PageIndex]) -> Result<()> {
        self.check_closed()?;

        let mut table = self.table.get();

        for &index in indices {
            if index >= table.high_water {
                continue;
            }

            if table.free.insert(index) && index < self.in_memory_max_page_count {
                if let Some(page) = table.memory.get_mut(index) {
                    *page = None;
                }
            }
        }

        Ok(())
    }

    /// Close the scratch file, deleting the temporary file and releasing
    /// all memory. Closing twice has no effect.
    pub fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }

        {
            let mut table = self.table.get();
            table.memory = Vec::new();
            table.free.clear();
            table.high_water = 0;
            table.page_count = 0;
        }

        if let Some(backing) = self.backing.get().take() {
            ldebug!("deleting scratch file {}", backing.file.path().display());
            backing.file.close()?;
        }

        Ok(())
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if let Err(_e) = self.close() {
            lwarn!("failed to close scratch file: {}", _e);
        }
    }
}

fn pages_in(bytes: u64) -> usize {
    usize::try_from(bytes / PAGE_SIZE as u64).unwrap_or(usize::MAX)
}
