/*!
Paged scratch storage and random-access buffers.

This crate provides the storage layer of the carousel PDF crates:

- [`ScratchFile`] hands out fixed-size pages from main memory and/or a
  temporary file, under a budget described by a [`MemoryUsageSetting`].
- [`ScratchFileBuffer`] is a seekable, growable byte buffer assembled from
  such pages.
- [`RandomAccessBuffer`] offers the same contract, but keeps its data in
  plain memory chunks that it owns.

Both buffers implement [`RandomAccess`] as well as the `std::io` traits.

```
use carousel_io::{MemoryUsageSetting, RandomAccess, ScratchFile};
use std::sync::Arc;

let setting = MemoryUsageSetting::main_memory_only(Some(64 * 1024));
let scratch = Arc::new(ScratchFile::new(setting)?);

let mut buffer = scratch.create_buffer()?;
buffer.write(b"Hello, pages!")?;
buffer.seek(7)?;
assert_eq!(buffer.read_fully(5)?, b"pages");
# Ok::<(), carousel_io::Error>(())
```

## Cargo features
- `logging`: Emit diagnostics through the `log` crate.
*/

#[macro_use]
mod log;

mod access;
mod buffer;
mod error;
mod memory;
mod scratch;
mod setting;
mod sync;

pub use access::RandomAccess;
pub use buffer::ScratchFileBuffer;
pub use error::{Error, Result};
pub use memory::{DEFAULT_CHUNK_SIZE, RandomAccessBuffer};
pub use scratch::{
    ENLARGE_PAGE_COUNT, INIT_UNRESTRICTED_MAINMEM_PAGECOUNT, PAGE_SIZE, Page, PageIndex,
    ScratchFile,
};
pub use setting::MemoryUsageSetting;
