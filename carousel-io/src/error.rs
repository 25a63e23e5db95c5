//! Errors raised by the scratch allocator and the buffers built on it.

use std::path::PathBuf;

/// The result type of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that occurred while allocating, reading or writing scratch storage.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Allocating another page would exceed the configured storage budget.
    #[error("maximum allowed scratch storage of {max_pages} pages reached")]
    StorageExhausted {
        /// The page budget of the allocator.
        max_pages: usize,
    },
    /// A page index outside of the currently allocated range was used.
    #[error("page index {index} out of range, allocated pages: {page_count}")]
    InvalidPageIndex {
        /// The offending index.
        index: usize,
        /// The number of pages handed out so far.
        page_count: usize,
    },
    /// A memory-resident page was read before it was ever written.
    #[error("requested page with index {0} was not written before")]
    PageNotWritten(usize),
    /// The allocator was used after it was closed.
    #[error("scratch file already closed")]
    AllocatorClosed,
    /// The buffer was used after it was closed.
    #[error("buffer already closed")]
    BufferClosed,
    /// Neither main memory nor a scratch file may be used for storage.
    #[error("neither main memory nor a scratch file is available for storage")]
    NoStorage,
    /// The scratch directory does not exist or is not a directory.
    #[error("scratch directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),
    /// A seek went past the end of the buffer.
    #[error("seek to position {position} beyond buffer length {len}")]
    SeekOutOfBounds {
        /// The requested position.
        position: u64,
        /// The length of the buffer.
        len: u64,
    },
    /// Fewer bytes than required were available.
    #[error("premature end of buffer: expected {expected} bytes, got {available}")]
    UnexpectedEof {
        /// The number of bytes requested.
        expected: usize,
        /// The number of bytes that could be read.
        available: usize,
    },
    /// An I/O error of the backing file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(err) => err,
            Error::UnexpectedEof { .. } | Error::SeekOutOfBounds { .. } => {
                Self::new(std::io::ErrorKind::UnexpectedEof, err)
            }
            other => Self::other(other),
        }
    }
}
