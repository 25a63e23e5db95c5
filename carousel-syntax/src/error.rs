//! Errors raised while parsing PDF syntax or decoding streams.

/// The result type of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that aborted a parse or codec operation.
///
/// Recoverable anomalies never surface as errors, they are recorded as
/// [`Diagnostic`](crate::parser::Diagnostic)s instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed syntax without a recovery path.
    #[error("{message} at offset {offset}")]
    Syntax {
        /// The byte offset at which the error was detected.
        offset: u64,
        /// A description of the problem.
        message: String,
    },
    /// The data ended inside of a token.
    #[error("unexpected end of data at offset {offset}")]
    UnexpectedEof {
        /// The byte offset of the end of the data.
        offset: u64,
    },
    /// An indirect reference was encountered without an object pool to
    /// resolve it against.
    #[error("object reference at offset {offset} without an object pool")]
    ReferenceWithoutPool {
        /// The byte offset of the reference.
        offset: u64,
    },
    /// A filter name that is not registered.
    #[error("unsupported filter: {0}")]
    UnsupportedFilter(String),
    /// A `/Filter` entry that is neither a name nor an array of names.
    #[error("invalid filter entry")]
    InvalidFilterEntry,
    /// The encoded data could not be processed by a codec.
    #[error("{filter}: {message}")]
    Codec {
        /// The name of the codec.
        filter: &'static str,
        /// A description of the problem.
        message: String,
    },
    /// A stream was used after it was closed.
    #[error("stream already closed")]
    StreamClosed,
    /// An error of the underlying storage.
    #[error(transparent)]
    Io(#[from] carousel_io::Error),
}

impl Error {
    pub(crate) fn syntax(offset: u64, message: impl Into<String>) -> Self {
        Self::Syntax {
            offset,
            message: message.into(),
        }
    }

    pub(crate) fn codec(filter: &'static str, message: impl Into<String>) -> Self {
        Self::Codec {
            filter,
            message: message.into(),
        }
    }
}
