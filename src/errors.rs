//! Error taxonomy for the object store
//!
//! Every core operation returns a [`StoreResult`]. None of these errors are
//! retried: storage is local and failures are not assumed to be transient.

use crate::artifacts::objects::object_type::ObjectType;
use std::path::PathBuf;

/// Errors raised by the object store and its codecs.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The address is well-formed but no object file exists for it.
    #[error("object not found: {0}")]
    ObjectNotFound(String),

    /// The address is not exactly 40 hexadecimal characters.
    #[error("invalid object address: {0:?}")]
    InvalidAddress(String),

    /// The stored bytes are not a valid zlib stream.
    #[error("corrupt object stream: {0}")]
    CorruptStream(#[source] std::io::Error),

    /// The decompressed bytes do not follow the `<kind> <size>\0` framing.
    #[error("malformed object header: {0}")]
    MalformedHeader(String),

    /// A tree payload ended in the middle of an entry.
    #[error("truncated tree entry at offset {offset}: {reason}")]
    TruncatedTree { offset: usize, reason: &'static str },

    /// A tree was requested but the address holds another kind of object.
    #[error("object {1} is a {0}, not a tree")]
    NotATree(ObjectType, String),

    /// A tree entry cannot be encoded: its mode or name would break the framing.
    #[error("invalid tree entry: {0}")]
    InvalidTreeEntry(String),

    /// Underlying read, write, rename or mkdir failure.
    #[error("storage I/O error at {}: {source}", path.display())]
    StorageIO {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::StorageIO {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
