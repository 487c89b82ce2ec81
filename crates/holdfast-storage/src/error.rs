//! Error types for storage operations.

use std::io;

use holdfast_codec::CodecError;
use holdfast_types::SchemeKind;

/// Errors that can occur during tag-file and block-file operations.
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    /// A required argument is missing or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Filesystem I/O error.
    ///
    /// Short reads surface here as [`io::ErrorKind::UnexpectedEof`], which
    /// is also how an out-of-range block or tag index presents.
    #[error("filesystem error: {0}")]
    Io(#[from] io::Error),

    /// The codec rejected a tag or a stored record.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// The operation is scoped to a different tagging scheme than the
    /// context carries.
    #[error("scheme mismatch: operation requires {expected}, context is {actual}")]
    SchemeMismatch {
        expected: SchemeKind,
        actual: SchemeKind,
    },
}
