//! Archive block reads.
//!
//! Challenge responses pair each tag with the raw bytes of the block it
//! covers. [`read_block`] is the scheme-agnostic workhorse: open, seek,
//! fill one block. [`read_archive_block`] is the MAC deployment's entry
//! point, which first checks that the context actually belongs to the MAC
//! scheme; a sentinel deployment lays out its archive differently, so
//! serving its context here would return well-formed garbage.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use bytes::Bytes;

use holdfast_types::{BlockIndex, Context, SchemeKind};

use crate::StorageError;

/// Reads the block at `index` from the context's archive.
///
/// # Errors
///
/// - [`StorageError::SchemeMismatch`] if the context is not a MAC-scheme
///   context
/// - Everything [`read_block`] returns, unchanged
pub fn read_archive_block(ctx: &Context, index: BlockIndex) -> Result<Bytes, StorageError> {
    if ctx.scheme.kind() != SchemeKind::Mac {
        return Err(StorageError::SchemeMismatch {
            expected: SchemeKind::Mac,
            actual: ctx.scheme.kind(),
        });
    }
    read_block(&ctx.archive_path, ctx.block_size, index)
}

/// Reads one fixed-size block from a file, by index.
///
/// Stateless: the file is opened per call and closed on return. The
/// final block of a file whose length is not a multiple of `block_size`
/// comes back short; the returned buffer's length is the number of bytes
/// actually present.
///
/// # Errors
///
/// - [`StorageError::InvalidArgument`] if `block_size` is zero
/// - [`StorageError::Io`] if the file cannot be opened, the offset
///   overflows, or `index` is at or past the end of the file (no bytes
///   at the target offset reads as unexpected EOF)
pub fn read_block(path: &Path, block_size: u64, index: BlockIndex) -> Result<Bytes, StorageError> {
    if block_size == 0 {
        return Err(StorageError::InvalidArgument("block_size is zero"));
    }

    let offset = index
        .byte_offset(block_size)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "block offset overflows u64"))?;

    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start(offset))?;

    // block_size bounds the read, never an allocation; the vec grows only
    // to the bytes actually present
    let mut block = Vec::new();
    file.take(block_size).read_to_end(&mut block)?;

    if block.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "block index at or past end of file",
        )
        .into());
    }

    Ok(Bytes::from(block))
}
