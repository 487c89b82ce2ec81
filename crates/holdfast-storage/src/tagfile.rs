//! Tag file writing and reading.
//!
//! A tag file is written once, in full, when an archive is tagged
//! ([`write_tags`]), then read piecemeal by block index during proof
//! sessions ([`TagReader`]). Challenged indices arrive in no particular
//! order, so the reader seeks rather than scans, and it keeps one open
//! handle across the whole session instead of reopening per index.
//!
//! ```text
//!            ┌────────┐   first read    ┌──────┐
//!            │ Closed │ ──────────────> │ Open │ ──┐ read
//!            └────────┘                 └──────┘ <─┘ (handle reused)
//!                 ^                         │
//!                 └──────── reset ──────────┘
//! ```
//!
//! Read errors do not close the handle; only [`TagReader::reset`] (or
//! dropping the reader) does.

use std::fmt;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::PathBuf;

use zeroize::Zeroizing;

use holdfast_codec::TagCodec;
use holdfast_types::{BlockIndex, Context};

use crate::{StorageError, TagSlot};

// ============================================================================
// Writing
// ============================================================================

/// Writes a complete tag set to the context's tag file.
///
/// One-shot bulk write: encodes every tag back-to-back into a single
/// buffer and streams it out, creating the file or truncating whatever
/// was there. Tags must be supplied in block order; the writer does not
/// reorder them. When `ctx.verbose` is set and the destination already
/// exists, an overwrite warning is logged before proceeding.
///
/// The encode buffer is zeroized on every exit path, since serialized
/// tags derive from secret key material.
///
/// # Errors
///
/// - [`StorageError::InvalidArgument`] if `tags` is empty or the tag path
///   is empty
/// - [`StorageError::Io`] if the file cannot be created or a write fails;
///   a mid-write failure leaves the destination truncated
/// - [`StorageError::Codec`] if any tag fails to encode
pub fn write_tags<C: TagCodec>(
    ctx: &Context,
    codec: &C,
    tags: &[C::Tag],
) -> Result<(), StorageError> {
    if tags.is_empty() {
        return Err(StorageError::InvalidArgument("tag set is empty"));
    }
    if ctx.tag_path.as_os_str().is_empty() {
        return Err(StorageError::InvalidArgument("tag path is empty"));
    }

    if ctx.verbose && ctx.tag_path.exists() {
        tracing::warn!(path = %ctx.tag_path.display(), "overwriting existing tag file");
    }

    let mut file = File::create(&ctx.tag_path)?;

    let record_size = codec.record_size(ctx)?;
    let buf = Zeroizing::new(codec.encode_batch(ctx, tags)?);

    // Postcondition of the codec contract: back-to-back fixed records
    debug_assert_eq!(
        buf.len(),
        record_size * tags.len(),
        "encoded batch disagrees with record size"
    );

    file.write_all(&buf)?;
    Ok(())
}

// ============================================================================
// Reading
// ============================================================================

/// Indexed reader over a tag file, caching one open handle.
///
/// Created closed; the first [`read_into`](TagReader::read_into) opens the
/// context's tag file and later reads reuse the handle.
/// [`reset`](TagReader::reset) closes it again, e.g. between proof
/// sessions or after the tag file has been rewritten on disk.
///
/// Calls take `&mut self`; a reader shared across threads needs external
/// synchronization.
pub struct TagReader<C> {
    codec: C,
    handle: Option<OpenHandle>,
}

struct OpenHandle {
    file: File,
    path: PathBuf,
}

impl<C: TagCodec> TagReader<C> {
    /// Creates a closed reader. No I/O happens until the first read.
    pub fn new(codec: C) -> Self {
        Self {
            codec,
            handle: None,
        }
    }

    /// Whether a tag file handle is currently cached.
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Closes the cached handle, if any.
    ///
    /// Infallible and idempotent; the next read reopens the file. Call
    /// this between proof sessions, or whenever the tag file may have
    /// been replaced on disk.
    pub fn reset(&mut self) {
        if let Some(handle) = self.handle.take() {
            tracing::debug!(path = %handle.path.display(), "closed tag file");
        }
    }

    /// Reads the tag record for `index` into `slot`.
    ///
    /// Seeks to `index * record_size`, reads exactly one record, decodes
    /// it, and installs the result, dropping the slot's prior occupant.
    ///
    /// # Errors
    ///
    /// - [`StorageError::Io`] if the file cannot be opened, the seek
    ///   target overflows, or fewer than `record_size` bytes remain at
    ///   the target (an out-of-range index reads as unexpected EOF)
    /// - [`StorageError::Codec`] if the context's scheme is foreign to
    ///   the codec or the record fails to decode
    ///
    /// If the open itself fails, the slot is left untouched. Any failure
    /// after the open empties the slot, so the caller never keeps a tag
    /// that no longer matches the last requested index. Errors never
    /// close the cached handle.
    pub fn read_into(
        &mut self,
        ctx: &Context,
        index: BlockIndex,
        slot: &mut TagSlot<C::Tag>,
    ) -> Result<(), StorageError> {
        if self.handle.is_none() {
            let file = File::open(&ctx.tag_path)?;
            tracing::debug!(path = %ctx.tag_path.display(), "opened tag file");
            self.handle = Some(OpenHandle {
                file,
                path: ctx.tag_path.clone(),
            });
        }
        let handle = self
            .handle
            .as_mut()
            .expect("handle exists: just opened or already cached");

        // Precondition: one reader serves one tag file between resets
        debug_assert_eq!(
            handle.path, ctx.tag_path,
            "reader reused across tag files without reset"
        );

        match read_record(&mut handle.file, &self.codec, ctx, index) {
            Ok(tag) => {
                slot.replace(tag);
                Ok(())
            }
            Err(err) => {
                slot.clear();
                Err(err)
            }
        }
    }
}

impl<C> fmt::Debug for TagReader<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagReader")
            .field("open", &self.handle.is_some())
            .field("path", &self.handle.as_ref().map(|h| h.path.as_path()))
            .finish_non_exhaustive()
    }
}

/// Fetches and decodes one record from an open tag file.
///
/// Runs entirely in the post-open phase, so every failure here (scheme,
/// seek, short read, decode) empties the caller's slot.
fn read_record<C: TagCodec>(
    file: &mut File,
    codec: &C,
    ctx: &Context,
    index: BlockIndex,
) -> Result<C::Tag, StorageError> {
    let record_size = codec.record_size(ctx)?;

    let offset = index.byte_offset(record_size as u64).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "tag record offset overflows u64")
    })?;

    file.seek(SeekFrom::Start(offset))?;

    let mut buf = Zeroizing::new(vec![0u8; record_size]);
    file.read_exact(&mut buf)?;

    Ok(codec.decode_record(ctx, &buf)?)
}
