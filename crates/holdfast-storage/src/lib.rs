//! # holdfast-storage: Flat-file persistence for Holdfast
//!
//! This crate is the storage layer of the Holdfast tagging system. It
//! writes the tag set minted for an archive to a flat record file, reads
//! tags back by block index during proof sessions, and fetches raw archive
//! blocks for challenge responses.
//!
//! # File Layout
//!
//! ```text
//! archive.bin    <- the archive being proven; blocks of ctx.block_size
//! archive.tag    <- one fixed-size tag record per block, in block order
//!
//! archive.tag:
//! ┌───────────┬───────────┬───────────┬─────
//! │ record 0  │ record 1  │ record 2  │ ...
//! └───────────┴───────────┴───────────┴─────
//! record i starts at byte i * record_size; no header, no trailer
//! ```
//!
//! The record size comes from the codec and the context's scheme
//! parameters; it is never stored in the file itself.
//!
//! # Example
//!
//! ```ignore
//! use holdfast_codec::MacCodec;
//! use holdfast_crypto::{tag_blocks, TagKey};
//! use holdfast_storage::{read_archive_block, write_tags, TagReader, TagSlot};
//! use holdfast_types::{BlockIndex, Context, MacParams, Scheme};
//!
//! let ctx = Context::new("archive.bin", "archive.tag", Scheme::Mac(MacParams::default()));
//! let codec = MacCodec::new();
//!
//! // Once per archive: mint and persist the full tag set
//! let key = TagKey::generate();
//! let tags = tag_blocks(&key, &MacParams::default(), blocks);
//! write_tags(&ctx, &codec, &tags)?;
//!
//! // Per proof session: fetch the challenged tags and blocks
//! let mut reader = TagReader::new(codec);
//! let mut slot = TagSlot::empty();
//! for index in challenged_indices {
//!     reader.read_into(&ctx, index, &mut slot)?;
//!     let block = read_archive_block(&ctx, index)?;
//!     respond(slot.get(), block);
//! }
//! reader.reset();
//! ```
//!
//! All I/O is synchronous and blocking. A [`TagReader`] takes `&mut self`,
//! so sharing one across threads requires external synchronization; the
//! crate does no internal locking.

pub mod blockfile;
pub mod error;
pub mod slot;
pub mod tagfile;

pub use blockfile::{read_archive_block, read_block};
pub use error::StorageError;
pub use slot::TagSlot;
pub use tagfile::{write_tags, TagReader};
