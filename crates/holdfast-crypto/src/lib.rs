//! # holdfast-crypto: Cryptographic primitives for Holdfast
//!
//! This crate produces and checks the per-block authentication tags that
//! Holdfast persists alongside an archive.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`key`] | Secret tagging keys (HMAC-SHA256, zeroized on drop) |
//! | [`tag`] | Per-block tags: generation and verification |
//!
//! ## Quick Start
//!
//! ```
//! use holdfast_crypto::{tag_block, verify_block, TagKey};
//! use holdfast_types::{BlockIndex, MacParams};
//!
//! let key = TagKey::generate();
//! let params = MacParams::default();
//!
//! // Tag a block at archive position 0
//! let block = b"first 4096 bytes of the archive";
//! let tag = tag_block(&key, &params, BlockIndex::ZERO, block);
//!
//! // Later, prove the block is still held intact
//! assert!(verify_block(&key, BlockIndex::ZERO, block, &tag).is_ok());
//! assert!(verify_block(&key, BlockIndex::ZERO, b"tampered", &tag).is_err());
//! ```

pub mod error;
pub mod key;
pub mod tag;

// Re-export primary types at crate root for convenience
pub use error::CryptoError;
pub use key::{KEY_LENGTH, TagKey};
pub use tag::{BlockTag, tag_block, tag_blocks, verify_block};
