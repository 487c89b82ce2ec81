//! Per-block authentication tags.
//!
//! Every archive block gets one tag: a truncated HMAC-SHA256 over the
//! block's position, a fresh random nonce, and the block bytes. Holding
//! the tag set (and the key) lets a verifier later challenge any block
//! and check the response without keeping the archive itself.
//!
//! ```text
//! MAC input (per block):
//! ┌──────────────────────┬───────────────────┬──────────────────┐
//! │  index (8 bytes, LE) │  nonce            │  block bytes     │
//! │                      │  [nonce_len]      │  [..block_size]  │
//! └──────────────────────┴───────────────────┴──────────────────┘
//! ```
//!
//! Binding the index into the MAC means a tag only verifies at the
//! position it was minted for; a storage provider cannot satisfy a
//! challenge for block 7 by presenting block 3.
//!
//! # Example
//!
//! ```
//! use holdfast_crypto::{tag_block, verify_block, TagKey};
//! use holdfast_types::{BlockIndex, MacParams};
//!
//! let key = TagKey::generate();
//! let params = MacParams::new(16, 20);
//!
//! let tag = tag_block(&key, &params, BlockIndex::new(7), b"block seven");
//! assert!(verify_block(&key, BlockIndex::new(7), b"block seven", &tag).is_ok());
//!
//! // Same bytes at the wrong position do not verify
//! assert!(verify_block(&key, BlockIndex::new(3), b"block seven", &tag).is_err());
//! ```

use std::fmt::Debug;

use bytes::Bytes;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use holdfast_types::{BlockIndex, MacParams};

use crate::{CryptoError, TagKey};

type HmacSha256 = Hmac<Sha256>;

// ============================================================================
// BlockTag
// ============================================================================

/// The tag minted for one archive block.
///
/// A tag is not secret (it is persisted on the same untrusted storage as
/// the archive), but without the [`TagKey`] it cannot be forged for
/// modified block contents.
#[derive(Clone, PartialEq, Eq)]
pub struct BlockTag {
    /// Position of the covered block in the archive.
    pub index: BlockIndex,
    /// Random nonce mixed into the MAC input.
    pub nonce: Bytes,
    /// Truncated HMAC-SHA256 output.
    pub mac: Bytes,
}

impl BlockTag {
    pub fn new(index: BlockIndex, nonce: Bytes, mac: Bytes) -> Self {
        Self { index, nonce, mac }
    }
}

impl Debug for BlockTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockTag")
            .field("index", &self.index)
            .field("nonce_len", &self.nonce.len())
            .field("mac_len", &self.mac.len())
            .finish()
    }
}

// ============================================================================
// Tag Generation
// ============================================================================

/// Mints the tag for a single block.
///
/// The nonce is drawn fresh from the OS CSPRNG, so tagging the same block
/// twice yields different tags; both verify.
///
/// # Arguments
///
/// * `key` - The secret tagging key
/// * `params` - Nonce and truncation lengths for this deployment
/// * `index` - The block's position in the archive
/// * `block` - The block bytes (the final block of an archive may be short)
///
/// # Panics
///
/// Panics if the OS CSPRNG fails. Debug builds panic if `params.mac_len()`
/// exceeds [`MacParams::MAX_MAC_LEN`].
pub fn tag_block(key: &TagKey, params: &MacParams, index: BlockIndex, block: &[u8]) -> BlockTag {
    // Precondition: truncation stays within the HMAC-SHA256 output
    debug_assert!(
        params.mac_len() <= MacParams::MAX_MAC_LEN,
        "mac_len exceeds HMAC-SHA256 output"
    );

    let mut nonce = vec![0u8; params.nonce_len()];
    getrandom::fill(&mut nonce).expect("CSPRNG failure");

    let full = keyed_mac(key, index, &nonce, block).finalize().into_bytes();
    let truncated = Bytes::copy_from_slice(&full[..params.mac_len()]);

    BlockTag {
        index,
        nonce: Bytes::from(nonce),
        mac: truncated,
    }
}

/// Mints tags for a run of consecutive blocks starting at index 0.
///
/// Convenience wrapper around [`tag_block`] for the common bulk-tagging
/// pass over a freshly blocked archive.
pub fn tag_blocks<'a>(
    key: &TagKey,
    params: &MacParams,
    blocks: impl IntoIterator<Item = &'a [u8]>,
) -> Vec<BlockTag> {
    let mut index = BlockIndex::ZERO;
    let mut tags = Vec::new();
    for block in blocks {
        tags.push(tag_block(key, params, index, block));
        index = index.next();
    }
    tags
}

// ============================================================================
// Tag Verification
// ============================================================================

/// Checks a block against the tag minted for it.
///
/// Recomputes the MAC over (`index`, `tag.nonce`, `block`) and compares it
/// against `tag.mac` in constant time. The caller supplies the index it
/// *expects* the block to occupy; a tag minted at a different position
/// fails verification even over identical bytes.
///
/// # Errors
///
/// Returns [`CryptoError::TagMismatch`] if:
/// - The block bytes differ from the bytes that were tagged
/// - The block is presented at the wrong index
/// - The tag was minted under a different key
/// - The stored tag itself was corrupted
pub fn verify_block(
    key: &TagKey,
    index: BlockIndex,
    block: &[u8],
    tag: &BlockTag,
) -> Result<(), CryptoError> {
    // Constant-time comparison of the truncated prefix
    keyed_mac(key, index, &tag.nonce, block)
        .verify_truncated_left(&tag.mac)
        .map_err(|_| CryptoError::TagMismatch)
}

// ============================================================================
// Internal Helpers
// ============================================================================

/// Builds the MAC state over the canonical input layout.
fn keyed_mac(key: &TagKey, index: BlockIndex, nonce: &[u8], block: &[u8]) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .expect("HMAC-SHA256 accepts any key length");
    mac.update(&index.as_u64().to_le_bytes());
    mac.update(nonce);
    mac.update(block);
    mac
}

// ============================================================================
// Tests
// ============================================================================
