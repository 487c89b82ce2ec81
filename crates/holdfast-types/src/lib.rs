//! # holdfast-types: Core types for Holdfast
//!
//! This crate contains shared types used across the Holdfast tagging system:
//! - Block addressing ([`BlockIndex`])
//! - Scheme selection ([`Scheme`], [`SchemeKind`])
//! - Scheme parameters ([`MacParams`], [`SentinelParams`])
//! - Per-deployment configuration ([`Context`])

use std::{fmt::Display, path::PathBuf};

use serde::{Deserialize, Serialize};

// ============================================================================
// Block Addressing - Copy (cheap 8-byte value)
// ============================================================================

/// Position of a block within an archive.
///
/// Indices are zero-based and dense: block 0 starts at byte offset 0,
/// block `i` at byte offset `i * block_size`. Tag files use the same
/// indexing, so the tag for block `i` lives at record slot `i`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct BlockIndex(u64);

impl BlockIndex {
    pub const ZERO: BlockIndex = BlockIndex(0);

    pub fn new(index: u64) -> Self {
        Self(index)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The index of the block immediately after this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Byte offset of this block (or record) in a file of fixed-size entries.
    ///
    /// Returns `None` when `index * entry_size` overflows `u64`; such an
    /// offset cannot exist in any real file.
    pub fn byte_offset(&self, entry_size: u64) -> Option<u64> {
        self.0.checked_mul(entry_size)
    }
}

impl Display for BlockIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BlockIndex {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<BlockIndex> for u64 {
    fn from(index: BlockIndex) -> Self {
        index.0
    }
}

// ============================================================================
// Scheme Parameters - Copy (small plain values)
// ============================================================================

/// Parameters for the per-block MAC tagging scheme.
///
/// `mac_len` selects how many bytes of the HMAC-SHA256 output are kept in
/// each tag; `nonce_len` sizes the random nonce mixed into every MAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacParams {
    nonce_len: usize,
    mac_len: usize,
}

impl MacParams {
    /// HMAC-SHA256 output length; `mac_len` can never exceed this.
    pub const MAX_MAC_LEN: usize = 32;
    /// Shortest truncation the scheme accepts.
    pub const MIN_MAC_LEN: usize = 8;

    pub const DEFAULT_NONCE_LEN: usize = 16;
    pub const DEFAULT_MAC_LEN: usize = 32;

    /// # Panics
    ///
    /// Panics if `mac_len` lies outside `MIN_MAC_LEN..=MAX_MAC_LEN`
    /// (8..=32). An out-of-range truncation is a caller bug.
    pub fn new(nonce_len: usize, mac_len: usize) -> Self {
        // Precondition: truncation must fit the HMAC-SHA256 output
        assert!(
            (Self::MIN_MAC_LEN..=Self::MAX_MAC_LEN).contains(&mac_len),
            "mac_len must be within {}..={}",
            Self::MIN_MAC_LEN,
            Self::MAX_MAC_LEN
        );
        Self { nonce_len, mac_len }
    }

    pub fn nonce_len(&self) -> usize {
        self.nonce_len
    }

    pub fn mac_len(&self) -> usize {
        self.mac_len
    }
}

impl Default for MacParams {
    fn default() -> Self {
        Self {
            nonce_len: Self::DEFAULT_NONCE_LEN,
            mac_len: Self::DEFAULT_MAC_LEN,
        }
    }
}

/// Parameters for the sentinel tagging scheme.
///
/// Sentinel deployments precompute a fixed budget of challenge tokens
/// instead of keeping one tag per block. Holdfast only needs enough here
/// to recognize the scheme; token generation lives elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SentinelParams {
    num_tokens: u64,
    token_len: usize,
}

impl SentinelParams {
    pub const DEFAULT_NUM_TOKENS: u64 = 1000;
    pub const DEFAULT_TOKEN_LEN: usize = 32;

    pub fn new(num_tokens: u64, token_len: usize) -> Self {
        Self {
            num_tokens,
            token_len,
        }
    }

    pub fn num_tokens(&self) -> u64 {
        self.num_tokens
    }

    pub fn token_len(&self) -> usize {
        self.token_len
    }
}

impl Default for SentinelParams {
    fn default() -> Self {
        Self {
            num_tokens: Self::DEFAULT_NUM_TOKENS,
            token_len: Self::DEFAULT_TOKEN_LEN,
        }
    }
}

// ============================================================================
// Scheme - Copy (parameters are plain values)
// ============================================================================

/// The tagging scheme a deployment runs under.
///
/// Every file-level operation is scheme-specific: a tag file written under
/// one scheme is garbage under another. Carrying the scheme in the
/// [`Context`] lets the storage layer refuse cross-scheme calls instead of
/// decoding noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scheme {
    /// One truncated HMAC tag per archive block.
    Mac(MacParams),
    /// Precomputed sentinels embedded in the archive.
    Sentinel(SentinelParams),
}

impl Scheme {
    pub fn kind(&self) -> SchemeKind {
        match self {
            Scheme::Mac(_) => SchemeKind::Mac,
            Scheme::Sentinel(_) => SchemeKind::Sentinel,
        }
    }

    pub fn mac_params(&self) -> Option<&MacParams> {
        match self {
            Scheme::Mac(params) => Some(params),
            Scheme::Sentinel(_) => None,
        }
    }

    pub fn sentinel_params(&self) -> Option<&SentinelParams> {
        match self {
            Scheme::Mac(_) => None,
            Scheme::Sentinel(params) => Some(params),
        }
    }
}

/// Discriminant of a [`Scheme`], used when reporting scheme mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemeKind {
    Mac,
    Sentinel,
}

impl Display for SchemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemeKind::Mac => write!(f, "mac"),
            SchemeKind::Sentinel => write!(f, "sentinel"),
        }
    }
}

// ============================================================================
// Context - Clone (paths are owned, cloned rarely)
// ============================================================================

/// Per-deployment configuration shared by every file operation.
///
/// A context names the two files Holdfast touches (the archive being proven
/// and its tag file), fixes the block size the archive is sliced into, and
/// records the scheme the tags were produced under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// The file whose possession is being proven.
    pub archive_path: PathBuf,
    /// Where the per-block tags live.
    pub tag_path: PathBuf,
    /// Archive blocking granularity in bytes. Must be non-zero.
    pub block_size: u64,
    /// The tagging scheme in force for this deployment.
    pub scheme: Scheme,
    /// Emit operator-facing warnings (e.g. on tag-file overwrite).
    pub verbose: bool,
}

impl Context {
    pub const DEFAULT_BLOCK_SIZE: u64 = 4096;

    /// Creates a context with the default block size and `verbose` off.
    pub fn new(
        archive_path: impl Into<PathBuf>,
        tag_path: impl Into<PathBuf>,
        scheme: Scheme,
    ) -> Self {
        Self {
            archive_path: archive_path.into(),
            tag_path: tag_path.into(),
            block_size: Self::DEFAULT_BLOCK_SIZE,
            scheme,
            verbose: false,
        }
    }

    pub fn with_block_size(mut self, block_size: u64) -> Self {
        debug_assert!(block_size > 0, "block_size must be non-zero");
        self.block_size = block_size;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn scheme_kind(&self) -> SchemeKind {
        self.scheme.kind()
    }
}
