//! # holdfast-codec: On-disk tag records for Holdfast
//!
//! Tags are persisted in flat files of fixed-size records, one record per
//! block, in block order. The record size is a pure function of the scheme
//! parameters in the [`Context`], so the record for block `i` always lives
//! at byte offset `i * record_size`. There is no file header and no
//! per-record framing; the file's only structure is this arithmetic.
//!
//! [`TagCodec`] is the seam between in-memory tags and their stored form.
//! The storage layer is generic over it and never looks inside a tag;
//! [`MacCodec`] is the implementation for the MAC scheme, and a deployment
//! running a different scheme plugs in its own codec without touching the
//! file layer.

pub mod error;
pub mod mac;

pub use error::CodecError;
pub use mac::MacCodec;

use holdfast_types::Context;

/// Converts tags to and from their fixed-size stored records.
///
/// Implementations are scheme-specific: each method first checks that the
/// context's scheme is the one this codec understands and returns
/// [`CodecError::UnsupportedScheme`] otherwise. All three methods must
/// agree on the record size for any given context.
pub trait TagCodec {
    /// The in-memory tag type this codec stores.
    type Tag;

    /// Size in bytes of one encoded tag record under `ctx`'s scheme.
    ///
    /// Constant per context; every record in a tag file has this size.
    fn record_size(&self, ctx: &Context) -> Result<usize, CodecError>;

    /// Encodes a whole tag sequence into one buffer, records back-to-back.
    ///
    /// Produces exactly `tags.len() * record_size` bytes with no framing
    /// between records.
    fn encode_batch(&self, ctx: &Context, tags: &[Self::Tag]) -> Result<Vec<u8>, CodecError>;

    /// Decodes one tag record from the front of `buf`.
    ///
    /// Bytes past the record are ignored, so callers may hand over a
    /// larger buffer.
    fn decode_record(&self, ctx: &Context, buf: &[u8]) -> Result<Self::Tag, CodecError>;
}
