//! Record codec for the MAC tagging scheme.
//!
//! Layout of one record (sizes fixed by [`MacParams`]):
//!
//! ```text
//! ┌──────────────────────┬───────────────────┬──────────────────┐
//! │  index (8 bytes, LE) │  nonce            │  mac             │
//! │  [0..8]              │  [8..8+nonce_len] │  [..record_size] │
//! └──────────────────────┴───────────────────┴──────────────────┘
//! ```
//!
//! The stored index duplicates the record's position in the file. The
//! duplication is deliberate: the MAC was computed over the index, so a
//! verifier needs it back verbatim when recomputing.

use bytes::Bytes;
use holdfast_crypto::BlockTag;
use holdfast_types::{BlockIndex, Context, MacParams, SchemeKind};

use crate::{CodecError, TagCodec};

/// Width of the leading index field.
const INDEX_LEN: usize = 8;

/// [`TagCodec`] for [`Scheme::Mac`](holdfast_types::Scheme::Mac) deployments.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacCodec;

impl MacCodec {
    pub fn new() -> Self {
        Self
    }

    /// Extracts MAC parameters, rejecting every other scheme.
    fn params<'a>(&self, ctx: &'a Context) -> Result<&'a MacParams, CodecError> {
        ctx.scheme
            .mac_params()
            .ok_or(CodecError::UnsupportedScheme {
                expected: SchemeKind::Mac,
                actual: ctx.scheme.kind(),
            })
    }

    fn check_field_lengths(tag: &BlockTag, params: &MacParams) -> Result<(), CodecError> {
        if tag.nonce.len() != params.nonce_len() {
            return Err(CodecError::FieldLength {
                field: "nonce",
                expected: params.nonce_len(),
                actual: tag.nonce.len(),
            });
        }
        if tag.mac.len() != params.mac_len() {
            return Err(CodecError::FieldLength {
                field: "mac",
                expected: params.mac_len(),
                actual: tag.mac.len(),
            });
        }
        Ok(())
    }
}

impl TagCodec for MacCodec {
    type Tag = BlockTag;

    fn record_size(&self, ctx: &Context) -> Result<usize, CodecError> {
        let params = self.params(ctx)?;
        Ok(INDEX_LEN + params.nonce_len() + params.mac_len())
    }

    fn encode_batch(&self, ctx: &Context, tags: &[BlockTag]) -> Result<Vec<u8>, CodecError> {
        let params = self.params(ctx)?;
        let record_size = INDEX_LEN + params.nonce_len() + params.mac_len();

        let mut buf = Vec::with_capacity(record_size * tags.len());
        for tag in tags {
            Self::check_field_lengths(tag, params)?;
            buf.extend_from_slice(&tag.index.as_u64().to_le_bytes());
            buf.extend_from_slice(&tag.nonce);
            buf.extend_from_slice(&tag.mac);
        }

        // Postcondition: back-to-back records, nothing else
        debug_assert_eq!(
            buf.len(),
            record_size * tags.len(),
            "encoded batch size mismatch"
        );

        Ok(buf)
    }

    fn decode_record(&self, ctx: &Context, buf: &[u8]) -> Result<BlockTag, CodecError> {
        let params = self.params(ctx)?;
        let record_size = INDEX_LEN + params.nonce_len() + params.mac_len();

        if buf.len() < record_size {
            return Err(CodecError::Truncated {
                expected: record_size,
                actual: buf.len(),
            });
        }

        // Field boundaries are fixed by the params; length checked above
        let index = BlockIndex::new(u64::from_le_bytes(buf[..INDEX_LEN].try_into().unwrap()));
        let nonce_end = INDEX_LEN + params.nonce_len();
        let nonce = Bytes::copy_from_slice(&buf[INDEX_LEN..nonce_end]);
        let mac = Bytes::copy_from_slice(&buf[nonce_end..record_size]);

        Ok(BlockTag { index, nonce, mac })
    }
}
