//! Secret keys for per-block tagging.
//!
//! A [`TagKey`] is the single secret a Holdfast deployment holds: anyone
//! with the key can mint tags, anyone without it can at best store the
//! blocks it covers. Key material is zeroed from memory on drop.

use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Length of a tagging key in bytes (256 bits).
///
/// HMAC-SHA256 accepts arbitrary key lengths, but 32 bytes matches the
/// hash's internal security level; longer keys add nothing.
pub const KEY_LENGTH: usize = 32;

// ============================================================================
// TagKey
// ============================================================================

/// An HMAC-SHA256 tagging key (256 bits).
///
/// This is secret key material that must be protected. Use
/// [`TagKey::generate`] to create a new random key, or
/// [`TagKey::from_bytes`] to restore one from secure storage.
///
/// Key material is securely zeroed from memory when dropped via
/// [`ZeroizeOnDrop`].
///
/// # Security
///
/// - Never log or expose the key bytes
/// - Never store the key next to the tag file it protects
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct TagKey {
    key: [u8; KEY_LENGTH],
}

impl TagKey {
    /// Generates a new random tagging key using the OS CSPRNG.
    ///
    /// # Panics
    ///
    /// Panics if the OS CSPRNG fails (catastrophic system error).
    pub fn generate() -> Self {
        let mut key = [0u8; KEY_LENGTH];
        getrandom::fill(&mut key).expect("CSPRNG failure");

        // Postcondition: CSPRNG produced non-degenerate output
        debug_assert!(key.iter().any(|&b| b != 0), "CSPRNG produced all-zero key");

        Self { key }
    }

    /// Restores a tagging key from its 32-byte representation.
    ///
    /// # Security
    ///
    /// Only use bytes from a previously generated key or a secure KDF.
    pub fn from_bytes(bytes: &[u8; KEY_LENGTH]) -> Self {
        // Precondition: caller didn't pass degenerate key material
        debug_assert!(bytes.iter().any(|&b| b != 0), "key bytes are all zeros");

        Self { key: *bytes }
    }

    /// Returns the raw 32-byte key material.
    ///
    /// # Security
    ///
    /// Handle with care; the return value is not zeroized.
    pub fn to_bytes(&self) -> [u8; KEY_LENGTH] {
        self.key
    }

    /// Borrows the key material for MAC initialization.
    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_differ() {
        let a = TagKey::generate();
        let b = TagKey::generate();

        assert_ne!(a.to_bytes(), b.to_bytes());
    }

    #[test]
    fn key_roundtrip() {
        let original = TagKey::generate();
        let restored = TagKey::from_bytes(&original.to_bytes());

        assert_eq!(original.to_bytes(), restored.to_bytes());
    }
}
