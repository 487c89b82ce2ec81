//! Caller-owned cell for tags handed over by a reader.
//!
//! [`TagSlot`] makes the replace-on-read ownership contract explicit:
//! [`TagReader::read_into`](crate::TagReader::read_into) installs each
//! decoded tag with [`TagSlot::replace`], which drops the previous
//! occupant exactly once, and empties the slot with [`TagSlot::clear`]
//! when a read fails past the open. The caller keeps the slot for as many
//! reads as it likes and takes ownership of the final tag with
//! [`TagSlot::take`].

/// Owned storage for at most one tag.
///
/// A slot is either empty or holds one value. Installing over an existing
/// occupant drops it; there is no way to leak one or drop one twice
/// through this API.
#[derive(Debug)]
pub struct TagSlot<T> {
    value: Option<T>,
}

impl<T> TagSlot<T> {
    /// Creates an empty slot.
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// Installs `value`, dropping any prior occupant.
    pub fn replace(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Drops the occupant, if any, leaving the slot empty.
    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Borrows the occupant.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Removes and returns the occupant, leaving the slot empty.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Returns true when the slot holds nothing.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

impl<T> Default for TagSlot<T> {
    fn default() -> Self {
        Self::empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
