//! Source byte ranges.
//!
//! Tokens refer back into the source buffer instead of owning text, so the
//! range type is kept to 8 bytes.

use std::fmt;

/// A `(start, len)` byte range into a source buffer.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from the start of the source
/// - len: u32 - number of bytes covered
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(C)]
pub struct ByteRange {
    pub start: u32,
    pub len: u32,
}

impl ByteRange {
    /// Empty range at offset 0.
    pub const EMPTY: ByteRange = ByteRange { start: 0, len: 0 };

    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        ByteRange { start, len }
    }

    /// Create a range covering `start..end`.
    ///
    /// # Panics
    /// Panics in debug builds if `end < start`.
    #[inline]
    pub const fn from_bounds(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        ByteRange {
            start,
            len: end - start,
        }
    }

    /// Exclusive end offset.
    #[inline]
    pub const fn end(self) -> u32 {
        self.start + self.len
    }

    /// Returns `true` if the range covers no bytes.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Borrow the covered bytes from `source`.
    ///
    /// Returns `None` if the range does not fit inside `source`.
    #[inline]
    pub fn get(self, source: &[u8]) -> Option<&[u8]> {
        source.get(self.start as usize..self.end() as usize)
    }

    /// Smallest range covering both `self` and `other`.
    pub fn merge(self, other: ByteRange) -> ByteRange {
        let start = self.start.min(other.start);
        let end = self.end().max(other.end());
        ByteRange::from_bounds(start, end)
    }
}

impl fmt::Debug for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

const _: () = assert!(std::mem::size_of::<ByteRange>() == 8);

#[cfg(test)]
mod tests;
