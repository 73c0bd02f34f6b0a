//! Cursor over a padded source buffer.
//!
//! End of input is `pos == end`, never a sentinel value: interior `0x00`
//! bytes are ordinary input and classify as [`EquivalenceClass::Other`].
//! The byte past `end` must exist so reading the current byte is always in
//! bounds, even at the end.

use crate::{classify, EquivalenceClass};

/// Error constructing a [`SourceView`] over a caller-provided buffer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// No readable byte after the logical end.
    #[error("source buffer of {len} bytes has no slack byte after logical end {end}")]
    MissingSentinel { end: usize, len: usize },
    /// Logical length does not fit in a `u32` offset.
    #[error("source of {end} bytes exceeds the 4 GiB limit")]
    TooLarge { end: usize },
}

/// Read-only cursor over a source buffer.
///
/// Borrowed by the scanner; the buffer itself may be shared.
///
/// # Invariant
///
/// `pos <= end < buf.len()`.
#[derive(Clone, Copy, Debug)]
pub struct SourceView<'a> {
    /// Source bytes plus at least one slack byte.
    buf: &'a [u8],
    pos: u32,
    /// Logical length of the source.
    end: u32,
}

const _: () = assert!(std::mem::size_of::<SourceView<'_>>() <= 24);

impl<'a> SourceView<'a> {
    /// View the first `end` bytes of `buf`.
    ///
    /// `buf` must hold at least one byte past `end`.
    pub fn new(buf: &'a [u8], end: usize) -> Result<Self, SourceError> {
        if end >= buf.len() {
            return Err(SourceError::MissingSentinel {
                end,
                len: buf.len(),
            });
        }
        let end = u32::try_from(end).map_err(|_| SourceError::TooLarge { end })?;
        Ok(Self { buf, pos: 0, end })
    }

    /// Construction path for [`SourceBuffer`](crate::SourceBuffer), which
    /// guarantees the slack byte. Scanning begins at `start`; offsets stay
    /// relative to the start of `buf`.
    pub(crate) fn from_padded(buf: &'a [u8], start: u32, end: u32) -> Self {
        debug_assert!(start <= end && (end as usize) < buf.len());
        Self {
            buf,
            pos: start,
            end,
        }
    }

    /// Byte at the cursor. At the end this is the slack byte.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Class of the byte at the cursor, or [`EquivalenceClass::EndOfInput`]
    /// once the cursor reaches the logical end.
    #[inline]
    pub fn current_class(&self) -> EquivalenceClass {
        if self.is_eof() {
            EquivalenceClass::EndOfInput
        } else {
            classify(self.current())
        }
    }

    /// Advance by one byte. No-op at the end.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.end {
            self.pos += 1;
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Logical length of the source.
    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Bytes left before the end.
    #[inline]
    pub fn remaining(&self) -> u32 {
        self.end - self.pos
    }

    /// The logical source, without slack.
    #[inline]
    pub fn source(&self) -> &'a [u8] {
        &self.buf[..self.end as usize]
    }

    /// Source bytes in `start..start + len`, if in range.
    #[inline]
    pub fn slice(&self, start: u32, len: u32) -> Option<&'a [u8]> {
        let end = start.checked_add(len)?;
        self.source().get(start as usize..end as usize)
    }
}
