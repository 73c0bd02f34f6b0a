//! Cooked tokens and their storage.

mod arena;
mod kind;

pub use arena::{TokenArena, TokenId, TokenRun, RUN_CAPACITY};
pub use kind::TokenKind;

use crate::{ByteRange, ReservedId, SymbolId};

/// Data attached to a token beyond its kind and slice.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum TokenPayload {
    #[default]
    None,
    /// Decoded value of an [`TokenKind::Integer`] literal.
    Integer(u64),
    /// Reserved-word id of a [`TokenKind::Keyword`].
    Reserved(ReservedId),
    /// Symbol table entry of an [`TokenKind::Identifier`] or [`TokenKind::Type`].
    Identifier(SymbolId),
}

/// A cooked token.
///
/// Text is never copied: `slice` points into the source buffer the token
/// was scanned from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub slice: ByteRange,
    pub payload: TokenPayload,
}

impl Token {
    /// Create a token with no payload.
    #[inline]
    pub const fn new(kind: TokenKind, slice: ByteRange) -> Self {
        Token {
            kind,
            slice,
            payload: TokenPayload::None,
        }
    }

    /// Create a token carrying `payload`.
    #[inline]
    pub const fn with_payload(kind: TokenKind, slice: ByteRange, payload: TokenPayload) -> Self {
        Token {
            kind,
            slice,
            payload,
        }
    }

    /// Borrow the token's text from the source it was scanned from.
    #[inline]
    pub fn text<'a>(&self, source: &'a [u8]) -> Option<&'a [u8]> {
        self.slice.get(source)
    }
}
