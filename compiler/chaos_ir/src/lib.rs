//! Core data types shared by the Chaos lexer and its consumers.
//!
//! - [`ByteRange`]: compact `(start, len)` slice into the source buffer
//! - [`Token`], [`TokenKind`], [`TokenPayload`]: cooked lexer output
//! - [`TokenArena`]: segmented, append-only token storage with stable handles
//! - [`SymbolTable`]: Robin Hood hash table classifying words
//! - [`hash`]: hash functions accepted by the symbol table

pub mod hash;
mod span;
mod symbol;
mod token;

pub use hash::{fx_hash, xxhash32, HashFn};
pub use span::ByteRange;
pub use symbol::{
    ReservedId, Symbol, SymbolId, SymbolKind, SymbolTable, SymbolTableError,
    DEFAULT_TABLE_ORDER, MAX_TABLE_ORDER,
};
pub use token::{Token, TokenArena, TokenId, TokenKind, TokenPayload, TokenRun, RUN_CAPACITY};
