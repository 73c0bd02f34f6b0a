//! Reserved words and symbol table seeding.
//!
//! There is no global keyword table. Each [`SymbolTable`] is seeded once,
//! through the ordinary insert path, before any scanning; afterwards a word
//! is a keyword exactly when its entry carries a [`ReservedId`].

use chaos_ir::{ReservedId, SymbolKind, SymbolTable, SymbolTableError};

/// Reserved words of the language.
///
/// The discriminant is the [`ReservedId`] stored in the symbol table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u16)]
pub enum ReservedWord {
    Int,
    Uint,
    Float,
    Double,
    Void,
    If,
    Else,
    While,
    For,
    Return,
}

impl ReservedWord {
    /// Every reserved word, in id order.
    pub const ALL: [Self; 10] = [
        Self::Int,
        Self::Uint,
        Self::Float,
        Self::Double,
        Self::Void,
        Self::If,
        Self::Else,
        Self::While,
        Self::For,
        Self::Return,
    ];

    pub const fn spelling(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Double => "double",
            Self::Void => "void",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::For => "for",
            Self::Return => "return",
        }
    }

    #[inline]
    pub const fn id(self) -> ReservedId {
        ReservedId::new(self as u16)
    }

    /// The word a symbol table id refers to, if it is one of ours.
    pub fn from_id(id: ReservedId) -> Option<Self> {
        Self::ALL.get(usize::from(id.raw())).copied()
    }
}

/// Insert every reserved word into `table`.
///
/// Seeding an already seeded table is a no-op.
pub fn seed(table: &mut SymbolTable) -> Result<(), SymbolTableError> {
    for word in ReservedWord::ALL {
        table.lookup_or_insert_with(word.spelling().as_bytes(), SymbolKind::Reserved(word.id()))?;
    }
    Ok(())
}
