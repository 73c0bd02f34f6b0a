//! Raw token tags emitted by the DFA.
//!
//! Tags describe token shape only. Keyword resolution, integer values and
//! terminator insertion belong to the cooking layer, so there is no keyword
//! tag and `;` surfaces as [`RawTag::Semicolon`].

use std::fmt;

/// Kind of a raw token, stored in terminal DFA transitions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum RawTag {
    // === Words and literals ===
    /// Lowercase-initial word: `[a-z_][A-Za-z0-9_]*`.
    Identifier,
    /// Uppercase-initial word: `[A-Z][A-Za-z0-9_]*`.
    Type,
    /// Decimal digits.
    Integer,
    /// `"..."` on a single line, quotes included.
    String,
    /// `"` run that hit a newline or the end first.
    UnterminatedString,
    /// `'...'` on a single line, ticks included.
    Char,
    /// `'` run that hit a newline or the end first.
    UnterminatedChar,

    // === Operator chains ===
    Equals,
    /// `=>`
    FatArrow,
    Colon,
    /// `::`
    DoubleColon,
    Minus,
    /// `->`
    Arrow,
    Less,
    /// `<-`
    LeftArrow,
    Greater,
    Dot,
    /// `..`
    DotDot,
    /// `...`
    Ellipsis,
    /// `/` and the single-character operators.
    Operator,

    // === Delimiters ===
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Semicolon,

    // === Layout ===
    Newline,

    // === Errors and control ===
    /// Byte with no lexical role.
    Other,
    /// `/*` with no closing `*/` before the end of input. Spans the opener.
    UnterminatedComment,
    /// End of input. Zero length; repeated on every later call.
    Eof,
}

impl RawTag {
    /// Short lowercase name for dumps and test output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Type => "type",
            Self::Integer => "integer",
            Self::String => "string",
            Self::UnterminatedString => "unterminated_string",
            Self::Char => "char",
            Self::UnterminatedChar => "unterminated_char",
            Self::Equals => "equals",
            Self::FatArrow => "fat_arrow",
            Self::Colon => "colon",
            Self::DoubleColon => "double_colon",
            Self::Minus => "minus",
            Self::Arrow => "arrow",
            Self::Less => "less",
            Self::LeftArrow => "left_arrow",
            Self::Greater => "greater",
            Self::Dot => "dot",
            Self::DotDot => "dot_dot",
            Self::Ellipsis => "ellipsis",
            Self::Operator => "operator",
            Self::LParen => "lparen",
            Self::RParen => "rparen",
            Self::LBracket => "lbracket",
            Self::RBracket => "rbracket",
            Self::LBrace => "lbrace",
            Self::RBrace => "rbrace",
            Self::Comma => "comma",
            Self::Semicolon => "semicolon",
            Self::Newline => "newline",
            Self::Other => "other",
            Self::UnterminatedComment => "unterminated_comment",
            Self::Eof => "eof",
        }
    }

    /// Word-shaped tags go through symbol table lookup when cooked.
    #[inline]
    pub const fn is_word(self) -> bool {
        matches!(self, Self::Identifier | Self::Type)
    }
}

impl fmt::Display for RawTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token as produced by [`RawScanner`](crate::RawScanner).
///
/// `start` points past any skipped whitespace or comments, so
/// `start..start + len` is exactly the token's text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RawToken {
    pub tag: RawTag,
    pub start: u32,
    pub len: u32,
}

impl RawToken {
    /// Exclusive end offset.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.start + self.len
    }
}

const _: () = assert!(std::mem::size_of::<RawTag>() == 1);
const _: () = assert!(std::mem::size_of::<RawToken>() <= 12);
