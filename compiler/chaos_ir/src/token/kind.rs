//! Cooked token kinds.

use std::fmt;

/// Kind of a cooked token.
///
/// Produced by the lexer after keyword resolution and newline handling.
/// Unlike the raw DFA tags there is no `Newline` kind: a newline either
/// becomes a [`TokenKind::Terminator`] or is dropped as whitespace.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // === Words & Literals ===
    /// Lowercase- or underscore-initial word, e.g. `x`, `_tmp`.
    Identifier,
    /// Uppercase-initial word, e.g. `Int`.
    Type,
    /// A word found in the reserved-word table.
    Keyword,
    /// Decimal integer literal.
    Integer,
    /// `"..."` on a single line (no escape processing).
    String,
    /// A `"` literal cut off by a newline or end of input.
    UnterminatedString,
    /// `'...'` on a single line (no escape processing).
    Char,
    /// A `'` literal cut off by a newline or end of input.
    UnterminatedChar,

    // === Operators ===
    /// `=`
    Equals,
    /// `=>`
    FatArrow,
    /// `:`
    Colon,
    /// `::`
    DoubleColon,
    /// `-`
    Minus,
    /// `->`
    Arrow,
    /// `<`
    Less,
    /// `<-`
    LeftArrow,
    /// `>`
    Greater,
    /// `.`
    Dot,
    /// `..`
    DotDot,
    /// `...`
    Ellipsis,
    /// Any other single-byte operator (`+ * / % ^ & | ! ~ ? @ #`).
    Operator,

    // === Delimiters ===
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    /// Statement boundary: explicit `;` or an inserted newline terminator.
    Terminator,

    // === Errors & Control ===
    /// A byte with no productive transition.
    Other,
    /// End of the source text. Always the last token.
    EndOfFile,
}

impl TokenKind {
    /// Returns `true` for kinds resolved against the symbol table.
    #[inline]
    pub const fn is_word(self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::Type | TokenKind::Keyword)
    }

    /// Returns `true` for kinds that report a malformed input.
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(
            self,
            TokenKind::Other | TokenKind::UnterminatedString | TokenKind::UnterminatedChar
        )
    }

    /// Fixed spelling for kinds that have exactly one.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Equals => Some("="),
            TokenKind::FatArrow => Some("=>"),
            TokenKind::Colon => Some(":"),
            TokenKind::DoubleColon => Some("::"),
            TokenKind::Minus => Some("-"),
            TokenKind::Arrow => Some("->"),
            TokenKind::Less => Some("<"),
            TokenKind::LeftArrow => Some("<-"),
            TokenKind::Greater => Some(">"),
            TokenKind::Dot => Some("."),
            TokenKind::DotDot => Some(".."),
            TokenKind::Ellipsis => Some("..."),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::LBracket => Some("["),
            TokenKind::RBracket => Some("]"),
            TokenKind::LBrace => Some("{"),
            TokenKind::RBrace => Some("}"),
            TokenKind::Comma => Some(","),
            TokenKind::Identifier
            | TokenKind::Type
            | TokenKind::Keyword
            | TokenKind::Integer
            | TokenKind::String
            | TokenKind::UnterminatedString
            | TokenKind::Char
            | TokenKind::UnterminatedChar
            | TokenKind::Operator
            | TokenKind::Terminator
            | TokenKind::Other
            | TokenKind::EndOfFile => None,
        }
    }

    /// Short lowercase name used in token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Type => "type",
            TokenKind::Keyword => "keyword",
            TokenKind::Integer => "integer",
            TokenKind::String => "string",
            TokenKind::UnterminatedString => "unterminated_string",
            TokenKind::Char => "char",
            TokenKind::UnterminatedChar => "unterminated_char",
            TokenKind::Equals => "equals",
            TokenKind::FatArrow => "fat_arrow",
            TokenKind::Colon => "colon",
            TokenKind::DoubleColon => "double_colon",
            TokenKind::Minus => "minus",
            TokenKind::Arrow => "arrow",
            TokenKind::Less => "less",
            TokenKind::LeftArrow => "left_arrow",
            TokenKind::Greater => "greater",
            TokenKind::Dot => "dot",
            TokenKind::DotDot => "dot_dot",
            TokenKind::Ellipsis => "ellipsis",
            TokenKind::Operator => "operator",
            TokenKind::LParen => "lparen",
            TokenKind::RParen => "rparen",
            TokenKind::LBracket => "lbracket",
            TokenKind::RBracket => "rbracket",
            TokenKind::LBrace => "lbrace",
            TokenKind::RBrace => "rbrace",
            TokenKind::Comma => "comma",
            TokenKind::Terminator => "terminator",
            TokenKind::Other => "other",
            TokenKind::EndOfFile => "eof",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);
