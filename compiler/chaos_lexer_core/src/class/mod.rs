//! Byte equivalence classes.
//!
//! The DFA never sees raw bytes. Each of the 256 byte values maps to one of
//! [`CLASS_COUNT`] classes through a const lookup table, which keeps the
//! transition table narrow: one column per class instead of per byte.
//!
//! Bytes with no lexical role (control characters, DEL, every non-ASCII
//! byte, `$`, `\`, `` ` ``) fall into [`EquivalenceClass::Other`].

use std::fmt;

/// Number of equivalence classes, including the virtual end-of-input class.
pub const CLASS_COUNT: usize = 26;

/// Input alphabet of the DFA.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum EquivalenceClass {
    /// Space, tab, carriage return.
    Whitespace,
    Newline,
    /// `a`-`z` and `_`.
    Lower,
    /// `A`-`Z`.
    Upper,
    Digit,
    Equals,
    Colon,
    Minus,
    Less,
    Greater,
    Dot,
    Slash,
    /// `*`, an operator on its own but also part of `/* */`.
    Star,
    /// `"`.
    Quote,
    /// `'`.
    Tick,
    /// Single-character operators: `+ % ^ & | ! ~ ? @ #`.
    Operator,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    /// Catch-all for bytes with no lexical role.
    Other,
    /// Virtual class used once the cursor reaches the logical end. No byte
    /// maps to it.
    EndOfInput,
}

impl EquivalenceClass {
    /// Every class, in discriminant order.
    pub const ALL: [Self; CLASS_COUNT] = [
        Self::Whitespace,
        Self::Newline,
        Self::Lower,
        Self::Upper,
        Self::Digit,
        Self::Equals,
        Self::Colon,
        Self::Minus,
        Self::Less,
        Self::Greater,
        Self::Dot,
        Self::Slash,
        Self::Star,
        Self::Quote,
        Self::Tick,
        Self::Operator,
        Self::LParen,
        Self::RParen,
        Self::LBracket,
        Self::RBracket,
        Self::LBrace,
        Self::RBrace,
        Self::Comma,
        Self::Semicolon,
        Self::Other,
        Self::EndOfInput,
    ];

    /// Column index into the transition table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            Self::Newline => "newline",
            Self::Lower => "lower",
            Self::Upper => "upper",
            Self::Digit => "digit",
            Self::Equals => "equals",
            Self::Colon => "colon",
            Self::Minus => "minus",
            Self::Less => "less",
            Self::Greater => "greater",
            Self::Dot => "dot",
            Self::Slash => "slash",
            Self::Star => "star",
            Self::Quote => "quote",
            Self::Tick => "tick",
            Self::Operator => "operator",
            Self::LParen => "lparen",
            Self::RParen => "rparen",
            Self::LBracket => "lbracket",
            Self::RBracket => "rbracket",
            Self::LBrace => "lbrace",
            Self::RBrace => "rbrace",
            Self::Comma => "comma",
            Self::Semicolon => "semicolon",
            Self::Other => "other",
            Self::EndOfInput => "end-of-input",
        }
    }
}

impl fmt::Display for EquivalenceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte to class lookup table, built at compile time.
static CLASS_TABLE: [EquivalenceClass; 256] = build_class_table();

#[allow(
    clippy::cast_possible_truncation,
    reason = "loop index is bounded by 256"
)]
const fn build_class_table() -> [EquivalenceClass; 256] {
    let mut table = [EquivalenceClass::Other; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = match i as u8 {
            b' ' | b'\t' | b'\r' => EquivalenceClass::Whitespace,
            b'\n' => EquivalenceClass::Newline,
            b'a'..=b'z' | b'_' => EquivalenceClass::Lower,
            b'A'..=b'Z' => EquivalenceClass::Upper,
            b'0'..=b'9' => EquivalenceClass::Digit,
            b'=' => EquivalenceClass::Equals,
            b':' => EquivalenceClass::Colon,
            b'-' => EquivalenceClass::Minus,
            b'<' => EquivalenceClass::Less,
            b'>' => EquivalenceClass::Greater,
            b'.' => EquivalenceClass::Dot,
            b'/' => EquivalenceClass::Slash,
            b'*' => EquivalenceClass::Star,
            b'"' => EquivalenceClass::Quote,
            b'\'' => EquivalenceClass::Tick,
            b'+' | b'%' | b'^' | b'&' | b'|' | b'!' | b'~' | b'?' | b'@' | b'#' => {
                EquivalenceClass::Operator
            }
            b'(' => EquivalenceClass::LParen,
            b')' => EquivalenceClass::RParen,
            b'[' => EquivalenceClass::LBracket,
            b']' => EquivalenceClass::RBracket,
            b'{' => EquivalenceClass::LBrace,
            b'}' => EquivalenceClass::RBrace,
            b',' => EquivalenceClass::Comma,
            b';' => EquivalenceClass::Semicolon,
            _ => EquivalenceClass::Other,
        };
        i += 1;
    }
    table
}

/// Equivalence class of `byte`. Total over all 256 values.
#[inline]
pub fn classify(byte: u8) -> EquivalenceClass {
    CLASS_TABLE[byte as usize]
}

/// Size in bytes of the byte-to-class table.
pub(crate) const CLASS_TABLE_BYTES: usize = std::mem::size_of::<[EquivalenceClass; 256]>();

const _: () = assert!(std::mem::size_of::<EquivalenceClass>() == 1);
const _: () = assert!(EquivalenceClass::EndOfInput as usize == CLASS_COUNT - 1);
