//! Lexer errors and diagnostics.
//!
//! Two tiers:
//! - [`LexError`]: fatal, aborts the current lex and flows through `Result`.
//! - [`LexDiagnostic`]: recoverable findings collected alongside the
//!   tokens. The offending input still produces a token.

use std::fmt;

use chaos_ir::{ByteRange, SymbolTableError};
use chaos_lexer_core::{EncodingIssue, EncodingIssueKind};

/// Fatal lexer error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// The symbol table could not store a word.
    #[error("symbol table: {0}")]
    SymbolTable(#[from] SymbolTableError),
}

/// A recoverable lexer finding.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct LexDiagnostic {
    pub span: ByteRange,
    pub kind: LexDiagnosticKind,
}

/// What a [`LexDiagnostic`] reports.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexDiagnosticKind {
    // === Scanning ===
    /// Byte with no lexical role; emitted as an `Other` token.
    UnrecognizedByte { byte: u8 },
    /// String literal cut off by a newline or end of input.
    UnterminatedString,
    /// Character literal cut off by a newline or end of input.
    UnterminatedChar,
    /// `/*` never closed. The rest of the input is comment.
    UnterminatedComment,
    /// Integer literal does not fit in `u64`.
    IntegerOverflow,

    // === Encoding ===
    /// UTF-8 byte order mark at the start of the file.
    Utf8Bom,
    /// UTF-16 little-endian byte order mark.
    Utf16LeBom,
    /// UTF-16 big-endian byte order mark.
    Utf16BeBom,
    /// `0x00` byte inside the source.
    InteriorNull,
}

impl LexDiagnostic {
    #[inline]
    pub fn new(span: ByteRange, kind: LexDiagnosticKind) -> Self {
        LexDiagnostic { span, kind }
    }
}

impl fmt::Display for LexDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.span, self.kind)
    }
}

impl fmt::Display for LexDiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedByte { byte } if byte.is_ascii_graphic() => {
                write!(f, "unrecognized character `{}`", *byte as char)
            }
            Self::UnrecognizedByte { byte } => write!(f, "unrecognized byte {byte:#04x}"),
            Self::UnterminatedString => f.write_str("unterminated string literal"),
            Self::UnterminatedChar => f.write_str("unterminated character literal"),
            Self::UnterminatedComment => f.write_str("unterminated block comment"),
            Self::IntegerOverflow => f.write_str("integer literal does not fit in 64 bits"),
            Self::Utf8Bom => f.write_str("source starts with a UTF-8 byte order mark"),
            Self::Utf16LeBom => f.write_str("source is UTF-16 (little-endian), expected ASCII"),
            Self::Utf16BeBom => f.write_str("source is UTF-16 (big-endian), expected ASCII"),
            Self::InteriorNull => f.write_str("null byte in source"),
        }
    }
}

impl From<EncodingIssue> for LexDiagnostic {
    fn from(issue: EncodingIssue) -> Self {
        let kind = match issue.kind {
            EncodingIssueKind::Utf8Bom => LexDiagnosticKind::Utf8Bom,
            EncodingIssueKind::Utf16LeBom => LexDiagnosticKind::Utf16LeBom,
            EncodingIssueKind::Utf16BeBom => LexDiagnosticKind::Utf16BeBom,
            EncodingIssueKind::InteriorNull => LexDiagnosticKind::InteriorNull,
        };
        LexDiagnostic::new(ByteRange::new(issue.pos, issue.len), kind)
    }
}
