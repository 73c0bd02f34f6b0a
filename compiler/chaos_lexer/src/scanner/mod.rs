//! Token cooking and statement terminators.
//!
//! Sits between the DFA driver and the token arena:
//!
//! ```text
//! SourceView -> RawScanner -> RawToken -> Scanner::cook -> Token -> TokenArena
//! ```
//!
//! Per raw token the scanner
//! - maps the tag to a [`TokenKind`],
//! - resolves words through the [`SymbolTable`] (reserved hit becomes
//!   [`TokenKind::Keyword`], anything else is inserted as a plain name),
//! - decodes integer values,
//! - applies the terminator rule (below),
//! - records diagnostics for recoverable problems.
//!
//! Comments never become tokens. A `/*` left open at the end of input is
//! reported and the scan ends with `EndOfFile` as usual.
//!
//! # Terminator rule
//!
//! Any emitted token sets `need_terminator`. A newline seen while it is set
//! becomes a [`TokenKind::Terminator`] and clears it; any other newline is
//! dropped, so blank lines never stack terminators. An explicit `;` is a
//! terminator too and clears the flag. No terminator is synthesized at end
//! of input.

use chaos_ir::{ByteRange, SymbolTable, Token, TokenArena, TokenKind, TokenPayload};
use chaos_lexer_core::{RawScanner, RawTag, RawToken, SourceView};
use tracing::debug;

use crate::lex_error::{LexDiagnostic, LexDiagnosticKind, LexError};

/// Cooking scanner for one compilation unit.
///
/// Borrows the source view and exclusively borrows the unit's symbol table.
pub struct Scanner<'src, 'sym> {
    raw: RawScanner<'src>,
    source: &'src [u8],
    symbols: &'sym mut SymbolTable,
    diagnostics: Vec<LexDiagnostic>,
    need_terminator: bool,
}

impl<'src, 'sym> Scanner<'src, 'sym> {
    /// Create a scanner over `view`.
    ///
    /// `symbols` should already hold the reserved words; see
    /// [`keywords::seed`](crate::keywords::seed).
    pub fn new(view: SourceView<'src>, symbols: &'sym mut SymbolTable) -> Self {
        Scanner {
            raw: RawScanner::new(view),
            source: view.source(),
            symbols,
            diagnostics: Vec::new(),
            need_terminator: false,
        }
    }

    /// Scan the whole source into `arena`, ending with one `EndOfFile`.
    ///
    /// On `Err` the arena holds every token cooked before the failure.
    #[tracing::instrument(level = "debug", skip_all, fields(source_len = self.source.len()))]
    pub fn run(&mut self, arena: &mut TokenArena) -> Result<(), LexError> {
        let before = arena.len();
        loop {
            let token = self.next_token()?;
            arena.push(token);
            if token.kind == TokenKind::EndOfFile {
                break;
            }
        }
        debug!(
            tokens = arena.len() - before,
            symbols = self.symbols.len(),
            diagnostics = self.diagnostics.len(),
            "scan finished"
        );
        Ok(())
    }

    /// Produce the next cooked token.
    ///
    /// Returns `EndOfFile` once the source is exhausted, and keeps
    /// returning it on later calls.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            let raw = self.raw.next_token();
            match raw.tag {
                RawTag::Newline => {
                    if std::mem::take(&mut self.need_terminator) {
                        return Ok(Token::new(TokenKind::Terminator, range(raw)));
                    }
                }
                RawTag::Semicolon => {
                    self.need_terminator = false;
                    return Ok(Token::new(TokenKind::Terminator, range(raw)));
                }
                RawTag::Eof => return Ok(Token::new(TokenKind::EndOfFile, range(raw))),
                RawTag::UnterminatedComment => {
                    self.report(range(raw), LexDiagnosticKind::UnterminatedComment);
                }
                _ => {
                    let token = self.cook(raw)?;
                    self.need_terminator = true;
                    return Ok(token);
                }
            }
        }
    }

    /// Diagnostics recorded so far, in source order.
    pub fn diagnostics(&self) -> &[LexDiagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<LexDiagnostic> {
        self.diagnostics
    }

    /// Cook a substantive raw token.
    fn cook(&mut self, raw: RawToken) -> Result<Token, LexError> {
        let slice = range(raw);
        let kind = cooked_kind(raw.tag);
        match raw.tag {
            RawTag::Identifier | RawTag::Type => self.cook_word(kind, slice),
            RawTag::Integer => Ok(self.cook_integer(slice)),
            RawTag::UnterminatedString => {
                self.report(slice, LexDiagnosticKind::UnterminatedString);
                Ok(Token::new(kind, slice))
            }
            RawTag::UnterminatedChar => {
                self.report(slice, LexDiagnosticKind::UnterminatedChar);
                Ok(Token::new(kind, slice))
            }
            RawTag::Other => {
                let byte = self.source[slice.start as usize];
                // Null bytes are reported by the source buffer's encoding check.
                if byte != 0 {
                    self.report(slice, LexDiagnosticKind::UnrecognizedByte { byte });
                }
                Ok(Token::new(kind, slice))
            }
            _ => Ok(Token::new(kind, slice)),
        }
    }

    /// Resolve a word against the symbol table.
    fn cook_word(&mut self, kind: TokenKind, slice: ByteRange) -> Result<Token, LexError> {
        let text = self.text(slice);
        let symbol = self.symbols.lookup_or_insert(text)?;
        Ok(match symbol.reserved() {
            Some(id) => Token::with_payload(TokenKind::Keyword, slice, TokenPayload::Reserved(id)),
            None => Token::with_payload(kind, slice, TokenPayload::Identifier(symbol.id())),
        })
    }

    /// Decode a run of decimal digits.
    fn cook_integer(&mut self, slice: ByteRange) -> Token {
        let value = self.text(slice).iter().try_fold(0u64, |acc, &digit| {
            acc.checked_mul(10)?.checked_add(u64::from(digit - b'0'))
        });
        match value {
            Some(value) => {
                Token::with_payload(TokenKind::Integer, slice, TokenPayload::Integer(value))
            }
            None => {
                self.report(slice, LexDiagnosticKind::IntegerOverflow);
                Token::new(TokenKind::Integer, slice)
            }
        }
    }

    #[inline]
    fn text(&self, slice: ByteRange) -> &'src [u8] {
        let source: &'src [u8] = self.source;
        &source[slice.start as usize..slice.end() as usize]
    }

    fn report(&mut self, span: ByteRange, kind: LexDiagnosticKind) {
        self.diagnostics.push(LexDiagnostic::new(span, kind));
    }
}

#[inline]
fn range(raw: RawToken) -> ByteRange {
    ByteRange::new(raw.start, raw.len)
}

/// Token kind for a raw tag, before keyword resolution.
///
/// Newlines and `;` map to [`TokenKind::Terminator`]; whether a newline
/// actually produces one is decided by the terminator rule. An unterminated
/// block comment runs to the end of input, so it maps to
/// [`TokenKind::EndOfFile`].
pub(crate) const fn cooked_kind(tag: RawTag) -> TokenKind {
    match tag {
        RawTag::Identifier => TokenKind::Identifier,
        RawTag::Type => TokenKind::Type,
        RawTag::Integer => TokenKind::Integer,
        RawTag::String => TokenKind::String,
        RawTag::UnterminatedString => TokenKind::UnterminatedString,
        RawTag::Char => TokenKind::Char,
        RawTag::UnterminatedChar => TokenKind::UnterminatedChar,
        RawTag::Equals => TokenKind::Equals,
        RawTag::FatArrow => TokenKind::FatArrow,
        RawTag::Colon => TokenKind::Colon,
        RawTag::DoubleColon => TokenKind::DoubleColon,
        RawTag::Minus => TokenKind::Minus,
        RawTag::Arrow => TokenKind::Arrow,
        RawTag::Less => TokenKind::Less,
        RawTag::LeftArrow => TokenKind::LeftArrow,
        RawTag::Greater => TokenKind::Greater,
        RawTag::Dot => TokenKind::Dot,
        RawTag::DotDot => TokenKind::DotDot,
        RawTag::Ellipsis => TokenKind::Ellipsis,
        RawTag::Operator => TokenKind::Operator,
        RawTag::LParen => TokenKind::LParen,
        RawTag::RParen => TokenKind::RParen,
        RawTag::LBracket => TokenKind::LBracket,
        RawTag::RBracket => TokenKind::RBracket,
        RawTag::LBrace => TokenKind::LBrace,
        RawTag::RBrace => TokenKind::RBrace,
        RawTag::Comma => TokenKind::Comma,
        RawTag::Semicolon | RawTag::Newline => TokenKind::Terminator,
        RawTag::Other => TokenKind::Other,
        RawTag::Eof | RawTag::UnterminatedComment => TokenKind::EndOfFile,
    }
}
