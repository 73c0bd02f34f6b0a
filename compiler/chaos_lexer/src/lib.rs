//! Lexer for Chaos.
//!
//! Turns a [`SourceBuffer`] into a [`TokenArena`] of cooked tokens:
//!
//! ```text
//! SourceBuffer -> RawScanner (chaos_lexer_core) -> Scanner -> TokenArena
//!                                                    |
//!                                                    +-> SymbolTable (keywords, names)
//! ```
//!
//! Each compilation unit gets its own [`SymbolTable`] and [`TokenArena`];
//! nothing is global, so independent units can be lexed on separate
//! threads.

mod config;
pub mod keywords;
mod lex_error;
mod scanner;

use chaos_ir::{SymbolTable, TokenArena};
use chaos_lexer_core::SourceBuffer;
use tracing::debug;

pub use config::LexerConfig;
pub use keywords::ReservedWord;
pub use lex_error::{LexDiagnostic, LexDiagnosticKind, LexError};
pub use scanner::Scanner;

/// Everything produced by lexing one unit.
#[derive(Debug)]
pub struct LexOutput {
    /// Tokens in source order, ending with one `EndOfFile`.
    pub tokens: TokenArena,
    /// The unit's symbol table: reserved words plus every name seen.
    pub symbols: SymbolTable,
    /// Recoverable findings, sorted by position.
    pub diagnostics: Vec<LexDiagnostic>,
}

/// Lex a whole source buffer.
///
/// Builds and seeds a symbol table from `config`, scans every token, and
/// merges the buffer's encoding issues into the diagnostics.
#[tracing::instrument(level = "debug", skip_all, fields(source_len = source.len()))]
pub fn lex(source: &SourceBuffer, config: &LexerConfig) -> Result<LexOutput, LexError> {
    let mut symbols = config.symbol_table()?;
    keywords::seed(&mut symbols)?;

    let mut tokens = TokenArena::new();
    let mut scanner = Scanner::new(source.view(), &mut symbols);
    scanner.run(&mut tokens)?;

    let mut diagnostics: Vec<LexDiagnostic> = source
        .encoding_issues()
        .iter()
        .copied()
        .map(LexDiagnostic::from)
        .collect();
    diagnostics.extend(scanner.into_diagnostics());
    diagnostics.sort_by_key(|d| d.span.start);

    debug!(
        tokens = tokens.len(),
        symbols = symbols.len(),
        capacity = symbols.capacity(),
        diagnostics = diagnostics.len(),
        "lex finished"
    );
    Ok(LexOutput {
        tokens,
        symbols,
        diagnostics,
    })
}
