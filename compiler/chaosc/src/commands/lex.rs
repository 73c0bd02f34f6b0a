//! `chaos lex`: tokenize a file and dump the tokens.

use chaos_ir::{SymbolTable, Token, TokenArena, TokenPayload};
use chaos_lexer::{lex, LexDiagnostic, ReservedWord};
use chaos_lexer_core::SourceBuffer;

use super::LexOptions;

/// Lex `path` and print its tokens to stdout and diagnostics to stderr.
///
/// Returns `false` if the file could not be lexed or produced diagnostics.
pub fn lex_file(path: &str, options: &LexOptions) -> bool {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("error: cannot read '{path}': {e}");
            return false;
        }
    };

    let buf = SourceBuffer::new(&bytes);
    let out = match lex(&buf, &options.config) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("error: {path}: {e}");
            return false;
        }
    };

    println!("Tokens for '{path}' ({} tokens):", out.tokens.len());
    print!("{}", render_tokens(buf.as_bytes(), &out.tokens));
    if options.stats {
        println!("{}", render_stats(&out.symbols));
    }
    eprint!("{}", render_diagnostics(path, buf.as_bytes(), &out.diagnostics));

    out.diagnostics.is_empty()
}

/// One line per token: kind, byte range, escaped text, payload.
pub fn render_tokens(source: &[u8], tokens: &TokenArena) -> String {
    let mut out = String::new();
    for token in tokens.iter() {
        out.push_str(&render_token(source, token));
        out.push('\n');
    }
    out
}

fn render_token(source: &[u8], token: &Token) -> String {
    let range = format!("{:?}", token.slice);
    let text = token.text(source).unwrap_or_default().escape_ascii();
    let mut line = format!("  {:<20} {:<12} \"{}\"", token.kind.name(), range, text);
    match token.payload {
        TokenPayload::None => {}
        TokenPayload::Integer(value) => line.push_str(&format!("  = {value}")),
        TokenPayload::Reserved(id) => match ReservedWord::from_id(id) {
            Some(word) => line.push_str(&format!("  reserved `{}`", word.spelling())),
            None => line.push_str(&format!("  reserved #{}", id.raw())),
        },
        TokenPayload::Identifier(id) => line.push_str(&format!("  sym#{}", id.raw())),
    }
    line
}

fn render_stats(symbols: &SymbolTable) -> String {
    format!(
        "symbols: {} entries in {} slots, max probe distance {}",
        symbols.len(),
        symbols.capacity(),
        symbols.max_probe_distance()
    )
}

/// `path:line:col: message`, one line per diagnostic.
pub fn render_diagnostics(path: &str, source: &[u8], diagnostics: &[LexDiagnostic]) -> String {
    let mut out = String::new();
    for diagnostic in diagnostics {
        let (line, col) = line_col(source, diagnostic.span.start);
        out.push_str(&format!("{path}:{line}:{col}: {}\n", diagnostic.kind));
    }
    out
}

/// One-based line and column of byte offset `pos`.
fn line_col(source: &[u8], pos: u32) -> (usize, usize) {
    let before = &source[..(pos as usize).min(source.len())];
    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = before.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
    (line, before.len() - line_start + 1)
}
