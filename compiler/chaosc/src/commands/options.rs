//! `chaos lex` flag parsing.

use chaos_ir::{fx_hash, xxhash32, HashFn, MAX_TABLE_ORDER};
use chaos_lexer::LexerConfig;

/// Options for `chaos lex`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LexOptions {
    pub config: LexerConfig,
    /// Print symbol table statistics after the tokens.
    pub stats: bool,
}

/// Parse `chaos lex` flags.
///
/// Unknown flags and malformed values are reported on stderr and ignored.
pub fn parse_lex_options(args: &[String]) -> LexOptions {
    let mut options = LexOptions::default();

    for arg in args {
        if let Some(seed) = arg.strip_prefix("--seed=") {
            match parse_u32(seed) {
                Some(seed) => options.config = options.config.with_hash_seed(seed),
                None => eprintln!("warning: invalid seed '{seed}', using 0"),
            }
        } else if let Some(order) = arg.strip_prefix("--table-order=") {
            match order.parse::<u32>() {
                Ok(order) if order <= MAX_TABLE_ORDER => {
                    options.config = options.config.with_table_order(order);
                }
                _ => eprintln!(
                    "warning: invalid table order '{order}', expected 0-{MAX_TABLE_ORDER}"
                ),
            }
        } else if let Some(name) = arg.strip_prefix("--hasher=") {
            match hasher_by_name(name) {
                Some(hasher) => options.config = options.config.with_hasher(hasher),
                None => eprintln!("warning: unknown hasher '{name}', options: xx, fx"),
            }
        } else if arg == "--stats" {
            options.stats = true;
        } else {
            eprintln!("warning: unknown option '{arg}'");
        }
    }

    options
}

/// Decimal, or hexadecimal with a `0x` prefix.
fn parse_u32(text: &str) -> Option<u32> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

fn hasher_by_name(name: &str) -> Option<HashFn> {
    match name {
        "xx" | "xxhash" | "xxhash32" => Some(xxhash32),
        "fx" | "fxhash" => Some(fx_hash),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
