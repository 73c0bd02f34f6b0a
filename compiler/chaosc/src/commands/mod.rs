//! Command implementations.

mod lex;
mod options;
mod tables;

pub use lex::{lex_file, render_diagnostics, render_tokens};
pub use options::{parse_lex_options, LexOptions};
pub use tables::print_tables;
