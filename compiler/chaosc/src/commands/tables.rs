//! `chaos tables`: lexer table statistics.

use chaos_lexer_core::table_info;

/// Print the sizes of the classifier and transition tables.
pub fn print_tables() {
    println!("{}", table_info());
}
