//! Lexer configuration.

use chaos_ir::{xxhash32, HashFn, SymbolTable, SymbolTableError, DEFAULT_TABLE_ORDER};

/// Knobs for a lexing run.
///
/// Every field has a default; override with the `with_*` builders:
///
/// ```
/// use chaos_lexer::LexerConfig;
///
/// let config = LexerConfig::default().with_table_order(10).with_hash_seed(7);
/// assert_eq!(config.table_order, 10);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct LexerConfig {
    /// Initial symbol table capacity is `1 << table_order` slots. At most
    /// [`MAX_TABLE_ORDER`](chaos_ir::MAX_TABLE_ORDER).
    pub table_order: u32,
    /// Seed passed to every hash call.
    pub hash_seed: u32,
    /// Hash function used by the symbol table.
    pub hasher: HashFn,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            table_order: DEFAULT_TABLE_ORDER,
            hash_seed: 0,
            hasher: xxhash32,
        }
    }
}

impl LexerConfig {
    #[must_use]
    pub fn with_table_order(mut self, order: u32) -> Self {
        self.table_order = order;
        self
    }

    #[must_use]
    pub fn with_hash_seed(mut self, seed: u32) -> Self {
        self.hash_seed = seed;
        self
    }

    #[must_use]
    pub fn with_hasher(mut self, hasher: HashFn) -> Self {
        self.hasher = hasher;
        self
    }

    /// An empty symbol table built from these settings.
    pub fn symbol_table(&self) -> Result<SymbolTable, SymbolTableError> {
        SymbolTable::with_hasher(self.table_order, self.hasher, self.hash_seed)
    }
}
