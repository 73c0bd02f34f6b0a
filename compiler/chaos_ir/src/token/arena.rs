//! Segmented, append-only token storage.
//!
//! Tokens are written into fixed-capacity runs of [`RUN_CAPACITY`] entries.
//! A run's buffer is allocated once at full capacity and never grows, so a
//! token never moves after it is written. A new run is allocated only when
//! the last one is full, which keeps the invariant that every run except the
//! last is completely filled.
//!
//! Tokens are addressed by [`TokenId`] handles (`run`, `slot`) rather than
//! references, so a consumer can keep handles while the lexer keeps
//! pushing.

use std::ops::Index;

use super::Token;

/// Number of tokens per run.
pub const RUN_CAPACITY: usize = 256;

/// Stable handle to a token in a [`TokenArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TokenId {
    run: u32,
    slot: u16,
}

impl TokenId {
    /// Index of the run holding the token.
    #[inline]
    pub const fn run(self) -> u32 {
        self.run
    }

    /// Position of the token inside its run.
    #[inline]
    pub const fn slot(self) -> u16 {
        self.slot
    }

    /// Position of the token in the whole arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.run as usize * RUN_CAPACITY + self.slot as usize
    }
}

/// One fixed-capacity segment of a [`TokenArena`].
#[derive(Clone, Debug)]
pub struct TokenRun {
    /// Allocated with capacity [`RUN_CAPACITY`]; never pushed past it.
    tokens: Vec<Token>,
}

impl TokenRun {
    fn new() -> Self {
        TokenRun {
            tokens: Vec::with_capacity(RUN_CAPACITY),
        }
    }

    /// Number of tokens written into this run.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if no token has been written yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns `true` once the run holds [`RUN_CAPACITY`] tokens.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.tokens.len() == RUN_CAPACITY
    }

    /// The tokens written so far, in order.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

/// Append-only chain of [`TokenRun`]s.
///
/// Owned by a single compilation unit and dropped as a whole.
#[derive(Clone, Debug, Default)]
pub struct TokenArena {
    runs: Vec<TokenRun>,
    len: usize,
}

impl TokenArena {
    /// Create an empty arena. No run is allocated until the first push.
    pub fn new() -> Self {
        TokenArena {
            runs: Vec::new(),
            len: 0,
        }
    }

    /// Append a token, allocating a fresh run if the last one is full.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "slot < RUN_CAPACITY (256) and run count is bounded by source length (u32)"
    )]
    pub fn push(&mut self, token: Token) -> TokenId {
        if self.runs.last().is_none_or(TokenRun::is_full) {
            self.runs.push(TokenRun::new());
        }
        let run_idx = self.runs.len() - 1;
        let run = &mut self.runs[run_idx];
        debug_assert!(run.tokens.len() < RUN_CAPACITY);
        let slot = run.tokens.len();
        run.tokens.push(token);
        self.len += 1;
        TokenId {
            run: run_idx as u32,
            slot: slot as u16,
        }
    }

    /// Look up a token by handle.
    #[inline]
    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.runs
            .get(id.run as usize)
            .and_then(|run| run.tokens.get(id.slot as usize))
    }

    /// Total number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no token has been pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The runs in order, for segment-by-segment traversal.
    #[inline]
    pub fn runs(&self) -> &[TokenRun] {
        &self.runs
    }

    /// The most recently pushed token.
    pub fn last(&self) -> Option<&Token> {
        self.runs.last().and_then(|run| run.tokens.last())
    }

    /// Iterate over all tokens in push order.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.runs.iter().flat_map(|run| run.tokens.iter())
    }
}

impl Index<TokenId> for TokenArena {
    type Output = Token;

    #[inline]
    fn index(&self, id: TokenId) -> &Token {
        &self.runs[id.run as usize].tokens[id.slot as usize]
    }
}
