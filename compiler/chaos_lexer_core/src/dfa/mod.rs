//! The lexical grammar as a dense transition table.
//!
//! [`TRANSITIONS`] is indexed `[state][class]` and is total: every pair has
//! an entry. A transition either moves to another nonterminal [`State`] or
//! emits a [`RawTag`], and carries two flags:
//!
//! - `CONSUME`: advance past the current byte
//! - `GROW`: count that byte as part of the token text
//!
//! Whitespace and comments route back to [`State::Start`]; the scanner
//! rebases the token start whenever that happens, so trivia never appears
//! inside a token. A block comment keeps its `/*` opener as token text
//! only so an unterminated one can be reported at its start.
//!
//! # Invariants
//!
//! - Every `Start` transition except on `EndOfInput` consumes, so each token
//!   advances the cursor by at least one byte.
//! - No transition consumes on `EndOfInput`.
//! - `GROW` is only set together with `CONSUME`.
//! - Emitting without consuming leaves the lookahead byte for the next
//!   token; this is how `-x` splits into `Minus, Identifier`.

use std::fmt;

use bitflags::bitflags;

use crate::class::{EquivalenceClass, CLASS_COUNT, CLASS_TABLE_BYTES};
use crate::tag::RawTag;

/// Number of nonterminal DFA states.
pub const STATE_COUNT: usize = 16;

/// Nonterminal DFA states.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum State {
    /// Between tokens.
    Start,
    /// Inside a lowercase-initial word.
    Ident,
    /// Inside an uppercase-initial word.
    TypeName,
    /// Inside a run of digits.
    Number,
    /// After `=`.
    SawEquals,
    /// After `:`.
    SawColon,
    /// After `-`.
    SawMinus,
    /// After `<`.
    SawLess,
    /// After `.`.
    SawDot,
    /// After `..`.
    SawDot2,
    /// After `/`.
    SawSlash,
    /// Inside `// ...`, up to but excluding the newline.
    LineComment,
    /// After an opening `"`.
    InString,
    /// After an opening `'`.
    InChar,
    /// Inside `/* ... */`.
    BlockComment,
    /// Inside a block comment, right after a `*`.
    BlockStar,
}

impl State {
    /// Every state, in discriminant order.
    pub const ALL: [Self; STATE_COUNT] = [
        Self::Start,
        Self::Ident,
        Self::TypeName,
        Self::Number,
        Self::SawEquals,
        Self::SawColon,
        Self::SawMinus,
        Self::SawLess,
        Self::SawDot,
        Self::SawDot2,
        Self::SawSlash,
        Self::LineComment,
        Self::InString,
        Self::InChar,
        Self::BlockComment,
        Self::BlockStar,
    ];

    /// Row index into the transition table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

bitflags! {
    /// Side effects of taking a transition.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct StepFlags: u8 {
        /// Advance past the current byte.
        const CONSUME = 1 << 0;
        /// Add the consumed byte to the token text.
        const GROW = 1 << 1;
    }
}

impl StepFlags {
    /// Consume and keep the byte.
    pub const TAKE: Self = Self::CONSUME.union(Self::GROW);
    /// Consume and discard the byte.
    pub const SKIP: Self = Self::CONSUME;
    /// Leave the byte for the next token.
    pub const PEEK: Self = Self::empty();
}

/// Where a transition leads.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Target {
    /// Keep scanning in a nonterminal state.
    State(State),
    /// Finish the token with this tag.
    Emit(RawTag),
}

/// One entry of the transition table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Transition {
    pub target: Target,
    pub flags: StepFlags,
}

impl Transition {
    const fn goto(state: State, flags: StepFlags) -> Self {
        Transition {
            target: Target::State(state),
            flags,
        }
    }

    const fn emit(tag: RawTag, flags: StepFlags) -> Self {
        Transition {
            target: Target::Emit(tag),
            flags,
        }
    }

    #[inline]
    pub const fn consumes(self) -> bool {
        self.flags.contains(StepFlags::CONSUME)
    }

    #[inline]
    pub const fn grows(self) -> bool {
        self.flags.contains(StepFlags::GROW)
    }

    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self.target, Target::Emit(_))
    }
}

const _: () = assert!(std::mem::size_of::<Transition>() <= 4);

/// The complete DFA, `[state][class]`.
pub static TRANSITIONS: [[Transition; CLASS_COUNT]; STATE_COUNT] = build_transitions();

/// Look up the transition for `state` on `class`.
#[inline]
pub fn next(state: State, class: EquivalenceClass) -> Transition {
    TRANSITIONS[state.index()][class.index()]
}

const fn build_transitions() -> [[Transition; CLASS_COUNT]; STATE_COUNT] {
    use EquivalenceClass as C;
    use StepFlags as F;

    // Unset entries emit a one-byte `Other` token.
    let mut t = [[Transition::emit(RawTag::Other, F::TAKE); CLASS_COUNT]; STATE_COUNT];

    // Rows that hold a complete token fall back to emitting it and leaving
    // the lookahead byte alone.
    let fallbacks = [
        (State::Ident, RawTag::Identifier),
        (State::TypeName, RawTag::Type),
        (State::Number, RawTag::Integer),
        (State::SawEquals, RawTag::Equals),
        (State::SawColon, RawTag::Colon),
        (State::SawMinus, RawTag::Minus),
        (State::SawLess, RawTag::Less),
        (State::SawDot, RawTag::Dot),
        (State::SawDot2, RawTag::DotDot),
        (State::SawSlash, RawTag::Operator),
    ];
    let mut i = 0;
    while i < fallbacks.len() {
        let (state, tag) = fallbacks[i];
        let mut c = 0;
        while c < CLASS_COUNT {
            t[state.index()][c] = Transition::emit(tag, F::PEEK);
            c += 1;
        }
        i += 1;
    }

    // Comments and quoted literals swallow everything up to their closer.
    let mut c = 0;
    while c < CLASS_COUNT {
        t[State::LineComment.index()][c] = Transition::goto(State::LineComment, F::SKIP);
        t[State::InString.index()][c] = Transition::goto(State::InString, F::TAKE);
        t[State::InChar.index()][c] = Transition::goto(State::InChar, F::TAKE);
        t[State::BlockComment.index()][c] = Transition::goto(State::BlockComment, F::SKIP);
        t[State::BlockStar.index()][c] = Transition::goto(State::BlockComment, F::SKIP);
        c += 1;
    }

    // === Start ===
    let s = State::Start.index();
    t[s][C::Whitespace.index()] = Transition::goto(State::Start, F::SKIP);
    t[s][C::Newline.index()] = Transition::emit(RawTag::Newline, F::TAKE);
    t[s][C::Lower.index()] = Transition::goto(State::Ident, F::TAKE);
    t[s][C::Upper.index()] = Transition::goto(State::TypeName, F::TAKE);
    t[s][C::Digit.index()] = Transition::goto(State::Number, F::TAKE);
    t[s][C::Equals.index()] = Transition::goto(State::SawEquals, F::TAKE);
    t[s][C::Colon.index()] = Transition::goto(State::SawColon, F::TAKE);
    t[s][C::Minus.index()] = Transition::goto(State::SawMinus, F::TAKE);
    t[s][C::Less.index()] = Transition::goto(State::SawLess, F::TAKE);
    t[s][C::Greater.index()] = Transition::emit(RawTag::Greater, F::TAKE);
    t[s][C::Dot.index()] = Transition::goto(State::SawDot, F::TAKE);
    t[s][C::Slash.index()] = Transition::goto(State::SawSlash, F::TAKE);
    t[s][C::Star.index()] = Transition::emit(RawTag::Operator, F::TAKE);
    t[s][C::Quote.index()] = Transition::goto(State::InString, F::TAKE);
    t[s][C::Tick.index()] = Transition::goto(State::InChar, F::TAKE);
    t[s][C::Operator.index()] = Transition::emit(RawTag::Operator, F::TAKE);
    t[s][C::LParen.index()] = Transition::emit(RawTag::LParen, F::TAKE);
    t[s][C::RParen.index()] = Transition::emit(RawTag::RParen, F::TAKE);
    t[s][C::LBracket.index()] = Transition::emit(RawTag::LBracket, F::TAKE);
    t[s][C::RBracket.index()] = Transition::emit(RawTag::RBracket, F::TAKE);
    t[s][C::LBrace.index()] = Transition::emit(RawTag::LBrace, F::TAKE);
    t[s][C::RBrace.index()] = Transition::emit(RawTag::RBrace, F::TAKE);
    t[s][C::Comma.index()] = Transition::emit(RawTag::Comma, F::TAKE);
    t[s][C::Semicolon.index()] = Transition::emit(RawTag::Semicolon, F::TAKE);
    t[s][C::Other.index()] = Transition::emit(RawTag::Other, F::TAKE);
    t[s][C::EndOfInput.index()] = Transition::emit(RawTag::Eof, F::PEEK);

    // === Words and numbers ===
    let word_chars = [C::Lower, C::Upper, C::Digit];
    let mut i = 0;
    while i < word_chars.len() {
        let c = word_chars[i].index();
        t[State::Ident.index()][c] = Transition::goto(State::Ident, F::TAKE);
        t[State::TypeName.index()][c] = Transition::goto(State::TypeName, F::TAKE);
        i += 1;
    }
    t[State::Number.index()][C::Digit.index()] = Transition::goto(State::Number, F::TAKE);

    // === Operator chains ===
    t[State::SawEquals.index()][C::Greater.index()] = Transition::emit(RawTag::FatArrow, F::TAKE);
    t[State::SawColon.index()][C::Colon.index()] = Transition::emit(RawTag::DoubleColon, F::TAKE);
    t[State::SawMinus.index()][C::Greater.index()] = Transition::emit(RawTag::Arrow, F::TAKE);
    t[State::SawLess.index()][C::Minus.index()] = Transition::emit(RawTag::LeftArrow, F::TAKE);
    t[State::SawDot.index()][C::Dot.index()] = Transition::goto(State::SawDot2, F::TAKE);
    t[State::SawDot2.index()][C::Dot.index()] = Transition::emit(RawTag::Ellipsis, F::TAKE);

    // === Comments ===
    t[State::SawSlash.index()][C::Slash.index()] = Transition::goto(State::LineComment, F::SKIP);
    t[State::LineComment.index()][C::Newline.index()] = Transition::goto(State::Start, F::PEEK);
    t[State::LineComment.index()][C::EndOfInput.index()] = Transition::goto(State::Start, F::PEEK);

    // Block comments do not nest; the first `*/` closes them.
    t[State::SawSlash.index()][C::Star.index()] = Transition::goto(State::BlockComment, F::TAKE);
    t[State::BlockComment.index()][C::Star.index()] = Transition::goto(State::BlockStar, F::SKIP);
    t[State::BlockStar.index()][C::Star.index()] = Transition::goto(State::BlockStar, F::SKIP);
    t[State::BlockStar.index()][C::Slash.index()] = Transition::goto(State::Start, F::SKIP);
    t[State::BlockComment.index()][C::EndOfInput.index()] =
        Transition::emit(RawTag::UnterminatedComment, F::PEEK);
    t[State::BlockStar.index()][C::EndOfInput.index()] =
        Transition::emit(RawTag::UnterminatedComment, F::PEEK);

    // === Strings ===
    t[State::InString.index()][C::Quote.index()] = Transition::emit(RawTag::String, F::TAKE);
    t[State::InString.index()][C::Newline.index()] =
        Transition::emit(RawTag::UnterminatedString, F::PEEK);
    t[State::InString.index()][C::EndOfInput.index()] =
        Transition::emit(RawTag::UnterminatedString, F::PEEK);

    // === Character literals ===
    t[State::InChar.index()][C::Tick.index()] = Transition::emit(RawTag::Char, F::TAKE);
    t[State::InChar.index()][C::Newline.index()] =
        Transition::emit(RawTag::UnterminatedChar, F::PEEK);
    t[State::InChar.index()][C::EndOfInput.index()] =
        Transition::emit(RawTag::UnterminatedChar, F::PEEK);

    t
}

/// Static size statistics for the lexer tables.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct TableInfo {
    pub classes: usize,
    pub states: usize,
    pub class_table_bytes: usize,
    pub transition_bytes: usize,
    pub transition_table_bytes: usize,
}

/// Sizes of the classifier and transition tables.
pub fn table_info() -> TableInfo {
    TableInfo {
        classes: CLASS_COUNT,
        states: STATE_COUNT,
        class_table_bytes: CLASS_TABLE_BYTES,
        transition_bytes: std::mem::size_of::<Transition>(),
        transition_table_bytes: std::mem::size_of_val(&TRANSITIONS),
    }
}

impl fmt::Display for TableInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "equivalence classes:  {}", self.classes)?;
        writeln!(f, "dfa states:           {}", self.states)?;
        writeln!(f, "class table:          {} bytes", self.class_table_bytes)?;
        writeln!(f, "transition entry:     {} bytes", self.transition_bytes)?;
        write!(
            f,
            "transition table:     {} bytes ({} x {})",
            self.transition_table_bytes, self.states, self.classes
        )
    }
}
