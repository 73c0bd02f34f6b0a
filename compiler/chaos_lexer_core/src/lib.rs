//! Low-level, table-driven scanner for Chaos source.
//!
//! Standalone: depends on no other `chaos_*` crate. The pipeline is
//!
//! ```text
//! SourceBuffer -> SourceView -> classify(byte) -> dfa::next(state, class) -> RawToken
//! ```
//!
//! Every byte is first reduced to an [`EquivalenceClass`]; the whole lexical
//! grammar then lives in the const [`dfa::TRANSITIONS`] table, indexed by
//! `[state][class]`. [`RawScanner`] only walks that table. Keyword
//! resolution, integer values and statement terminators are applied by the
//! cooking layer in `chaos_lexer`.

mod class;
pub mod dfa;
mod raw_scanner;
mod source_buffer;
mod tag;
mod view;

pub use class::{classify, EquivalenceClass, CLASS_COUNT};
pub use dfa::{table_info, State, StepFlags, TableInfo, Target, Transition, STATE_COUNT};
pub use raw_scanner::RawScanner;
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use tag::{RawTag, RawToken};
pub use view::{SourceError, SourceView};
