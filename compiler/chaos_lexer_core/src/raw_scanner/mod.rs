//! DFA driver producing [`RawToken`]s.
//!
//! The scanner holds no grammar of its own. Per token it starts in
//! [`State::Start`], classifies the byte under the cursor (or takes the
//! end-of-input class), and follows [`dfa::next`] until a transition emits
//! a tag. Lookahead is bounded by one byte and nothing is ever re-scanned.

use crate::dfa::{self, State, Target};
use crate::tag::{RawTag, RawToken};
use crate::view::SourceView;

/// Table-walking scanner over a [`SourceView`].
///
/// Error conditions are tags ([`RawTag::Other`],
/// [`RawTag::UnterminatedString`]), never `Err`.
#[derive(Clone, Debug)]
pub struct RawScanner<'a> {
    view: SourceView<'a>,
    /// Set once `Eof` has been yielded by the iterator.
    finished: bool,
}

impl<'a> RawScanner<'a> {
    pub fn new(view: SourceView<'a>) -> Self {
        Self {
            view,
            finished: false,
        }
    }

    /// The underlying view, positioned after the last token.
    #[inline]
    pub fn view(&self) -> &SourceView<'a> {
        &self.view
    }

    /// Produce the next raw token.
    ///
    /// Returns a zero-length [`RawTag::Eof`] once the source is exhausted,
    /// and keeps returning it on later calls.
    pub fn next_token(&mut self) -> RawToken {
        let mut state = State::Start;
        let mut start = self.view.pos();
        let mut len = 0;
        loop {
            let step = dfa::next(state, self.view.current_class());
            if step.consumes() {
                self.view.advance();
                if step.grows() {
                    len += 1;
                }
            }
            match step.target {
                Target::Emit(tag) => return RawToken { tag, start, len },
                Target::State(State::Start) => {
                    // Trivia was skipped; the token starts here.
                    state = State::Start;
                    start = self.view.pos();
                    len = 0;
                }
                Target::State(next) => state = next,
            }
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    /// Yields every token up to and including the first `Eof`.
    fn next(&mut self) -> Option<RawToken> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.tag == RawTag::Eof;
        Some(token)
    }
}

#[cfg(test)]
mod tests;
