//! Property-based tests for the cooked token stream.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::disallowed_types,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use chaos_ir::{TokenKind, TokenPayload};
use chaos_lexer::{lex, LexerConfig, ReservedWord};
use chaos_lexer_core::SourceBuffer;
use proptest::prelude::*;

/// Source text over an alphabet that exercises every DFA state except `;`.
fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "a", "Zed", "x1", "if", "while", "42", " ", "\t", "\n", "\n\n", "=", ":", "-", "<",
            ">", ".", "/", "//c", "\"s\"", "\"", "+", "(", ")", "{", "}", ",", "$",
        ]),
        0..64,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn stream_is_well_formed(source in source_strategy()) {
        let buf = SourceBuffer::new(&source);
        let out = lex(&buf, &LexerConfig::default()).unwrap();
        let tokens: Vec<_> = out.tokens.iter().copied().collect();

        // Exactly one EndOfFile, at the very end.
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfFile));
        prop_assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::EndOfFile).count(),
            1
        );

        // Slices are ordered and never overlap.
        let mut end = 0;
        for token in &tokens {
            prop_assert!(token.slice.start >= end, "{:?} overlaps", token);
            end = token.slice.end();
        }
        prop_assert_eq!(end as usize, source.len());
    }

    #[test]
    fn newline_terminators_never_stack(source in source_strategy()) {
        let buf = SourceBuffer::new(&source);
        let out = lex(&buf, &LexerConfig::default()).unwrap();
        let kinds: Vec<_> = out.tokens.iter().map(|t| t.kind).collect();

        prop_assert_ne!(kinds.first().copied(), Some(TokenKind::Terminator));
        for pair in kinds.windows(2) {
            prop_assert!(
                !(pair[0] == TokenKind::Terminator && pair[1] == TokenKind::Terminator),
                "{:?}",
                kinds
            );
        }
    }

    #[test]
    fn words_are_keywords_exactly_when_reserved(word in "[a-z_][a-z0-9_]{0,8}") {
        let buf = SourceBuffer::new(&word);
        let out = lex(&buf, &LexerConfig::default()).unwrap();
        let first = *out.tokens.iter().next().unwrap();
        let reserved = ReservedWord::ALL.iter().find(|w| w.spelling() == word);
        match reserved {
            Some(w) => {
                prop_assert_eq!(first.kind, TokenKind::Keyword);
                prop_assert_eq!(first.payload, TokenPayload::Reserved(w.id()));
            }
            None => prop_assert_eq!(first.kind, TokenKind::Identifier),
        }
    }

    #[test]
    fn integers_decode_exactly(value in any::<u64>()) {
        let text = value.to_string();
        let buf = SourceBuffer::new(&text);
        let out = lex(&buf, &LexerConfig::default()).unwrap();
        let first = *out.tokens.iter().next().unwrap();
        prop_assert_eq!(first.payload, TokenPayload::Integer(value));
        prop_assert!(out.diagnostics.is_empty());
    }
}
