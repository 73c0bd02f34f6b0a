use pretty_assertions::assert_eq;

use super::*;
use crate::SourceBuffer;

/// Scan `source` and return `(tag, text)` pairs, excluding `Eof`.
fn scan(source: &str) -> Vec<(RawTag, String)> {
    let buf = SourceBuffer::new(source);
    RawScanner::new(buf.view())
        .take_while(|t| t.tag != RawTag::Eof)
        .map(|t| {
            let text = &buf.as_bytes()[t.start as usize..t.end() as usize];
            (t.tag, String::from_utf8_lossy(text).into_owned())
        })
        .collect()
}

fn scan_tags(source: &str) -> Vec<RawTag> {
    scan(source).into_iter().map(|(tag, _)| tag).collect()
}

fn tok(tag: RawTag, text: &str) -> (RawTag, String) {
    (tag, text.to_owned())
}

// === Maximal munch ===

#[test]
fn identifier_absorbs_digits() {
    assert_eq!(scan("abc123"), vec![tok(RawTag::Identifier, "abc123")]);
}

#[test]
fn underscore_starts_identifier() {
    assert_eq!(scan("_tmp x_1"), vec![
        tok(RawTag::Identifier, "_tmp"),
        tok(RawTag::Identifier, "x_1"),
    ]);
}

#[test]
fn capitalized_word_is_type() {
    assert_eq!(scan("Int iNT"), vec![
        tok(RawTag::Type, "Int"),
        tok(RawTag::Identifier, "iNT"),
    ]);
}

#[test]
fn number_then_word() {
    assert_eq!(scan("123abc"), vec![
        tok(RawTag::Integer, "123"),
        tok(RawTag::Identifier, "abc"),
    ]);
}

// === Operator disambiguation ===

#[test]
fn arrow_versus_minus() {
    assert_eq!(scan("->"), vec![tok(RawTag::Arrow, "->")]);
    assert_eq!(scan("-x"), vec![
        tok(RawTag::Minus, "-"),
        tok(RawTag::Identifier, "x"),
    ]);
    assert_eq!(scan("- >"), vec![
        tok(RawTag::Minus, "-"),
        tok(RawTag::Greater, ">"),
    ]);
}

#[test]
fn left_arrow_versus_less() {
    assert_eq!(scan_tags("<- < -"), vec![
        RawTag::LeftArrow,
        RawTag::Less,
        RawTag::Minus,
    ]);
}

#[test]
fn equals_chain() {
    assert_eq!(scan_tags("=> = =="), vec![
        RawTag::FatArrow,
        RawTag::Equals,
        RawTag::Equals,
        RawTag::Equals,
    ]);
}

#[test]
fn colon_chain() {
    assert_eq!(scan_tags(":: : :::"), vec![
        RawTag::DoubleColon,
        RawTag::Colon,
        RawTag::DoubleColon,
        RawTag::Colon,
    ]);
}

#[test]
fn dot_runs_split_greedily() {
    assert_eq!(scan_tags("."), vec![RawTag::Dot]);
    assert_eq!(scan_tags(".."), vec![RawTag::DotDot]);
    assert_eq!(scan_tags("..."), vec![RawTag::Ellipsis]);
    assert_eq!(scan_tags("...."), vec![RawTag::Ellipsis, RawTag::Dot]);
    assert_eq!(scan_tags("....."), vec![RawTag::Ellipsis, RawTag::DotDot]);
    assert_eq!(scan_tags("..x"), vec![RawTag::DotDot, RawTag::Identifier]);
}

#[test]
fn single_char_operators_and_delimiters() {
    assert_eq!(scan_tags("+*(),[]{};>"), vec![
        RawTag::Operator,
        RawTag::Operator,
        RawTag::LParen,
        RawTag::RParen,
        RawTag::Comma,
        RawTag::LBracket,
        RawTag::RBracket,
        RawTag::LBrace,
        RawTag::RBrace,
        RawTag::Semicolon,
        RawTag::Greater,
    ]);
}

#[test]
fn slash_is_division_unless_doubled() {
    assert_eq!(scan("a/b"), vec![
        tok(RawTag::Identifier, "a"),
        tok(RawTag::Operator, "/"),
        tok(RawTag::Identifier, "b"),
    ]);
}

// === Trivia ===

#[test]
fn whitespace_is_not_part_of_tokens() {
    let buf = SourceBuffer::new("  \t x \r ");
    let tokens: Vec<_> = RawScanner::new(buf.view()).collect();
    assert_eq!(tokens, vec![
        RawToken {
            tag: RawTag::Identifier,
            start: 4,
            len: 1,
        },
        RawToken {
            tag: RawTag::Eof,
            start: 8,
            len: 0,
        },
    ]);
}

#[test]
fn newlines_are_tokens() {
    assert_eq!(scan_tags("a\nb\n"), vec![
        RawTag::Identifier,
        RawTag::Newline,
        RawTag::Identifier,
        RawTag::Newline,
    ]);
}

#[test]
fn comment_is_skipped_but_newline_kept() {
    assert_eq!(scan("a // note -> x\nb"), vec![
        tok(RawTag::Identifier, "a"),
        tok(RawTag::Newline, "\n"),
        tok(RawTag::Identifier, "b"),
    ]);
}

#[test]
fn comment_to_end_of_input() {
    assert_eq!(scan("x // trailing"), vec![tok(RawTag::Identifier, "x")]);
    assert!(scan("//").is_empty());
}

// === Strings ===

#[test]
fn string_includes_quotes() {
    assert_eq!(scan(r#""hi there" x"#), vec![
        tok(RawTag::String, "\"hi there\""),
        tok(RawTag::Identifier, "x"),
    ]);
}

#[test]
fn string_stops_at_newline() {
    assert_eq!(scan("\"abc\nx"), vec![
        tok(RawTag::UnterminatedString, "\"abc"),
        tok(RawTag::Newline, "\n"),
        tok(RawTag::Identifier, "x"),
    ]);
}

#[test]
fn string_stops_at_end_of_input() {
    assert_eq!(scan("\"abc"), vec![tok(RawTag::UnterminatedString, "\"abc")]);
}

// === Character literals ===

#[test]
fn char_includes_ticks() {
    assert_eq!(scan("x = 'c'"), vec![
        tok(RawTag::Identifier, "x"),
        tok(RawTag::Equals, "="),
        tok(RawTag::Char, "'c'"),
    ]);
}

#[test]
fn char_may_hold_quote_and_slashes() {
    assert_eq!(scan(r#"'"' '/'"#), vec![
        tok(RawTag::Char, "'\"'"),
        tok(RawTag::Char, "'/'"),
    ]);
}

#[test]
fn char_stops_at_newline_and_end() {
    assert_eq!(scan("'a\nb"), vec![
        tok(RawTag::UnterminatedChar, "'a"),
        tok(RawTag::Newline, "\n"),
        tok(RawTag::Identifier, "b"),
    ]);
    assert_eq!(scan("'"), vec![tok(RawTag::UnterminatedChar, "'")]);
}

// === Block comments ===

#[test]
fn block_comment_is_skipped() {
    assert_eq!(scan("a /* note */ b"), vec![
        tok(RawTag::Identifier, "a"),
        tok(RawTag::Identifier, "b"),
    ]);
}

#[test]
fn block_comment_spans_lines() {
    assert_eq!(scan("a /* one\ntwo */ b\n"), vec![
        tok(RawTag::Identifier, "a"),
        tok(RawTag::Identifier, "b"),
        tok(RawTag::Newline, "\n"),
    ]);
}

#[test]
fn block_comment_closer_after_stars() {
    assert_eq!(scan("/*** x **/y"), vec![tok(RawTag::Identifier, "y")]);
    assert_eq!(scan("/**/*"), vec![tok(RawTag::Operator, "*")]);
}

#[test]
fn block_comments_do_not_nest() {
    assert_eq!(scan_tags("/* /* */ x */"), vec![
        RawTag::Identifier,
        RawTag::Operator,
        RawTag::Operator,
    ]);
}

#[test]
fn unterminated_block_comment_reports_opener() {
    let buf = SourceBuffer::new("a /* open *");
    let tokens: Vec<_> = RawScanner::new(buf.view()).collect();
    assert_eq!(tokens, vec![
        RawToken {
            tag: RawTag::Identifier,
            start: 0,
            len: 1,
        },
        RawToken {
            tag: RawTag::UnterminatedComment,
            start: 2,
            len: 2,
        },
        RawToken {
            tag: RawTag::Eof,
            start: 11,
            len: 0,
        },
    ]);
}

#[test]
fn multiplication_is_not_a_comment() {
    assert_eq!(scan_tags("a * b / c"), vec![
        RawTag::Identifier,
        RawTag::Operator,
        RawTag::Identifier,
        RawTag::Operator,
        RawTag::Identifier,
    ]);
}

// === Truncation at end of input ===

#[test]
fn truncated_chains_emit_prefix() {
    assert_eq!(scan_tags("-"), vec![RawTag::Minus]);
    assert_eq!(scan_tags("="), vec![RawTag::Equals]);
    assert_eq!(scan_tags(":"), vec![RawTag::Colon]);
    assert_eq!(scan_tags("<"), vec![RawTag::Less]);
    assert_eq!(scan_tags("/"), vec![RawTag::Operator]);
    assert_eq!(scan_tags(".."), vec![RawTag::DotDot]);
}

// === Unrecognized bytes ===

#[test]
fn unknown_bytes_become_other() {
    assert_eq!(scan("$"), vec![tok(RawTag::Other, "$")]);
    assert_eq!(scan_tags("\u{e9}"), vec![RawTag::Other, RawTag::Other]);
}

#[test]
fn interior_null_is_other() {
    assert_eq!(scan_tags("a\0b"), vec![
        RawTag::Identifier,
        RawTag::Other,
        RawTag::Identifier,
    ]);
}

// === End of input ===

#[test]
fn empty_source_is_just_eof() {
    let buf = SourceBuffer::new("");
    let mut scanner = RawScanner::new(buf.view());
    assert_eq!(scanner.next_token(), RawToken {
        tag: RawTag::Eof,
        start: 0,
        len: 0,
    });
}

#[test]
fn eof_repeats() {
    let buf = SourceBuffer::new("x");
    let mut scanner = RawScanner::new(buf.view());
    assert_eq!(scanner.next_token().tag, RawTag::Identifier);
    for _ in 0..3 {
        assert_eq!(scanner.next_token().tag, RawTag::Eof);
    }
}

#[test]
fn iterator_stops_after_eof() {
    let buf = SourceBuffer::new("a b");
    let tags: Vec<_> = RawScanner::new(buf.view()).map(|t| t.tag).collect();
    assert_eq!(tags, vec![RawTag::Identifier, RawTag::Identifier, RawTag::Eof]);
}

#[test]
fn works_over_external_padded_buffer() {
    let bytes = b"x->y;";
    let view = SourceView::new(bytes, 4).unwrap();
    let tags: Vec<_> = RawScanner::new(view).map(|t| t.tag).collect();
    assert_eq!(tags, vec![
        RawTag::Identifier,
        RawTag::Arrow,
        RawTag::Identifier,
        RawTag::Eof,
    ]);
}

// === End-to-end shape ===

#[test]
fn signature_line() {
    assert_eq!(scan("if x : Int -> x\n"), vec![
        tok(RawTag::Identifier, "if"),
        tok(RawTag::Identifier, "x"),
        tok(RawTag::Colon, ":"),
        tok(RawTag::Type, "Int"),
        tok(RawTag::Arrow, "->"),
        tok(RawTag::Identifier, "x"),
        tok(RawTag::Newline, "\n"),
    ]);
}

// === Property tests ===

#[allow(clippy::disallowed_types, reason = "proptest macros internally use Arc")]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    fn collect(bytes: &[u8]) -> Vec<RawToken> {
        let buf = SourceBuffer::new(bytes);
        RawScanner::new(buf.view()).collect()
    }

    proptest! {
        #[test]
        fn never_stuck_on_arbitrary_bytes(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
            let tokens = collect(&bytes);
            let len = u32::try_from(bytes.len()).unwrap();

            // Terminates with exactly one Eof at the logical end.
            let last = tokens.last().copied().unwrap();
            prop_assert_eq!(last.tag, RawTag::Eof);
            prop_assert_eq!(last.start, len);
            prop_assert!(tokens.len() <= bytes.len() + 1);

            // Non-empty, ordered, non-overlapping, in bounds.
            let mut cursor = 0;
            for token in &tokens[..tokens.len() - 1] {
                prop_assert!(token.len >= 1, "{:?}", token);
                prop_assert!(token.start >= cursor, "{:?}", token);
                prop_assert!(token.end() <= len, "{:?}", token);
                cursor = token.end();
            }
        }

        #[test]
        fn gaps_are_only_whitespace(
            bytes in prop::collection::vec(
                prop::sample::select(b"ab Z9 \t\r\n=:-<>.+(;\"$".to_vec()),
                0..256,
            )
        ) {
            let tokens = collect(&bytes);
            let mut cursor = 0usize;
            let mut covered = 0usize;
            for token in &tokens {
                let start = token.start as usize;
                for &b in &bytes[cursor..start] {
                    prop_assert!(matches!(b, b' ' | b'\t' | b'\r'), "gap byte {:?}", b as char);
                }
                covered += (start - cursor) + token.len as usize;
                cursor = token.end() as usize;
            }
            prop_assert_eq!(covered, bytes.len());
        }

        #[test]
        fn identifiers_are_maximal(word in "[a-z_][a-zA-Z0-9_]{0,20}") {
            let buf = SourceBuffer::new(&word);
            let tokens: Vec<_> = RawScanner::new(buf.view()).collect();
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].tag, RawTag::Identifier);
            prop_assert_eq!(tokens[0].len as usize, word.len());
        }
    }
}
