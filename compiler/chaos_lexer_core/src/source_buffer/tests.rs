use pretty_assertions::assert_eq;

use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    assert!(buf.encoding_issues().is_empty());
    assert_eq!(buf.as_sentinel_bytes()[0], 0);
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new("x -> y");
    assert_eq!(buf.len(), 6);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"x -> y");
    assert_eq!(buf.as_sentinel_bytes()[6], 0);
}

#[test]
fn accepts_raw_bytes() {
    let buf = SourceBuffer::new([b'a', 0x80, b'b']);
    assert_eq!(buf.as_bytes(), &[b'a', 0x80, b'b']);
    assert!(buf.encoding_issues().is_empty());
}

// === Padding ===

#[test]
fn buffer_rounded_to_cache_line() {
    for len in [0, 1, 10, 63, 64, 65, 127, 128, 1000] {
        let source = "x".repeat(len);
        let buf = SourceBuffer::new(&source);
        let padded = buf.as_sentinel_bytes().len();
        assert_eq!(padded % CACHE_LINE, 0, "source length {len}");
        assert!(padded > len, "no sentinel for source length {len}");
    }
}

#[test]
fn sentinel_and_padding_are_zero() {
    let buf = SourceBuffer::new("abc");
    assert!(buf.as_sentinel_bytes()[3..].iter().all(|&b| b == 0));
}

#[test]
fn view_covers_source_only() {
    let buf = SourceBuffer::new("ab");
    let view = buf.view();
    assert_eq!(view.pos(), 0);
    assert_eq!(view.end(), 2);
    assert_eq!(view.source(), b"ab");
}

// === Encoding detection ===

#[test]
fn detects_utf8_bom() {
    let buf = SourceBuffer::new("\u{FEFF}main");
    assert_eq!(
        buf.encoding_issues(),
        &[EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        }]
    );
}

#[test]
fn view_starts_after_bom() {
    let buf = SourceBuffer::new("\u{FEFF}main");
    assert_eq!(buf.content_start(), 3);
    let view = buf.view();
    assert_eq!(view.pos(), 3);
    assert_eq!(view.remaining(), 4);
    assert_eq!(view.source(), "\u{FEFF}main".as_bytes());

    let le = SourceBuffer::new([0xFF, 0xFE, b'a']);
    assert_eq!(le.view().pos(), 2);
    assert_eq!(SourceBuffer::new("main").content_start(), 0);
}

#[test]
fn bom_only_source_is_at_end() {
    let buf = SourceBuffer::new("\u{FEFF}");
    assert!(buf.view().is_eof());
}

#[test]
fn detects_utf16_boms() {
    let le = SourceBuffer::new([0xFF, 0xFE, b'a', 0]);
    assert_eq!(le.encoding_issues()[0].kind, EncodingIssueKind::Utf16LeBom);
    assert_eq!(le.encoding_issues()[0].len, 2);

    let be = SourceBuffer::new([0xFE, 0xFF, 0, b'a']);
    assert_eq!(be.encoding_issues()[0].kind, EncodingIssueKind::Utf16BeBom);
}

#[test]
fn bom_only_at_start() {
    let buf = SourceBuffer::new("a\u{FEFF}");
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn detects_every_interior_null() {
    let buf = SourceBuffer::new(b"a\0b\0\0");
    let positions: Vec<u32> = buf
        .encoding_issues()
        .iter()
        .filter(|issue| issue.kind == EncodingIssueKind::InteriorNull)
        .map(|issue| issue.pos)
        .collect();
    assert_eq!(positions, vec![1, 3, 4]);
}

#[test]
fn utf16_source_reports_bom_and_nulls() {
    let buf = SourceBuffer::new([0xFF, 0xFE, b'x', 0]);
    let kinds: Vec<_> = buf.encoding_issues().iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![EncodingIssueKind::Utf16LeBom, EncodingIssueKind::InteriorNull]
    );
}
