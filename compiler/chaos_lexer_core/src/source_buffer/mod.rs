//! Owned, sentinel-padded source buffer.
//!
//! The buffer keeps at least one zero byte after the logical end of the
//! source, rounded up to the next 64-byte boundary. [`SourceView`] requires
//! that slack byte, so a view built from a `SourceBuffer` can never fail.
//!
//! # Encoding Detection
//!
//! Construction also scans for encoding problems:
//! - UTF-8 BOM (the lexer works on raw ASCII-oriented bytes)
//! - UTF-16 BOMs (wrong encoding altogether)
//! - Interior null bytes
//!
//! Issues are recorded as [`EncodingIssue`] values. `chaos_lexer` turns them
//! into diagnostics. A detected byte order mark is reported once and then
//! skipped: [`SourceBuffer::view`] starts scanning after it.

use crate::SourceView;

/// Cache line size in bytes, used for buffer padding.
const CACHE_LINE: usize = 64;

/// Source bytes followed by a zero sentinel and zero padding.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the source content (excludes sentinel and padding).
    source_len: u32,
    /// Offset where scanning starts, past any byte order mark.
    content_start: u32,
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    /// Byte position of the offending sequence.
    pub pos: u32,
    /// Byte length of the offending sequence.
    pub len: u32,
}

/// Kind of encoding issue detected in a source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at start.
    Utf8Bom,
    /// UTF-16 little-endian BOM (`0xFF 0xFE`) at start.
    Utf16LeBom,
    /// UTF-16 big-endian BOM (`0xFE 0xFF`) at start.
    Utf16BeBom,
    /// `0x00` byte inside the source content.
    InteriorNull,
}

impl EncodingIssueKind {
    /// Returns `true` for the byte order mark kinds.
    pub const fn is_bom(self) -> bool {
        matches!(self, Self::Utf8Bom | Self::Utf16LeBom | Self::Utf16BeBom)
    }
}

impl SourceBuffer {
    /// Copy `source` into a padded buffer and scan it for encoding issues.
    ///
    /// # File Size
    ///
    /// Sources larger than `u32::MAX` bytes are truncated to `u32::MAX`
    /// bytes. Every offset in the lexer is a `u32`.
    pub fn new(source: impl AsRef<[u8]>) -> Self {
        let source = source.as_ref();
        let source = &source[..source.len().min(u32::MAX as usize)];
        let source_len = source.len();

        // Round up to the next 64-byte boundary, minimum source + 1 sentinel.
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source);

        let mut encoding_issues = Vec::new();
        detect_encoding_issues(source, &mut encoding_issues);
        let content_start = encoding_issues
            .first()
            .filter(|issue| issue.kind.is_bom())
            .map_or(0, |bom| bom.len);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            content_start,
            encoding_issues,
        }
    }

    /// Source bytes, without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// A view positioned after the byte order mark, or at byte 0.
    pub fn view(&self) -> SourceView<'_> {
        SourceView::from_padded(&self.buf, self.content_start, self.source_len)
    }

    /// Offset of the first scanned byte; nonzero only after a byte order
    /// mark.
    pub fn content_start(&self) -> u32 {
        self.content_start
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Encoding issues detected during construction, in source order.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 64);

fn detect_encoding_issues(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    detect_bom(source, issues);
    detect_interior_nulls(source, issues);
}

fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let (kind, len) = match source {
        [0xEF, 0xBB, 0xBF, ..] => (EncodingIssueKind::Utf8Bom, 3),
        [0xFF, 0xFE, ..] => (EncodingIssueKind::Utf16LeBom, 2),
        [0xFE, 0xFF, ..] => (EncodingIssueKind::Utf16BeBom, 2),
        _ => return,
    };
    issues.push(EncodingIssue { kind, pos: 0, len });
}

/// Record every `0x00` byte in the source, using `memchr` to skip ahead.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let mut offset = 0;
    while let Some(pos) = memchr::memchr(0, &source[offset..]) {
        let absolute = offset + pos;
        if let Ok(pos) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos,
                len: 1,
            });
        }
        offset = absolute + 1;
    }
}

#[cfg(test)]
mod tests;
