//! Character encoding detection and transcoding.
//!
//! HTML handed over as raw bytes is decoded here before conversion. A byte
//! order mark wins; otherwise the charset comes from the document's own
//! `<meta>` declaration, and anything undeclared is read as UTF-8.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use tracing::{debug, trace};

/// Number of leading bytes searched for a charset declaration.
pub const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">`, then `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static CHARSET_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;/]+)"#)
            .expect("meta charset regex"),
        Regex::new(
            r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#,
        )
        .expect("content-type charset regex"),
    ]
});

/// Returns the charset label declared in the first `<meta>` that has one.
#[must_use]
pub fn declared_charset(head: &str) -> Option<&str> {
    CHARSET_PATTERNS
        .iter()
        .find_map(|re| re.captures(head)?.get(1))
        .map(|m| m.as_str())
}

/// Picks the encoding for `html`: BOM, then `<meta>` declaration, then UTF-8.
///
/// Unknown charset labels are ignored.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        trace!(encoding = encoding.name(), "byte order mark");
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    match declared_charset(&head) {
        Some(label) => Encoding::for_label(label.as_bytes()).unwrap_or_else(|| {
            debug!(label, "unknown charset label, falling back to UTF-8");
            UTF_8
        }),
        None => UTF_8,
    }
}

/// Decodes `html` to UTF-8 using [`detect_encoding`].
///
/// Invalid sequences become U+FFFD instead of failing. Valid UTF-8 input is
/// borrowed, not copied.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> Cow<'_, str> {
    let encoding = detect_encoding(html);
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        debug!(encoding = used.name(), "invalid byte sequences replaced");
    }
    decoded
}
