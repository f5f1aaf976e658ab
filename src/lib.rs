//! # html2text
//!
//! Converts HTML markup into readable plain text.
//!
//! Tags, scripts and styles are dropped; link targets, headings, paragraph
//! and line breaks, list items and character entities survive as text. This
//! is a single forward scan, not a DOM builder, so it is cheap enough for
//! previews and snippets and never fails on malformed input.
//!
//! ## Quick Start
//!
//! ```rust
//! use html2text::{convert, convert_with_options, Options};
//!
//! assert_eq!(convert(r#"click <a href="test">here</a>"#), "click test");
//!
//! let options = Options {
//!     links_inner_text: true,
//!     unix_line_breaks: true,
//!     ..Options::default()
//! };
//! assert_eq!(
//!     convert_with_options(r#"<h1>Hi</h1>click <a href="test">here</a>"#, &options),
//!     "Hi\n\nclick here <test>"
//! );
//! ```
//!
//! ## What gets emitted
//!
//! - **Links**: the href replaces the anchor text, or follows it in angle
//!   brackets with `links_inner_text`. Empty, `#fragment` and `javascript:`
//!   targets are dropped.
//! - **Headings** (`h1`–`h6`): surrounded by blank lines.
//! - **Paragraphs**: a blank line after each `</p>`.
//! - **Lists**: one `li` per line, prefixed with `" - "` under `list_support`.
//! - **`<br>`**: a line break.
//! - **Entities**: a small named set plus decimal and hex references.
//! - `head`, `script` and `style` content is skipped entirely.

mod convert;
mod encoding;
mod error;
mod links;
mod options;
mod tags;

/// Character reference decoding.
pub mod entities;

// Public API - re-exports
pub use entities::decode_entities;
pub use error::{Error, Result};
pub use options::{Options, CRLF, LF, LIST_ITEM_PREFIX};

/// Converts HTML to plain text using default options.
///
/// Line breaks follow the process-wide default set with
/// [`set_unix_line_breaks`] (CRLF unless changed); links are replaced by
/// their href and list items are not bulleted.
///
/// # Example
///
/// ```rust
/// use html2text::convert;
///
/// assert_eq!(convert("<h1>First</h1>main text"), "First\r\n\r\nmain text");
/// assert_eq!(convert("<ul><li>One</li><li>Two</li></ul>"), "One\r\nTwo\r\n");
/// ```
#[must_use]
pub fn convert(html: &str) -> String {
    convert_with_options(html, &Options::legacy_default())
}

/// Converts HTML to plain text with explicit options.
///
/// # Example
///
/// ```rust
/// use html2text::{convert_with_options, Options};
///
/// let options = Options {
///     list_support: true,
///     ..Options::default()
/// };
/// assert_eq!(
///     convert_with_options("<ul><li>One</li><li>Two</li></ul>", &options),
///     " - One\r\n - Two\r\n"
/// );
/// ```
#[must_use]
pub fn convert_with_options(html: &str, options: &Options) -> String {
    convert::convert_html(html, options)
}

/// Converts HTML bytes to plain text, detecting the character encoding from
/// a BOM or `<meta>` charset declaration.
///
/// # Example
///
/// ```rust
/// use html2text::convert_bytes;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert_eq!(convert_bytes(html), "Caf\u{e9}");
/// ```
#[must_use]
pub fn convert_bytes(html: &[u8]) -> String {
    convert(&encoding::transcode_to_utf8(html))
}

/// Byte-input counterpart of [`convert_with_options`].
#[must_use]
pub fn convert_bytes_with_options(html: &[u8], options: &Options) -> String {
    convert_with_options(&encoding::transcode_to_utf8(html), options)
}

/// Switches the process-wide default line break used by [`convert`] and
/// [`convert_bytes`] between `\n` (`true`) and `\r\n` (`false`).
///
/// The setting is read once at the start of each call. Concurrent callers
/// that flip it get whichever value was current when their call began.
#[deprecated(note = "set `Options::unix_line_breaks` and call `convert_with_options`")]
pub fn set_unix_line_breaks(enabled: bool) {
    options::store_unix_line_breaks_default(enabled);
}
