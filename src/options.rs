//! Configuration options for HTML to text conversion.
//!
//! The `Options` struct selects the line-break style, how links are rendered
//! and whether list items get a bullet. It is built once per call and never
//! changes while a document is being converted.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Windows-style line break, the default.
pub const CRLF: &str = "\r\n";

/// Unix-style line break.
pub const LF: &str = "\n";

/// Prefix written before each list item when `list_support` is enabled.
pub const LIST_ITEM_PREFIX: &str = " - ";

static UNIX_LINE_BREAKS_DEFAULT: AtomicBool = AtomicBool::new(false);

/// Configuration options for conversion.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use html2text::Options;
///
/// let options = Options {
///     unix_line_breaks: true,
///     list_support: true,
///     ..Options::default()
/// };
/// assert!(!options.links_inner_text);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Emit `\n` instead of `\r\n` for line breaks.
    ///
    /// Default: `false`
    pub unix_line_breaks: bool,

    /// Keep the anchor's inner text and append the href in angle brackets,
    /// instead of replacing the inner text with the href.
    ///
    /// Default: `false`
    pub links_inner_text: bool,

    /// Prefix list items with `" - "`.
    ///
    /// Default: `false`
    pub list_support: bool,

    /// Maximum number of simultaneously open anchors.
    ///
    /// Anchors opened past this depth are treated as transparent tags.
    /// Useful on untrusted input where nesting depth is attacker controlled.
    ///
    /// Default: `None` (unbounded)
    pub max_link_depth: Option<usize>,
}

impl Options {
    /// Parses options from a JSON mapping such as
    /// `{"unixLineBreaks": true, "listSupport": true}`.
    ///
    /// Omitted keys keep their default value. Unknown keys are rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use html2text::Options;
    ///
    /// let options = Options::from_json(r#"{"linksInnerText": true}"#)?;
    /// assert!(options.links_inner_text);
    /// assert!(!options.unix_line_breaks);
    /// # Ok::<(), html2text::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Default options honouring the process-wide line-break setting made
    /// through [`set_unix_line_breaks`](crate::set_unix_line_breaks).
    ///
    /// The global is read exactly once here.
    #[must_use]
    pub fn legacy_default() -> Self {
        Self {
            unix_line_breaks: UNIX_LINE_BREAKS_DEFAULT.load(Ordering::Relaxed),
            ..Self::default()
        }
    }

    /// The line break sequence selected by these options.
    #[must_use]
    pub fn line_break(&self) -> &'static str {
        if self.unix_line_breaks {
            LF
        } else {
            CRLF
        }
    }
}

pub(crate) fn store_unix_line_breaks_default(enabled: bool) {
    UNIX_LINE_BREAKS_DEFAULT.store(enabled, Ordering::Relaxed);
}
