//! Tag parsing and classification.
//!
//! A tag is classified purely by its name. Attributes are kept as a raw slice
//! so the link extractor can tokenize them when the tag is an anchor.

use crate::links::is_self_closed;

/// Elements whose whole content is dropped: head, script, style
pub static SUPPRESSED_TAGS: [&str; 3] = ["head", "script", "style"];

/// Heading tags: h1-h6
pub static HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// List container tags: ul, ol
pub static LIST_TAGS: [&str; 2] = ["ul", "ol"];

/// What a tag does to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRole {
    /// Content up to the matching close tag is discarded.
    Suppressed,
    /// Hyperlink, handled by the link extractor.
    Anchor,
    /// Framed by a double line break before and after.
    Heading,
    /// Double line break on close.
    Paragraph,
    /// `ul`/`ol`: no output of its own.
    ListContainer,
    /// One line per item, optionally bulleted.
    ListItem,
    /// Single line break.
    LineBreak,
    /// Markup dropped, inner text kept.
    Transparent,
}

/// Maps a tag name, in any case, to its role.
#[must_use]
pub fn classify(name: &str) -> TagRole {
    let is = |tag: &str| name.eq_ignore_ascii_case(tag);
    let any = |tags: &[&str]| tags.iter().any(|&tag| is(tag));

    if is("a") {
        TagRole::Anchor
    } else if is("p") {
        TagRole::Paragraph
    } else if is("li") {
        TagRole::ListItem
    } else if is("br") {
        TagRole::LineBreak
    } else if any(&SUPPRESSED_TAGS[..]) {
        TagRole::Suppressed
    } else if any(&HEADING_TAGS[..]) {
        TagRole::Heading
    } else if any(&LIST_TAGS[..]) {
        TagRole::ListContainer
    } else {
        TagRole::Transparent
    }
}

/// A parsed tag: the text between `<` and `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Tag name as written, without the leading `/`.
    pub name: &'a str,
    pub role: TagRole,
    /// `</name>`
    pub closing: bool,
    /// Everything after the name, untouched.
    pub attributes: &'a str,
}

impl<'a> Tag<'a> {
    /// Parses the raw content of a tag, e.g. `a href="x"` or `/p` or `br/`.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        let trimmed = raw.trim_start();
        let (closing, body) = match trimmed.strip_prefix('/') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, trimmed),
        };

        let name_end = body
            .find(|c: char| c.is_whitespace() || c == '/')
            .unwrap_or(body.len());
        let name = &body[..name_end];

        Self {
            name,
            role: classify(name),
            closing,
            attributes: &body[name_end..],
        }
    }

    /// `<name/>` or `<name ... />`, but not a `/` ending an unquoted value.
    #[must_use]
    pub fn is_self_closing(&self) -> bool {
        is_self_closed(self.attributes)
    }
}
