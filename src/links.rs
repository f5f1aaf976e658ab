//! Anchor handling: href extraction and the stack of open anchors.
//!
//! Attributes are read by a small tokenizer (name, optional `=`, optional
//! quote, value) instead of a pattern match, so every quoting style is
//! handled in one linear pass.

use crate::entities::decode_entities;

/// One attribute from a tag's attribute list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: &'a str,
    /// `None` for bare attributes such as `download`.
    pub value: Option<&'a str>,
}

/// Iterator over the attributes in the raw text following a tag name.
#[must_use]
pub fn attributes(raw: &str) -> Attributes<'_> {
    Attributes {
        rest: raw,
        self_closed: false,
    }
}

/// Whether the attribute list ends with a `/` that closes the tag.
///
/// The `/` counts only when it stands on its own: right after the tag name,
/// after whitespace or after a quoted value. In `href=/wiki/x/` it is part of
/// the unquoted value.
#[must_use]
pub fn is_self_closed(raw: &str) -> bool {
    let mut attrs = attributes(raw);
    attrs.by_ref().for_each(drop);
    attrs.self_closed
}

/// See [`attributes`].
#[derive(Debug, Clone)]
pub struct Attributes<'a> {
    rest: &'a str,
    /// Set once the scan ends on a separator `/`.
    self_closed: bool,
}

impl<'a> Iterator for Attributes<'a> {
    type Item = Attribute<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let s = self
            .rest
            .trim_start_matches(|c: char| c.is_whitespace() || c == '/');
        if s.is_empty() {
            self.self_closed |= self.rest.contains('/');
            self.rest = s;
            return None;
        }

        // A stray `=` still counts as a one-byte name so the scan always advances.
        let name_end = if s.starts_with('=') {
            1
        } else {
            s.find(|c: char| c.is_whitespace() || c == '=' || c == '/')
                .unwrap_or(s.len())
        };
        let name = &s[..name_end];
        let after_name = &s[name_end..];

        let Some(value_part) = after_name.trim_start().strip_prefix('=') else {
            self.rest = after_name;
            return Some(Attribute { name, value: None });
        };

        let (value, rest) = split_value(value_part.trim_start());
        self.rest = rest;
        Some(Attribute {
            name,
            value: Some(value),
        })
    }
}

/// Splits an attribute value off the front of `s`, returning the value
/// (without quotes) and the remaining text.
fn split_value(s: &str) -> (&str, &str) {
    match s.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let body = &s[1..];
            match body.find(quote) {
                Some(end) => (&body[..end], &body[end + 1..]),
                None => (body, ""),
            }
        }
        _ => {
            let end = s.find(char::is_whitespace).unwrap_or(s.len());
            (&s[..end], &s[end..])
        }
    }
}

/// Returns the decoded href of an anchor, or `None` when the anchor has no
/// href or its target is not worth showing (see [`is_bad_href`]).
#[must_use]
pub fn extract_href(raw_attributes: &str) -> Option<String> {
    let raw = attributes(raw_attributes)
        .find(|attr| attr.name.eq_ignore_ascii_case("href"))?
        .value?;

    let href = decode_entities(raw.trim());
    if is_bad_href(&href) {
        None
    } else {
        Some(href)
    }
}

/// Empty hrefs, in-page fragments and `javascript:` URLs are never emitted.
#[must_use]
pub fn is_bad_href(href: &str) -> bool {
    const JAVASCRIPT: &str = "javascript:";

    href.is_empty()
        || href.starts_with('#')
        || href
            .get(..JAVASCRIPT.len())
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case(JAVASCRIPT))
}

/// An anchor whose close tag has not been seen yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAnchor {
    /// Decoded href, `None` when absent or filtered out.
    pub href: Option<String>,
    /// Output offset (in bytes) where the anchor's inner text begins.
    pub start: usize,
}

/// Stack of currently open anchors, innermost last.
#[derive(Debug, Default)]
pub struct AnchorStack {
    open: Vec<OpenAnchor>,
    /// Anchors opened past `max_depth`; their closes are swallowed.
    overflow: usize,
    max_depth: Option<usize>,
}

impl AnchorStack {
    #[must_use]
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            open: Vec::new(),
            overflow: 0,
            max_depth,
        }
    }

    /// Pushes a new anchor. Returns `false` if the depth cap was hit, in
    /// which case the anchor is only counted.
    pub fn open(&mut self, href: Option<String>, start: usize) -> bool {
        if self.max_depth.is_some_and(|max| self.open.len() >= max) {
            self.overflow += 1;
            return false;
        }
        self.open.push(OpenAnchor { href, start });
        true
    }

    /// Pops the innermost anchor for a `</a>`.
    ///
    /// Returns `None` for a stray close tag or for the close of an anchor
    /// that was over the depth cap.
    pub fn close(&mut self) -> Option<OpenAnchor> {
        if self.overflow > 0 {
            self.overflow -= 1;
            return None;
        }
        self.open.pop()
    }

    /// Pops the innermost anchor regardless of overflow, used at end of input.
    pub fn pop_unclosed(&mut self) -> Option<OpenAnchor> {
        self.overflow = 0;
        self.open.pop()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}
