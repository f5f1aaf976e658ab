//! The conversion state machine.
//!
//! A single forward scan over the input. Text is copied to the output
//! (subject to suppression and whitespace collapsing), tags are classified
//! when their `>` is reached, and entities are resolved inline with a bounded
//! lookahead.

use tracing::{debug, trace};

use crate::entities::resolve_entity;
use crate::links::{extract_href, AnchorStack, OpenAnchor};
use crate::options::{Options, LIST_ITEM_PREFIX};
use crate::tags::{Tag, TagRole};

const COMMENT_OPEN: &str = "!--";
const COMMENT_CLOSE: &str = "-->";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Text,
    /// Inside `<...>`; `start` is the byte offset just after `<`.
    InTag { start: usize },
    InComment,
}

/// Converts `html` to plain text. Never fails.
pub(crate) fn convert_html(html: &str, options: &Options) -> String {
    let mut converter = Converter::new(options, html.len());
    let mut state = State::Text;
    let mut pos = 0;

    loop {
        match state {
            State::Text => {
                let Some(ch) = html[pos..].chars().next() else {
                    break;
                };
                let next = pos + ch.len_utf8();

                match ch {
                    '<' if html[next..].starts_with(COMMENT_OPEN) => {
                        state = State::InComment;
                        pos = next + COMMENT_OPEN.len();
                    }
                    '<' => {
                        state = State::InTag { start: next };
                        pos = next;
                    }
                    _ if converter.is_suppressed() => pos = next,
                    '&' => {
                        if let Some((decoded, len)) = resolve_entity(&html[next..]) {
                            converter.push_char(decoded);
                            pos = next + len;
                        } else {
                            converter.push_char('&');
                            pos = next;
                        }
                    }
                    c if c.is_ascii_whitespace() => {
                        converter.pending_space = true;
                        pos = next;
                    }
                    c => {
                        converter.push_char(c);
                        pos = next;
                    }
                }
            }
            State::InTag { start } => {
                let Some(len) = html[start..].find('>') else {
                    debug!(offset = start, "unterminated tag, dropping rest of input");
                    break;
                };
                let end = start + len;
                converter.handle_tag(&Tag::parse(&html[start..end]));
                state = State::Text;
                pos = end + 1;
            }
            State::InComment => {
                let Some(len) = html[pos..].find(COMMENT_CLOSE) else {
                    debug!(offset = pos, "unterminated comment, dropping rest of input");
                    break;
                };
                state = State::Text;
                pos += len + COMMENT_CLOSE.len();
            }
        }
    }

    converter.finish()
}

struct Converter<'o> {
    options: &'o Options,
    line_break: &'static str,
    out: String,
    /// A whitespace run was seen and not yet written.
    pending_space: bool,
    /// A `</p>` was seen; its blank line is written before the next output,
    /// so a document never ends with one.
    pending_paragraph: bool,
    suppression_depth: usize,
    anchors: AnchorStack,
}

impl<'o> Converter<'o> {
    fn new(options: &'o Options, capacity: usize) -> Self {
        Self {
            options,
            line_break: options.line_break(),
            out: String::with_capacity(capacity),
            pending_space: false,
            pending_paragraph: false,
            suppression_depth: 0,
            anchors: AnchorStack::new(options.max_link_depth),
        }
    }

    fn is_suppressed(&self) -> bool {
        self.suppression_depth > 0
    }

    fn ends_with_whitespace(&self) -> bool {
        self.out.ends_with(|c: char| c.is_ascii_whitespace())
    }

    fn ends_with_line_break(&self) -> bool {
        self.out.ends_with('\n')
    }

    fn flush_paragraph(&mut self) {
        if std::mem::take(&mut self.pending_paragraph) {
            self.write_line_breaks(2);
        }
    }

    /// Writes any deferred paragraph break, then the collapsed space for a
    /// preceding whitespace run unless it would lead the output or follow
    /// other whitespace.
    fn flush_pending(&mut self) {
        self.flush_paragraph();
        if self.pending_space && !self.out.is_empty() && !self.ends_with_whitespace() {
            self.out.push(' ');
        }
        self.pending_space = false;
    }

    fn push_char(&mut self, ch: char) {
        self.flush_pending();
        self.out.push(ch);
    }

    fn push_line_breaks(&mut self, count: usize) {
        self.flush_paragraph();
        self.write_line_breaks(count);
    }

    fn write_line_breaks(&mut self, count: usize) {
        self.pending_space = false;
        for _ in 0..count {
            self.out.push_str(self.line_break);
        }
    }

    fn handle_tag(&mut self, tag: &Tag<'_>) {
        match tag.role {
            TagRole::Suppressed => self.adjust_suppression(tag),
            _ if self.is_suppressed() => {}
            TagRole::Anchor => {
                if tag.closing {
                    self.close_anchor();
                } else {
                    self.open_anchor(tag.attributes);
                    if tag.is_self_closing() {
                        self.close_anchor();
                    }
                }
            }
            TagRole::Heading => {
                if tag.closing || !self.out.is_empty() {
                    self.push_line_breaks(2);
                }
            }
            TagRole::Paragraph => {
                if tag.closing && !self.out.is_empty() {
                    self.pending_paragraph = true;
                }
            }
            TagRole::ListItem => {
                self.flush_paragraph();
                if tag.closing {
                    if !self.ends_with_line_break() {
                        self.push_line_breaks(1);
                    }
                } else {
                    if !self.out.is_empty() && !self.ends_with_line_break() {
                        self.push_line_breaks(1);
                    }
                    if self.options.list_support {
                        self.pending_space = false;
                        self.out.push_str(LIST_ITEM_PREFIX);
                    }
                }
            }
            TagRole::LineBreak => self.push_line_breaks(1),
            TagRole::ListContainer | TagRole::Transparent => {}
        }
    }

    fn adjust_suppression(&mut self, tag: &Tag<'_>) {
        if tag.closing {
            if self.suppression_depth == 0 {
                trace!(tag = %tag.name, "close of suppressed element with nothing open");
            } else {
                self.suppression_depth -= 1;
            }
        } else if !tag.is_self_closing() {
            self.suppression_depth += 1;
        }
    }

    fn open_anchor(&mut self, attributes: &str) {
        let href = extract_href(attributes);
        self.flush_pending();
        if !self.anchors.open(href, self.out.len()) {
            debug!(
                depth = self.anchors.depth(),
                "anchor nesting cap reached, treating anchor as plain text"
            );
        }
    }

    fn close_anchor(&mut self) {
        if let Some(anchor) = self.anchors.close() {
            self.render_anchor(anchor);
        }
    }

    fn render_anchor(&mut self, anchor: OpenAnchor) {
        if self.options.links_inner_text {
            if let Some(href) = anchor.href {
                if !self.out.is_empty() && !self.ends_with_whitespace() {
                    self.out.push(' ');
                }
                self.out.push('<');
                self.out.push_str(&href);
                self.out.push('>');
            }
        } else {
            self.out.truncate(anchor.start);
            self.pending_paragraph = false;
            if let Some(href) = anchor.href {
                self.out.push_str(&href);
            }
        }
    }

    fn finish(mut self) -> String {
        if !self.anchors.is_empty() {
            debug!(open = self.anchors.depth(), "closing anchors left open at end of input");
        }
        while let Some(anchor) = self.anchors.pop_unclosed() {
            self.render_anchor(anchor);
        }
        self.out
    }
}
