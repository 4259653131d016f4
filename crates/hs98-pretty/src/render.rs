//! Rendering engine
//!
//! Lays a [`Doc`] out against a [`Style`] and streams the result as
//! [`Chunk`]s. The renderer is a stack machine over borrowed documents: a
//! group is laid out flat when its flat width, plus whatever must follow it
//! on the same line, fits in the remaining page and ribbon width.
//!
//! Padding is emitted lazily, just before the next visible text, so lines
//! never carry trailing whitespace and blank lines are empty.

use crate::doc::{Doc, Node};
use std::fmt;

/// Output discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Wrap lines at the page and ribbon width
    #[default]
    Page,
    /// Everything on one line; line breaks become single spaces
    OneLine,
    /// Keep line breaks, drop indentation, lay groups out flat when possible
    Left,
}

/// Page geometry for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub mode: RenderMode,
    /// Maximum line width
    pub line_length: usize,
    /// Page width divided by the preferred width of non-indentation text
    pub ribbons_per_line: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            mode: RenderMode::Page,
            line_length: 100,
            ribbons_per_line: 1.5,
        }
    }
}

impl Style {
    pub fn with_line_length(mut self, line_length: usize) -> Self {
        self.line_length = line_length;
        self
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Columns of non-indentation text preferred on one line.
    pub fn ribbon_width(&self) -> usize {
        if self.ribbons_per_line <= 0.0 {
            return self.line_length;
        }
        (self.line_length as f32 / self.ribbons_per_line).round() as usize
    }
}

/// A piece of rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk<'d> {
    Text(&'d str),
    Spaces(usize),
    Newline,
}

impl Chunk<'_> {
    pub fn write_to(&self, out: &mut impl fmt::Write) -> fmt::Result {
        match self {
            Chunk::Text(s) => out.write_str(s),
            Chunk::Spaces(n) => write!(out, "{:width$}", "", width = *n),
            Chunk::Newline => out.write_char('\n'),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fit {
    Flat,
    Break,
}

enum Cmd<'d> {
    Render {
        indent: isize,
        fit: Fit,
        doc: &'d Doc,
    },
    /// Right side of `<>`: aligns on the column where it starts
    Align { fit: Fit, doc: &'d Doc },
    Space,
    /// Lower side of `$$`/`$+$`, or a member of a broken `sep`
    Below {
        indent: isize,
        overlap: bool,
        doc: &'d Doc,
    },
    /// Remaining members of a broken `fsep`/`fcat`
    FillCont {
        indent: isize,
        spaced: bool,
        rest: &'d [Doc],
        start_line: usize,
    },
}

/// Streaming layout of one document.
pub struct Renderer<'d> {
    mode: RenderMode,
    line_length: isize,
    ribbon: isize,
    stack: Vec<Cmd<'d>>,
    held: Option<Chunk<'d>>,
    /// Column the next text lands on, counting owed padding
    col: isize,
    /// Column of the first position on the current line
    line_indent: isize,
    /// Spaces owed before the next visible text
    pending: usize,
    line: usize,
}

impl<'d> Renderer<'d> {
    pub fn new(style: &Style, doc: &'d Doc) -> Self {
        let start = doc.meta().lead.max(0);
        let mut renderer = Self {
            mode: style.mode,
            line_length: style.line_length as isize,
            ribbon: style.ribbon_width() as isize,
            stack: vec![Cmd::Render {
                indent: 0,
                fit: Fit::Break,
                doc,
            }],
            held: None,
            col: start,
            line_indent: start,
            pending: 0,
            line: 0,
        };
        if renderer.mode == RenderMode::Page {
            renderer.pending = start as usize;
        }
        renderer
    }

    fn text(&mut self, s: &'d str) -> Option<Chunk<'d>> {
        self.col += s.chars().count() as isize;
        if s.is_empty() {
            return None;
        }
        if self.pending > 0 {
            let pad = std::mem::take(&mut self.pending);
            self.held = Some(Chunk::Text(s));
            Some(Chunk::Spaces(pad))
        } else {
            Some(Chunk::Text(s))
        }
    }

    fn advance(&mut self, n: isize) {
        if n > 0 {
            self.col += n;
            self.pending += n as usize;
        }
    }

    /// Start a new line whose first text goes to column `target`.
    fn newline(&mut self, target: isize) -> Option<Chunk<'d>> {
        let target = target.max(0);
        self.col = target;
        self.line_indent = target;
        match self.mode {
            RenderMode::Page => {
                self.line += 1;
                self.pending = target as usize;
                Some(Chunk::Newline)
            }
            RenderMode::Left => {
                self.line += 1;
                self.pending = 0;
                Some(Chunk::Newline)
            }
            RenderMode::OneLine => {
                self.pending = 1;
                None
            }
        }
    }

    /// Place `doc` below what has been rendered so far.
    fn below(&mut self, indent: isize, overlap: bool, doc: &Doc) -> Option<Chunk<'d>> {
        let target = indent + doc.meta().lead;
        if overlap && self.col < target {
            self.advance(target - self.col);
            None
        } else {
            self.newline(target)
        }
    }

    fn fits(&self, width: usize) -> bool {
        match self.mode {
            RenderMode::Left => true,
            RenderMode::OneLine => false,
            RenderMode::Page => {
                let page = self.line_length - self.col;
                let ribbon = self.ribbon - (self.col - self.line_indent);
                width as isize <= page.min(ribbon)
            }
        }
    }

    /// Width that must follow on the current line after the commands still
    /// on the stack have been laid out as narrowly as possible.
    fn rest_of_line(&self) -> usize {
        let mut width = 0;
        for cmd in self.stack.iter().rev() {
            match cmd {
                Cmd::Render { fit, doc, .. } | Cmd::Align { fit, doc } => {
                    let meta = doc.meta();
                    match (fit, meta.flat) {
                        (Fit::Flat, Some(w)) => width += w,
                        _ => {
                            width += meta.first;
                            if meta.breaks {
                                return width;
                            }
                        }
                    }
                }
                Cmd::Space => width += 1,
                Cmd::FillCont { rest, .. } if rest.is_empty() => {}
                Cmd::Below { .. } | Cmd::FillCont { .. } => return width,
            }
        }
        width
    }

    fn push_flat(&mut self, spaced: bool, elems: &'d [Doc]) {
        for (i, doc) in elems.iter().enumerate().rev() {
            self.stack.push(Cmd::Render {
                indent: 0,
                fit: Fit::Flat,
                doc,
            });
            if spaced && i > 0 {
                self.stack.push(Cmd::Space);
            }
        }
    }

    fn step(&mut self, cmd: Cmd<'d>) -> Option<Chunk<'d>> {
        match cmd {
            Cmd::Render { indent, fit, doc } => self.render(indent, fit, doc),
            Cmd::Align { fit, doc } => {
                let indent = self.col - doc.meta().lead;
                self.render(indent, fit, doc)
            }
            Cmd::Space => {
                self.advance(1);
                None
            }
            Cmd::Below {
                indent,
                overlap,
                doc,
            } => {
                self.stack.push(Cmd::Render {
                    indent,
                    fit: Fit::Break,
                    doc,
                });
                self.below(indent, overlap, doc)
            }
            Cmd::FillCont {
                indent,
                spaced,
                rest,
                start_line,
            } => self.fill(indent, spaced, rest, start_line),
        }
    }

    fn render(&mut self, indent: isize, fit: Fit, doc: &'d Doc) -> Option<Chunk<'d>> {
        match doc.node() {
            Node::Empty => None,
            Node::Text(s) => self.text(s),
            Node::Nest(k, inner) => {
                self.stack.push(Cmd::Render {
                    indent: indent + k,
                    fit,
                    doc: inner,
                });
                None
            }
            Node::Beside {
                left,
                spaced,
                right,
            } => {
                self.stack.push(Cmd::Align { fit, doc: right });
                if *spaced {
                    self.stack.push(Cmd::Space);
                }
                self.stack.push(Cmd::Render {
                    indent,
                    fit,
                    doc: left,
                });
                None
            }
            Node::Above {
                upper,
                overlap,
                lower,
            } => {
                self.stack.push(Cmd::Below {
                    indent,
                    overlap: *overlap,
                    doc: lower,
                });
                self.stack.push(Cmd::Render {
                    indent,
                    fit: Fit::Break,
                    doc: upper,
                });
                None
            }
            Node::Group {
                fill,
                spaced,
                elems,
            } => {
                let flat = fit == Fit::Flat
                    || doc
                        .flat_width()
                        .is_some_and(|w| self.fits(w + self.rest_of_line()));
                if flat {
                    self.push_flat(*spaced, elems);
                } else if *fill {
                    self.stack.push(Cmd::FillCont {
                        indent,
                        spaced: *spaced,
                        rest: &elems[1..],
                        start_line: self.line,
                    });
                    self.stack.push(Cmd::Render {
                        indent,
                        fit: Fit::Break,
                        doc: &elems[0],
                    });
                } else {
                    for doc in elems[1..].iter().rev() {
                        self.stack.push(Cmd::Below {
                            indent,
                            overlap: true,
                            doc,
                        });
                    }
                    self.stack.push(Cmd::Render {
                        indent,
                        fit: Fit::Break,
                        doc: &elems[0],
                    });
                }
                None
            }
        }
    }

    fn fill(
        &mut self,
        indent: isize,
        spaced: bool,
        rest: &'d [Doc],
        start_line: usize,
    ) -> Option<Chunk<'d>> {
        let (next, tail) = rest.split_first()?;
        let single_line = self.line == start_line;
        let joins = single_line
            && next.flat_width().is_some_and(|w| {
                let after = if tail.is_empty() { self.rest_of_line() } else { 0 };
                self.fits(usize::from(spaced) + w + after)
            });
        if joins {
            self.stack.push(Cmd::FillCont {
                indent,
                spaced,
                rest: tail,
                start_line: self.line,
            });
            self.stack.push(Cmd::Render {
                indent,
                fit: Fit::Flat,
                doc: next,
            });
            if spaced {
                self.stack.push(Cmd::Space);
            }
            None
        } else {
            let chunk = self.below(indent, true, next);
            self.stack.push(Cmd::FillCont {
                indent,
                spaced,
                rest: tail,
                start_line: self.line,
            });
            self.stack.push(Cmd::Render {
                indent,
                fit: Fit::Break,
                doc: next,
            });
            chunk
        }
    }
}

impl<'d> Iterator for Renderer<'d> {
    type Item = Chunk<'d>;

    fn next(&mut self) -> Option<Chunk<'d>> {
        if let Some(chunk) = self.held.take() {
            return Some(chunk);
        }
        while let Some(cmd) = self.stack.pop() {
            if let Some(chunk) = self.step(cmd) {
                return Some(chunk);
            }
        }
        None
    }
}

/// Render with the default style: page mode, 100 columns, 1.5 ribbons.
pub fn render(doc: &Doc) -> String {
    render_with_style(&Style::default(), doc)
}

pub fn render_with_style(style: &Style, doc: &Doc) -> String {
    full_render(style, doc, String::new(), |mut out, chunk| {
        match chunk {
            Chunk::Text(s) => out.push_str(s),
            Chunk::Spaces(n) => out.extend(std::iter::repeat_n(' ', n)),
            Chunk::Newline => out.push('\n'),
        }
        out
    })
}

/// Fold rendered chunks into an accumulator without building the whole
/// string.
///
/// ```
/// use hs98_pretty::doc::{vcat, Doc};
/// use hs98_pretty::render::{full_render, Chunk, Style};
///
/// let doc = vcat([Doc::text("a"), Doc::text("b"), Doc::text("c")]);
/// let lines = full_render(&Style::default(), &doc, 1, |n, chunk| match chunk {
///     Chunk::Newline => n + 1,
///     _ => n,
/// });
/// assert_eq!(lines, 3);
/// ```
pub fn full_render<A, F>(style: &Style, doc: &Doc, seed: A, fold: F) -> A
where
    F: FnMut(A, Chunk<'_>) -> A,
{
    Renderer::new(style, doc).fold(seed, fold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::{cat, fsep, hsep, sep, vcat};

    fn t(s: &'static str) -> Doc {
        Doc::text(s)
    }

    fn narrow(width: usize) -> Style {
        Style {
            mode: RenderMode::Page,
            line_length: width,
            ribbons_per_line: 1.0,
        }
    }

    #[test]
    fn test_render_beside_aligns_following_lines() {
        let doc = t("foo ").append(vcat([t("a"), t("b")]));
        assert_eq!(render(&doc), "foo a\n    b");
    }

    #[test]
    fn test_render_nest_on_right_of_beside_is_ignored() {
        let doc = t("ab").append(vcat([t("c"), t("d")]).nest(4));
        assert_eq!(render(&doc), "abc\n  d");
    }

    #[test]
    fn test_render_above_overlaps_short_line() {
        let doc = t("do").above(t("x").nest(3));
        assert_eq!(render(&doc), "do x");
        let doc = t("do").above_strict(t("x").nest(3));
        assert_eq!(render(&doc), "do\n   x");
    }

    #[test]
    fn test_render_above_without_room_breaks() {
        let doc = t("where").above(t("x").nest(2));
        assert_eq!(render(&doc), "where\n  x");
    }

    #[test]
    fn test_render_nest_at_top_level() {
        assert_eq!(render(&t("x").nest(4)), "    x");
        assert_eq!(render(&vcat([t("abc"), t("b").nest(2)])), "abc\n  b");
    }

    #[test]
    fn test_render_negative_nest_clamps_to_zero() {
        assert_eq!(render(&vcat([t("a"), t("b").nest(-5)])), "a\nb");
    }

    #[test]
    fn test_render_blank_line_is_empty() {
        let doc = vcat([t("a"), t("").above(t("b"))]).nest(4);
        assert_eq!(render(&doc), "    a\n\n    b");
    }

    #[test]
    fn test_render_sep_is_all_or_nothing() {
        let doc = sep([t("aaaa"), t("bbbb"), t("cccc")]);
        assert_eq!(render_with_style(&narrow(20), &doc), "aaaa bbbb cccc");
        assert_eq!(render_with_style(&narrow(10), &doc), "aaaa\nbbbb\ncccc");
    }

    #[test]
    fn test_render_cat_has_no_spaces() {
        let doc = cat([t("ab"), t("cd")]);
        assert_eq!(render(&doc), "abcd");
        assert_eq!(render_with_style(&narrow(3), &doc), "ab\ncd");
    }

    #[test]
    fn test_render_fsep_fills_lines() {
        let words = ["aa", "bb", "cc", "dd", "ee"].map(t);
        let doc = fsep(words);
        assert_eq!(render_with_style(&narrow(8), &doc), "aa bb cc\ndd ee");
    }

    #[test]
    fn test_render_fsep_breaks_to_group_indent() {
        let doc = t("f ").append(fsep(["aa", "bb", "cc"].map(t)));
        assert_eq!(render_with_style(&narrow(7), &doc), "f aa bb\n  cc");
    }

    #[test]
    fn test_render_overlong_fragment_gets_own_line() {
        let doc = fsep([t("a"), t("very-long-word"), t("b")]);
        assert_eq!(render_with_style(&narrow(6), &doc), "a\nvery-long-word\nb");
    }

    #[test]
    fn test_render_group_accounts_for_following_text() {
        let doc = sep([t("aaa"), t("bbb")]).append(t(")))"));
        assert_eq!(render_with_style(&narrow(10), &doc), "aaa bbb)))");
        assert_eq!(render_with_style(&narrow(9), &doc), "aaa\nbbb)))");
    }

    #[test]
    fn test_render_ribbon_limits_text_width() {
        let doc = sep([t("aaaa"), t("bbbb")]).nest(10);
        let style = Style {
            mode: RenderMode::Page,
            line_length: 40,
            ribbons_per_line: 5.0,
        };
        assert_eq!(render_with_style(&style, &doc), "          aaaa\n          bbbb");
    }

    #[test]
    fn test_render_hang() {
        let doc = t("let").hang(4, vcat([t("x = 1"), t("y = 2")]));
        assert_eq!(render(&doc), "let x = 1\n    y = 2");
    }

    #[test]
    fn test_render_one_line_mode() {
        let doc = vcat([t("a"), t("b").nest(4), hsep([t("c"), t("d")])]);
        let style = Style::default().with_mode(RenderMode::OneLine);
        assert_eq!(render_with_style(&style, &doc), "a   b c d");
    }

    #[test]
    fn test_render_left_mode_drops_indentation() {
        let doc = vcat([t("a"), vcat([t("b"), t("c")]).nest(4)]);
        let style = Style::default().with_mode(RenderMode::Left);
        assert_eq!(render_with_style(&style, &doc), "a   b\nc");
    }

    #[test]
    fn test_render_streaming_matches_string() {
        let doc = fsep(["one", "two", "three", "four"].map(t));
        let style = narrow(9);
        let chunks: Vec<Chunk<'_>> = Renderer::new(&style, &doc).collect();
        assert!(chunks.contains(&Chunk::Newline));
        let mut s = String::new();
        for chunk in &chunks {
            chunk.write_to(&mut s).unwrap();
        }
        assert_eq!(s, render_with_style(&style, &doc));
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = sep([t("x"), fsep(["a", "b", "c"].map(t)).nest(2)]);
        assert_eq!(render(&doc), render(&doc));
    }
}
