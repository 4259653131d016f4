//! Document algebra
//!
//! A [`Doc`] describes formatted text without committing to line breaks.
//! Documents are immutable and reference counted: cloning is cheap and the
//! renderer only ever borrows them.
//!
//! The combinators follow the classic Hughes/Peyton Jones design:
//!
//! | operator | method                  | meaning                                  |
//! |----------|-------------------------|------------------------------------------|
//! | `<>`     | [`Doc::append`]         | beside, no space                         |
//! | `<+>`    | [`Doc::append_space`]   | beside, one space                        |
//! | `$$`     | [`Doc::above`]          | above, overlapping a short last line     |
//! | `$+$`    | [`Doc::above_strict`]   | above, never overlapping                 |
//!
//! [`Doc::empty`] is the identity of all four and is dropped by every
//! sequence combinator. `Doc::text("")` is *not* empty: it occupies a line.

use hs98_syntax::Rational;
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

/// Composable description of formatted text.
#[derive(Clone)]
pub struct Doc(Rc<DocInner>);

pub(crate) struct DocInner {
    pub(crate) node: Node,
    pub(crate) meta: Meta,
}

pub(crate) enum Node {
    Empty,
    Text(Cow<'static, str>),
    Nest(isize, Doc),
    Beside {
        left: Doc,
        spaced: bool,
        right: Doc,
    },
    Above {
        upper: Doc,
        overlap: bool,
        lower: Doc,
    },
    /// `sep`/`cat` when `fill` is false, `fsep`/`fcat` when true
    Group {
        fill: bool,
        spaced: bool,
        elems: Vec<Doc>,
    },
}

/// Layout facts computed once at construction.
#[derive(Clone, Copy)]
pub(crate) struct Meta {
    /// Width when laid out on a single line; `None` if the document always
    /// spans several lines.
    pub(crate) flat: Option<usize>,
    /// Nesting of the first line relative to the document's indentation.
    pub(crate) lead: isize,
    /// Width of the first line in the narrowest layout.
    pub(crate) first: usize,
    /// Whether the narrowest layout continues past the first line.
    pub(crate) breaks: bool,
}

impl Doc {
    fn new(node: Node, meta: Meta) -> Doc {
        Doc(Rc::new(DocInner { node, meta }))
    }

    pub(crate) fn node(&self) -> &Node {
        &self.0.node
    }

    pub(crate) fn meta(&self) -> Meta {
        self.0.meta
    }

    pub fn empty() -> Doc {
        Doc::new(
            Node::Empty,
            Meta {
                flat: Some(0),
                lead: 0,
                first: 0,
                breaks: false,
            },
        )
    }

    pub fn text(s: impl Into<Cow<'static, str>>) -> Doc {
        let s = s.into();
        let width = s.chars().count();
        Doc::new(
            Node::Text(s),
            Meta {
                flat: Some(width),
                lead: 0,
                first: width,
                breaks: false,
            },
        )
    }

    pub fn char(c: char) -> Doc {
        Doc::text(c.to_string())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.node(), Node::Empty)
    }

    /// Flat width, or `None` when the document cannot be put on one line.
    pub fn flat_width(&self) -> Option<usize> {
        self.meta().flat
    }

    fn beside(self, spaced: bool, right: Doc) -> Doc {
        if self.is_empty() {
            return right;
        }
        if right.is_empty() {
            return self;
        }
        let (l, r) = (self.meta(), right.meta());
        let gap = usize::from(spaced);
        let meta = Meta {
            flat: l.flat.zip(r.flat).map(|(a, b)| a + gap + b),
            lead: l.lead,
            first: if l.breaks { l.first } else { l.first + gap + r.first },
            breaks: l.breaks || r.breaks,
        };
        Doc::new(
            Node::Beside {
                left: self,
                spaced,
                right,
            },
            meta,
        )
    }

    fn stack(self, overlap: bool, lower: Doc) -> Doc {
        if self.is_empty() {
            return lower;
        }
        if lower.is_empty() {
            return self;
        }
        let u = self.meta();
        let meta = Meta {
            flat: None,
            lead: u.lead,
            first: u.first,
            breaks: true,
        };
        Doc::new(
            Node::Above {
                upper: self,
                overlap,
                lower,
            },
            meta,
        )
    }

    /// `<>`: put `other` directly after the last line of `self`.
    pub fn append(self, other: Doc) -> Doc {
        self.beside(false, other)
    }

    /// `<+>`: like [`append`](Doc::append) with one space in between.
    pub fn append_space(self, other: Doc) -> Doc {
        self.beside(true, other)
    }

    /// `$$`: put `other` below `self`.
    ///
    /// If the last line of `self` ends before the column where the first line
    /// of `other` would start, the two lines are merged: `text("do") $$
    /// nest(3, x)` renders as `do x`.
    pub fn above(self, other: Doc) -> Doc {
        self.stack(true, other)
    }

    /// `$+$`: put `other` below `self`, always on a new line.
    pub fn above_strict(self, other: Doc) -> Doc {
        self.stack(false, other)
    }

    /// Indent every line by `k` columns. Negative values are allowed.
    ///
    /// Nesting has no effect on a document placed beside another one.
    pub fn nest(self, k: isize) -> Doc {
        if self.is_empty() || k == 0 {
            return self;
        }
        let inner = self.meta();
        let meta = Meta {
            lead: inner.lead + k,
            ..inner
        };
        Doc::new(Node::Nest(k, self), meta)
    }

    /// `sep [self, nest k rest]`
    pub fn hang(self, k: isize, rest: Doc) -> Doc {
        sep([self, rest.nest(k)])
    }

    pub fn parens(self) -> Doc {
        lparen().append(self).append(rparen())
    }

    pub fn brackets(self) -> Doc {
        lbrack().append(self).append(rbrack())
    }

    pub fn braces(self) -> Doc {
        lbrace().append(self).append(rbrace())
    }

    pub fn quotes(self) -> Doc {
        Doc::char('\'').append(self).append(Doc::char('\''))
    }

    pub fn double_quotes(self) -> Doc {
        Doc::char('"').append(self).append(Doc::char('"'))
    }

    pub fn int(n: i64) -> Doc {
        Doc::text(n.to_string())
    }

    pub fn integer(n: i128) -> Doc {
        Doc::text(n.to_string())
    }

    pub fn float(x: f32) -> Doc {
        Doc::text(crate::show::show_float(x))
    }

    pub fn double(x: f64) -> Doc {
        Doc::text(crate::show::show_double(x))
    }

    /// Rational in `show` form: `3 % 4`, `(-3) % 4`.
    pub fn rational(r: Rational) -> Doc {
        Doc::text(crate::show::show_rational(r))
    }
}

impl Default for Doc {
    fn default() -> Doc {
        Doc::empty()
    }
}

impl fmt::Debug for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            Node::Empty => write!(f, "Empty"),
            Node::Text(s) => write!(f, "Text({:?})", s),
            Node::Nest(k, d) => f.debug_tuple("Nest").field(k).field(d).finish(),
            Node::Beside {
                left,
                spaced,
                right,
            } => f
                .debug_struct("Beside")
                .field("left", left)
                .field("spaced", spaced)
                .field("right", right)
                .finish(),
            Node::Above {
                upper,
                overlap,
                lower,
            } => f
                .debug_struct("Above")
                .field("upper", upper)
                .field("overlap", overlap)
                .field("lower", lower)
                .finish(),
            Node::Group {
                fill,
                spaced,
                elems,
            } => f
                .debug_struct("Group")
                .field("fill", fill)
                .field("spaced", spaced)
                .field("elems", elems)
                .finish(),
        }
    }
}

/// Renders with the default [`Style`](crate::Style).
impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in crate::render::Renderer::new(&crate::Style::default(), self) {
            chunk.write_to(f)?;
        }
        Ok(())
    }
}

impl From<&'static str> for Doc {
    fn from(s: &'static str) -> Doc {
        Doc::text(s)
    }
}

impl From<String> for Doc {
    fn from(s: String) -> Doc {
        Doc::text(s)
    }
}

impl FromIterator<Doc> for Doc {
    /// Concatenates with `<>`, like [`hcat`].
    fn from_iter<I: IntoIterator<Item = Doc>>(iter: I) -> Doc {
        hcat(iter)
    }
}

// ============================================================================
// Punctuation
// ============================================================================

pub fn semi() -> Doc {
    Doc::text(";")
}

pub fn comma() -> Doc {
    Doc::text(",")
}

pub fn colon() -> Doc {
    Doc::text(":")
}

pub fn space() -> Doc {
    Doc::text(" ")
}

pub fn equals() -> Doc {
    Doc::text("=")
}

pub fn lparen() -> Doc {
    Doc::text("(")
}

pub fn rparen() -> Doc {
    Doc::text(")")
}

pub fn lbrack() -> Doc {
    Doc::text("[")
}

pub fn rbrack() -> Doc {
    Doc::text("]")
}

pub fn lbrace() -> Doc {
    Doc::text("{")
}

pub fn rbrace() -> Doc {
    Doc::text("}")
}

// ============================================================================
// Sequences
// ============================================================================

/// List version of `<>`.
pub fn hcat(docs: impl IntoIterator<Item = Doc>) -> Doc {
    docs.into_iter().fold(Doc::empty(), Doc::append)
}

/// List version of `<+>`.
pub fn hsep(docs: impl IntoIterator<Item = Doc>) -> Doc {
    docs.into_iter().fold(Doc::empty(), Doc::append_space)
}

/// List version of `$$`.
pub fn vcat(docs: impl IntoIterator<Item = Doc>) -> Doc {
    docs.into_iter().fold(Doc::empty(), Doc::above)
}

fn group(fill: bool, spaced: bool, docs: impl IntoIterator<Item = Doc>) -> Doc {
    let mut elems: Vec<Doc> = docs.into_iter().filter(|d| !d.is_empty()).collect();
    match elems.len() {
        0 => Doc::empty(),
        1 => elems.pop().unwrap_or_default(),
        n => {
            let gap = usize::from(spaced);
            let flat = elems
                .iter()
                .try_fold(0, |acc, d| d.flat_width().map(|w| acc + w))
                .map(|w| w + gap * (n - 1));
            let first = elems[0].meta();
            let meta = Meta {
                flat,
                lead: first.lead,
                first: first.first,
                breaks: true,
            };
            Doc::new(
                Node::Group {
                    fill,
                    spaced,
                    elems,
                },
                meta,
            )
        }
    }
}

/// Either [`hsep`] or [`vcat`], whichever fits.
pub fn sep(docs: impl IntoIterator<Item = Doc>) -> Doc {
    group(false, true, docs)
}

/// Either [`hcat`] or [`vcat`], whichever fits.
pub fn cat(docs: impl IntoIterator<Item = Doc>) -> Doc {
    group(false, false, docs)
}

/// Paragraph fill: as many elements per line as fit, separated by spaces.
pub fn fsep(docs: impl IntoIterator<Item = Doc>) -> Doc {
    group(true, true, docs)
}

/// Paragraph fill without separating spaces.
pub fn fcat(docs: impl IntoIterator<Item = Doc>) -> Doc {
    group(true, false, docs)
}

/// Put `sep` after every element but the last.
///
/// ```
/// use hs98_pretty::doc::{comma, hcat, punctuate, Doc};
///
/// assert!(punctuate(comma(), vec![]).is_empty());
/// let docs = punctuate(comma(), vec![Doc::text("a"), Doc::text("b")]);
/// assert_eq!(hcat(docs).to_string(), "a,b");
/// ```
pub fn punctuate(sep: Doc, docs: impl IntoIterator<Item = Doc>) -> Vec<Doc> {
    let mut docs = docs.into_iter().peekable();
    let mut out = Vec::new();
    while let Some(d) = docs.next() {
        if docs.peek().is_some() {
            out.push(d.append(sep.clone()));
        } else {
            out.push(d);
        }
    }
    out
}
