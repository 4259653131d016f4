//! Layout-dependent combinators
//!
//! Every place that renders a block of declarations or statements goes
//! through these, so the choice between offside, semicolon, inline and
//! single-line output is made in one module.

use super::Printer;
use crate::doc::{self, Doc, comma, hsep, punctuate, semi, space, vcat};
use crate::mode::Layout;
use hs98_syntax::{Decl, SrcLoc};

impl Printer<'_> {
    /// Whether the active layout stacks blocks vertically.
    pub(crate) fn vertical(&self) -> bool {
        self.mode.layout.prefers_vertical()
    }

    /// `$$` under vertical layouts, `<+>` otherwise.
    pub(crate) fn above_or_beside(&self, upper: Doc, lower: Doc) -> Doc {
        if self.vertical() {
            upper.above(lower)
        } else {
            upper.append_space(lower)
        }
    }

    /// `x <+> fsep xs`, or `hsep` on one line.
    pub(crate) fn layout_sep(&self, docs: Vec<Doc>) -> Doc {
        if !self.vertical() {
            return hsep(docs);
        }
        let mut docs = docs.into_iter().filter(|d| !d.is_empty());
        match docs.next() {
            Some(first) => first.append_space(doc::fsep(docs)),
            None => Doc::empty(),
        }
    }

    pub(crate) fn layout_vcat(&self, docs: Vec<Doc>) -> Doc {
        if self.vertical() { vcat(docs) } else { hsep(docs) }
    }

    pub(crate) fn layout_fsep_simple(&self, docs: Vec<Doc>) -> Doc {
        if self.vertical() {
            doc::fsep(docs)
        } else {
            hsep(docs)
        }
    }

    /// Fill where continuation lines sit `onside_indent` columns to the
    /// right of the first element.
    pub(crate) fn layout_fsep(&self, docs: Vec<Doc>) -> Doc {
        if !self.vertical() {
            return hsep(docs);
        }
        let n = self.mode.onside_indent as isize;
        let mut docs: Vec<Doc> = docs.into_iter().filter(|d| !d.is_empty()).collect();
        if docs.is_empty() {
            return Doc::empty();
        }
        let first = docs.remove(0).nest(-n);
        doc::fsep(std::iter::once(first).chain(docs)).nest(n)
    }

    /// Module header followed by its imports and declarations.
    pub(crate) fn top_level(&self, header: Doc, docs: Vec<Doc>) -> Doc {
        match self.mode.layout {
            Layout::OffsideRule => header.above(vcat(docs)),
            Layout::SemiColon | Layout::InLine => {
                header.above(vcat(punctuate(semi(), docs)).braces())
            }
            Layout::NoLayout => header.append_space(hsep(punctuate(semi(), docs)).braces()),
        }
    }

    /// Body of a class, instance, `where`, `let`, `case` or `do`, indented
    /// by `indent` under the layouts that indent.
    pub(crate) fn body(&self, indent: usize, docs: Vec<Doc>) -> Doc {
        let indent = indent as isize;
        match self.mode.layout {
            Layout::OffsideRule => vcat(docs).nest(indent),
            Layout::SemiColon => space()
                .append(vcat(punctuate(semi(), docs)))
                .braces()
                .nest(indent),
            Layout::InLine | Layout::NoLayout => {
                space().append(hsep(punctuate(semi(), docs))).braces()
            }
        }
    }

    /// The clauses of one function binding.
    pub(crate) fn bindings(&self, docs: Vec<Doc>) -> Doc {
        match self.mode.layout {
            Layout::OffsideRule => vcat(docs),
            Layout::SemiColon => vcat(punctuate(semi(), docs)),
            Layout::InLine | Layout::NoLayout => hsep(punctuate(semi(), docs)),
        }
    }

    /// Precede `doc` with an empty line when spacing is on.
    pub(crate) fn blank_line(&self, doc: Doc) -> Doc {
        if self.mode.spacing && self.mode.layout != Layout::NoLayout {
            Doc::text("").above(doc)
        } else {
            doc
        }
    }

    /// Prefix `doc` with a `LINE` pragma for `loc` when pragmas are on.
    ///
    /// On its own line the pragma names the line before `loc`; followed by
    /// a space on the same line it names `loc`'s line.
    pub(crate) fn mark_line(&self, loc: &SrcLoc, doc: Doc) -> Doc {
        if !self.mode.line_pragmas || loc.is_unknown() {
            return doc;
        }
        let pragma = |line: i64| {
            Doc::text(format!(
                "{{-# LINE {} {} #-}}",
                line,
                crate::show::show_string(&loc.filename)
            ))
        };
        if self.vertical() {
            pragma(i64::from(loc.line) - 1).above(doc)
        } else {
            pragma(i64::from(loc.line)).append_space(doc)
        }
    }

    /// `where` clause of a binding or alternative; empty without declarations.
    pub(crate) fn where_clause(&self, decls: &[Decl]) -> Doc {
        use super::Pretty;

        if decls.is_empty() {
            return Doc::empty();
        }
        let body = self.body(
            self.mode.where_indent,
            decls.iter().map(|d| d.pretty(self)).collect(),
        );
        self.above_or_beside(Doc::text("where"), body).nest(2)
    }

    /// `(a, b, c)`
    pub(crate) fn paren_list(&self, docs: Vec<Doc>) -> Doc {
        self.layout_fsep_simple(punctuate(comma(), docs)).parens()
    }

    /// `{a, b, c}`
    pub(crate) fn brace_list(&self, docs: Vec<Doc>) -> Doc {
        self.layout_fsep_simple(punctuate(comma(), docs)).braces()
    }

    /// `[a b c]`, separators supplied by the caller.
    pub(crate) fn bracket_list(&self, docs: Vec<Doc>) -> Doc {
        self.layout_fsep_simple(docs).brackets()
    }
}
