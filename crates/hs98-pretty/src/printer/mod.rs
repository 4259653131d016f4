//! Syntax tree to document translation
//!
//! Every AST type implements [`Pretty`]. Rendering is driven by a
//! [`Printer`], which carries the [`PrintMode`] for the whole call and
//! records the first malformed-tree fault it meets.

mod decl;
mod expr;
mod layout;
mod literal;
mod module;
mod names;
mod pattern;
mod types;

use crate::doc::Doc;
use crate::error::{InvariantViolation, PrettyError};
use crate::mode::PrintMode;
use std::cell::RefCell;
use tracing::{error, warn};

/// Conversion of a syntax node to a [`Doc`].
///
/// Implementors define at least one of the two methods. `prec` is the
/// binding strength the surrounding context demands; a node whose own
/// precedence is lower puts itself in parentheses.
pub trait Pretty {
    fn pretty_prec(&self, printer: &Printer<'_>, prec: u8) -> Doc {
        let _ = prec;
        self.pretty(printer)
    }

    fn pretty(&self, printer: &Printer<'_>) -> Doc {
        self.pretty_prec(printer, 0)
    }
}

impl<T: Pretty + ?Sized> Pretty for Box<T> {
    fn pretty_prec(&self, printer: &Printer<'_>, prec: u8) -> Doc {
        (**self).pretty_prec(printer, prec)
    }
}

/// Translation context for one print call.
pub struct Printer<'a> {
    mode: &'a PrintMode,
    fault: RefCell<Option<InvariantViolation>>,
}

impl<'a> Printer<'a> {
    pub fn new(mode: &'a PrintMode) -> Self {
        if mode.comments && !PrintMode::comments_supported() {
            warn!("Comment preservation is not supported; the comments flag is ignored");
        }
        Self {
            mode,
            fault: RefCell::new(None),
        }
    }

    pub fn mode(&self) -> &PrintMode {
        self.mode
    }

    /// Translate `node`, failing if the tree turned out to be malformed.
    pub fn print<T: Pretty + ?Sized>(&self, node: &T) -> Result<Doc, PrettyError> {
        let doc = node.pretty(self);
        match self.fault.take() {
            Some(violation) => Err(violation.into()),
            None => Ok(doc),
        }
    }

    /// Record a malformed-tree fault. Only the first one is kept; the
    /// returned empty document stands in for the offending node.
    pub(crate) fn fault(&self, violation: InvariantViolation) -> Doc {
        let mut slot = self.fault.borrow_mut();
        if slot.is_none() {
            error!(%violation, "Malformed syntax tree");
            *slot = Some(violation);
        }
        Doc::empty()
    }
}

pub(crate) fn parens_if(cond: bool, doc: Doc) -> Doc {
    if cond { doc.parens() } else { doc }
}
