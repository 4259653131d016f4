//! Layout-aware pretty-printer for Haskell 98 syntax trees
//!
//! Printing runs in two stages. A [`Printer`] translates a syntax tree from
//! `hs98-syntax` into a [`Doc`], choosing constructs and block delimiters
//! according to a [`PrintMode`]. The renderer then lays the document out
//! against a [`Style`], deciding where lines break.
//!
//! ```
//! use hs98_pretty::{pretty_print, pretty_print_with_mode, Layout, PrintMode};
//! use hs98_syntax::{Decl, Expr, Module, Pat};
//!
//! let double = Decl::simple_fun(
//!     "double",
//!     vec![Pat::var("x")],
//!     Expr::infix(Expr::var("x"), hs98_syntax::QOp::var("*"), Expr::int(2)),
//! );
//! let module = Module::new("Main", vec![double]);
//! assert_eq!(pretty_print(&module), "module Main where\ndouble x = x * 2");
//!
//! let mode = PrintMode::default().with_layout(Layout::NoLayout);
//! assert_eq!(
//!     pretty_print_with_mode(&mode, &module),
//!     "module Main where {double x = x * 2}"
//! );
//! ```

pub mod doc;
pub mod error;
pub mod mode;
pub mod printer;
pub mod render;
mod show;

pub use doc::Doc;
pub use error::{ConfigError, InvariantViolation, PrettyError, Result, TupleKind};
pub use mode::{Layout, PrintMode, PrintSettings};
pub use printer::{Pretty, Printer};
pub use render::{Chunk, RenderMode, Style, full_render, render, render_with_style};

use tracing::{debug, trace};

/// Translate `node` into a document under `mode`.
pub fn to_doc<T: Pretty + ?Sized>(mode: &PrintMode, node: &T) -> Result<Doc> {
    debug!(
        layout = %mode.layout,
        node = std::any::type_name::<T>(),
        "Starting print session"
    );
    Printer::new(mode).print(node)
}

/// Print with the default mode and style.
///
/// # Panics
///
/// Panics if the tree is malformed; see [`try_pretty_print_with_mode`].
pub fn pretty_print<T: Pretty + ?Sized>(node: &T) -> String {
    pretty_print_with_mode(&PrintMode::default(), node)
}

/// Print with the default style.
///
/// # Panics
///
/// Panics if the tree is malformed; see [`try_pretty_print_with_mode`].
pub fn pretty_print_with_mode<T: Pretty + ?Sized>(mode: &PrintMode, node: &T) -> String {
    pretty_print_style_mode(&Style::default(), mode, node)
}

/// # Panics
///
/// Panics if the tree is malformed; see [`try_pretty_print_style_mode`].
pub fn pretty_print_style_mode<T: Pretty + ?Sized>(
    style: &Style,
    mode: &PrintMode,
    node: &T,
) -> String {
    match try_pretty_print_style_mode(style, mode, node) {
        Ok(text) => text,
        Err(err) => panic!("{err}"),
    }
}

pub fn try_pretty_print_with_mode<T: Pretty + ?Sized>(mode: &PrintMode, node: &T) -> Result<String> {
    try_pretty_print_style_mode(&Style::default(), mode, node)
}

pub fn try_pretty_print_style_mode<T: Pretty + ?Sized>(
    style: &Style,
    mode: &PrintMode,
    node: &T,
) -> Result<String> {
    let doc = to_doc(mode, node)?;
    let text = render_with_style(style, &doc);
    trace!(bytes = text.len(), lines = text.lines().count(), "Rendered");
    Ok(text)
}

/// Translate and render in one pass, folding the output chunks into `seed`.
///
/// Nothing is folded if the tree is malformed.
pub fn full_render_with_mode<T, A, F>(
    mode: &PrintMode,
    style: &Style,
    node: &T,
    seed: A,
    fold: F,
) -> Result<A>
where
    T: Pretty + ?Sized,
    F: FnMut(A, Chunk<'_>) -> A,
{
    let doc = to_doc(mode, node)?;
    Ok(full_render(style, &doc, seed, fold))
}
