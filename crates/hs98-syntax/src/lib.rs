//! Haskell 98 abstract syntax
//!
//! A closed set of tagged variants for every syntactic category of the
//! language: modules, declarations, types, expressions, patterns and names.
//! Trees are produced by an external parser (or built by hand) and consumed
//! by `hs98-pretty`, which renders them back to source text.
//!
//! Every node derives `serde` traits, so a tree can be exchanged as JSON:
//!
//! ```
//! use hs98_syntax::{Expr, Name, QName};
//!
//! let e = Expr::app(Expr::var("f"), Expr::var("x"));
//! let json = serde_json::to_string(&e).unwrap();
//! let back: Expr = serde_json::from_str(&json).unwrap();
//! assert_eq!(e, back);
//! assert_eq!(QName::unqual(Name::ident("f")).name(), &Name::ident("f"));
//! ```

pub mod builtin;
pub mod decl;
pub mod expr;
pub mod literal;
pub mod loc;
pub mod module;
pub mod names;
pub mod pat;
pub mod types;

pub use decl::{Assoc, BangType, ConDecl, Decl, FieldDecl, GuardedRhs, Match, Rhs, Safety};
pub use expr::{Alt, Expr, FieldUpdate, GuardedAlt, GuardedAlts, Stmt};
pub use literal::{Literal, Rational};
pub use loc::SrcLoc;
pub use module::{ExportSpec, ImportDecl, ImportSpec, ImportSpecs, Module};
pub use names::{CName, ModuleName, Name, Op, QName, QOp, SpecialCon};
pub use pat::{Pat, PatField};
pub use types::{Asst, Context, QualType, Type};
