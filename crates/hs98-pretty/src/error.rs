//! Error types for printing and configuration

use std::fmt;
use thiserror::Error;

/// Result type for print operations
pub type Result<T> = std::result::Result<T, PrettyError>;

/// Syntactic category of a malformed tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TupleKind {
    Expression,
    Pattern,
    Type,
}

impl fmt::Display for TupleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TupleKind::Expression => write!(f, "expression"),
            TupleKind::Pattern => write!(f, "pattern"),
            TupleKind::Type => write!(f, "type"),
        }
    }
}

/// A syntax tree that no parser could have produced.
///
/// These are bugs in whatever built the tree, so printing stops at the first
/// one instead of emitting partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("function binding has no clauses")]
    EmptyFunBind,

    #[error("case expression has no alternatives")]
    EmptyCaseAlternatives,

    #[error("do block has no statements")]
    EmptyDoBlock,

    #[error("guarded right-hand side has no guards")]
    EmptyGuardedRhss,

    #[error("guarded case alternative has no guards")]
    EmptyGuardedAlts,

    #[error("lambda has no patterns")]
    LambdaWithoutPatterns,

    #[error("{kind} tuple has {arity} component(s), expected at least 2")]
    ShortTuple { kind: TupleKind, arity: usize },

    #[error("type signature declares no names")]
    EmptyTypeSignature,

    #[error("fixity declaration lists no operators")]
    EmptyFixityDecl,

    #[error("list comprehension has no qualifiers")]
    EmptyComprehension,
}

/// Errors returned by the fallible print entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrettyError {
    #[error("malformed syntax tree: {0}")]
    Invariant(#[from] InvariantViolation),
}

/// Errors raised while building a [`PrintMode`](crate::PrintMode)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("indentation width `{field}` must be non-negative, got {value}")]
    NegativeIndent { field: &'static str, value: i64 },

    #[error("unknown layout style `{0}` (expected offside, semicolon, inline or no-layout)")]
    UnknownLayout(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_tuple_message() {
        let err = PrettyError::from(InvariantViolation::ShortTuple {
            kind: TupleKind::Pattern,
            arity: 1,
        });
        assert_eq!(
            err.to_string(),
            "malformed syntax tree: pattern tuple has 1 component(s), expected at least 2"
        );
    }

    #[test]
    fn test_negative_indent_message() {
        let err = ConfigError::NegativeIndent {
            field: "do_indent",
            value: -3,
        };
        assert!(err.to_string().contains("do_indent"));
        assert!(err.to_string().contains("-3"));
    }
}
