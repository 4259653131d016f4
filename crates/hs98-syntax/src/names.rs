//! Names, qualified names and operators.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Dotted module name such as `Data.List`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleName(pub String);

impl ModuleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The standard `Prelude` module.
    pub fn prelude() -> Self {
        Self::new("Prelude")
    }

    /// `Main`, the module name implied by a headerless source file.
    pub fn main() -> Self {
        Self::new("Main")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_prelude(&self) -> bool {
        self.0 == "Prelude"
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl FromStr for ModuleName {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Built-in constructors with dedicated syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpecialCon {
    /// `()`
    Unit,
    /// `[]`
    List,
    /// `->`
    Fun,
    /// `(,)`, `(,,)`, ... carrying the arity
    Tuple(usize),
    /// `:`
    Cons,
}

impl SpecialCon {
    pub fn is_symbolic(self) -> bool {
        matches!(self, SpecialCon::Fun | SpecialCon::Cons)
    }
}

/// An unqualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Name {
    /// Alphanumeric name: `map`, `Just`
    Ident(String),
    /// Operator-like name: `+`, `:|`
    Symbol(String),
    Special(SpecialCon),
}

impl Name {
    pub fn ident(s: impl Into<String>) -> Self {
        Name::Ident(s.into())
    }

    pub fn symbol(s: impl Into<String>) -> Self {
        Name::Symbol(s.into())
    }

    /// Whether the name is written with operator characters, so that it needs
    /// parentheses in value position and no back-quotes in infix position.
    pub fn is_symbolic(&self) -> bool {
        match self {
            Name::Ident(_) => false,
            Name::Symbol(_) => true,
            Name::Special(con) => con.is_symbolic(),
        }
    }
}

/// A possibly module-qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum QName {
    Qual { module: ModuleName, name: Name },
    UnQual { name: Name },
}

impl QName {
    pub fn qual(module: impl Into<ModuleName>, name: Name) -> Self {
        QName::Qual {
            module: module.into(),
            name,
        }
    }

    pub fn unqual(name: Name) -> Self {
        QName::UnQual { name }
    }

    /// The base name, without its qualifier.
    pub fn name(&self) -> &Name {
        match self {
            QName::Qual { name, .. } | QName::UnQual { name } => name,
        }
    }

    pub fn module(&self) -> Option<&ModuleName> {
        match self {
            QName::Qual { module, .. } => Some(module),
            QName::UnQual { .. } => None,
        }
    }

    pub fn is_symbolic(&self) -> bool {
        self.name().is_symbolic()
    }
}

impl From<Name> for QName {
    fn from(name: Name) -> Self {
        QName::unqual(name)
    }
}

/// Operator in an infix declaration or a left-hand side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Op {
    VarOp(Name),
    ConOp(Name),
}

impl Op {
    pub fn name(&self) -> &Name {
        match self {
            Op::VarOp(name) | Op::ConOp(name) => name,
        }
    }
}

/// Operator in an infix expression or section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QOp {
    QVarOp(QName),
    QConOp(QName),
}

impl QOp {
    pub fn var(name: impl Into<String>) -> Self {
        let s = name.into();
        let name = if s.chars().next().is_some_and(|c| c.is_alphabetic() || c == '_') {
            Name::Ident(s)
        } else {
            Name::Symbol(s)
        };
        QOp::QVarOp(QName::unqual(name))
    }

    pub fn qname(&self) -> &QName {
        match self {
            QOp::QVarOp(name) | QOp::QConOp(name) => name,
        }
    }
}

/// Component of an import or export list entry `T(a, B)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CName {
    VarName(Name),
    ConName(Name),
}

impl CName {
    pub fn name(&self) -> &Name {
        match self {
            CName::VarName(name) | CName::ConName(name) => name,
        }
    }
}
