use crate::literal::Literal;
use crate::names::{Name, QName};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Pat {
    Var { name: Name },
    Lit { lit: Literal },
    /// Negated numeric literal `-1`
    Neg { pat: Box<Pat> },
    /// `x : xs`
    InfixApp {
        left: Box<Pat>,
        op: QName,
        right: Box<Pat>,
    },
    /// `Just x`
    App { con: QName, args: Vec<Pat> },
    Tuple { elems: Vec<Pat> },
    List { elems: Vec<Pat> },
    Paren { pat: Box<Pat> },
    /// `C{f = p}`
    Rec { con: QName, fields: Vec<PatField> },
    /// `n@p`
    AsPat { name: Name, pat: Box<Pat> },
    WildCard,
    /// `~p`
    IrrPat { pat: Box<Pat> },
}

impl Pat {
    pub fn var(name: impl Into<String>) -> Self {
        Pat::Var {
            name: Name::ident(name),
        }
    }

    /// A constructor pattern; nullary when `args` is empty.
    pub fn con(name: impl Into<String>, args: Vec<Pat>) -> Self {
        Pat::App {
            con: QName::unqual(Name::ident(name)),
            args,
        }
    }

    pub fn infix(left: Pat, op: QName, right: Pat) -> Self {
        Pat::InfixApp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn paren(pat: Pat) -> Self {
        Pat::Paren { pat: Box::new(pat) }
    }

    pub fn as_pat(name: impl Into<String>, pat: Pat) -> Self {
        Pat::AsPat {
            name: Name::ident(name),
            pat: Box::new(pat),
        }
    }

    pub fn irrefutable(pat: Pat) -> Self {
        Pat::IrrPat { pat: Box::new(pat) }
    }
}

/// Field of a record pattern `f = p`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatField {
    pub field: QName,
    pub pat: Pat,
}
