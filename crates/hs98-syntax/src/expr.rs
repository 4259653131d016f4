use crate::decl::Decl;
use crate::literal::Literal;
use crate::loc::SrcLoc;
use crate::names::{Name, QName, QOp};
use crate::pat::Pat;
use crate::types::QualType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Expr {
    Var { name: QName },
    Con { name: QName },
    Lit { lit: Literal },
    InfixApp {
        left: Box<Expr>,
        op: QOp,
        right: Box<Expr>,
    },
    App { fun: Box<Expr>, arg: Box<Expr> },
    /// Prefix negation `-e`
    NegApp { expr: Box<Expr> },
    Lambda {
        #[serde(default)]
        loc: SrcLoc,
        pats: Vec<Pat>,
        body: Box<Expr>,
    },
    Let { decls: Vec<Decl>, body: Box<Expr> },
    If {
        cond: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },
    Case { scrutinee: Box<Expr>, alts: Vec<Alt> },
    Do { stmts: Vec<Stmt> },
    Tuple { elems: Vec<Expr> },
    List { elems: Vec<Expr> },
    Paren { expr: Box<Expr> },
    /// `(e op)`
    LeftSection { expr: Box<Expr>, op: QOp },
    /// `(op e)`
    RightSection { op: QOp, expr: Box<Expr> },
    /// `C{f = e}`
    RecConstr { con: QName, fields: Vec<FieldUpdate> },
    /// `e{f = e'}`
    RecUpdate {
        expr: Box<Expr>,
        fields: Vec<FieldUpdate>,
    },
    /// `[from ..]`
    EnumFrom { from: Box<Expr> },
    /// `[from .. to]`
    EnumFromTo { from: Box<Expr>, to: Box<Expr> },
    /// `[from, then ..]`
    EnumFromThen { from: Box<Expr>, then: Box<Expr> },
    /// `[from, then .. to]`
    EnumFromThenTo {
        from: Box<Expr>,
        then: Box<Expr>,
        to: Box<Expr>,
    },
    /// `[e | quals]`
    ListComp { expr: Box<Expr>, quals: Vec<Stmt> },
    /// `e :: t`
    ExpTypeSig {
        #[serde(default)]
        loc: SrcLoc,
        expr: Box<Expr>,
        ty: QualType,
    },
    /// Pattern syntax a parser may leave in expression position
    AsPat { name: Name, expr: Box<Expr> },
    WildCard,
    IrrPat { expr: Box<Expr> },
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var {
            name: QName::unqual(Name::ident(name)),
        }
    }

    pub fn con(name: impl Into<String>) -> Self {
        Expr::Con {
            name: QName::unqual(Name::ident(name)),
        }
    }

    pub fn int(n: i128) -> Self {
        Expr::Lit {
            lit: Literal::Int(n),
        }
    }

    pub fn string(s: impl Into<String>) -> Self {
        Expr::Lit {
            lit: Literal::String(s.into()),
        }
    }

    pub fn app(fun: Expr, arg: Expr) -> Self {
        Expr::App {
            fun: Box::new(fun),
            arg: Box::new(arg),
        }
    }

    /// Left-nested application of `fun` to every argument.
    pub fn apps(fun: Expr, args: impl IntoIterator<Item = Expr>) -> Self {
        args.into_iter().fold(fun, Expr::app)
    }

    pub fn infix(left: Expr, op: QOp, right: Expr) -> Self {
        Expr::InfixApp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn paren(expr: Expr) -> Self {
        Expr::Paren {
            expr: Box::new(expr),
        }
    }

    pub fn lambda(pats: Vec<Pat>, body: Expr) -> Self {
        Expr::Lambda {
            loc: SrcLoc::unknown(),
            pats,
            body: Box::new(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Stmt {
    /// `p <- e`
    Generator {
        #[serde(default)]
        loc: SrcLoc,
        pat: Pat,
        expr: Expr,
    },
    Qualifier { expr: Expr },
    LetStmt { decls: Vec<Decl> },
}

impl Stmt {
    pub fn generator(pat: Pat, expr: Expr) -> Self {
        Stmt::Generator {
            loc: SrcLoc::unknown(),
            pat,
            expr,
        }
    }

    pub fn qualifier(expr: Expr) -> Self {
        Stmt::Qualifier { expr }
    }
}

/// Field binding `f = e` in record construction or update.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldUpdate {
    pub field: QName,
    pub expr: Expr,
}

impl FieldUpdate {
    pub fn new(field: impl Into<String>, expr: Expr) -> Self {
        Self {
            field: QName::unqual(Name::ident(field)),
            expr,
        }
    }
}

/// One alternative of a `case` expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alt {
    #[serde(default)]
    pub loc: SrcLoc,
    pub pat: Pat,
    pub alts: GuardedAlts,
    #[serde(default)]
    pub wheres: Vec<Decl>,
}

impl Alt {
    pub fn new(pat: Pat, expr: Expr) -> Self {
        Self {
            loc: SrcLoc::unknown(),
            pat,
            alts: GuardedAlts::UnGuarded { expr },
            wheres: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GuardedAlts {
    /// `-> e`
    UnGuarded { expr: Expr },
    Guarded { alts: Vec<GuardedAlt> },
}

/// `| guard -> expr`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuardedAlt {
    #[serde(default)]
    pub loc: SrcLoc,
    pub guard: Expr,
    pub expr: Expr,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::Rational;

    #[test]
    fn test_literals_survive_json_inside_tagged_nodes() -> anyhow::Result<()> {
        let e = Expr::Case {
            scrutinee: Box::new(Expr::int(3)),
            alts: vec![
                Alt::new(
                    Pat::Lit {
                        lit: Literal::IntPrim(-1),
                    },
                    Expr::Lit {
                        lit: Literal::Frac(Rational::new(5, 2)),
                    },
                ),
                Alt::new(
                    Pat::Lit {
                        lit: Literal::Int(i128::MIN),
                    },
                    Expr::Lit {
                        lit: Literal::DoublePrim(Rational::new(1, 1000)),
                    },
                ),
            ],
        };
        let json = serde_json::to_string(&e)?;
        let back: Expr = serde_json::from_str(&json)?;
        assert_eq!(back, e);
        Ok(())
    }

    #[test]
    fn test_int_literal_reads_from_plain_number() -> anyhow::Result<()> {
        let e: Expr = serde_json::from_str(r#"{"kind": "lit", "lit": {"int": 3}}"#)?;
        assert_eq!(e, Expr::int(3));
        let p: Pat = serde_json::from_str(r#"{"kind": "lit", "lit": {"intPrim": -4}}"#)?;
        assert_eq!(
            p,
            Pat::Lit {
                lit: Literal::IntPrim(-4)
            }
        );
        Ok(())
    }
}
