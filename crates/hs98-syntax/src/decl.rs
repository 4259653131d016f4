use crate::expr::Expr;
use crate::loc::SrcLoc;
use crate::names::{Name, Op, QName};
use crate::pat::Pat;
use crate::types::{Context, QualType, Type};
use serde::{Deserialize, Serialize};

/// Top-level or local declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Decl {
    /// `type T a = t`
    TypeDecl {
        #[serde(default)]
        loc: SrcLoc,
        name: Name,
        #[serde(default)]
        vars: Vec<Name>,
        ty: Type,
    },
    /// `data ctx => T a = C1 .. | C2 .. deriving (..)`
    DataDecl {
        #[serde(default)]
        loc: SrcLoc,
        #[serde(default)]
        context: Context,
        name: Name,
        #[serde(default)]
        vars: Vec<Name>,
        cons: Vec<ConDecl>,
        #[serde(default)]
        deriving: Vec<QName>,
    },
    NewTypeDecl {
        #[serde(default)]
        loc: SrcLoc,
        #[serde(default)]
        context: Context,
        name: Name,
        #[serde(default)]
        vars: Vec<Name>,
        con: ConDecl,
        #[serde(default)]
        deriving: Vec<QName>,
    },
    /// `infixl 6 +, -`
    InfixDecl {
        #[serde(default)]
        loc: SrcLoc,
        assoc: Assoc,
        prec: u8,
        ops: Vec<Op>,
    },
    ClassDecl {
        #[serde(default)]
        loc: SrcLoc,
        #[serde(default)]
        context: Context,
        name: Name,
        #[serde(default)]
        vars: Vec<Name>,
        #[serde(default)]
        decls: Vec<Decl>,
    },
    InstDecl {
        #[serde(default)]
        loc: SrcLoc,
        #[serde(default)]
        context: Context,
        class: QName,
        types: Vec<Type>,
        #[serde(default)]
        decls: Vec<Decl>,
    },
    /// `default (Integer, Double)`
    DefaultDecl {
        #[serde(default)]
        loc: SrcLoc,
        types: Vec<Type>,
    },
    /// `f, g :: t`
    TypeSig {
        #[serde(default)]
        loc: SrcLoc,
        names: Vec<Name>,
        ty: QualType,
    },
    /// `foreign import ccall safe "sin" c_sin :: Double -> Double`
    ForeignImport {
        #[serde(default)]
        loc: SrcLoc,
        call_conv: String,
        safety: Safety,
        #[serde(default)]
        entity: String,
        name: Name,
        ty: Type,
    },
    /// `foreign export ccall "hs_f" f :: Int -> Int`
    ForeignExport {
        #[serde(default)]
        loc: SrcLoc,
        call_conv: String,
        #[serde(default)]
        entity: String,
        name: Name,
        ty: Type,
    },
    /// One or more clauses of the same function
    FunBind { matches: Vec<Match> },
    /// `p = e where ...`
    PatBind {
        #[serde(default)]
        loc: SrcLoc,
        pat: Pat,
        rhs: Rhs,
        #[serde(default)]
        wheres: Vec<Decl>,
    },
}

impl Decl {
    /// Location of the declaration; a function binding reports its first clause.
    pub fn loc(&self) -> Option<&SrcLoc> {
        match self {
            Decl::TypeDecl { loc, .. }
            | Decl::DataDecl { loc, .. }
            | Decl::NewTypeDecl { loc, .. }
            | Decl::InfixDecl { loc, .. }
            | Decl::ClassDecl { loc, .. }
            | Decl::InstDecl { loc, .. }
            | Decl::DefaultDecl { loc, .. }
            | Decl::TypeSig { loc, .. }
            | Decl::ForeignImport { loc, .. }
            | Decl::ForeignExport { loc, .. }
            | Decl::PatBind { loc, .. } => Some(loc),
            Decl::FunBind { matches } => matches.first().map(|m| &m.loc),
        }
    }

    /// Function binding with a single unguarded clause `name pats = body`.
    pub fn simple_fun(name: impl Into<String>, pats: Vec<Pat>, body: Expr) -> Self {
        Decl::FunBind {
            matches: vec![Match::new(Name::ident(name), pats, Rhs::UnGuarded { expr: body })],
        }
    }

    pub fn type_sig(names: Vec<Name>, ty: Type) -> Self {
        Decl::TypeSig {
            loc: SrcLoc::unknown(),
            names,
            ty: QualType::unqualified(ty),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ConDecl {
    /// Positional constructor `C t1 t2`
    ConDecl {
        #[serde(default)]
        loc: SrcLoc,
        name: Name,
        #[serde(default)]
        args: Vec<BangType>,
    },
    /// Record constructor `C{f1, f2 :: t}`
    RecDecl {
        #[serde(default)]
        loc: SrcLoc,
        name: Name,
        fields: Vec<FieldDecl>,
    },
}

impl ConDecl {
    pub fn positional(name: impl Into<String>, args: Vec<Type>) -> Self {
        ConDecl::ConDecl {
            loc: SrcLoc::unknown(),
            name: Name::ident(name),
            args: args.into_iter().map(BangType::UnBanged).collect(),
        }
    }

    pub fn loc(&self) -> &SrcLoc {
        match self {
            ConDecl::ConDecl { loc, .. } | ConDecl::RecDecl { loc, .. } => loc,
        }
    }
}

/// Field group `f1, f2 :: t` of a record constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDecl {
    pub names: Vec<Name>,
    pub ty: BangType,
}

/// Constructor argument, optionally strict.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BangType {
    Banged(Type),
    UnBanged(Type),
}

/// One clause `f p1 p2 = e where ...` of a function binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    #[serde(default)]
    pub loc: SrcLoc,
    pub name: Name,
    #[serde(default)]
    pub pats: Vec<Pat>,
    pub rhs: Rhs,
    #[serde(default)]
    pub wheres: Vec<Decl>,
}

impl Match {
    pub fn new(name: Name, pats: Vec<Pat>, rhs: Rhs) -> Self {
        Self {
            loc: SrcLoc::unknown(),
            name,
            pats,
            rhs,
            wheres: Vec::new(),
        }
    }

    pub fn with_wheres(mut self, wheres: Vec<Decl>) -> Self {
        self.wheres = wheres;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Rhs {
    /// `= e`
    UnGuarded { expr: Expr },
    Guarded { rhss: Vec<GuardedRhs> },
}

/// `| guard = expr`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuardedRhs {
    #[serde(default)]
    pub loc: SrcLoc,
    pub guard: Expr,
    pub expr: Expr,
}

impl GuardedRhs {
    pub fn new(guard: Expr, expr: Expr) -> Self {
        Self {
            loc: SrcLoc::unknown(),
            guard,
            expr,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Assoc {
    None,
    Left,
    Right,
}

/// Safety annotation of a foreign import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Safety {
    Safe,
    Unsafe,
}
