use crate::builtin::list_tycon;
use crate::names::{Name, QName, SpecialCon};
use serde::{Deserialize, Serialize};

/// A class assertion `C t1 ... tn`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asst {
    pub class: QName,
    #[serde(default)]
    pub types: Vec<Type>,
}

impl Asst {
    pub fn new(class: QName, types: Vec<Type>) -> Self {
        Self { class, types }
    }
}

pub type Context = Vec<Asst>;

/// A type with an optional class context: `(Eq a) => a -> Bool`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualType {
    #[serde(default)]
    pub context: Context,
    pub ty: Type,
}

impl QualType {
    pub fn new(context: Context, ty: Type) -> Self {
        Self { context, ty }
    }

    pub fn unqualified(ty: Type) -> Self {
        Self::new(Vec::new(), ty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Type {
    /// `a -> b`
    Fun { from: Box<Type>, to: Box<Type> },
    /// `(a, b)`
    Tuple { elems: Vec<Type> },
    /// `f a`
    App { fun: Box<Type>, arg: Box<Type> },
    Var { name: Name },
    Con { name: QName },
}

impl Type {
    pub fn var(name: impl Into<String>) -> Self {
        Type::Var {
            name: Name::ident(name),
        }
    }

    /// An unqualified type constructor.
    pub fn con(name: impl Into<String>) -> Self {
        Type::Con {
            name: QName::unqual(Name::ident(name)),
        }
    }

    pub fn fun(from: Type, to: Type) -> Self {
        Type::Fun {
            from: Box::new(from),
            to: Box::new(to),
        }
    }

    pub fn app(fun: Type, arg: Type) -> Self {
        Type::App {
            fun: Box::new(fun),
            arg: Box::new(arg),
        }
    }

    /// `[elem]`, the list type constructor applied to `elem`.
    pub fn list(elem: Type) -> Self {
        Type::app(list_tycon(), elem)
    }

    pub fn tuple(elems: Vec<Type>) -> Self {
        Type::Tuple { elems }
    }

    /// Whether this is the bare `[]` type constructor, qualified or not.
    pub fn is_list_tycon(&self) -> bool {
        matches!(self, Type::Con { name } if *name.name() == Name::Special(SpecialCon::List))
    }
}
