//! Prelude-qualified special names and the nodes built from them.

use crate::expr::Expr;
use crate::names::{ModuleName, Name, QName, SpecialCon};
use crate::types::Type;

fn special(con: SpecialCon) -> QName {
    QName::qual(ModuleName::prelude(), Name::Special(con))
}

pub fn unit_con_name() -> QName {
    special(SpecialCon::Unit)
}

pub fn tuple_con_name(arity: usize) -> QName {
    special(SpecialCon::Tuple(arity))
}

pub fn list_cons_name() -> QName {
    special(SpecialCon::Cons)
}

pub fn unit_tycon_name() -> QName {
    special(SpecialCon::Unit)
}

pub fn fun_tycon_name() -> QName {
    special(SpecialCon::Fun)
}

pub fn list_tycon_name() -> QName {
    special(SpecialCon::List)
}

pub fn tuple_tycon_name(arity: usize) -> QName {
    special(SpecialCon::Tuple(arity))
}

/// `()` as an expression.
pub fn unit_con() -> Expr {
    Expr::Con {
        name: unit_con_name(),
    }
}

/// `(,)` with the given arity as an expression.
pub fn tuple_con(arity: usize) -> Expr {
    Expr::Con {
        name: tuple_con_name(arity),
    }
}

pub fn unit_tycon() -> Type {
    Type::Con {
        name: unit_tycon_name(),
    }
}

pub fn fun_tycon() -> Type {
    Type::Con {
        name: fun_tycon_name(),
    }
}

pub fn list_tycon() -> Type {
    Type::Con {
        name: list_tycon_name(),
    }
}

pub fn tuple_tycon(arity: usize) -> Type {
    Type::Con {
        name: tuple_tycon_name(arity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_are_prelude_qualified() {
        for q in [unit_con_name(), list_tycon_name(), tuple_con_name(2)] {
            assert!(q.module().is_some_and(ModuleName::is_prelude));
        }
        assert!(list_cons_name().is_symbolic());
        assert!(fun_tycon_name().is_symbolic());
    }

    #[test]
    fn test_list_tycon_is_special() {
        assert!(list_tycon().is_list_tycon());
        assert!(!unit_tycon().is_list_tycon());
    }
}
