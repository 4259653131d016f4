//! Types, contexts and constructor argument types.
//!
//! Precedence levels: 0 anywhere, [`PREC_BTYPE`] left of an arrow or head of
//! an application, [`PREC_ATYPE`] argument of an application.

use super::{Pretty, Printer, parens_if};
use crate::doc::Doc;
use crate::error::{InvariantViolation, TupleKind};
use hs98_syntax::{Asst, BangType, QualType, Type};

pub(crate) const PREC_BTYPE: u8 = 1;
pub(crate) const PREC_ATYPE: u8 = 2;

impl Pretty for Type {
    fn pretty_prec(&self, p: &Printer<'_>, prec: u8) -> Doc {
        match self {
            Type::Tuple { elems } if elems.len() < 2 => p.fault(InvariantViolation::ShortTuple {
                kind: TupleKind::Type,
                arity: elems.len(),
            }),
            Type::Tuple { elems } => p.paren_list(elems.iter().map(|t| t.pretty(p)).collect()),
            Type::Fun { from, to } => parens_if(
                prec > 0,
                p.layout_fsep(vec![
                    from.pretty_prec(p, PREC_BTYPE),
                    Doc::text("->"),
                    to.pretty(p),
                ]),
            ),
            Type::App { fun, arg } if fun.is_list_tycon() => arg.pretty(p).brackets(),
            Type::App { fun, arg } => parens_if(
                prec > PREC_BTYPE,
                p.layout_fsep(vec![
                    fun.pretty_prec(p, PREC_BTYPE),
                    arg.pretty_prec(p, PREC_ATYPE),
                ]),
            ),
            Type::Var { name } => name.pretty(p),
            Type::Con { name } => name.pretty(p),
        }
    }
}

/// `C t1 t2`
impl Pretty for Asst {
    fn pretty(&self, p: &Printer<'_>) -> Doc {
        let mut docs = vec![self.class.pretty(p)];
        docs.extend(self.types.iter().map(|t| t.pretty_prec(p, PREC_ATYPE)));
        p.layout_fsep(docs)
    }
}

/// Class context, always parenthesized: `(Eq a) =>`. Empty for no
/// assertions.
pub(crate) fn pretty_context(p: &Printer<'_>, context: &[Asst]) -> Doc {
    if context.is_empty() {
        return Doc::empty();
    }
    p.layout_sep(vec![
        p.paren_list(context.iter().map(|a| a.pretty(p)).collect()),
        Doc::text("=>"),
    ])
}

impl Pretty for QualType {
    fn pretty(&self, p: &Printer<'_>) -> Doc {
        p.layout_fsep(vec![pretty_context(p, &self.context), self.ty.pretty(p)])
    }
}

impl Pretty for BangType {
    fn pretty_prec(&self, p: &Printer<'_>, prec: u8) -> Doc {
        match self {
            BangType::Banged(ty) => Doc::char('!').append(ty.pretty_prec(p, PREC_ATYPE)),
            BangType::UnBanged(ty) => ty.pretty_prec(p, prec),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::PrintMode;
    use hs98_syntax::{Name, QName, builtin};

    fn show<T: Pretty>(node: &T) -> String {
        let mode = PrintMode::default();
        node.pretty(&Printer::new(&mode)).to_string()
    }

    fn a() -> Type {
        Type::var("a")
    }
    fn b() -> Type {
        Type::var("b")
    }
    fn c() -> Type {
        Type::var("c")
    }

    #[test]
    fn test_function_type_is_right_associative() {
        assert_eq!(show(&Type::fun(a(), Type::fun(b(), c()))), "a -> b -> c");
        assert_eq!(show(&Type::fun(Type::fun(a(), b()), c())), "(a -> b) -> c");
    }

    #[test]
    fn test_list_type() {
        assert_eq!(show(&Type::list(a())), "[a]");
        assert_eq!(show(&Type::list(Type::fun(a(), b()))), "[a -> b]");
        assert_eq!(show(&builtin::list_tycon()), "[]");
    }

    #[test]
    fn test_application() {
        let maybe = |t| Type::app(Type::con("Maybe"), t);
        assert_eq!(show(&maybe(a())), "Maybe a");
        assert_eq!(show(&maybe(maybe(a()))), "Maybe (Maybe a)");
        assert_eq!(show(&Type::app(Type::app(Type::con("Either"), a()), b())), "Either a b");
        assert_eq!(show(&Type::fun(maybe(a()), b())), "Maybe a -> b");
        assert_eq!(show(&maybe(Type::fun(a(), b()))), "Maybe (a -> b)");
    }

    #[test]
    fn test_tuple_and_special_constructors() {
        assert_eq!(show(&Type::tuple(vec![a(), b()])), "(a, b)");
        assert_eq!(show(&builtin::unit_tycon()), "()");
        assert_eq!(show(&builtin::fun_tycon()), "(->)");
        assert_eq!(show(&Type::app(builtin::tuple_tycon(2), a())), "(,) a");
    }

    #[test]
    fn test_short_tuple_is_a_fault() {
        let mode = PrintMode::default();
        let printer = Printer::new(&mode);
        let err = printer.print(&Type::tuple(vec![a()])).unwrap_err();
        assert!(err.to_string().contains("type tuple has 1 component"));
    }

    #[test]
    fn test_context_always_parenthesized() {
        let eq = Asst::new(QName::unqual(Name::ident("Eq")), vec![a()]);
        let qt = QualType::new(vec![eq.clone()], Type::fun(a(), Type::con("Bool")));
        assert_eq!(show(&qt), "(Eq a) => a -> Bool");

        let show_a = Asst::new(QName::unqual(Name::ident("Show")), vec![a()]);
        let qt = QualType::new(vec![eq, show_a], a());
        assert_eq!(show(&qt), "(Eq a, Show a) => a");

        assert_eq!(show(&QualType::unqualified(a())), "a");
    }

    #[test]
    fn test_bang_type() {
        let maybe_a = Type::app(Type::con("Maybe"), a());
        assert_eq!(show(&BangType::Banged(maybe_a.clone())), "!(Maybe a)");
        assert_eq!(show(&BangType::UnBanged(maybe_a)), "Maybe a");
    }
}
