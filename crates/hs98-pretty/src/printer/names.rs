use super::{Pretty, Printer, parens_if};
use crate::doc::Doc;
use hs98_syntax::{CName, ModuleName, Name, Op, QName, QOp, SpecialCon};

fn special_text(con: SpecialCon) -> String {
    match con {
        SpecialCon::Unit => "()".to_string(),
        SpecialCon::List => "[]".to_string(),
        SpecialCon::Fun => "->".to_string(),
        SpecialCon::Cons => ":".to_string(),
        SpecialCon::Tuple(arity) => format!("({})", ",".repeat(arity.saturating_sub(1))),
    }
}

/// The name as written, with no parentheses or back-quotes.
fn bare_name(name: &Name) -> Doc {
    match name {
        Name::Ident(s) | Name::Symbol(s) => Doc::text(s.clone()),
        Name::Special(con) => Doc::text(special_text(*con)),
    }
}

/// The qualified name as written. Prelude's special names drop the
/// qualifier since they cannot be written qualified.
fn bare_qname(qname: &QName) -> Doc {
    match qname {
        QName::Qual { module, name } => {
            if module.is_prelude() && matches!(name, Name::Special(_)) {
                bare_name(name)
            } else {
                Doc::text(format!("{}.", module)).append(bare_name(name))
            }
        }
        QName::UnQual { name } => bare_name(name),
    }
}

fn backquote(doc: Doc) -> Doc {
    Doc::char('`').append(doc).append(Doc::char('`'))
}

/// Name in operator position: `+` or `` `div` ``.
pub(crate) fn pretty_name_infix(name: &Name) -> Doc {
    if name.is_symbolic() {
        bare_name(name)
    } else {
        backquote(bare_name(name))
    }
}

/// Qualified name in operator position: `M.+` or `` `M.div` ``.
pub(crate) fn pretty_qname_infix(qname: &QName) -> Doc {
    if qname.is_symbolic() {
        bare_qname(qname)
    } else {
        backquote(bare_qname(qname))
    }
}

/// Name in value position: `f`, `(+)`, `(:)`.
impl Pretty for Name {
    fn pretty(&self, _: &Printer<'_>) -> Doc {
        parens_if(self.is_symbolic(), bare_name(self))
    }
}

impl Pretty for QName {
    fn pretty(&self, _: &Printer<'_>) -> Doc {
        parens_if(self.is_symbolic(), bare_qname(self))
    }
}

impl Pretty for ModuleName {
    fn pretty(&self, _: &Printer<'_>) -> Doc {
        Doc::text(self.as_str().to_string())
    }
}

impl Pretty for Op {
    fn pretty(&self, _: &Printer<'_>) -> Doc {
        pretty_name_infix(self.name())
    }
}

impl Pretty for QOp {
    fn pretty(&self, _: &Printer<'_>) -> Doc {
        pretty_qname_infix(self.qname())
    }
}

impl Pretty for CName {
    fn pretty(&self, printer: &Printer<'_>) -> Doc {
        self.name().pretty(printer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::PrintMode;
    use hs98_syntax::builtin;
    use rstest::rstest;

    fn show<T: Pretty>(node: &T) -> String {
        let mode = PrintMode::default();
        node.pretty(&Printer::new(&mode)).to_string()
    }

    #[rstest]
    #[case(Name::ident("map"), "map", "`map`")]
    #[case(Name::symbol("++"), "(++)", "++")]
    #[case(Name::Special(SpecialCon::Cons), "(:)", ":")]
    #[case(Name::Special(SpecialCon::Tuple(3)), "(,,)", "`(,,)`")]
    fn test_name_positions(#[case] name: Name, #[case] value: &str, #[case] infix: &str) {
        assert_eq!(show(&name), value);
        assert_eq!(pretty_name_infix(&name).to_string(), infix);
    }

    #[test]
    fn test_qualified_names() {
        let q = QName::qual("Data.Map", Name::ident("insert"));
        assert_eq!(show(&q), "Data.Map.insert");
        assert_eq!(pretty_qname_infix(&q).to_string(), "`Data.Map.insert`");

        let q = QName::qual("M", Name::symbol("<+>"));
        assert_eq!(show(&q), "(M.<+>)");
        assert_eq!(show(&QOp::QVarOp(q)), "M.<+>");
    }

    #[test]
    fn test_prelude_special_names_are_unqualified() {
        assert_eq!(show(&builtin::unit_con_name()), "()");
        assert_eq!(show(&builtin::list_tycon_name()), "[]");
        assert_eq!(show(&builtin::tuple_con_name(2)), "(,)");
        assert_eq!(show(&builtin::list_cons_name()), "(:)");
        assert_eq!(show(&QOp::QConOp(builtin::list_cons_name())), ":");
    }

    #[test]
    fn test_other_qualifiers_are_kept() {
        let q = QName::qual("Other", Name::Special(SpecialCon::Unit));
        assert_eq!(show(&q), "Other.()");
        let q = QName::qual("Prelude", Name::ident("map"));
        assert_eq!(show(&q), "Prelude.map");
    }

    #[test]
    fn test_ops() {
        assert_eq!(show(&Op::VarOp(Name::ident("elem"))), "`elem`");
        assert_eq!(show(&Op::ConOp(Name::symbol(":|"))), ":|");
        assert_eq!(show(&CName::VarName(Name::symbol("+"))), "(+)");
    }
}
