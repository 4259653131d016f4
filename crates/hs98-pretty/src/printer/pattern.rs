//! Patterns. Levels: 0 anywhere, 1 operand of an infix pattern, 2 argument
//! of a constructor.

use super::literal::is_negative;
use super::names::pretty_qname_infix;
use super::{Pretty, Printer, parens_if};
use crate::doc::{Doc, comma, equals, punctuate};
use crate::error::{InvariantViolation, TupleKind};
use hs98_syntax::{Pat, PatField};

pub(crate) const PREC_PAT_ARG: u8 = 2;

impl Pretty for Pat {
    fn pretty_prec(&self, p: &Printer<'_>, prec: u8) -> Doc {
        match self {
            Pat::Var { name } => name.pretty(p),
            Pat::Lit { lit } => parens_if(prec > 0 && is_negative(lit), lit.pretty(p)),
            Pat::Neg { pat } => parens_if(
                prec > 0,
                Doc::char('-').append(pat.pretty_prec(p, PREC_PAT_ARG)),
            ),
            Pat::InfixApp { left, op, right } => parens_if(
                prec > 0,
                p.layout_fsep(vec![
                    left.pretty_prec(p, 1),
                    pretty_qname_infix(op),
                    right.pretty_prec(p, 1),
                ]),
            ),
            Pat::App { con, args } => {
                let mut docs = vec![con.pretty(p)];
                docs.extend(args.iter().map(|a| a.pretty_prec(p, PREC_PAT_ARG)));
                parens_if(prec > 1 && !args.is_empty(), p.layout_fsep(docs))
            }
            Pat::Tuple { elems } if elems.len() < 2 => p.fault(InvariantViolation::ShortTuple {
                kind: TupleKind::Pattern,
                arity: elems.len(),
            }),
            Pat::Tuple { elems } => p.paren_list(elems.iter().map(|e| e.pretty(p)).collect()),
            Pat::List { elems } => {
                p.bracket_list(punctuate(comma(), elems.iter().map(|e| e.pretty(p))))
            }
            Pat::Paren { pat } => pat.pretty(p).parens(),
            Pat::Rec { con, fields } => con
                .pretty(p)
                .append(p.brace_list(fields.iter().map(|f| f.pretty(p)).collect())),
            // `x@~p` would lex `@~` as one operator
            Pat::AsPat { name, pat } => match pat.as_ref() {
                Pat::IrrPat { pat: inner } => p.layout_fsep(vec![
                    name.pretty(p).append(Doc::char('@')),
                    Doc::char('~').append(inner.pretty_prec(p, PREC_PAT_ARG)),
                ]),
                _ => name
                    .pretty(p)
                    .append(Doc::char('@'))
                    .append(pat.pretty_prec(p, PREC_PAT_ARG)),
            },
            Pat::WildCard => Doc::char('_'),
            Pat::IrrPat { pat } => Doc::char('~').append(pat.pretty_prec(p, PREC_PAT_ARG)),
        }
    }
}

/// `f = p`
impl Pretty for PatField {
    fn pretty(&self, p: &Printer<'_>) -> Doc {
        p.layout_fsep(vec![self.field.pretty(p), equals(), self.pat.pretty(p)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{Layout, PrintMode};
    use hs98_syntax::{Literal, Name, QName, builtin};

    fn show(pat: &Pat) -> String {
        let mode = PrintMode::default();
        pat.pretty(&Printer::new(&mode)).to_string()
    }

    #[test]
    fn test_as_pattern_over_irrefutable_has_space() {
        let pat = Pat::as_pat("x", Pat::irrefutable(Pat::var("e")));
        assert_eq!(show(&pat), "x@ ~e");

        let mode = PrintMode::default().with_layout(Layout::NoLayout);
        assert_eq!(pat.pretty(&Printer::new(&mode)).to_string(), "x@ ~e");
    }

    #[test]
    fn test_as_pattern_over_other_patterns() {
        assert_eq!(show(&Pat::as_pat("x", Pat::var("y"))), "x@y");
        assert_eq!(show(&Pat::as_pat("x", Pat::WildCard)), "x@_");
        assert_eq!(
            show(&Pat::as_pat("m", Pat::con("Just", vec![Pat::var("v")]))),
            "m@(Just v)"
        );
    }

    #[test]
    fn test_constructor_patterns() {
        let just = Pat::con("Just", vec![Pat::var("x")]);
        assert_eq!(show(&just), "Just x");
        assert_eq!(show(&Pat::con("Just", vec![just.clone()])), "Just (Just x)");
        assert_eq!(show(&Pat::con("Just", vec![Pat::con("Nothing", vec![])])), "Just Nothing");
    }

    #[test]
    fn test_infix_cons_pattern() {
        let cons = Pat::infix(Pat::var("x"), builtin::list_cons_name(), Pat::var("xs"));
        assert_eq!(show(&cons), "x : xs");
        assert_eq!(show(&Pat::con("Just", vec![cons])), "Just (x : xs)");
    }

    #[test]
    fn test_literals_and_negation() {
        let neg = Pat::Lit {
            lit: Literal::Int(-1),
        };
        assert_eq!(show(&neg), "-1");
        assert_eq!(show(&Pat::con("Just", vec![neg])), "Just (-1)");
        let pneg = Pat::Neg {
            pat: Box::new(Pat::Lit {
                lit: Literal::Int(2),
            }),
        };
        assert_eq!(show(&pneg), "-2");
    }

    #[test]
    fn test_structured_patterns() {
        assert_eq!(show(&Pat::Tuple { elems: vec![Pat::var("a"), Pat::WildCard] }), "(a, _)");
        assert_eq!(show(&Pat::List { elems: vec![Pat::var("a"), Pat::var("b")] }), "[a, b]");
        assert_eq!(show(&Pat::List { elems: vec![] }), "[]");
        assert_eq!(show(&Pat::paren(Pat::var("a"))), "(a)");
        assert_eq!(show(&Pat::irrefutable(Pat::con("T", vec![Pat::var("a")]))), "~(T a)");

        let rec = Pat::Rec {
            con: QName::unqual(Name::ident("P")),
            fields: vec![
                PatField {
                    field: QName::unqual(Name::ident("px")),
                    pat: Pat::var("x"),
                },
                PatField {
                    field: QName::unqual(Name::ident("py")),
                    pat: Pat::WildCard,
                },
            ],
        };
        assert_eq!(show(&rec), "P{px = x, py = _}");
    }

    #[test]
    fn test_short_tuple_pattern_is_a_fault() {
        let mode = PrintMode::default();
        let printer = Printer::new(&mode);
        assert!(printer.print(&Pat::Tuple { elems: vec![] }).is_err());
    }
}
