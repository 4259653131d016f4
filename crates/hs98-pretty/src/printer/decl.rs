//! Declarations and the pieces only they use.

use super::names::pretty_name_infix;
use super::pattern::PREC_PAT_ARG;
use super::types::{PREC_ATYPE, PREC_BTYPE, pretty_context};
use super::{Pretty, Printer};
use crate::doc::{Doc, comma, equals, punctuate};
use crate::error::InvariantViolation;
use crate::show::show_string;
use hs98_syntax::{
    Assoc, ConDecl, Decl, FieldDecl, GuardedRhs, Match, Name, QName, Rhs, Safety,
};

impl Printer<'_> {
    fn deriving(&self, classes: &[QName]) -> Doc {
        match classes {
            [] => Doc::empty(),
            [class] => Doc::text("deriving").append_space(class.pretty(self)),
            _ => Doc::text("deriving")
                .append_space(self.paren_list(classes.iter().map(|c| c.pretty(self)).collect())),
        }
    }

    fn names(&self, names: &[Name]) -> Vec<Doc> {
        names.iter().map(|n| n.pretty(self)).collect()
    }

    /// Class or instance header followed by `where` and the member body,
    /// which may be empty.
    fn class_body(&self, mut head: Vec<Doc>, decls: &[Decl]) -> Doc {
        head.push(Doc::text("where"));
        self.above_or_beside(
            self.layout_sep(head),
            self.body(
                self.mode().class_indent,
                decls.iter().map(|d| d.pretty(self)).collect(),
            ),
        )
    }
}

/// `kw ctx => name vars`
fn decl_head(keyword: &'static str, context: Doc, head: Doc, args: Vec<Doc>) -> Vec<Doc> {
    let mut docs = vec![Doc::text(keyword), context, head];
    docs.extend(args);
    docs
}

impl Pretty for Decl {
    fn pretty(&self, p: &Printer<'_>) -> Doc {
        match self {
            Decl::TypeDecl { loc, name, vars, ty } => {
                let mut docs = decl_head("type", Doc::empty(), name.pretty(p), p.names(vars));
                docs.push(equals());
                docs.push(ty.pretty(p));
                p.blank_line(p.mark_line(loc, p.layout_sep(docs)))
            }
            Decl::DataDecl {
                loc,
                context,
                name,
                vars,
                cons,
                deriving,
            } => {
                let head = p.layout_sep(decl_head(
                    "data",
                    pretty_context(p, context),
                    name.pretty(p),
                    p.names(vars),
                ));
                let leaders = std::iter::once(equals()).chain(std::iter::repeat(Doc::char('|')));
                let alternatives = leaders
                    .zip(cons)
                    .map(|(leader, con)| leader.append_space(con.pretty(p)))
                    .collect();
                let body = p.above_or_beside(p.layout_vcat(alternatives), p.deriving(deriving));
                p.blank_line(p.mark_line(loc, head.append_space(body)))
            }
            Decl::NewTypeDecl {
                loc,
                context,
                name,
                vars,
                con,
                deriving,
            } => {
                let head = p.layout_sep(decl_head(
                    "newtype",
                    pretty_context(p, context),
                    name.pretty(p),
                    p.names(vars),
                ));
                let body = p.above_or_beside(con.pretty(p), p.deriving(deriving));
                p.blank_line(p.mark_line(loc, head.append_space(equals()).append_space(body)))
            }
            Decl::InfixDecl { ops, .. } if ops.is_empty() => {
                p.fault(InvariantViolation::EmptyFixityDecl)
            }
            Decl::InfixDecl {
                loc,
                assoc,
                prec,
                ops,
            } => {
                let mut docs = vec![assoc.pretty(p), Doc::int(i64::from(*prec))];
                docs.extend(punctuate(comma(), ops.iter().map(|op| op.pretty(p))));
                p.blank_line(p.mark_line(loc, p.layout_sep(docs)))
            }
            Decl::ClassDecl {
                loc,
                context,
                name,
                vars,
                decls,
            } => {
                let head = decl_head("class", pretty_context(p, context), name.pretty(p), p.names(vars));
                p.blank_line(p.mark_line(loc, p.class_body(head, decls)))
            }
            Decl::InstDecl {
                loc,
                context,
                class,
                types,
                decls,
            } => {
                let args = types.iter().map(|t| t.pretty_prec(p, PREC_ATYPE)).collect();
                let head = decl_head("instance", pretty_context(p, context), class.pretty(p), args);
                p.blank_line(p.mark_line(loc, p.class_body(head, decls)))
            }
            Decl::DefaultDecl { loc, types } => {
                let types = p.paren_list(types.iter().map(|t| t.pretty(p)).collect());
                p.blank_line(p.mark_line(loc, Doc::text("default").append_space(types)))
            }
            Decl::TypeSig { names, .. } if names.is_empty() => {
                p.fault(InvariantViolation::EmptyTypeSignature)
            }
            Decl::TypeSig { loc, names, ty } => {
                let mut docs = punctuate(comma(), p.names(names));
                docs.push(Doc::text("::"));
                docs.push(ty.pretty(p));
                p.blank_line(p.mark_line(loc, p.layout_sep(docs)))
            }
            Decl::ForeignImport {
                loc,
                call_conv,
                safety,
                entity,
                name,
                ty,
            } => {
                let docs = vec![
                    Doc::text("foreign"),
                    Doc::text("import"),
                    Doc::text(call_conv.clone()),
                    safety.pretty(p),
                    foreign_entity(entity),
                    name.pretty(p),
                    Doc::text("::"),
                    ty.pretty(p),
                ];
                p.blank_line(p.mark_line(loc, p.layout_sep(docs)))
            }
            Decl::ForeignExport {
                loc,
                call_conv,
                entity,
                name,
                ty,
            } => {
                let docs = vec![
                    Doc::text("foreign"),
                    Doc::text("export"),
                    Doc::text(call_conv.clone()),
                    foreign_entity(entity),
                    name.pretty(p),
                    Doc::text("::"),
                    ty.pretty(p),
                ];
                p.blank_line(p.mark_line(loc, p.layout_sep(docs)))
            }
            Decl::FunBind { matches } if matches.is_empty() => {
                p.fault(InvariantViolation::EmptyFunBind)
            }
            Decl::FunBind { matches } => p.bindings(matches.iter().map(|m| m.pretty(p)).collect()),
            Decl::PatBind {
                loc,
                pat,
                rhs,
                wheres,
            } => p.mark_line(
                loc,
                p.above_or_beside(
                    p.layout_fsep(vec![pat.pretty(p), rhs.pretty(p)]),
                    p.where_clause(wheres),
                ),
            ),
        }
    }
}

fn foreign_entity(entity: &str) -> Doc {
    if entity.is_empty() {
        Doc::empty()
    } else {
        Doc::text(show_string(entity))
    }
}

impl Pretty for ConDecl {
    fn pretty(&self, p: &Printer<'_>) -> Doc {
        match self {
            ConDecl::ConDecl { name, args, .. } => match args.as_slice() {
                [left, right] if name.is_symbolic() => p.layout_fsep(vec![
                    left.pretty_prec(p, PREC_BTYPE),
                    pretty_name_infix(name),
                    right.pretty_prec(p, PREC_BTYPE),
                ]),
                _ => {
                    let mut docs = vec![name.pretty(p)];
                    docs.extend(args.iter().map(|a| a.pretty_prec(p, PREC_ATYPE)));
                    p.layout_sep(docs)
                }
            },
            ConDecl::RecDecl { name, fields, .. } => name
                .pretty(p)
                .append(p.brace_list(fields.iter().map(|f| f.pretty(p)).collect())),
        }
    }
}

/// `f1, f2 :: t`
impl Pretty for FieldDecl {
    fn pretty(&self, p: &Printer<'_>) -> Doc {
        let mut docs = punctuate(comma(), p.names(&self.names));
        docs.push(Doc::text("::"));
        docs.push(self.ty.pretty(p));
        p.layout_fsep_simple(docs)
    }
}

impl Pretty for Match {
    fn pretty(&self, p: &Printer<'_>) -> Doc {
        let mut lhs = match self.pats.as_slice() {
            [left, right, rest @ ..] if self.name.is_symbolic() => {
                let head = vec![
                    left.pretty_prec(p, PREC_PAT_ARG),
                    pretty_name_infix(&self.name),
                    right.pretty_prec(p, PREC_PAT_ARG),
                ];
                if rest.is_empty() {
                    head
                } else {
                    let mut docs = vec![p.layout_fsep(head).parens()];
                    docs.extend(rest.iter().map(|pat| pat.pretty_prec(p, PREC_PAT_ARG)));
                    docs
                }
            }
            pats => {
                let mut docs = vec![self.name.pretty(p)];
                docs.extend(pats.iter().map(|pat| pat.pretty_prec(p, PREC_PAT_ARG)));
                docs
            }
        };
        lhs.push(self.rhs.pretty(p));
        p.mark_line(
            &self.loc,
            p.above_or_beside(p.layout_fsep(lhs), p.where_clause(&self.wheres)),
        )
    }
}

impl Pretty for Rhs {
    fn pretty(&self, p: &Printer<'_>) -> Doc {
        match self {
            Rhs::UnGuarded { expr } => equals().append_space(expr.pretty(p)),
            Rhs::Guarded { rhss } if rhss.is_empty() => {
                p.fault(InvariantViolation::EmptyGuardedRhss)
            }
            Rhs::Guarded { rhss } => p.layout_vcat(rhss.iter().map(|r| r.pretty(p)).collect()),
        }
    }
}

/// `| guard = expr`
impl Pretty for GuardedRhs {
    fn pretty(&self, p: &Printer<'_>) -> Doc {
        p.layout_fsep(vec![
            Doc::char('|'),
            self.guard.pretty(p),
            equals(),
            self.expr.pretty(p),
        ])
    }
}

impl Pretty for Assoc {
    fn pretty(&self, _: &Printer<'_>) -> Doc {
        Doc::text(match self {
            Assoc::None => "infix",
            Assoc::Left => "infixl",
            Assoc::Right => "infixr",
        })
    }
}

impl Pretty for Safety {
    fn pretty(&self, _: &Printer<'_>) -> Doc {
        Doc::text(match self {
            Safety::Safe => "safe",
            Safety::Unsafe => "unsafe",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrettyError;
    use crate::mode::{Layout, PrintMode};
    use crate::render::render;
    use hs98_syntax::{Asst, BangType, Expr, Op, Pat, QualType, SrcLoc, Type, builtin};

    fn compact() -> PrintMode {
        PrintMode::default().with_spacing(false)
    }

    fn show_in(mode: &PrintMode, d: &Decl) -> String {
        let printer = Printer::new(mode);
        match printer.print(d) {
            Ok(doc) => render(&doc),
            Err(err) => panic!("unexpected fault: {err}"),
        }
    }

    fn show(d: &Decl) -> String {
        show_in(&compact(), d)
    }

    fn qn(s: &str) -> QName {
        QName::unqual(Name::ident(s))
    }

    fn data(name: &str, vars: &[&str], cons: Vec<ConDecl>, deriving: Vec<QName>) -> Decl {
        Decl::DataDecl {
            loc: SrcLoc::unknown(),
            context: vec![],
            name: Name::ident(name),
            vars: vars.iter().map(|v| Name::ident(*v)).collect(),
            cons,
            deriving,
        }
    }

    #[test]
    fn test_type_synonym() {
        let d = Decl::TypeDecl {
            loc: SrcLoc::unknown(),
            name: Name::ident("Pair"),
            vars: vec![Name::ident("a")],
            ty: Type::tuple(vec![Type::var("a"), Type::var("a")]),
        };
        assert_eq!(show(&d), "type Pair a = (a, a)");
        assert_eq!(show_in(&PrintMode::default(), &d), "\ntype Pair a = (a, a)");
    }

    #[test]
    fn test_data_declaration_aligns_constructors() {
        let d = data(
            "Maybe",
            &["a"],
            vec![
                ConDecl::positional("Nothing", vec![]),
                ConDecl::positional("Just", vec![Type::var("a")]),
            ],
            vec![qn("Eq"), qn("Show")],
        );
        assert_eq!(
            show(&d),
            "data Maybe a = Nothing\n             | Just a\n             deriving (Eq, Show)"
        );

        let mode = compact().with_layout(Layout::NoLayout);
        assert_eq!(
            show_in(&mode, &d),
            "data Maybe a = Nothing | Just a deriving (Eq, Show)"
        );
    }

    #[test]
    fn test_single_deriving_class_is_bare() {
        let d = data("T", &[], vec![ConDecl::positional("T", vec![])], vec![qn("Eq")]);
        assert_eq!(show(&d), "data T = T\n       deriving Eq");
    }

    #[test]
    fn test_constructor_forms() {
        let maybe_a = Type::app(Type::con("Maybe"), Type::var("a"));
        let con = ConDecl::positional("C", vec![maybe_a.clone(), Type::var("b")]);
        let p = PrintMode::default();
        let printer = Printer::new(&p);
        assert_eq!(render(&con.pretty(&printer)), "C (Maybe a) b");

        let infix = ConDecl::ConDecl {
            loc: SrcLoc::unknown(),
            name: Name::symbol(":|"),
            args: vec![BangType::UnBanged(Type::var("a")), BangType::Banged(maybe_a)],
        };
        assert_eq!(render(&infix.pretty(&printer)), "a :| !(Maybe a)");

        let rec = ConDecl::RecDecl {
            loc: SrcLoc::unknown(),
            name: Name::ident("P"),
            fields: vec![FieldDecl {
                names: vec![Name::ident("px"), Name::ident("py")],
                ty: BangType::UnBanged(Type::con("Int")),
            }],
        };
        assert_eq!(render(&rec.pretty(&printer)), "P{px, py :: Int}");
    }

    #[test]
    fn test_newtype() {
        let d = Decl::NewTypeDecl {
            loc: SrcLoc::unknown(),
            context: vec![],
            name: Name::ident("Age"),
            vars: vec![],
            con: ConDecl::positional("Age", vec![Type::con("Int")]),
            deriving: vec![],
        };
        assert_eq!(show(&d), "newtype Age = Age Int");
    }

    #[test]
    fn test_class_and_instance() {
        let a = || Type::var("a");
        let sig = Decl::type_sig(
            vec![Name::symbol("==")],
            Type::fun(a(), Type::fun(a(), Type::con("Bool"))),
        );
        let class = Decl::ClassDecl {
            loc: SrcLoc::unknown(),
            context: vec![],
            name: Name::ident("Eq"),
            vars: vec![Name::ident("a")],
            decls: vec![sig],
        };
        assert_eq!(show(&class), "class Eq a where\n        (==) :: a -> a -> Bool");

        let inst = Decl::InstDecl {
            loc: SrcLoc::unknown(),
            context: vec![Asst::new(qn("Show"), vec![a()])],
            class: qn("Show"),
            types: vec![Type::app(Type::con("Maybe"), a())],
            decls: vec![],
        };
        assert_eq!(show(&inst), "instance (Show a) => Show (Maybe a) where");

        let none = PrintMode::default().with_layout(Layout::NoLayout);
        assert_eq!(
            show_in(&none, &inst),
            "instance (Show a) => Show (Maybe a) where { }"
        );
    }

    #[test]
    fn test_function_bindings() {
        let f = Decl::FunBind {
            matches: vec![
                Match::new(
                    Name::ident("f"),
                    vec![Pat::Lit {
                        lit: hs98_syntax::Literal::Int(0),
                    }],
                    Rhs::UnGuarded { expr: Expr::int(1) },
                ),
                Match::new(
                    Name::ident("f"),
                    vec![Pat::var("n")],
                    Rhs::UnGuarded { expr: Expr::var("n") },
                ),
            ],
        };
        assert_eq!(show_in(&PrintMode::default(), &f), "f 0 = 1\nf n = n");

        let mode = PrintMode::default().with_layout(Layout::SemiColon);
        assert_eq!(show_in(&mode, &f), "f 0 = 1;\nf n = n");
    }

    #[test]
    fn test_operator_definitions() {
        let rhs = || Rhs::UnGuarded { expr: Expr::var("a") };
        let op = Name::symbol("<+>");
        let two = Match::new(op.clone(), vec![Pat::var("a"), Pat::var("b")], rhs());
        let d = Decl::FunBind { matches: vec![two] };
        assert_eq!(show(&d), "a <+> b = a");

        let three = Match::new(op.clone(), vec![Pat::var("a"), Pat::var("b"), Pat::var("c")], rhs());
        let d = Decl::FunBind { matches: vec![three] };
        assert_eq!(show(&d), "(a <+> b) c = a");

        let one = Match::new(op, vec![Pat::var("a")], rhs());
        let d = Decl::FunBind { matches: vec![one] };
        assert_eq!(show(&d), "(<+>) a = a");
    }

    #[test]
    fn test_where_and_guards() {
        let m = Match::new(
            Name::ident("f"),
            vec![Pat::var("x")],
            Rhs::UnGuarded { expr: Expr::var("y") },
        )
        .with_wheres(vec![Decl::simple_fun("y", vec![], Expr::var("x"))]);
        let d = Decl::FunBind { matches: vec![m] };
        assert_eq!(show(&d), "f x = y\n  where y = x");

        let guarded = Decl::FunBind {
            matches: vec![Match::new(
                Name::ident("f"),
                vec![Pat::var("n")],
                Rhs::Guarded {
                    rhss: vec![
                        GuardedRhs::new(Expr::app(Expr::var("even"), Expr::var("n")), Expr::int(0)),
                        GuardedRhs::new(Expr::var("otherwise"), Expr::int(1)),
                    ],
                },
            )],
        };
        assert_eq!(show(&guarded), "f n\n  | even n = 0\n  | otherwise = 1");
    }

    #[test]
    fn test_pattern_binding_has_no_blank_line() {
        let d = Decl::PatBind {
            loc: SrcLoc::unknown(),
            pat: Pat::Tuple {
                elems: vec![Pat::var("a"), Pat::var("b")],
            },
            rhs: Rhs::UnGuarded { expr: Expr::var("p") },
            wheres: vec![],
        };
        assert_eq!(show_in(&PrintMode::default(), &d), "(a, b) = p");
    }

    #[test]
    fn test_fixity_default_and_foreign() {
        let fixity = Decl::InfixDecl {
            loc: SrcLoc::unknown(),
            assoc: Assoc::Left,
            prec: 6,
            ops: vec![Op::VarOp(Name::symbol("+")), Op::VarOp(Name::ident("plus"))],
        };
        assert_eq!(show(&fixity), "infixl 6 +, `plus`");

        let default = Decl::DefaultDecl {
            loc: SrcLoc::unknown(),
            types: vec![Type::con("Integer"), Type::con("Double")],
        };
        assert_eq!(show(&default), "default (Integer, Double)");

        let double = || Type::con("Double");
        let import = Decl::ForeignImport {
            loc: SrcLoc::unknown(),
            call_conv: "ccall".into(),
            safety: Safety::Unsafe,
            entity: "sin".into(),
            name: Name::ident("c_sin"),
            ty: Type::fun(double(), double()),
        };
        assert_eq!(
            show(&import),
            "foreign import ccall unsafe \"sin\" c_sin :: Double -> Double"
        );

        let export = Decl::ForeignExport {
            loc: SrcLoc::unknown(),
            call_conv: "ccall".into(),
            entity: String::new(),
            name: Name::ident("f"),
            ty: double(),
        };
        assert_eq!(show(&export), "foreign export ccall f :: Double");
    }

    #[test]
    fn test_type_signature_with_context() {
        let d = Decl::TypeSig {
            loc: SrcLoc::unknown(),
            names: vec![Name::ident("f"), Name::ident("g")],
            ty: QualType::new(
                vec![Asst::new(qn("Ord"), vec![Type::var("a")])],
                Type::fun(Type::var("a"), Type::var("a")),
            ),
        };
        assert_eq!(show(&d), "f, g :: (Ord a) => a -> a");
    }

    #[test]
    fn test_line_pragma_on_declarations() {
        let rhs = Rhs::UnGuarded {
            expr: builtin::unit_con(),
        };
        let mut m = Match::new(Name::ident("main"), vec![], rhs);
        m.loc = SrcLoc::new("Main.hs", 4, 1);
        let d = Decl::FunBind { matches: vec![m] };
        let mode = compact().with_line_pragmas(true);
        assert_eq!(show_in(&mode, &d), "{-# LINE 3 \"Main.hs\" #-}\nmain = ()");
    }

    #[test]
    fn test_malformed_declarations_fault() {
        let mode = PrintMode::default();
        let printer = Printer::new(&mode);
        let cases = [
            (Decl::FunBind { matches: vec![] }, InvariantViolation::EmptyFunBind),
            (
                Decl::TypeSig {
                    loc: SrcLoc::unknown(),
                    names: vec![],
                    ty: QualType::unqualified(Type::var("a")),
                },
                InvariantViolation::EmptyTypeSignature,
            ),
            (
                Decl::InfixDecl {
                    loc: SrcLoc::unknown(),
                    assoc: Assoc::None,
                    prec: 9,
                    ops: vec![],
                },
                InvariantViolation::EmptyFixityDecl,
            ),
            (
                Decl::FunBind {
                    matches: vec![Match::new(Name::ident("f"), vec![], Rhs::Guarded { rhss: vec![] })],
                },
                InvariantViolation::EmptyGuardedRhss,
            ),
        ];
        for (decl, violation) in cases {
            assert_eq!(printer.print(&decl).unwrap_err(), PrettyError::from(violation));
        }
    }
}
