//! Expressions, statements and case alternatives.
//!
//! Precedence levels, loosest first:
//!
//! | level | context                                          |
//! |-------|--------------------------------------------------|
//! | 0     | anywhere                                         |
//! | 1     | right operand of an infix application            |
//! | 2     | left operand of an infix application, `e :: t`   |
//! | 3     | function of an application, operand of negation  |
//! | 4     | argument of an application                       |
//!
//! Block forms (`\`, `let`, `if`, `case`, `do`) extend as far right as
//! possible, so they only need parentheses where something follows them.

use super::literal::is_negative;
use super::pattern::PREC_PAT_ARG;
use super::{Pretty, Printer, parens_if};
use crate::doc::{Doc, comma, equals, punctuate};
use crate::error::{InvariantViolation, TupleKind};
use hs98_syntax::{Alt, Expr, FieldUpdate, GuardedAlt, GuardedAlts, Stmt};

const PREC_RIGHT_OPERAND: u8 = 1;
const PREC_LEFT_OPERAND: u8 = 2;
const PREC_FUN: u8 = 3;
const PREC_ARG: u8 = 4;

fn dots() -> Doc {
    Doc::text("..")
}

impl Pretty for Expr {
    fn pretty_prec(&self, p: &Printer<'_>, prec: u8) -> Doc {
        match self {
            Expr::Var { name } | Expr::Con { name } => name.pretty(p),
            Expr::Lit { lit } => parens_if(prec >= PREC_FUN && is_negative(lit), lit.pretty(p)),
            Expr::InfixApp { left, op, right } => parens_if(
                prec >= PREC_FUN,
                p.layout_fsep(vec![
                    left.pretty_prec(p, PREC_LEFT_OPERAND),
                    op.pretty(p),
                    right.pretty_prec(p, PREC_RIGHT_OPERAND),
                ]),
            ),
            Expr::App { fun, arg } => parens_if(
                prec >= PREC_ARG,
                p.layout_fsep(vec![fun.pretty_prec(p, PREC_FUN), arg.pretty_prec(p, PREC_ARG)]),
            ),
            Expr::NegApp { expr } => parens_if(
                prec >= PREC_FUN,
                Doc::char('-').append(expr.pretty_prec(p, PREC_FUN)),
            ),
            Expr::Lambda { pats, .. } if pats.is_empty() => {
                p.fault(InvariantViolation::LambdaWithoutPatterns)
            }
            Expr::Lambda { pats, body, .. } => {
                let mut docs = vec![Doc::char('\\')];
                docs.extend(pats.iter().map(|pat| pat.pretty_prec(p, PREC_PAT_ARG)));
                docs.push(Doc::text("->"));
                docs.push(body.pretty(p));
                parens_if(prec >= PREC_LEFT_OPERAND, p.layout_fsep(docs))
            }
            Expr::Let { decls, body } => parens_if(
                prec >= PREC_LEFT_OPERAND,
                p.layout_fsep(vec![
                    Doc::text("let").append_space(
                        p.body(p.mode().let_indent, decls.iter().map(|d| d.pretty(p)).collect()),
                    ),
                    Doc::text("in"),
                    body.pretty(p),
                ]),
            ),
            Expr::If {
                cond,
                then_expr,
                else_expr,
            } => parens_if(
                prec >= PREC_LEFT_OPERAND,
                p.layout_fsep(vec![
                    Doc::text("if"),
                    cond.pretty(p),
                    Doc::text("then"),
                    then_expr.pretty(p),
                    Doc::text("else"),
                    else_expr.pretty(p),
                ]),
            ),
            Expr::Case { alts, .. } if alts.is_empty() => {
                p.fault(InvariantViolation::EmptyCaseAlternatives)
            }
            Expr::Case { scrutinee, alts } => parens_if(
                prec >= PREC_LEFT_OPERAND,
                p.above_or_beside(
                    p.layout_fsep(vec![Doc::text("case"), scrutinee.pretty(p), Doc::text("of")]),
                    p.body(p.mode().case_indent, alts.iter().map(|a| a.pretty(p)).collect()),
                ),
            ),
            Expr::Do { stmts } if stmts.is_empty() => p.fault(InvariantViolation::EmptyDoBlock),
            Expr::Do { stmts } => parens_if(
                prec >= PREC_LEFT_OPERAND,
                p.above_or_beside(
                    Doc::text("do"),
                    p.body(p.mode().do_indent, stmts.iter().map(|s| s.pretty(p)).collect()),
                ),
            ),
            Expr::Tuple { elems } if elems.len() < 2 => p.fault(InvariantViolation::ShortTuple {
                kind: TupleKind::Expression,
                arity: elems.len(),
            }),
            Expr::Tuple { elems } => p.paren_list(elems.iter().map(|e| e.pretty(p)).collect()),
            Expr::List { elems } => {
                p.bracket_list(punctuate(comma(), elems.iter().map(|e| e.pretty(p))))
            }
            Expr::Paren { expr } => expr.pretty(p).parens(),
            Expr::LeftSection { expr, op } => expr
                .pretty_prec(p, PREC_LEFT_OPERAND)
                .append_space(op.pretty(p))
                .parens(),
            Expr::RightSection { op, expr } => op
                .pretty(p)
                .append_space(expr.pretty_prec(p, PREC_RIGHT_OPERAND))
                .parens(),
            Expr::RecConstr { con, fields } => con
                .pretty(p)
                .append(p.brace_list(fields.iter().map(|f| f.pretty(p)).collect())),
            Expr::RecUpdate { expr, fields } => expr
                .pretty_prec(p, PREC_ARG)
                .append(p.brace_list(fields.iter().map(|f| f.pretty(p)).collect())),
            Expr::EnumFrom { from } => p.bracket_list(vec![from.pretty(p), dots()]),
            Expr::EnumFromTo { from, to } => {
                p.bracket_list(vec![from.pretty(p), dots(), to.pretty(p)])
            }
            Expr::EnumFromThen { from, then } => {
                p.bracket_list(vec![from.pretty(p).append(comma()), then.pretty(p), dots()])
            }
            Expr::EnumFromThenTo { from, then, to } => p.bracket_list(vec![
                from.pretty(p).append(comma()),
                then.pretty(p),
                dots(),
                to.pretty(p),
            ]),
            Expr::ListComp { quals, .. } if quals.is_empty() => {
                p.fault(InvariantViolation::EmptyComprehension)
            }
            Expr::ListComp { expr, quals } => {
                let mut docs = vec![expr.pretty(p), Doc::char('|')];
                docs.extend(punctuate(comma(), quals.iter().map(|q| q.pretty(p))));
                p.bracket_list(docs)
            }
            Expr::ExpTypeSig { expr, ty, .. } => parens_if(
                prec >= PREC_RIGHT_OPERAND,
                p.layout_fsep(vec![
                    expr.pretty_prec(p, PREC_LEFT_OPERAND),
                    Doc::text("::"),
                    ty.pretty(p),
                ]),
            ),
            // Patterns parsed as expressions, e.g. on the left of `<-`
            Expr::AsPat { name, expr } => match expr.as_ref() {
                Expr::IrrPat { expr: inner } => p.layout_fsep(vec![
                    name.pretty(p).append(Doc::char('@')),
                    Doc::char('~').append(inner.pretty_prec(p, PREC_ARG)),
                ]),
                _ => name
                    .pretty(p)
                    .append(Doc::char('@'))
                    .append(expr.pretty_prec(p, PREC_ARG)),
            },
            Expr::WildCard => Doc::char('_'),
            Expr::IrrPat { expr } => Doc::char('~').append(expr.pretty_prec(p, PREC_ARG)),
        }
    }
}

impl Pretty for Stmt {
    fn pretty(&self, p: &Printer<'_>) -> Doc {
        match self {
            Stmt::Generator { pat, expr, .. } => pat
                .pretty(p)
                .append_space(Doc::text("<-"))
                .append_space(expr.pretty(p)),
            Stmt::Qualifier { expr } => expr.pretty(p),
            Stmt::LetStmt { decls } => p.above_or_beside(
                Doc::text("let"),
                p.body(p.mode().let_indent, decls.iter().map(|d| d.pretty(p)).collect()),
            ),
        }
    }
}

impl Pretty for FieldUpdate {
    fn pretty(&self, p: &Printer<'_>) -> Doc {
        p.layout_fsep(vec![self.field.pretty(p), equals(), self.expr.pretty(p)])
    }
}

impl Pretty for Alt {
    fn pretty(&self, p: &Printer<'_>) -> Doc {
        p.above_or_beside(
            p.layout_fsep(vec![self.pat.pretty(p), self.alts.pretty(p)]),
            p.where_clause(&self.wheres),
        )
    }
}

impl Pretty for GuardedAlts {
    fn pretty(&self, p: &Printer<'_>) -> Doc {
        match self {
            GuardedAlts::UnGuarded { expr } => Doc::text("->").append_space(expr.pretty(p)),
            GuardedAlts::Guarded { alts } if alts.is_empty() => {
                p.fault(InvariantViolation::EmptyGuardedAlts)
            }
            GuardedAlts::Guarded { alts } => {
                p.layout_vcat(alts.iter().map(|a| a.pretty(p)).collect())
            }
        }
    }
}

/// `| guard -> expr`
impl Pretty for GuardedAlt {
    fn pretty(&self, p: &Printer<'_>) -> Doc {
        p.layout_fsep(vec![
            Doc::char('|'),
            self.guard.pretty(p),
            Doc::text("->"),
            self.expr.pretty(p),
        ])
    }
}
