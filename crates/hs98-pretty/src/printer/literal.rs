use super::{Pretty, Printer};
use crate::doc::Doc;
use crate::show::{show_char, show_string};
use hs98_syntax::Literal;

/// Negative numeric literals need parentheses wherever a negation would.
pub(crate) fn is_negative(lit: &Literal) -> bool {
    match lit {
        Literal::Int(n) | Literal::IntPrim(n) => *n < 0,
        Literal::Frac(r) | Literal::FloatPrim(r) | Literal::DoublePrim(r) => r.numerator < 0,
        Literal::Char(_) | Literal::String(_) | Literal::CharPrim(_) | Literal::StringPrim(_) => {
            false
        }
    }
}

impl Pretty for Literal {
    fn pretty(&self, _: &Printer<'_>) -> Doc {
        match self {
            Literal::Char(c) => Doc::text(show_char(*c)),
            Literal::String(s) => Doc::text(show_string(s)),
            Literal::Int(n) => Doc::integer(*n),
            Literal::Frac(r) => Doc::double(r.to_f64()),
            Literal::CharPrim(c) => Doc::text(show_char(*c)).append(Doc::char('#')),
            Literal::StringPrim(s) => Doc::text(show_string(s)).append(Doc::char('#')),
            Literal::IntPrim(n) => Doc::integer(*n).append(Doc::char('#')),
            Literal::FloatPrim(r) => Doc::float(r.to_f64() as f32).append(Doc::char('#')),
            Literal::DoublePrim(r) => Doc::double(r.to_f64()).append(Doc::text("##")),
        }
    }
}
