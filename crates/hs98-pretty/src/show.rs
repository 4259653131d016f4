//! Literal text in the form Haskell's `show` produces.

use hs98_syntax::Rational;

const ASCII_NAMES: [&str; 33] = [
    "NUL", "SOH", "STX", "ETX", "EOT", "ENQ", "ACK", "BEL", "BS", "HT", "LF", "VT", "FF", "CR",
    "SO", "SI", "DLE", "DC1", "DC2", "DC3", "DC4", "NAK", "SYN", "ETB", "CAN", "EM", "SUB", "ESC",
    "FS", "GS", "RS", "US", "SP",
];

/// Escape one character of a literal. `next` is the character that follows
/// it, which decides whether a `\&` separator is needed.
fn escape_into(out: &mut String, c: char, next: Option<char>) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\u{7f}' => out.push_str("\\DEL"),
        c if (c as u32) > 0x7f => {
            out.push('\\');
            out.push_str(&(c as u32).to_string());
            if next.is_some_and(|n| n.is_ascii_digit()) {
                out.push_str("\\&");
            }
        }
        c if c >= ' ' => out.push(c),
        '\u{7}' => out.push_str("\\a"),
        '\u{8}' => out.push_str("\\b"),
        '\u{c}' => out.push_str("\\f"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\u{b}' => out.push_str("\\v"),
        '\u{e}' => {
            out.push_str("\\SO");
            if next == Some('H') {
                out.push_str("\\&");
            }
        }
        c => {
            out.push('\\');
            out.push_str(ASCII_NAMES[c as usize]);
        }
    }
}

/// `show` for `Char`: `'a'`, `'\''`, `'\n'`.
pub fn show_char(c: char) -> String {
    if c == '\'' {
        return "'\\''".to_string();
    }
    let mut out = String::from("'");
    escape_into(&mut out, c, None);
    out.push('\'');
    out
}

/// `show` for `String`.
pub fn show_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '"' {
            out.push_str("\\\"");
        } else {
            escape_into(&mut out, c, chars.peek().copied());
        }
    }
    out.push('"');
    out
}

/// Shortest digits and exponent with `x = 0.d1d2... * 10^e`, for finite
/// positive `x`.
fn float_digits(sci: &str) -> (String, i32) {
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci, "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exp: i32 = exp.parse().unwrap_or(0);
    (digits, exp + 1)
}

fn show_real(negative: bool, zero: bool, nan: bool, infinite: bool, sci: String) -> String {
    if nan {
        return "NaN".to_string();
    }
    let sign = if negative { "-" } else { "" };
    if infinite {
        return format!("{sign}Infinity");
    }
    if zero {
        return format!("{sign}0.0");
    }
    let (digits, e) = float_digits(&sci);
    let body = if (0..=7).contains(&e) {
        // Fixed notation: integer part is the first `e` digits
        let e = e as usize;
        let (int_part, frac_part) = if digits.len() > e {
            (digits[..e].to_string(), digits[e..].to_string())
        } else {
            (format!("{digits:0<e$}"), String::new())
        };
        let int_part = if int_part.is_empty() { "0".to_string() } else { int_part };
        let frac_part = if frac_part.is_empty() { "0".to_string() } else { frac_part };
        format!("{int_part}.{frac_part}")
    } else {
        let (head, tail) = digits.split_at(1);
        let tail = if tail.is_empty() { "0" } else { tail };
        format!("{head}.{tail}e{}", e - 1)
    };
    format!("{sign}{body}")
}

/// `show` for `Double`: `0.1`, `1234567.0`, `1.0e7`, `1.5e-2`.
pub fn show_double(x: f64) -> String {
    show_real(
        x.is_sign_negative(),
        x == 0.0,
        x.is_nan(),
        x.is_infinite(),
        format!("{:e}", x.abs()),
    )
}

/// `show` for `Float`, using the shortest digits of the single-precision value.
pub fn show_float(x: f32) -> String {
    show_real(
        x.is_sign_negative(),
        x == 0.0,
        x.is_nan(),
        x.is_infinite(),
        format!("{:e}", x.abs()),
    )
}

/// `show` for `Rational`: `3 % 4`, `(-3) % 4`.
pub fn show_rational(r: Rational) -> String {
    if r.numerator < 0 {
        format!("({}) % {}", r.numerator, r.denominator)
    } else {
        format!("{} % {}", r.numerator, r.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case('a', "'a'")]
    #[case('\'', "'\\''")]
    #[case('"', "'\"'")]
    #[case('\n', "'\\n'")]
    #[case('\0', "'\\NUL'")]
    #[case('\u{1b}', "'\\ESC'")]
    #[case('\u{7f}', "'\\DEL'")]
    #[case('\\', "'\\\\'")]
    #[case('é', "'\\233'")]
    fn test_show_char(#[case] c: char, #[case] expected: &str) {
        assert_eq!(show_char(c), expected);
    }

    #[rstest]
    #[case("hello", "\"hello\"")]
    #[case("say \"hi\"", "\"say \\\"hi\\\"\"")]
    #[case("tab\there", "\"tab\\there\"")]
    #[case("\u{e9}1", "\"\\233\\&1\"")]
    #[case("\u{e}H", "\"\\SO\\&H\"")]
    #[case("\u{e}I", "\"\\SOI\"")]
    #[case("'", "\"'\"")]
    fn test_show_string(#[case] s: &str, #[case] expected: &str) {
        assert_eq!(show_string(s), expected);
    }

    #[rstest]
    #[case(0.0, "0.0")]
    #[case(-0.0, "-0.0")]
    #[case(1.0, "1.0")]
    #[case(0.1, "0.1")]
    #[case(1.5, "1.5")]
    #[case(-2.25, "-2.25")]
    #[case(100.0, "100.0")]
    #[case(1234567.0, "1234567.0")]
    #[case(1.0e7, "1.0e7")]
    #[case(12345678.9, "1.23456789e7")]
    #[case(0.01, "1.0e-2")]
    #[case(0.015, "1.5e-2")]
    #[case(f64::INFINITY, "Infinity")]
    fn test_show_double(#[case] x: f64, #[case] expected: &str) {
        assert_eq!(show_double(x), expected);
    }

    #[test]
    fn test_show_float_uses_single_precision_digits() {
        assert_eq!(show_float(0.1), "0.1");
        assert_eq!(show_float(3.25), "3.25");
    }

    #[test]
    fn test_show_rational() {
        assert_eq!(show_rational(Rational::new(1, 3)), "1 % 3");
        assert_eq!(show_rational(Rational::new(-1, 3)), "(-1) % 3");
    }
}
