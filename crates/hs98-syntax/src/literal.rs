use serde::{Deserialize, Serialize};

/// Exact fraction, as produced by parsing a floating literal such as `2.5e-3`.
///
/// Always in lowest terms with a positive denominator; deserialization
/// normalizes and rejects a zero denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRational")]
pub struct Rational {
    #[serde(serialize_with = "wide_int::serialize")]
    pub numerator: i128,
    #[serde(serialize_with = "wide_int::serialize")]
    pub denominator: i128,
}

impl Rational {
    /// Builds a fraction in lowest terms with a positive denominator.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero or the normalized numerator does not
    /// fit in an `i128`; see [`Rational::try_new`].
    pub fn new(numerator: i128, denominator: i128) -> Self {
        match Self::try_new(numerator, denominator) {
            Some(r) => r,
            None if denominator == 0 => panic!("rational with zero denominator"),
            None => panic!("rational {numerator} % {denominator} overflows i128"),
        }
    }

    /// `None` for a zero denominator or a result outside `i128`, such as
    /// `i128::MIN % -1`.
    pub fn try_new(numerator: i128, denominator: i128) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        let g = gcd(numerator.unsigned_abs(), denominator.unsigned_abs());
        let n = numerator.unsigned_abs() / g;
        let d = denominator.unsigned_abs() / g;
        let numerator = if (numerator < 0) != (denominator < 0) {
            0i128.checked_sub_unsigned(n)?
        } else {
            i128::try_from(n).ok()?
        };
        Some(Self {
            numerator,
            denominator: i128::try_from(d).ok()?,
        })
    }

    pub fn from_integer(n: i128) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }

    pub fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

#[derive(Deserialize)]
struct RawRational {
    #[serde(deserialize_with = "wide_int::deserialize")]
    numerator: i128,
    #[serde(deserialize_with = "wide_int::deserialize")]
    denominator: i128,
}

impl TryFrom<RawRational> for Rational {
    type Error = String;

    fn try_from(raw: RawRational) -> Result<Self, String> {
        Rational::try_new(raw.numerator, raw.denominator).ok_or_else(|| {
            format!(
                "invalid rational {} % {}",
                raw.numerator, raw.denominator
            )
        })
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Literal {
    Char(char),
    String(String),
    Int(#[serde(with = "wide_int")] i128),
    Frac(Rational),
    /// Unboxed `'c'#`
    CharPrim(char),
    /// Unboxed `"s"#`
    StringPrim(String),
    /// Unboxed `1#`
    IntPrim(#[serde(with = "wide_int")] i128),
    /// Unboxed `1.0#`
    FloatPrim(Rational),
    /// Unboxed `1.0##`
    DoublePrim(Rational),
}

/// `i128` as a JSON number when it fits in 64 bits, otherwise as a decimal
/// string. Tagged enums buffer their content, and the buffer has no 128-bit
/// integers, so the plain derive cannot read these back.
mod wide_int {
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(n: &i128, serializer: S) -> Result<S::Ok, S::Error> {
        match i64::try_from(*n) {
            Ok(small) => serializer.serialize_i64(small),
            Err(_) => serializer.collect_str(n),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i128, D::Error> {
        deserializer.deserialize_any(WideIntVisitor)
    }

    struct WideIntVisitor;

    impl Visitor<'_> for WideIntVisitor {
        type Value = i128;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer or a decimal string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i128, E> {
            Ok(v.into())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i128, E> {
            Ok(v.into())
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<i128, E> {
            Ok(v)
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<i128, E> {
            i128::try_from(v).map_err(|_| E::custom(format!("integer {v} out of range")))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i128, E> {
            v.trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid integer {v:?}")))
        }
    }
}
