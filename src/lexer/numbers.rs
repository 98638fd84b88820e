use std::cmp::Ordering;
use std::fmt::Display;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::Span;

/// A decoded numeric value. The variant is decided once at parse time
/// (a literal with a decimal point is float-typed) and again at
/// normalization time, when a scaled product that is a whole number
/// collapses to the integer variant.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i128),
    Float(f64),
}

/// A literal recognized by the number grammar: its byte span in the
/// source text plus its decoded value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericLiteral {
    pub span: Span,
    pub value: Number,
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }

    /// Whether this value carries the integer variant.
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Multiply by 10^`exp`, collapsing whole products to the integer
    /// variant. Uses exact decimal arithmetic while the operands fit
    /// and degrades to f64 beyond that range.
    pub(crate) fn scale_by_pow10(self, exp: i32) -> Number {
        if let Number::Int(n) = self {
            if exp >= 0 {
                if let Some(product) = pow10_i128(exp).and_then(|m| n.checked_mul(m)) {
                    return Number::Int(product);
                }
            }
        }

        let exact = match self {
            Number::Int(n) => Decimal::from_i128(n),
            Number::Float(f) => Decimal::from_f64(f),
        };
        if let (Some(mantissa), Some(multiplier)) = (exact, pow10_decimal(exp)) {
            if let Some(product) = mantissa.checked_mul(multiplier) {
                return Number::from_decimal(product);
            }
        }

        normalized_f64(self.as_f64() * 10f64.powi(exp))
    }

    fn from_decimal(value: Decimal) -> Number {
        if value.fract().is_zero() {
            match value.normalize().to_i128() {
                Some(n) => Number::Int(n),
                None => Number::Float(value.to_f64().unwrap_or_default()),
            }
        } else {
            Number::Float(value.to_f64().unwrap_or_default())
        }
    }
}

/// Decode a grammar-matched literal, stripping comma grouping. A '.'
/// in the literal forces the float variant; integers wider than i128
/// degrade to float.
pub(crate) fn parse_number(raw: &str) -> Number {
    let clean = raw.replace(',', "");
    if clean.contains('.') {
        Number::Float(clean.parse().unwrap_or(f64::NAN))
    } else {
        match clean.parse::<i128>() {
            Ok(n) => Number::Int(n),
            Err(_) => Number::Float(clean.parse().unwrap_or(f64::INFINITY)),
        }
    }
}

fn pow10_i128(exp: i32) -> Option<i128> {
    10i128.checked_pow(u32::try_from(exp).ok()?)
}

fn pow10_decimal(exp: i32) -> Option<Decimal> {
    if exp >= 0 {
        let mut multiplier = Decimal::ONE;
        for _ in 0..exp {
            multiplier = multiplier.checked_mul(Decimal::TEN)?;
        }
        Some(multiplier)
    } else if exp >= -28 {
        Some(Decimal::new(1, exp.unsigned_abs()))
    } else {
        None
    }
}

fn normalized_f64(value: f64) -> Number {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i128::MAX as f64 {
        Number::Int(value as i128)
    } else {
        Number::Float(value)
    }
}

// Cross-variant comparisons are by numeric value, so Int(5) equals
// Float(5.0); variant identity is checked with is_integer.
impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}
