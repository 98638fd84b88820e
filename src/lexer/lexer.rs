use lazy_static::lazy_static;
use regex::Regex;

use crate::Span;

use super::numbers::{parse_number, Number, NumericLiteral};

/// The number grammar: optional minus sign, either comma-grouped
/// thousands or a plain digit run, then an optional fraction.
pub(crate) const NUMBER_PATTERN: &str = r"-?(?:[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(?:\.[0-9]+)?";

lazy_static! {
    pub(crate) static ref NUMBER: Regex = Regex::new(NUMBER_PATTERN).unwrap();
}

/// Scan `text` for numeric literals, left to right. Duplicate values
/// at distinct spans are each emitted; text with no numeric substrings
/// yields an empty vec.
pub fn literals(text: &str) -> Vec<NumericLiteral> {
    NUMBER
        .find_iter(text)
        .map(|m| NumericLiteral {
            span: Span::new(m.start(), m.end()),
            value: parse_number(m.as_str()),
        })
        .collect()
}

/// Plain extraction: literal values in appearance order, with no
/// magnitude interpretation.
pub fn extract_numbers(text: &str) -> Vec<Number> {
    literals(text).into_iter().map(|literal| literal.value).collect()
}
