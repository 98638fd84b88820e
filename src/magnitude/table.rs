use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Magnitude token (lower-cased) to power-of-ten exponent.
    pub static ref MAGNITUDE_LOOKUP: HashMap<&'static str, i32> = {
        let mut map = HashMap::new();
        // Thousands
        map.insert("k", 3);
        map.insert("thousand", 3);
        map.insert("in thousand", 3);
        // Millions
        map.insert("m", 6);
        map.insert("million", 6);
        map.insert("in million", 6);
        // Billions
        map.insert("b", 9);
        map.insert("billion", 9);
        map.insert("in billion", 9);
        // Trillions
        map.insert("t", 12);
        map.insert("trillion", 12);
        map.insert("in trillion", 12);
        map
    };
}

/// Word-magnitude tokens, "in x" variants first so the regex
/// alternation prefers them over the bare words they contain.
pub(crate) const WORD_TOKENS: [&str; 8] = [
    "in trillion",
    "in billion",
    "in million",
    "in thousand",
    "trillion",
    "billion",
    "million",
    "thousand",
];

pub(crate) fn word_token_pattern() -> String {
    WORD_TOKENS.join("|")
}
