use lazy_static::lazy_static;
use regex::Regex;

use crate::lexer::lexer::{literals, NUMBER, NUMBER_PATTERN};
use crate::lexer::numbers::{parse_number, Number};
use crate::Span;

use super::mask::ConsumptionMask;
use super::table::{word_token_pattern, MAGNITUDE_LOOKUP};

lazy_static! {
    static ref SCIENTIFIC: Regex =
        Regex::new(&format!(r"({})[eE]([+-]?[0-9]+)", NUMBER_PATTERN)).unwrap();
    static ref LETTER_SUFFIX: Regex =
        Regex::new(&format!(r"({})[ \t]*,?[ \t]*([kKmMbBtT])", NUMBER_PATTERN)).unwrap();
    static ref MM_SUFFIX: Regex =
        Regex::new(&format!(r"({})\s+[Mm][Mm]", NUMBER_PATTERN)).unwrap();
    static ref WORD_SUFFIX: Regex = Regex::new(&format!(
        r"(?i)({})\s*,?\s*\(?\s*({})s?\)?",
        NUMBER_PATTERN,
        word_token_pattern()
    ))
    .unwrap();
    static ref QUALIFIER: Regex =
        Regex::new(&format!(r"(?i)\(\s*({})s?\s*\)", word_token_pattern())).unwrap();
    static ref IDENTIFIER_PREFIX: Regex = Regex::new(r"[A-Z][a-z]*\s+$").unwrap();
}

pub(crate) type PassHandler = fn(&mut Extraction<'_>, &Regex);

/// One recognition pass: the pattern it scans the whole text for and
/// the handler that vets candidates and claims the spans it resolves.
pub(crate) struct MagnitudePass {
    regex: &'static Regex,
    handler: PassHandler,
}

/// Per-call resolver state: the input text, the consumption mask over
/// its bytes, and the values resolved so far.
pub(crate) struct Extraction<'a> {
    text: &'a str,
    mask: ConsumptionMask,
    resolved: Vec<Number>,
}

/// Run the recognition passes in priority order and return the scaled
/// values. Earlier passes claim their spans first; a claimed span is
/// never revisited by a later pass.
pub fn extract_numbers_with_magnitude(text: &str) -> Vec<Number> {
    let passes = [
        MagnitudePass { regex: &*SCIENTIFIC, handler: scientific_handler },
        MagnitudePass { regex: &*LETTER_SUFFIX, handler: letter_suffix_handler },
        MagnitudePass { regex: &*MM_SUFFIX, handler: mm_handler },
        MagnitudePass { regex: &*WORD_SUFFIX, handler: word_handler },
        MagnitudePass { regex: &*QUALIFIER, handler: scoped_qualifier_handler },
        MagnitudePass { regex: &*NUMBER, handler: fallback_handler },
    ];

    let mut extraction = Extraction::new(text);
    for pass in &passes {
        (pass.handler)(&mut extraction, pass.regex);
    }
    extraction.resolved
}

impl<'a> Extraction<'a> {
    fn new(text: &'a str) -> Extraction<'a> {
        Extraction {
            text,
            mask: ConsumptionMask::new(text.len()),
            resolved: Vec::new(),
        }
    }

    /// Claim `span` and record its resolved value.
    fn emit(&mut self, span: Span, value: Number) {
        self.mask.claim(span);
        self.resolved.push(value);
    }

    fn char_before(&self, at: usize) -> Option<char> {
        self.text[..at].chars().next_back()
    }

    fn char_after(&self, at: usize) -> Option<char> {
        self.text[at..].chars().next()
    }

    /// OCR artifacts embed digit runs inside words ("M4a.i4n7t9enance");
    /// a letter hard against the match boundary disqualifies it.
    fn letter_adjacent_before(&self, at: usize) -> bool {
        self.char_before(at).is_some_and(|c| c.is_alphabetic())
    }

    fn letter_adjacent_after(&self, at: usize) -> bool {
        self.char_after(at).is_some_and(|c| c.is_alphabetic())
    }

    /// A capitalized word right before the literal marks an identifier
    /// ("Fund 9B", "Model 3T"), not a magnitude expression.
    fn identifier_before(&self, at: usize) -> bool {
        let mut from = at.saturating_sub(20);
        while !self.text.is_char_boundary(from) {
            from += 1;
        }
        IDENTIFIER_PREFIX.is_match(&self.text[from..at])
    }
}

fn scientific_handler(extraction: &mut Extraction<'_>, regex: &Regex) {
    let text = extraction.text;
    for caps in regex.captures_iter(text) {
        let Some(m) = caps.get(0) else { continue };
        let span = Span::new(m.start(), m.end());
        if !extraction.mask.is_free(span) {
            continue;
        }
        if extraction.letter_adjacent_before(span.start)
            || extraction.letter_adjacent_after(span.end)
        {
            continue;
        }
        let value = parse_number(&caps[1]).scale_by_pow10(parse_exponent(&caps[2]));
        extraction.emit(span, value);
    }
}

fn letter_suffix_handler(extraction: &mut Extraction<'_>, regex: &Regex) {
    let text = extraction.text;
    for caps in regex.captures_iter(text) {
        let Some(m) = caps.get(0) else { continue };
        let span = Span::new(m.start(), m.end());
        if !extraction.mask.is_free(span) {
            continue;
        }
        // A trailing letter, digit, ')' or '.' marks a unit ("3.5mm"),
        // a list item or a section number ("3.3 T.")
        if extraction
            .char_after(span.end)
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == ')' || c == '.')
        {
            continue;
        }
        if extraction.identifier_before(span.start)
            || extraction.letter_adjacent_before(span.start)
        {
            continue;
        }
        let Some(exp) = MAGNITUDE_LOOKUP.get(caps[2].to_lowercase().as_str()) else {
            continue;
        };
        let value = parse_number(&caps[1]).scale_by_pow10(*exp);
        extraction.emit(span, value);
    }
}

fn mm_handler(extraction: &mut Extraction<'_>, regex: &Regex) {
    let text = extraction.text;
    for caps in regex.captures_iter(text) {
        let Some(m) = caps.get(0) else { continue };
        let span = Span::new(m.start(), m.end());
        if !extraction.mask.is_free(span) {
            continue;
        }
        if extraction
            .char_after(span.end)
            .is_some_and(|c| c.is_ascii_alphabetic())
        {
            continue;
        }
        let value = parse_number(&caps[1]).scale_by_pow10(6);
        extraction.emit(span, value);
    }
}

fn word_handler(extraction: &mut Extraction<'_>, regex: &Regex) {
    let text = extraction.text;
    for caps in regex.captures_iter(text) {
        let Some(m) = caps.get(0) else { continue };
        let span = Span::new(m.start(), m.end());
        if !extraction.mask.is_free(span) {
            continue;
        }
        // the word must close the phrase: whitespace, end of text or
        // sentence punctuation after it
        if !extraction
            .char_after(span.end)
            .map_or(true, |c| c.is_whitespace() || c == ',' || c == '.')
        {
            continue;
        }
        let Some(exp) = MAGNITUDE_LOOKUP.get(caps[2].to_lowercase().as_str()) else {
            continue;
        };
        let value = parse_number(&caps[1]).scale_by_pow10(*exp);
        extraction.emit(span, value);
    }
}

/// A standalone parenthetical qualifier scales every still-unclaimed
/// literal between the nearest preceding sentence/line boundary and
/// the qualifier itself. It never reaches across that boundary.
fn scoped_qualifier_handler(extraction: &mut Extraction<'_>, regex: &Regex) {
    let text = extraction.text;
    for caps in regex.captures_iter(text) {
        let Some(exp) = MAGNITUDE_LOOKUP.get(caps[1].to_lowercase().as_str()) else {
            continue;
        };
        let Some(m) = caps.get(0) else { continue };
        let group_start = find_group_start(text, m.start());
        for literal in literals(&text[group_start..m.start()]) {
            let span = Span::new(
                group_start + literal.span.start,
                group_start + literal.span.end,
            );
            if !extraction.mask.is_free(span) {
                continue;
            }
            let value = literal.value.scale_by_pow10(*exp);
            extraction.emit(span, value);
        }
    }
}

fn fallback_handler(extraction: &mut Extraction<'_>, regex: &Regex) {
    let text = extraction.text;
    for m in regex.find_iter(text) {
        let span = Span::new(m.start(), m.end());
        if !extraction.mask.is_free(span) {
            continue;
        }
        extraction.emit(span, parse_number(m.as_str()));
    }
}

/// Start of the group containing `at`: one past the nearest preceding
/// sentence or line boundary, or the start of the text.
fn find_group_start(text: &str, at: usize) -> usize {
    let head = &text[..at];
    ["\n", ". ", ".\t", "? ", "! "]
        .iter()
        .filter_map(|boundary| head.rfind(boundary))
        .max()
        .map_or(0, |found| found + 1)
}

/// Exponent digit runs can outrun i32 in OCR noise; saturate instead
/// of failing the match.
fn parse_exponent(raw: &str) -> i32 {
    raw.parse()
        .unwrap_or(if raw.starts_with('-') { i32::MIN } else { i32::MAX })
}
