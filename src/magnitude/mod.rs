//! Magnitude resolver.
//!
//! This module runs ordered recognition passes over one text, each
//! detecting a magnitude-indicating construct and scaling the literal
//! it governs:
//!
//! - Scientific notation ("1.23e4")
//! - Single-letter suffixes ("200M") with identifier and unit guards
//! - The "MM" millions abbreviation
//! - Spelled-out words ("5.2 million", "1(thousand)")
//! - Scoped parenthetical qualifiers ("(in millions)", bounded to the
//!   current sentence or line)
//! - An unscaled fallback for every literal left over
//!
//! A consumption mask over the text guarantees each byte is attributed
//! to at most one resolved number; earlier passes claim first and
//! their claims are final.

pub mod magnitude;
pub mod mask;
pub mod table;
