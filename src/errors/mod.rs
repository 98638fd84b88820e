//! Error types for the document-reading glue.
//!
//! The extraction core has no error paths by design: text either
//! matches a pattern or it does not, and non-matching input simply
//! contributes no literal. Only the surrounding document I/O can fail,
//! and those failures carry their source error.

pub mod errors;
