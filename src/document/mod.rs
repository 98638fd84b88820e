//! Document paging and aggregation glue.
//!
//! This module holds the thin layer between a document supplier and
//! the extraction core:
//!
//! - The `PageSource` trait that text-extraction collaborators
//!   implement
//! - `TextDocument`, a page source over pre-extracted plain text
//! - Largest-value folds across a document's pages
//!
//! Pages that yield no text count as "no literals found", never as an
//! error.

pub mod document;

#[cfg(test)]
mod tests;
