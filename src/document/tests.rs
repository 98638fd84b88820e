//! Unit tests for document paging and aggregation.

use crate::document::document::{
    largest_number, largest_scaled_number, PageSource, TextDocument,
};
use crate::lexer::numbers::Number;

#[test]
fn test_form_feed_page_split() {
    let document = TextDocument::from_text("page one 5\x0cpage two 9");
    assert_eq!(document.page_count(), 2);
    assert_eq!(document.extract_text(0).as_deref(), Some("page one 5"));
    assert_eq!(document.extract_text(1).as_deref(), Some("page two 9"));
    assert_eq!(document.extract_text(2), None);
}

#[test]
fn test_single_page_without_form_feed() {
    let document = TextDocument::from_text("just one page");
    assert_eq!(document.page_count(), 1);
}

#[test]
fn test_largest_plain_number() {
    let document = TextDocument::from_text("has 10 and 999999\x0cand 42");
    assert_eq!(largest_number(&document), Some(Number::Int(999_999)));
}

#[test]
fn test_largest_scaled_number() {
    let document =
        TextDocument::from_text("body mentions 2025 figures\x0ctotal of 1.7308 billion units");
    assert_eq!(
        largest_scaled_number(&document),
        Some(Number::Int(1_730_800_000))
    );
}

#[test]
fn test_plain_and_scaled_disagree() {
    // the plain fold sees 4874 as the winner; the scaled fold sees the
    // qualified figure
    let document = TextDocument::from_text("items 4874 and then 3.5 in thousands");
    assert_eq!(largest_number(&document), Some(Number::Int(4874)));
    assert_eq!(largest_scaled_number(&document), Some(Number::Int(4874)));

    let document = TextDocument::from_text("then 3.5 in thousands only");
    assert_eq!(largest_number(&document), Some(Number::Float(3.5)));
    assert_eq!(largest_scaled_number(&document), Some(Number::Int(3500)));
}

#[test]
fn test_missing_and_empty_pages_are_tolerated() {
    struct Sparse;

    impl PageSource for Sparse {
        fn page_count(&self) -> usize {
            3
        }

        fn extract_text(&self, page: usize) -> Option<String> {
            match page {
                0 => None,
                1 => Some(String::new()),
                _ => Some("only 8 here".to_string()),
            }
        }
    }

    assert_eq!(largest_scaled_number(&Sparse), Some(Number::Int(8)));
    assert_eq!(largest_number(&Sparse), Some(Number::Int(8)));
}

#[test]
fn test_no_numbers_anywhere() {
    let document = TextDocument::from_text("nothing\x0cat all");
    assert_eq!(largest_number(&document), None);
    assert_eq!(largest_scaled_number(&document), None);
}
