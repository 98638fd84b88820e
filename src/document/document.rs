use std::fs;
use std::path::Path;

use crate::errors::errors::ExtractError;
use crate::lexer::lexer::extract_numbers;
use crate::lexer::numbers::Number;
use crate::magnitude::magnitude::extract_numbers_with_magnitude;

/// A page-oriented text supplier. Implementations decode whatever the
/// underlying document format is; a page with no extractable text
/// reports `None`.
pub trait PageSource {
    fn page_count(&self) -> usize;
    fn extract_text(&self, page: usize) -> Option<String>;
}

/// Pre-extracted document text, one page per form-feed-separated
/// section.
#[derive(Debug)]
pub struct TextDocument {
    pages: Vec<String>,
}

impl TextDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<TextDocument, ExtractError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ExtractError::DocumentRead {
            path: path.display().to_string(),
            source,
        })?;
        Ok(TextDocument::from_text(&contents))
    }

    pub fn from_text(text: &str) -> TextDocument {
        TextDocument {
            pages: text.split('\x0c').map(str::to_string).collect(),
        }
    }
}

impl PageSource for TextDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn extract_text(&self, page: usize) -> Option<String> {
        self.pages.get(page).cloned()
    }
}

/// Largest plain literal across all pages, magnitudes ignored.
pub fn largest_number<S: PageSource>(source: &S) -> Option<Number> {
    largest_by(source, extract_numbers)
}

/// Largest magnitude-adjusted value across all pages.
pub fn largest_scaled_number<S: PageSource>(source: &S) -> Option<Number> {
    largest_by(source, extract_numbers_with_magnitude)
}

fn largest_by<S: PageSource>(source: &S, extract: fn(&str) -> Vec<Number>) -> Option<Number> {
    let mut largest: Option<Number> = None;
    for page in 0..source.page_count() {
        let Some(text) = source.extract_text(page) else {
            continue;
        };
        for number in extract(&text) {
            if largest.map_or(true, |current| number > current) {
                largest = Some(number);
            }
        }
    }
    largest
}
