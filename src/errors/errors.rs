use thiserror::Error;

/// Errors raised by document-reading collaborators. Extraction itself
/// never fails; an unreadable document is the caller's problem to
/// surface.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to read document {path:?}")]
    DocumentRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
