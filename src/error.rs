use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The normalizer found no usable ingredient text.
    ///
    /// Distinct from a clean scan: nothing was analyzed, so nothing can be
    /// called safe.
    #[error("no ingredients detected in input")]
    EmptyInput,

    #[error("restriction term '{term}' has no match patterns")]
    EmptyTerm { term: String },

    #[error("invalid term dictionary: {0}")]
    Dictionary(#[source] serde_json::Error),

    #[error("invalid profile document: {0}")]
    Profile(#[source] serde_json::Error),

    #[error("invalid menu document: {0}")]
    Menu(#[source] serde_json::Error),
}
