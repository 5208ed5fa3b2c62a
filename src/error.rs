use std::io;

/// Errors surfaced by numeral conversion and table loading.
///
/// Text transformations never fail on unknown characters; they pass them
/// through. Only numeral conversion, unsupported pinyin modes and data
/// loading report errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported numeric input: {0:?}")]
    InvalidInputType(String),

    #[error("integer part has {digits} digits, at most 16 are supported")]
    MagnitudeOverflow { digits: usize },

    #[error("cannot parse Chinese numeral: {0:?}")]
    UnparseableNumeral(String),

    #[error("empty input")]
    EmptyInput,

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unrecognized character table format")]
    UnrecognizedTableFormat,
}

pub type Result<T> = std::result::Result<T, Error>;
