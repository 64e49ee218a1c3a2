use std::fmt;
use std::io;

pub(crate) type FenceResult<T> = Result<T, Error>;

/// Errors that can occur while turning fenced code blocks into HTML
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The raw block was empty once trimmed.
    EmptyInput,

    /// The first line of the raw block does not start with the fence token
    /// of the family being processed.
    NotAFence,

    /// The language tag after the fence is not one we highlight.
    UnknownLanguage(String),

    /// An opening fence has no closing fence after it.
    /// Fatal for the rest of the document.
    #[allow(missing_docs)]
    UnterminatedBlock { start: usize, count: usize },

    /// The highlighting engine failed on an otherwise valid block, or could not be
    /// loaded at all.
    HighlightEngine(String),

    /// An I/O error occurred when reading a config file.
    Io(io::Error),

    /// JSON parsing failed when loading a config file.
    Json(serde_json::Error),

    /// A fence opener pattern failed to compile. Openers are built from the fixed
    /// language tags, so this does not happen with the builtin language set.
    InvalidPattern(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "code block is empty"),
            Error::NotAFence => write!(f, "code block does not start with a fence"),
            Error::UnknownLanguage(lang) => write!(f, "language '{}' not loaded", lang),
            Error::UnterminatedBlock { start, count } => write!(
                f,
                "code block at start {} (count: {}) has no closing fence",
                start, count
            ),
            Error::HighlightEngine(message) => write!(f, "highlighting failed: {}", message),
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Json(err) => write!(f, "JSON parsing error: {}", err),
            Error::InvalidPattern(message) => write!(f, "invalid fence pattern: {}", message),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::EmptyInput
            | Error::NotAFence
            | Error::UnknownLanguage(_)
            | Error::UnterminatedBlock { .. }
            | Error::HighlightEngine(_)
            | Error::InvalidPattern(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<giallo::Error> for Error {
    fn from(err: giallo::Error) -> Self {
        Error::HighlightEngine(err.to_string())
    }
}

impl From<onig::Error> for Error {
    fn from(err: onig::Error) -> Self {
        Error::InvalidPattern(err.to_string())
    }
}
