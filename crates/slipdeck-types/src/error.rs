use std::fmt;

/// Result type for slipdeck-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the document layer
#[derive(Debug)]
pub enum Error {
    /// Document could not be parsed as a deck
    Parse(serde_json::Error),

    /// Document parsed but contains no slides
    EmptyDeck,

    /// Internal request for a slide outside the deck bounds.
    /// The public navigation API always clamps, so hitting this
    /// indicates a caller bug, not bad end-user input.
    SlideIndexOutOfRange { index: usize, total: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "Failed to parse deck: {}", err),
            Error::EmptyDeck => write!(f, "Deck contains no slides"),
            Error::SlideIndexOutOfRange { index, total } => {
                write!(f, "Slide index {} out of range (deck has {} slides)", index, total)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::EmptyDeck | Error::SlideIndexOutOfRange { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err)
    }
}
