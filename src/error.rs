use std::fmt;
use std::io;

/// Errors surfaced by the host layers (word-list loading, argument
/// validation). The solver core itself never fails: absence of a ladder
/// is data, not an error.
#[derive(Debug)]
pub enum LadderError {
    Io(io::Error),
    InvalidInput(&'static str),
}

pub type Result<T> = std::result::Result<T, LadderError>;

impl fmt::Display for LadderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LadderError::Io(e) => write!(f, "io error: {}", e),
            LadderError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
        }
    }
}

impl std::error::Error for LadderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LadderError::Io(e) => Some(e),
            LadderError::InvalidInput(_) => None,
        }
    }
}

impl From<io::Error> for LadderError {
    fn from(e: io::Error) -> Self {
        LadderError::Io(e)
    }
}
