use std::fmt;

/// All errors that can occur while building datasets or training a model.
#[derive(Debug)]
pub enum RegressionError {
    /// Dataset or hyperparameters rejected before any arithmetic runs.
    InvalidInput(String),
    /// Failed to read or write a run file.
    Io(std::io::Error),
    /// A run file was not valid JSON or did not match the expected shape.
    Json(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RegressionError>;

impl RegressionError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl fmt::Display for RegressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for RegressionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<std::io::Error> for RegressionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for RegressionError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
