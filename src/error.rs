/// Error types for the idiom engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Language code is well-formed but not one we know about
    UnsupportedLanguage(String),
    /// Language code contains characters no language code can have
    InvalidLanguage(String),
    /// Rejected administrative idiom input (empty phrase or translation)
    InvalidIdiom(String),
    /// Idiom table could not be read or parsed
    DataError(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::UnsupportedLanguage(code) => write!(f, "Unsupported language: {}", code),
            CoreError::InvalidLanguage(msg) => write!(f, "Invalid language code: {}", msg),
            CoreError::InvalidIdiom(msg) => write!(f, "Invalid idiom: {}", msg),
            CoreError::DataError(msg) => write!(f, "Idiom data error: {}", msg),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::DataError(err.to_string())
    }
}

/// Result type for engine operations
pub type CoreResult<T> = Result<T, CoreError>;
