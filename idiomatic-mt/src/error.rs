use idiomatic::CoreError;

/// Error types for translation providers and their configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtError {
    /// Missing or malformed configuration (endpoint URL, numeric setting)
    ConfigError(String),
    /// Transport failure: connection refused, DNS, TLS
    NetworkError(String),
    /// The provider did not answer within the configured timeout
    Timeout(String),
    /// The provider answered with a non-2xx status
    HttpStatus { status: u16, body: String },
    /// The provider answered 2xx but the body was not the expected shape
    InvalidResponse(String),
    /// Error during translation phase
    TranslationError(String),
    /// Unknown or malformed language code
    InvalidLocale(String),
}

impl MtError {
    /// Whether the next configured endpoint of the same provider should be
    /// tried after this failure.
    ///
    /// Auth failures, rate limiting, server errors, timeouts, transport
    /// errors and malformed responses are endpoint-specific. Any other client
    /// error (say 400 for an unsupported language pair) would fail the same
    /// way everywhere.
    pub fn allows_endpoint_fallback(&self) -> bool {
        match self {
            MtError::HttpStatus { status, .. } => {
                matches!(status, 401 | 403 | 429) || (500..600).contains(status)
            }
            MtError::Timeout(_) | MtError::NetworkError(_) | MtError::InvalidResponse(_) => true,
            MtError::ConfigError(_) | MtError::TranslationError(_) | MtError::InvalidLocale(_) => {
                false
            }
        }
    }
}

impl std::fmt::Display for MtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MtError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MtError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            MtError::Timeout(msg) => write!(f, "Timed out: {}", msg),
            MtError::HttpStatus { status, body } => write!(f, "HTTP {}: {}", status, body),
            MtError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            MtError::TranslationError(msg) => write!(f, "Translation error: {}", msg),
            MtError::InvalidLocale(msg) => write!(f, "Invalid locale: {}", msg),
        }
    }
}

impl std::error::Error for MtError {}

impl From<reqwest::Error> for MtError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MtError::Timeout(err.to_string())
        } else if err.is_decode() {
            MtError::InvalidResponse(err.to_string())
        } else {
            MtError::NetworkError(err.to_string())
        }
    }
}

impl From<CoreError> for MtError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnsupportedLanguage(_) | CoreError::InvalidLanguage(_) => {
                MtError::InvalidLocale(err.to_string())
            }
            CoreError::InvalidIdiom(_) | CoreError::DataError(_) => {
                MtError::ConfigError(err.to_string())
            }
        }
    }
}

/// Result type for MT operations
pub type MtResult<T> = Result<T, MtError>;
