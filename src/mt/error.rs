/// Error types for the translation pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtError {
    /// Reading standard input or spawning an external utility failed
    Io(String),
    /// An external utility ran but exited unsuccessfully
    ExternalCommand(String),
    /// A required external utility is not on `PATH`
    MissingDependency(String),
    /// HTTP transport failure (connect, TLS, timeout)
    Network(String),
    /// The API answered with a non-success status
    HttpStatus(String),
    /// The response body could not be read
    ResponseRead(String),
    /// The response body is not valid JSON
    Decode(String),
    /// The JSON does not have the expected nested array shape
    MalformedResponse(String),
    /// Language code rejected before sending the request
    InvalidLanguage(String),
    /// Invalid configuration value
    Config(String),
}

impl std::fmt::Display for MtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MtError::Io(msg) => write!(f, "I/O error: {}", msg),
            MtError::ExternalCommand(msg) => write!(f, "External command failed: {}", msg),
            MtError::MissingDependency(name) => {
                write!(f, "Required utility not found in PATH: {}", name)
            }
            MtError::Network(msg) => write!(f, "Network error: {}", msg),
            MtError::HttpStatus(msg) => write!(f, "{}", msg),
            MtError::ResponseRead(msg) => write!(f, "Failed to read response body: {}", msg),
            MtError::Decode(msg) => write!(f, "Failed to decode response: {}", msg),
            MtError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            MtError::InvalidLanguage(msg) => write!(f, "Invalid language code: {}", msg),
            MtError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for MtError {}

impl From<std::io::Error> for MtError {
    fn from(e: std::io::Error) -> Self {
        MtError::Io(e.to_string())
    }
}

impl From<reqwest::Error> for MtError {
    fn from(e: reqwest::Error) -> Self {
        MtError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for MtError {
    fn from(e: serde_json::Error) -> Self {
        MtError::Decode(e.to_string())
    }
}

/// Result type for translation operations
pub type MtResult<T> = Result<T, MtError>;
