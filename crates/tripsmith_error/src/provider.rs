//! Provider error types and retry classification.

/// Provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProviderErrorKind {
    /// API key not found for the selected provider
    MissingApiKey,
    /// Credentials rejected by the backend
    Authentication(String),
    /// Backend rejected the request body
    InvalidRequest(String),
    /// HTTP error with status code and message
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Connection-level failure
    Network(String),
    /// Request timed out in transport
    Timeout(String),
    /// Response body could not be decoded
    ResponseDecode(String),
    /// Backend returned no content
    EmptyResponse,
}

impl std::fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderErrorKind::MissingApiKey => {
                write!(f, "API key not configured for selected provider")
            }
            ProviderErrorKind::Authentication(msg) => {
                write!(f, "Authentication failed: {}", msg)
            }
            ProviderErrorKind::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ProviderErrorKind::HttpError {
                status_code,
                message,
            } => write!(f, "HTTP {} error: {}", status_code, message),
            ProviderErrorKind::Network(msg) => write!(f, "Network error: {}", msg),
            ProviderErrorKind::Timeout(msg) => write!(f, "Request timed out: {}", msg),
            ProviderErrorKind::ResponseDecode(msg) => {
                write!(f, "Failed to decode response: {}", msg)
            }
            ProviderErrorKind::EmptyResponse => write!(f, "Backend returned no content"),
        }
    }
}

impl ProviderErrorKind {
    /// Check if this error type should be retried.
    ///
    /// Rate limiting, transient unavailability, and timeouts are
    /// retryable. Credential and request-shape failures are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderErrorKind::HttpError { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            ProviderErrorKind::Network(_) => true,
            ProviderErrorKind::Timeout(_) => true,
            _ => false,
        }
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use tripsmith_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("API key"));
/// ```
#[derive(Debug, Clone)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Provider Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ProviderError {}

/// Trait for errors that support retry logic.
///
/// Transient errors like 503 (service unavailable), 429 (rate limit),
/// or network timeouts should return true. Permanent errors like 401
/// (unauthorized) or 400 (bad request) should return false.
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for ProviderError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
