//! Error types for the Tripsmith generation pipeline.
//!
//! This crate provides the foundation error types used throughout the
//! Tripsmith workspace: provider errors with retryability classification,
//! schema validation errors, configuration errors, and the terminal
//! generation error raised when every fallback tier has failed.

mod config;
mod generation;
mod provider;
mod schema;

pub use config::ConfigError;
pub use generation::{AttemptDiagnostic, TerminalGenerationError};
pub use provider::{ProviderError, ProviderErrorKind, RetryableError};
pub use schema::SchemaError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum TripsmithErrorKind {
    /// Backend invocation failed
    Provider(ProviderError),
    /// Model text was unparsable or shape-incomplete
    Schema(SchemaError),
    /// Configuration error
    Config(ConfigError),
    /// All fallback tiers exhausted
    Terminal(TerminalGenerationError),
}

impl std::fmt::Display for TripsmithErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripsmithErrorKind::Provider(e) => write!(f, "{}", e),
            TripsmithErrorKind::Schema(e) => write!(f, "{}", e),
            TripsmithErrorKind::Config(e) => write!(f, "{}", e),
            TripsmithErrorKind::Terminal(e) => write!(f, "{}", e),
        }
    }
}

/// Tripsmith error with kind discrimination.
#[derive(Debug)]
pub struct TripsmithError(Box<TripsmithErrorKind>);

impl TripsmithError {
    /// Create a new error from a kind.
    pub fn new(kind: TripsmithErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TripsmithErrorKind {
        &self.0
    }
}

impl std::fmt::Display for TripsmithError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tripsmith Error: {}", self.0)
    }
}

impl std::error::Error for TripsmithError {}

// Generic From implementation for any type that converts to TripsmithErrorKind
impl<T> From<T> for TripsmithError
where
    T: Into<TripsmithErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Tripsmith operations.
pub type TripsmithResult<T> = std::result::Result<T, TripsmithError>;
