//! Shared HTTP error classification for backend adapters.

use tripsmith_error::ProviderErrorKind;

/// Maps a reqwest transport failure to a provider error kind.
///
/// Transport timeouts surface as the retryable `Timeout` kind so a
/// caller-configured client timeout behaves like any transient fault.
pub(crate) fn classify_transport_error(err: &reqwest::Error) -> ProviderErrorKind {
    if err.is_timeout() {
        ProviderErrorKind::Timeout(err.to_string())
    } else {
        ProviderErrorKind::Network(err.to_string())
    }
}

/// Maps a non-success HTTP status to a provider error kind.
///
/// Credential and request-shape failures get their own non-retryable
/// kinds; everything else keeps its status code for the retryable-status
/// check in `ProviderErrorKind::is_retryable`.
pub(crate) fn classify_status(status_code: u16, message: String) -> ProviderErrorKind {
    match status_code {
        401 | 403 => ProviderErrorKind::Authentication(message),
        400 | 404 | 422 => ProviderErrorKind::InvalidRequest(message),
        _ => ProviderErrorKind::HttpError {
            status_code,
            message,
        },
    }
}
