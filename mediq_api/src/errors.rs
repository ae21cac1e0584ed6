//! Error types for the API client.

/// Errors that can occur when calling the clinic API.
///
/// Transport-level failures are kept distinguishable (timeout vs. connection
/// vs. bad status) so callers can log and test them, even when they
/// ultimately collapse the result to "not available".
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Connection-level failure: DNS, refused connection, TLS.
    #[error("transport error")]
    Transport,
    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,
    /// The API returned a non-success status with a body snippet.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body could not be parsed as the expected envelope.
    #[error("malformed response body")]
    Decode,
    /// A request URL could not be built from the configured base.
    #[error("invalid request URL")]
    InvalidUrl,
    /// A login response carried no session cookie.
    #[error("no session cookie in login response")]
    NoSession,
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Error::Timeout
        } else {
            Error::Transport
        }
    }
}
