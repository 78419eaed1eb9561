use std::error::Error;

use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the bearer token. Session handling is the
    /// caller's concern; nothing below the CLI interprets this.
    #[display("Session expired. Please log in again.")]
    SessionExpired,

    #[display("Request failed: {}", _0)]
    Transport(String),

    /// Error message returned by the wallet service, passed through as-is.
    #[display("{}", _0)]
    Server(String),

    #[display("Malformed response: {}", _0)]
    Decode(String),
}

impl Error for ApiError {}
