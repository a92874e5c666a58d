//! Oracle transport and interpretation errors.
//!
//! None of these ever reach the game state machine: the facade absorbs them
//! into fallback data at its boundary.

use thiserror::Error;

/// Failure of one completion attempt against the oracle endpoint.
#[derive(Error, Debug)]
pub enum OracleError {
    /// The API key is unset, empty, or still the placeholder value; no
    /// network call was attempted.
    #[error("oracle API key is not configured")]
    Unconfigured,

    /// The request could not be sent or completed.
    #[error("oracle request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("oracle returned HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error envelope, or the raw body.
        message: String,
    },

    /// The response carried no text to interpret.
    #[error("oracle response contained no text")]
    EmptyResponse,

    /// The response body did not match the expected envelope.
    #[error("failed to parse oracle response: {0}")]
    MalformedResponse(String),
}
