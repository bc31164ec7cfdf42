use thiserror::Error;

/// Error type for JWT operations.
///
/// Decoding failures are classified from the JWT library's error kind, so
/// callers can tell a structurally broken token from one that is merely
/// expired or signed with another key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Signing secret is empty")]
    EmptySecret,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed")]
    Malformed,

    #[error("Token is expired")]
    Expired,

    #[error("Token signature does not match")]
    InvalidSignature,

    #[error("Token is invalid: {0}")]
    Invalid(String),
}
