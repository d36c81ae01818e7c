use thiserror::Error;

/// Error type for access-token operations.
///
/// `Expired` is the one routine failure: a well-formed, correctly signed
/// token whose lifetime has simply passed. It is kept distinct from
/// `InvalidSignature` (tampering or wrong secret) and `Malformed`
/// (undecodable token or unparseable subject) so callers can log the real
/// cause before collapsing all three into a uniform unauthorized response.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}
