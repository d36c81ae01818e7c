use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

/// Raw entropy per token, before hex encoding.
const TOKEN_BYTES: usize = 32;

/// Error type for opaque token generation.
#[derive(Debug, Clone, Error)]
pub enum OpaqueTokenError {
    #[error("Secure random source unavailable: {0}")]
    EntropyUnavailable(String),
}

/// Generator for opaque credentials (refresh tokens).
///
/// Tokens are 32 bytes from the OS CSPRNG, hex-encoded to 64 characters.
/// They carry no embedded semantics; all validity (owner, expiry,
/// revocation) is looked up in the store by exact value.
pub struct OpaqueTokenGenerator;

impl OpaqueTokenGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Produce a fresh opaque token.
    ///
    /// # Errors
    /// * `EntropyUnavailable` - The OS random source failed. Fatal for the
    ///   current operation; callers must not retry.
    pub fn generate(&self) -> Result<String, OpaqueTokenError> {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| OpaqueTokenError::EntropyUnavailable(e.to_string()))?;

        Ok(hex::encode(bytes))
    }
}

impl Default for OpaqueTokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}
