use http::header::AUTHORIZATION;
use http::HeaderMap;
use thiserror::Error;

/// Error type for Authorization-header parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Missing Authorization header")]
    MissingAuthorization,

    #[error("Expected Authorization scheme: {expected}")]
    UnexpectedScheme { expected: &'static str },
}

/// Extract the value of a `Bearer` Authorization header.
///
/// Serves both signed access tokens and opaque refresh tokens; which one the
/// value is depends on the endpoint, and this function validates neither.
///
/// # Errors
/// * `MissingAuthorization` - No Authorization header present
/// * `UnexpectedScheme` - Header does not start with `Bearer `
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, CredentialError> {
    credential_with_scheme(headers, "Bearer ")
}

/// Extract the value of an `ApiKey` Authorization header.
///
/// # Errors
/// * `MissingAuthorization` - No Authorization header present
/// * `UnexpectedScheme` - Header does not start with `ApiKey `
pub fn api_key(headers: &HeaderMap) -> Result<&str, CredentialError> {
    credential_with_scheme(headers, "ApiKey ")
}

fn credential_with_scheme<'a>(
    headers: &'a HeaderMap,
    scheme: &'static str,
) -> Result<&'a str, CredentialError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or(CredentialError::MissingAuthorization)?;

    // Non-UTF8 header bytes cannot carry a valid credential either way
    let value = header
        .to_str()
        .map_err(|_| CredentialError::UnexpectedScheme { expected: scheme })?;

    value
        .strip_prefix(scheme)
        .ok_or(CredentialError::UnexpectedScheme { expected: scheme })
}
