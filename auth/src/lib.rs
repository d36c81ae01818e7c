//! Authentication building blocks for the posting service.
//!
//! Provides the credential-handling primitives the HTTP service composes:
//! - Password hashing and verification (Argon2id)
//! - Signed access-token issuance and verification (HS256 JWT)
//! - Opaque token generation for refresh tokens
//! - Authorization-header parsing (`Bearer` / `ApiKey` schemes)
//!
//! The crate is deliberately stateless: the signing secret is injected at
//! construction and no component reads ambient configuration. Refresh-token
//! persistence and the login/refresh/revoke protocols live in the service
//! crate, which consumes these primitives through its own ports.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::AccessTokenCodec;
//! use chrono::Duration;
//! use uuid::Uuid;
//!
//! let codec = AccessTokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let subject = Uuid::new_v4();
//! let token = codec.issue(subject, Duration::hours(1)).unwrap();
//! assert_eq!(codec.verify(&token).unwrap(), subject);
//! ```
//!
//! ## Opaque Tokens
//! ```
//! use auth::OpaqueTokenGenerator;
//!
//! let token = OpaqueTokenGenerator::new().generate().unwrap();
//! assert_eq!(token.len(), 64);
//! ```

pub mod headers;
pub mod jwt;
pub mod opaque;
pub mod password;

// Re-export commonly used items
pub use headers::api_key;
pub use headers::bearer_token;
pub use headers::CredentialError;
pub use jwt::AccessClaims;
pub use jwt::AccessTokenCodec;
pub use jwt::TokenError;
pub use opaque::OpaqueTokenError;
pub use opaque::OpaqueTokenGenerator;
pub use password::PasswordError;
pub use password::PasswordHasher;
