//! Credential primitives for the identity service
//!
//! - Password hashing and verification (Argon2id)
//! - Tenant-scoped JWT signing and decoding (HS256)
//! - Session token claims
//!
//! The service crate owns the domain rules (who may log in, where sessions
//! are stored); this crate only deals with bytes, hashes and signatures.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("secret1").unwrap();
//! assert!(hasher.verify("secret1", &hash).unwrap());
//! assert!(!hasher.verify("secret2", &hash).unwrap());
//! ```
//!
//! ## Tenant-scoped tokens
//! ```
//! use auth::{JwtError, JwtHandler, SessionClaims};
//!
//! let tenant_a = JwtHandler::new(b"tenant-a-secret").unwrap();
//! let tenant_b = JwtHandler::new(b"tenant-b-secret").unwrap();
//!
//! let claims = SessionClaims::new(1, "a@x.com", 1, chrono::Duration::hours(1));
//! let token = tenant_a.encode(&claims).unwrap();
//!
//! let decoded: SessionClaims = tenant_a.decode(&token).unwrap();
//! assert_eq!(decoded.uid, 1);
//! assert_eq!(
//!     tenant_b.decode::<SessionClaims>(&token),
//!     Err(JwtError::InvalidSignature)
//! );
//! ```

pub mod jwt;
pub mod password;

pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SessionClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;
