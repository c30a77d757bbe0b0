//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure:
//! - Password hashing (Argon2id) and a configurable strength policy
//! - Signed, time-limited credential issuance and verification (JWT/HS256)
//!
//! Services own their persistence and orchestration; this crate stays below
//! that boundary so it can be reused without dragging a database along.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Strength Policy
//! ```
//! use auth::PasswordPolicy;
//!
//! let policy = PasswordPolicy::default();
//! assert!(policy.validate("Str0ng!Pw").is_ok());
//! assert!(policy.validate("weak").is_err());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{TokenCodec, TokenKind};
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec
//!     .issue("user123", TokenKind::Access, Duration::minutes(30))
//!     .unwrap();
//! let claims = codec.verify(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordPolicy;
pub use password::WeakPasswordError;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
pub use token::TokenKind;
pub use token::TokenRejection;
