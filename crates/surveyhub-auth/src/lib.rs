//! # Surveyhub Auth
//!
//! Token issuance and verification for the Surveyhub API.
//!
//! Identity tokens are HS256 JWTs signed with a process-wide secret and
//! expiring one hour after issuance (configurable). The claim payload is a
//! required `email` plus whatever else the caller submitted; extra fields
//! ride along unvalidated and come back out on verification.
//!
//! # Example
//!
//! ```ignore
//! use surveyhub_auth::{issue_token, verify_token};
//! use surveyhub_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = issue_token("user@example.com", Default::default(), &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.email, "user@example.com");
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{issue_token, verify_token};
