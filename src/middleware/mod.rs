//! Middleware modules for request processing.
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. [`auth::AuthUser`] validates the JWT and extracts the claims
//! 3. On admin-only routes, [`role::RequireAdmin`] looks up the stored
//!    user by claim email and requires role `admin`
//! 4. Handler executes if all checks pass
//!
//! Each stage either continues with an enriched context or short-circuits
//! with its rejection response (401 for identity, 403 for role).

pub mod auth;
pub mod role;
