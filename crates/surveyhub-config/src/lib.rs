//! # Surveyhub Config
//!
//! Configuration types for the Surveyhub API, loaded from environment
//! variables:
//!
//! - [`jwt`]: JWT signing configuration (`JWT_SECRET`, `JWT_ACCESS_EXPIRY`)
//! - [`cors`]: CORS configuration (`ALLOWED_ORIGINS`)
//! - [`server`]: Listen configuration (`PORT`)
//!
//! # Example
//!
//! ```ignore
//! use surveyhub_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
