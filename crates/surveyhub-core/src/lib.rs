//! # Surveyhub Core
//!
//! Core types for the Surveyhub API.
//!
//! This crate provides the application error type used throughout the
//! workspace:
//!
//! - [`errors`]: [`AppError`] with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use surveyhub_core::AppError;
//!
//! let err = AppError::unauthorized("unauthorized access");
//! assert_eq!(err.status.as_u16(), 401);
//! ```

pub mod errors;

// Re-export commonly used types at crate root
pub use errors::AppError;
