//! Unified error system for the shift marketplace
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ErrorBody`]: JSON error body (`{"error": "..."}`)
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Shift errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::ShiftNotFound);
//! assert_eq!(err.message, "Shift not found");
//!
//! let err = AppError::invalid_transition("Shift is not pending")
//!     .with_detail("status", "open");
//!
//! let body = ErrorBody::from(&err);
//! assert_eq!(body.error, "Shift is not pending");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{AppError, AppResult, ErrorBody};
