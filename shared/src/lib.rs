//! Shared types for the shift marketplace
//!
//! Wire models and the unified error system used by the server and its
//! tests.

pub mod error;
pub mod models;

pub use error::{AppError, AppResult, ErrorBody, ErrorCode};
pub use models::{Shift, ShiftStatus};
