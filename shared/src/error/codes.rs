//! Unified error codes for the shift marketplace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Shift errors
//! - 9xxx: System errors

use std::fmt;

/// Unified error code enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Route does not exist
    NotFound = 3,
    /// Request body is not a JSON record
    InvalidRequest = 5,
    /// HTTP method not allowed on this route
    MethodNotAllowed = 9,

    // ==================== 4xxx: Shift ====================
    /// Shift does not exist
    ShiftNotFound = 4001,
    /// Shift status transition rejected by the lifecycle policy
    InvalidTransition = 4002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the client-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "Not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::MethodNotAllowed => "Method not allowed",

            ErrorCode::ShiftNotFound => "Shift not found",
            ErrorCode::InvalidTransition => "Shift status transition not allowed",

            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
