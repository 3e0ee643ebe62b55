//! Data models shared between the server and its clients

pub mod shift;

pub use shift::{
    ApplyRequest, City, Industry, RESERVED_KEYS, Shift, ShiftCreate, ShiftDetails, ShiftFields,
    ShiftFilter, ShiftStatus,
};
