//! Error codes for the API.

pub mod error_code;

pub use error_code::ErrorCode;
