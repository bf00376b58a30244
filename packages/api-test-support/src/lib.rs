//! API test support utilities
//!
//! This crate provides utilities shared by the API's integration tests:
//! unified logging initialization, unique test data, and error body assertions.

pub mod error_body;
pub mod logging;
pub mod unique_helpers;
