//! Helpers for building the service in tests.

pub mod app_builder;

pub use app_builder::{create_test_app, TestAppBuilder};

use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Secret shared by test states; never the production default.
pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";

/// AppState signed with [`TEST_JWT_SECRET`] and default limits.
pub fn create_test_state() -> AppState {
    AppState::new(SecurityConfig::new(TEST_JWT_SECRET.as_bytes()))
}
