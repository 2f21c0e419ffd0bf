//! Environment configuration helpers.

use std::env;

/// Deployment environment name, from `APP_ENV`. Defaults to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}
