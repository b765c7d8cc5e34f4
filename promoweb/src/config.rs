//! Configuration loader and defaults for the promoweb server.
//!
//! Exposes a lazily-initialized `CONFIG` which captures the two promotion
//! inputs from environment variables once at startup: the version string
//! being deployed (`APP_VERSION`) and the name of the environment it is
//! deployed to (`APP_ENVIRONMENT`). Both have defaults so the binary runs
//! with no configuration at all.
//!
use std::env;

use once_cell::sync::Lazy;

/// Version shown when `APP_VERSION` is unset
const DEFAULT_VERSION: &str = "1.0.0";

/// Environment assumed when `APP_ENVIRONMENT` is unset
const DEFAULT_ENVIRONMENT: &str = "dev";

/// TCP port the HTTP listener binds on
pub const PORT: u16 = 8080;

/// Application configuration captured from the process environment
pub struct Config {
    /// Version string, displayed verbatim on the page
    pub version: String,
    /// Configured environment name, resolved to a stage per request
    pub environment: String,
}

/// Global application configuration instance, lazily initialized
pub static CONFIG: Lazy<Config> = Lazy::new(|| Config {
    version: env::var("APP_VERSION").unwrap_or_else(|_| DEFAULT_VERSION.into()),
    environment: env::var("APP_ENVIRONMENT").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.into()),
});
