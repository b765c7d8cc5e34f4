//! promoweb crate entrypoint.
//!
//! Boots the Tokio runtime and hands off to the web server defined in the
//! `server` module. This file stays minimal; configuration capture lives
//! in `config` and the page template in `html`.
//!
/// HTTP server and request handling
mod server;
/// Configuration captured from the process environment
mod config;
/// Page template and rendering
mod html;

/// Entry point for the async Tokio runtime
#[tokio::main]
async fn main() {
    server::run().await;
}
