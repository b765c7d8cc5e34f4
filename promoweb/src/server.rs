//! Web server module for the promotion demo.
//!
//! Serves exactly one route: `GET /` renders the landing page for the
//! environment and version captured in `CONFIG`. Requests share no mutable
//! state, so there is nothing to coordinate; everything beyond the handler
//! is left to axum's defaults.
//!
use axum::{Router, response::Html, routing::get};
use promotheme::{context::RenderContext, environment::Environment};

use crate::{
    config::{CONFIG, PORT},
    html,
};

/// Start the HTTP server and serve until the process is terminated
///
/// A bind failure (e.g. the port is already taken) panics and aborts
/// startup; there is no retry or recovery.
pub async fn run() {
    let app = Router::new().route("/", get(index_page));

    let addr = format!("0.0.0.0:{}", PORT)
        .parse::<std::net::SocketAddr>()
        .unwrap();

    let stage = Environment::from_name(&CONFIG.environment);
    println!("🚀 GitOps demo app listening at http://localhost:{}", PORT);
    println!("   🏷️ environment: {} ({})", stage.profile().display_name, stage.name());
    println!("   📦 version: {}", CONFIG.version);

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

/// Render the landing page for the configured environment and version
async fn index_page() -> Html<String> {
    let ctx = RenderContext::new(&CONFIG.environment, &CONFIG.version);
    Html(html::render_page(&ctx))
}
