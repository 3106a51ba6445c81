// foodform-server - serves the food form page and accepts submissions

pub mod handlers;
pub mod response_mode;

use axum::{routing::get, Router};
use foodform::Config;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tower_livereload::LiveReloadLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the router
pub fn app(state: AppState) -> Router {
    let live_reload = state.config.dev.live_reload;

    let app = Router::new()
        .route("/", get(handlers::show_form).post(handlers::submit_form))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if live_reload {
        app.layer(LiveReloadLayer::new())
    } else {
        app
    }
}
