use std::sync::Arc;

use axum::{middleware, response::IntoResponse, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    application::Application,
    config::{ApplicationConfig, CorsConfig},
};

use self::{cors::CorsPolicy, response::message_payload};

mod cors;
mod response;
mod router;

pub(super) struct ServerConfig {
    pub port: u16,
    pub cors: Option<CorsConfig>,
}

impl From<&ApplicationConfig> for ServerConfig {
    fn from(value: &ApplicationConfig) -> Self {
        Self { port: value.port, cors: value.cors.clone() }
    }
}

pub(super) async fn run(application: Application, config: ServerConfig) -> anyhow::Result<()> {
    let app = build_router(Arc::new(application), config.cors);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("starting datos server on {}", config.port);
    axum::serve(listener, app).await?;
    Ok(())
}

pub(crate) fn build_router(application: Arc<Application>, cors: Option<CorsConfig>) -> Router {
    let app = Router::new()
        .route("/", get(handle_root))
        .route("/health", get(|| async { "" }))
        .merge(router::dato::router(application))
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors {
        app.layer(middleware::from_fn_with_state(Arc::new(CorsPolicy::from(cors)), cors::gate))
    } else {
        app
    }
}

async fn handle_root() -> impl IntoResponse {
    message_payload("API de datos funcionando")
}
