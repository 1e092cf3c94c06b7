mod api;
mod config;
mod middleware;
mod redacted;
mod span;
mod state;

use std::{net::SocketAddr, path::PathBuf};

use axum::{
    Router,
    middleware::from_fn,
    routing::get,
};
use error::{Context, Contextual};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub use api::{
    health::ResponseBody as HealthResponse,
    users::create::{RequestBody as CreateVisitor, ResponseBody as VisitorCreated},
};
pub use config::{DbConfig, NodeEnv};
pub use redacted::Redacted;
pub use state::{AppState, Environment};

/// Every API route is mounted under this prefix.
pub const API_PREFIX: &str = "/api";

#[derive(Debug)]
pub struct ServerOpts {
    pub port: u16,
    pub node_env: NodeEnv,
    pub db: DbConfig,
    pub ui_dir: Option<PathBuf>,
}

pub fn server(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(from_fn(middleware::mw_client_ip))
        .layer(TraceLayer::new_for_http().make_span_with(span::span))
        .layer(from_fn(middleware::latency_ms))
        .layer(CorsLayer::permissive());

    let api = Router::new()
        .route(api::health::PATH, get(api::health::handler))
        .route(
            api::users::PATH,
            get(api::users::list::handler).post(api::users::create::handler),
        );

    Router::new()
        .nest(API_PREFIX, api)
        .with_state(state)
        .layer(middleware)
}

/// Resolve the store once, then start accepting requests.
///
/// A missing or unreachable store does not stop the process; the data
/// endpoints answer 503 for the lifetime of the process instead.
pub async fn serve(opts: ServerOpts) -> Result<(), ServerError> {
    tracing::info!("{:?}", opts);

    let state = AppState::init(opts.node_env, &opts.db).await;

    let server = server(state);
    let server = match &opts.ui_dir {
        Some(ui_dir) => server.fallback_service(ServeDir::new(ui_dir)),
        None => server,
    };

    let app = server.into_make_service_with_connect_info::<SocketAddr>();

    let addr = SocketAddr::from(([0, 0, 0, 0], opts.port));
    let listener = TcpListener::bind(addr)
        .await
        .context(format!("bind :: {addr}"))?;
    tracing::info!(
        "listening on {}",
        listener.local_addr().context("local_addr")?
    );
    axum::serve(listener, app)
        .await
        .context("axum::serve")
        .map_err(|e| e.into())
}

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("{0}")]
    Io(#[from] Contextual<std::io::Error>),
}
