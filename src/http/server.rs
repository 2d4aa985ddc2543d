//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (access log, response headers)
//! - Bind the server to a listener and serve until shutdown
//!
//! # Design Decisions
//! - One `HttpServer` per worker; each owns an independent copy of the
//!   settings and shares nothing with its siblings
//! - The worker is a plain value with request-handling methods; there is
//!   no event surface
//! - CORS and content-type headers are set on every response by a layer,
//!   so no handler can forget them

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::clock;
use crate::config::Settings;
use crate::http::handlers;
use crate::upstream::Upstream;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Immutable registry, owned by this worker.
    pub settings: Arc<Settings>,
    /// Client for the remote data source.
    pub upstream: Arc<dyn Upstream>,
    /// Worker identifier, carried in every access-log line.
    pub worker: u16,
}

/// One gateway worker: a router bound to a single port.
pub struct HttpServer {
    router: Router,
    worker: u16,
}

impl HttpServer {
    /// Create a worker with its own settings copy and an upstream client.
    pub fn new(worker: u16, settings: Settings, upstream: Arc<dyn Upstream>) -> Self {
        let state = AppState {
            settings: Arc::new(settings),
            upstream,
            worker,
        };

        let router = Self::build_router(state);
        Self { router, worker }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::settings_snapshot))
            .route(
                "/places/{place}/{node}/since/{since}",
                get(handlers::query_open_ended),
            )
            .route(
                "/places/{place}/{node}/since/{since}/until/{until}",
                get(handlers::query_range),
            )
            .layer(middleware::from_fn_with_state(state.clone(), access_log))
            .with_state(state)
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static(
                    "Origin, X-Requested-With, Content-Type, Accept",
                ),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            ))
    }

    /// Serve requests on the given listener until the shutdown signal fires,
    /// then drain in-flight requests and return.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(worker = self.worker, address = %addr, "worker listening");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!(worker = self.worker, "worker stopped");
        Ok(())
    }
}

/// Access log for every inbound request: worker id, UTC timestamp, path,
/// and client address, preferring `x-forwarded-for` over the socket peer.
async fn access_log(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let client = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| peer.to_string());

    tracing::info!(
        worker = state.worker,
        at = %clock::now_iso_millis(),
        path = %request.uri().path(),
        client = %client,
        "received request"
    );

    next.run(request).await
}
