mod blog_posts;
mod cli;
mod docs;
mod todos;
mod weather;

pub use cli::ServeOptions;

use crate::prelude::*;
use axum::{
    extract::{rejection::PathRejection, Path, Request},
    http::Uri,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, patch},
    Router,
};
use portfolio_core::fields::parse_id;
use portfolio_core::Store;
use std::any::Any;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};

/// State shared by every handler
///
/// The whole store sits behind one mutex, held for the full
/// check-then-mutate sequence of each request.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<Mutex<Store>>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

/// `serve` subcommand entry point
pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let addr = f!("{}:{}", options.host, options.port);

    if global.verbose {
        crate::routes::print_banner(&addr);
    }

    let app_router = router(AppState::new(Store::seeded()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| f!("Failed to bind to {addr}"))?;

    log::info!("portfolio API listening on http://{addr}");

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// The complete application: routes, fallbacks and middleware
pub fn router(state: AppState) -> Router {
    with_layers(api_routes()).with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(docs::index))
        .route("/api/todos", get(todos::list).post(todos::create))
        .route(
            "/api/todos/{id}",
            patch(todos::update).delete(todos::delete),
        )
        .route(
            "/api/blog-posts",
            get(blog_posts::list).post(blog_posts::create),
        )
        .route("/api/blog-posts/{id}", get(blog_posts::show))
        .route("/api/weather/{city}", get(weather::show))
}

fn with_layers(routes: Router<AppState>) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    routes
        .fallback(endpoint_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(log_request))
        .layer(cors)
}

async fn endpoint_not_found() -> Error {
    Error::EndpointNotFound
}

async fn method_not_allowed(uri: Uri) -> Error {
    if has_malformed_id(uri.path()) {
        Error::EndpointNotFound
    } else {
        Error::MethodNotAllowed
    }
}

/// The `{id}` routes only exist for decimal ids, whatever the verb.
fn has_malformed_id(path: &str) -> bool {
    ["/api/todos/", "/api/blog-posts/"].iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|segment| parse_id(segment).is_none())
    })
}

/// Resolve an `{id}` path segment, treating anything undecodable or
/// non-numeric as an unknown endpoint.
fn path_id(segment: Result<Path<String>, PathRejection>) -> Result<u64, Error> {
    let Path(segment) = segment.map_err(|rejection| {
        log::debug!("rejected id segment: {rejection}");
        Error::EndpointNotFound
    })?;
    parse_id(&segment).ok_or(Error::EndpointNotFound)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "handler panicked".to_string()
    };

    Error::Internal(f!("handler panicked: {detail}")).into_response()
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed = started.elapsed();
    if status.is_server_error() {
        log::error!("{method} {path} -> {status} ({elapsed:?})");
    } else if status.is_client_error() {
        log::warn!("{method} {path} -> {status} ({elapsed:?})");
    } else {
        log::info!("{method} {path} -> {status} ({elapsed:?})");
    }

    response
}

/// Creation stamp for a record created now
fn now() -> String {
    portfolio_core::timestamp::format_timestamp(chrono::Utc::now())
}
