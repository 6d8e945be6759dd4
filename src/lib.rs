use axum::{
    Router,
    extract::{DefaultBodyLimit, FromRef, Request},
    http::HeaderName,
    middleware::{self, Next},
    response::Response,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;

// Module for routing segregation (Public, Authenticated).
pub mod routes;
use auth::AuthUser;
use routes::{authenticated, public};

// --- Public Re-exports ---

// Makes core state types easily accessible to the application entry point
// and the integration tests.
pub use config::AppConfig;
pub use error::ApiError;
pub use repository::{PostgresRepository, RepositoryState};

/// ApiDoc
///
/// Auto-generates the OpenAPI documentation (Swagger JSON) for the
/// application, aggregating every `#[utoipa::path]` handler and the schemas
/// used in request/response bodies. Served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::signup, handlers::login, handlers::get_profile,
        handlers::get_mistakes, handlers::add_mistake, handlers::update_mistake,
        handlers::delete_mistake,
        handlers::get_solutions, handlers::add_solution, handlers::update_solution,
        handlers::delete_solution,
        handlers::get_techniques, handlers::add_technique, handlers::update_technique,
        handlers::delete_technique,
        handlers::get_all_videos, handlers::get_video_by_id, handlers::get_videos_by_user,
        handlers::create_video, handlers::update_video, handlers::delete_video,
        handlers::get_all_screenshots, handlers::get_screenshot_by_id,
        handlers::get_screenshots_by_user, handlers::upload_screenshot,
        handlers::update_screenshot, handlers::delete_screenshot,
    ),
    components(
        schemas(
            models::Mistake, models::Solution, models::Technique, models::Video,
            models::Screenshot, models::OwnerInfo,
            models::SignupRequest, models::LoginRequest,
            models::CreateMistakeRequest, models::UpdateMistakeRequest,
            models::CreateSolutionRequest, models::UpdateSolutionRequest,
            models::CreateTechniqueRequest, models::UpdateTechniqueRequest,
            models::TipsInput,
            models::CreateVideoRequest, models::UpdateVideoRequest,
            models::CreateScreenshotRequest, models::UpdateScreenshotRequest,
            models::SignupResponse, models::LoginResponse, models::ProfileResponse,
            models::MessageResponse,
        )
    ),
    tags(
        (name = "learnlog", description = "Learning journal API")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single, thread-safe, immutable container holding the application's
/// services and configuration, shared across all incoming requests. All
/// dependencies are constructed at startup and injected here — no ambient
/// singletons.
#[derive(Clone)]
pub struct AppState {
    /// Repository layer: abstracts database access via the PgPool connection.
    pub repo: RepositoryState,
    /// The loaded, immutable environment configuration.
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// These let extractors pull individual components out of the shared AppState.

impl FromRef<AppState> for RepositoryState {
    fn from_ref(app_state: &AppState) -> RepositoryState {
        app_state.repo.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// auth_middleware
///
/// Enforces authentication for the authenticated route group. The `AuthUser`
/// extractor performs the full token-to-identity resolution; if it rejects,
/// the request never reaches a handler. Handlers that need the identity take
/// the extractor themselves.
async fn auth_middleware(_auth_user: AuthUser, request: Request, next: Next) -> Response {
    next.run(request).await
}

/// create_router
///
/// Assembles the application's entire routing structure, applies global and
/// scoped middleware, and registers the application state.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for request correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    let base_router = Router::new()
        // Documentation: serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public routes: no auth middleware applied.
        .merge(public::public_routes())
        // Authenticated routes: rejected before the handler unless the bearer
        // token resolves to an existing user.
        .merge(
            authenticated::authenticated_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        )
        // Base64 screenshot payloads run to several megabytes; the default
        // 2MB body cap would reject them before the 5MB size check runs.
        .layer(DefaultBodyLimit::max(16 * 1024 * 1024))
        .with_state(state);

    // Observability and correlation layers, outermost.
    base_router
        .layer(
            ServiceBuilder::new()
                // Request ID generation: a unique UUID for every incoming request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // Request tracing: wraps the request/response lifecycle in a span
                // carrying the generated request ID.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // Request ID propagation back to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// Customizes the tracing span so every log line for a single request is
/// correlated by its `x-request-id`.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
