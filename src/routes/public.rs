use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Endpoints reachable without a bearer token: the liveness probe, the
/// signup/login gateway, and the read-only side of the publicly listed
/// resources (techniques, videos, screenshots).
///
/// Mistakes and solutions have no public reads at all — even their listings
/// are owner-scoped, so every one of their routes lives in the authenticated
/// module.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /
        // Unauthenticated liveness probe for monitors and load balancers.
        .route("/", get(|| async { "API is running" }))
        // POST /api/auth/signup
        // Creates an account. Returns identity fields only; the new user still
        // has to log in for a token.
        .route("/api/auth/signup", post(handlers::signup))
        // POST /api/auth/login
        // Verifies credentials and issues the 7-day bearer token.
        .route("/api/auth/login", post(handlers::login))
        // GET /api/techniques
        // All techniques with embedded owner info, visible to anyone.
        .route("/api/techniques", get(handlers::get_techniques))
        // GET /api/videos and single/per-user reads. Writes are authenticated.
        .route("/api/videos", get(handlers::get_all_videos))
        .route("/api/videos/user/{user_id}", get(handlers::get_videos_by_user))
        .route("/api/videos/{id}", get(handlers::get_video_by_id))
        // GET /api/screenshots mirrors the video read surface.
        .route("/api/screenshots", get(handlers::get_all_screenshots))
        .route(
            "/api/screenshots/user/{user_id}",
            get(handlers::get_screenshots_by_user),
        )
        .route("/api/screenshots/{id}", get(handlers::get_screenshot_by_id))
}
