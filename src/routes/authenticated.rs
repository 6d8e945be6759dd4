use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Authenticated Router Module
///
/// Every route here sits behind the `AuthUser` middleware layer applied in
/// `create_router`, and every handler additionally takes the `AuthUser`
/// extractor, so the resolved identity is always available for ownership
/// checks.
///
/// Ownership strategy per resource:
/// - mistakes/solutions: the repository query itself is scoped to the owner.
/// - techniques/videos/screenshots: the handler loads the record and compares
///   owners before mutating.
pub fn authenticated_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // GET /api/auth/profile
        // The resolved identity's profile; 404 if the account vanished after
        // token issuance.
        .route("/api/auth/profile", get(handlers::get_profile))
        // --- Mistakes (fully private) ---
        .route(
            "/api/mistakes",
            get(handlers::get_mistakes).post(handlers::add_mistake),
        )
        .route(
            "/api/mistakes/{id}",
            put(handlers::update_mistake).delete(handlers::delete_mistake),
        )
        // --- Solutions (fully private) ---
        .route(
            "/api/solutions",
            get(handlers::get_solutions).post(handlers::add_solution),
        )
        .route(
            "/api/solutions/{id}",
            put(handlers::update_solution).delete(handlers::delete_solution),
        )
        // --- Techniques (public reads live in the public router) ---
        .route("/api/techniques", post(handlers::add_technique))
        .route(
            "/api/techniques/{id}",
            put(handlers::update_technique).delete(handlers::delete_technique),
        )
        // --- Videos ---
        .route("/api/videos", post(handlers::create_video))
        .route(
            "/api/videos/{id}",
            put(handlers::update_video).delete(handlers::delete_video),
        )
        // --- Screenshots ---
        .route("/api/screenshots", post(handlers::upload_screenshot))
        .route(
            "/api/screenshots/{id}",
            put(handlers::update_screenshot).delete(handlers::delete_screenshot),
        )
}
