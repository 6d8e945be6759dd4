/// Router Module Index
///
/// Organizes the application's routing into access-segregated modules so the
/// authentication layer is applied explicitly at the module level (via Axum
/// layers) rather than per handler.

/// Routes accessible to any client: liveness, signup/login, and the public
/// read side of techniques, videos, and screenshots.
pub mod public;

/// Routes protected by the `AuthUser` extractor middleware.
/// Requires a valid bearer token resolving to an existing user.
pub mod authenticated;
