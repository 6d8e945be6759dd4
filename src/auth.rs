use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use bcrypt::DEFAULT_COST;
use chrono::Utc;
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{config::AppConfig, error::ApiError, repository::RepositoryState};

/// Token validity window. Expiry forces a fresh login; tokens are not renewable.
const TOKEN_TTL_SECS: usize = 7 * 24 * 60 * 60;

/// Claims
///
/// The payload signed into every bearer token. The user id is the sole
/// application claim; `exp`/`iat` are the standard time claims validated on
/// every authenticated request.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (sub): the UUID of the user.
    pub sub: Uuid,
    /// Expiration Time (exp): timestamp after which the token must not be accepted.
    pub exp: usize,
    /// Issued At (iat): timestamp when the token was issued.
    pub iat: usize,
}

/// Signs a bearer token carrying the given user id, valid for 7 days.
pub fn create_token(user_id: Uuid, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Produces a salted bcrypt digest. The salt is randomized per call, so the
/// same plaintext never hashes to the same digest twice.
pub fn hash_password(plain: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plain, DEFAULT_COST)
}

/// Checks a plaintext password against a stored digest. Fails closed: a
/// malformed digest is treated as a non-match, never an error.
pub fn verify_password(plain: &str, digest: &str) -> bool {
    bcrypt::verify(plain, digest).unwrap_or(false)
}

/// AuthUser
///
/// The resolved identity of an authenticated request: the user record minus
/// its password hash. Handlers take this as an extractor argument, which keeps
/// authentication out of the business logic entirely.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// AuthUser Extractor Implementation
///
/// Implements Axum's `FromRequestParts`, making `AuthUser` usable as a function
/// argument in any authenticated handler. Per request the flow is:
/// bearer token extraction -> signature/expiry validation -> user lookup.
/// Any failed step rejects with 401 before the handler runs.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    RepositoryState: FromRef<S>,
    AppConfig: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let repo = RepositoryState::from_ref(state);
        let config = AppConfig::from_ref(state);

        // Token extraction: the Authorization header must carry a Bearer token.
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Not authorized, no token"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::unauthorized("Not authorized, no token"))?;

        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::default();
        validation.validate_exp = true;

        let token_data =
            decode::<Claims>(token, &decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    ApiError::unauthorized("Not authorized, token expired")
                }
                // Bad signature, malformed token, wrong algorithm, etc.
                _ => ApiError::unauthorized("Not authorized, token failed"),
            })?;

        // Final verification against the database: a valid token for a user
        // deleted after issuance must not authenticate.
        let user = repo
            .find_user_by_id(token_data.claims.sub)
            .await?
            .ok_or_else(|| ApiError::unauthorized("Not authorized, user not found"))?;

        Ok(AuthUser {
            id: user.id,
            name: user.name,
            email: user.email,
        })
    }
}
