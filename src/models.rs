use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Core Application Schemas (Mapped to Database) ---

/// User
///
/// The canonical identity record stored in the `users` table. The password
/// hash never leaves the credential path: it is skipped on serialization and
/// no response schema includes it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Default)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    // Unique login key, exact-match as stored.
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// OwnerInfo
///
/// The public slice of a user embedded in resources that are listed publicly
/// (techniques, videos, screenshots).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct OwnerInfo {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Mistake
///
/// A private journal entry from the `mistakes` table. Only ever read or
/// written by its owner; `user` carries the owner id.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Mistake {
    pub id: Uuid,
    #[sqlx(rename = "user_id")]
    pub user: Uuid,
    pub task: String,
    // One of "low", "medium", "high".
    pub priority: String,
    pub completed: bool,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// Solution
///
/// A private journal entry from the `solutions` table, same access rules as
/// `Mistake`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Solution {
    pub id: Uuid,
    #[sqlx(rename = "user_id")]
    pub user: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub timeframe: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// Technique
///
/// A publicly listed entry from the `techniques` table. Reads embed the
/// owner's public info; writes remain owner-only.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Technique {
    pub id: Uuid,
    pub user: OwnerInfo,
    pub title: String,
    pub category: String,
    pub description: String,
    pub tips: Vec<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// Video
///
/// A publicly listed entry from the `videos` table. The owner is serialized
/// under the `userId` key, matching the wire format clients already consume.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Video {
    pub id: Uuid,
    #[serde(rename = "userId")]
    pub user: OwnerInfo,
    pub title: String,
    pub description: String,
    pub category: String,
    // Free-form display string, e.g. "12:34".
    pub duration: String,
    pub url: String,
    pub thumbnail: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// Screenshot
///
/// A publicly listed entry from the `screenshots` table. `image_url` holds a
/// base64 payload capped at 5MB decoded.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Screenshot {
    pub id: Uuid,
    #[serde(rename = "userId")]
    pub user: OwnerInfo,
    pub image_url: String,
    pub description: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

// --- Request Payloads (Input Schemas) ---

// Required fields are `Option<String>` on purpose: presence is validated in
// the handlers so a missing field yields the API's own 400 message instead of
// a deserialization rejection.

/// SignupRequest
///
/// Input payload for POST /api/auth/signup. The password only passes through
/// the hasher; it is never persisted or logged in plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// LoginRequest
///
/// Input payload for POST /api/auth/login.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// CreateMistakeRequest
///
/// Input payload for POST /api/mistakes. `priority` defaults to "medium".
/// There is deliberately no owner field: the owner is always the resolved
/// identity.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateMistakeRequest {
    pub task: Option<String>,
    pub priority: Option<String>,
}

/// UpdateMistakeRequest
///
/// Partial update payload for PUT /api/mistakes/{id}. Omitted fields leave the
/// stored value unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateMistakeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// CreateSolutionRequest
///
/// Input payload for POST /api/solutions. `timeframe` defaults to "This Week".
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateSolutionRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub timeframe: Option<String>,
}

/// UpdateSolutionRequest
///
/// Partial update payload for PUT /api/solutions/{id}.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateSolutionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
}

/// TipsInput
///
/// Technique tips arrive either as a JSON array or as one comma-separated
/// string; both normalize to the same list.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(untagged)]
#[ts(export)]
pub enum TipsInput {
    List(Vec<String>),
    Csv(String),
}

impl TipsInput {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            TipsInput::List(tips) => tips.into_iter().map(|t| t.trim().to_string()).collect(),
            TipsInput::Csv(raw) => raw
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

/// CreateTechniqueRequest
///
/// Input payload for POST /api/techniques.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateTechniqueRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub tips: Option<TipsInput>,
}

/// UpdateTechniqueRequest
///
/// Partial update payload for PUT /api/techniques/{id}.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateTechniqueRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips: Option<TipsInput>,
}

/// CreateVideoRequest
///
/// Input payload for POST /api/videos. `thumbnail` defaults to an empty string.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateVideoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub duration: Option<String>,
    pub url: Option<String>,
    pub thumbnail: Option<String>,
}

/// UpdateVideoRequest
///
/// Partial update payload for PUT /api/videos/{id}.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateVideoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// CreateScreenshotRequest
///
/// Input payload for POST /api/screenshots. The image travels inline as a
/// base64 string under the `imageUrl` key.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateScreenshotRequest {
    pub image_url: Option<String>,
    pub description: Option<String>,
}

/// UpdateScreenshotRequest
///
/// Partial update payload for PUT /api/screenshots/{id}.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdateScreenshotRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// --- Response Schemas (Output) ---

/// SignupResponse
///
/// Output schema for a successful signup. Identity fields only — no token and
/// never the hash; a fresh account still has to log in.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct SignupResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

/// LoginResponse
///
/// Output schema for a successful login: identity fields plus the bearer
/// token (7-day validity).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct LoginResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub token: String,
}

/// ProfileResponse
///
/// Output schema for GET /api/auth/profile.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

/// MessageResponse
///
/// Confirmation payload returned by delete operations.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct MessageResponse {
    pub message: String,
}
