use crate::{
    AppState,
    auth::{AuthUser, create_token, hash_password, verify_password},
    error::ApiError,
    models::{
        CreateMistakeRequest, CreateScreenshotRequest, CreateSolutionRequest,
        CreateTechniqueRequest, CreateVideoRequest, LoginRequest, LoginResponse, MessageResponse,
        Mistake, ProfileResponse, Screenshot, SignupRequest, SignupResponse, Solution, Technique,
        UpdateMistakeRequest, UpdateScreenshotRequest, UpdateSolutionRequest,
        UpdateTechniqueRequest, UpdateVideoRequest, Video,
    },
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

// --- Validation Helpers ---

const MIN_PASSWORD_LEN: usize = 6;
const MAX_VIDEO_TITLE_LEN: usize = 100;
const MAX_VIDEO_DESCRIPTION_LEN: usize = 500;
const MAX_SCREENSHOT_DESCRIPTION_LEN: usize = 200;
// Base64 payloads decode at a 3/4 ratio; the cap applies to the decoded size.
const MAX_SCREENSHOT_BYTES: usize = 5 * 1024 * 1024;

const PRIORITIES: [&str; 3] = ["low", "medium", "high"];

/// Returns the trimmed value if it is present and non-empty, `None` otherwise.
fn required(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim().to_string();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    })
}

fn validate_priority(priority: &str) -> Result<(), ApiError> {
    if PRIORITIES.contains(&priority) {
        return Ok(());
    }
    Err(ApiError::bad_request(
        "Priority must be one of: low, medium, high",
    ))
}

// --- Auth Handlers ---

/// signup
///
/// [Public Route] Registers a new account. The duplicate-email check runs
/// before the password-length check, matching the API contract. The response
/// carries identity fields only — no token, never the hash.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Registered", body = SignupResponse),
        (status = 400, description = "Missing fields, duplicate email, or short password")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let (Some(name), Some(email), Some(password)) = (
        required(payload.name),
        required(payload.email),
        payload.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(ApiError::bad_request("All fields are required"));
    };

    if state.repo.find_user_by_email(&email).await?.is_some() {
        return Err(ApiError::bad_request("Email already registered"));
    }

    if password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::bad_request(
            "Password must be at least 6 characters",
        ));
    }

    let password_hash = hash_password(&password)?;
    let user = state.repo.create_user(name, email, password_hash).await?;

    tracing::info!("user registered: {}", user.email);

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            id: user.id,
            username: user.name,
            email: user.email,
        }),
    ))
}

/// login
///
/// [Public Route] Verifies credentials and issues a 7-day bearer token.
/// Unknown email and wrong password produce the identical response, so the
/// endpoint cannot be used to enumerate accounts.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 400, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (Some(email), Some(password)) = (
        required(payload.email),
        payload.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(ApiError::bad_request("All fields are required"));
    };

    let user = state
        .repo
        .find_user_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::bad_request("Invalid credentials"))?;

    if !verify_password(&password, &user.password_hash) {
        return Err(ApiError::bad_request("Invalid credentials"));
    }

    let token = create_token(user.id, &state.config.jwt_secret)?;

    Ok(Json(LoginResponse {
        id: user.id,
        username: user.name,
        email: user.email,
        token,
    }))
}

/// get_profile
///
/// [Authenticated Route] Returns the resolved identity's profile. The record
/// is re-read so an account deleted after token issuance yields 404.
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    responses(
        (status = 200, description = "Profile", body = ProfileResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_profile(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = state
        .repo
        .find_user_by_id(auth_user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(ProfileResponse {
        id: user.id,
        username: user.name,
        email: user.email,
    }))
}

// --- Mistake Handlers ---

/// get_mistakes
///
/// [Authenticated Route] Lists the caller's mistakes, oldest first. The
/// owner-scoped query is the authorization gate.
#[utoipa::path(
    get,
    path = "/api/mistakes",
    responses((status = 200, description = "My mistakes", body = [Mistake]))
)]
pub async fn get_mistakes(
    AuthUser { id, .. }: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Mistake>>, ApiError> {
    Ok(Json(state.repo.get_mistakes(id).await?))
}

/// add_mistake
///
/// [Authenticated Route] Records a new mistake for the caller. `priority`
/// defaults to "medium"; `completed` starts false.
#[utoipa::path(
    post,
    path = "/api/mistakes",
    request_body = CreateMistakeRequest,
    responses(
        (status = 201, description = "Created", body = Mistake),
        (status = 400, description = "Missing task")
    )
)]
pub async fn add_mistake(
    AuthUser { id, .. }: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateMistakeRequest>,
) -> Result<(StatusCode, Json<Mistake>), ApiError> {
    let task = required(payload.task)
        .ok_or_else(|| ApiError::bad_request("Mistake task content is required."))?;

    let priority = payload.priority.unwrap_or_else(|| "medium".to_string());
    validate_priority(&priority)?;

    let mistake = state.repo.create_mistake(id, task, priority).await?;
    Ok((StatusCode::CREATED, Json(mistake)))
}

/// update_mistake
///
/// [Authenticated Route] Partial update. The repository query is scoped to the
/// owner, so a record owned by someone else is reported exactly like a missing
/// one.
#[utoipa::path(
    put,
    path = "/api/mistakes/{id}",
    params(("id" = Uuid, Path, description = "Mistake ID")),
    request_body = UpdateMistakeRequest,
    responses(
        (status = 200, description = "Updated", body = Mistake),
        (status = 404, description = "Not found or not owned")
    )
)]
pub async fn update_mistake(
    AuthUser { id: user_id, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMistakeRequest>,
) -> Result<Json<Mistake>, ApiError> {
    if let Some(priority) = &payload.priority {
        validate_priority(priority)?;
    }

    state
        .repo
        .update_mistake(id, user_id, payload)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Mistake not found or unauthorized to update"))
}

/// delete_mistake
///
/// [Authenticated Route] Same ownership gate as update.
#[utoipa::path(
    delete,
    path = "/api/mistakes/{id}",
    params(("id" = Uuid, Path, description = "Mistake ID")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 404, description = "Not found or not owned")
    )
)]
pub async fn delete_mistake(
    AuthUser { id: user_id, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    if state.repo.delete_mistake(id, user_id).await? {
        Ok(Json(MessageResponse {
            message: "Mistake deleted successfully".to_string(),
        }))
    } else {
        Err(ApiError::not_found(
            "Mistake not found or unauthorized to delete",
        ))
    }
}

// --- Solution Handlers ---

/// get_solutions
///
/// [Authenticated Route] Lists the caller's solutions, oldest first.
#[utoipa::path(
    get,
    path = "/api/solutions",
    responses((status = 200, description = "My solutions", body = [Solution]))
)]
pub async fn get_solutions(
    AuthUser { id, .. }: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Solution>>, ApiError> {
    Ok(Json(state.repo.get_solutions(id).await?))
}

/// add_solution
///
/// [Authenticated Route] `timeframe` defaults to "This Week".
#[utoipa::path(
    post,
    path = "/api/solutions",
    request_body = CreateSolutionRequest,
    responses(
        (status = 201, description = "Created", body = Solution),
        (status = 400, description = "Missing title")
    )
)]
pub async fn add_solution(
    AuthUser { id, .. }: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateSolutionRequest>,
) -> Result<(StatusCode, Json<Solution>), ApiError> {
    let title = required(payload.title)
        .ok_or_else(|| ApiError::bad_request("Solution title is required."))?;

    let description = payload.description.map(|d| d.trim().to_string());
    let timeframe = payload
        .timeframe
        .unwrap_or_else(|| "This Week".to_string());

    let solution = state
        .repo
        .create_solution(id, title, description, timeframe)
        .await?;
    Ok((StatusCode::CREATED, Json(solution)))
}

/// update_solution
///
/// [Authenticated Route] Owner-scoped partial update, like mistakes.
#[utoipa::path(
    put,
    path = "/api/solutions/{id}",
    params(("id" = Uuid, Path, description = "Solution ID")),
    request_body = UpdateSolutionRequest,
    responses(
        (status = 200, description = "Updated", body = Solution),
        (status = 404, description = "Not found or not owned")
    )
)]
pub async fn update_solution(
    AuthUser { id: user_id, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSolutionRequest>,
) -> Result<Json<Solution>, ApiError> {
    state
        .repo
        .update_solution(id, user_id, payload)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Solution not found or unauthorized to update"))
}

/// delete_solution
#[utoipa::path(
    delete,
    path = "/api/solutions/{id}",
    params(("id" = Uuid, Path, description = "Solution ID")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 404, description = "Not found or not owned")
    )
)]
pub async fn delete_solution(
    AuthUser { id: user_id, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    if state.repo.delete_solution(id, user_id).await? {
        Ok(Json(MessageResponse {
            message: "Solution deleted successfully".to_string(),
        }))
    } else {
        Err(ApiError::not_found(
            "Solution not found or unauthorized to delete",
        ))
    }
}

// --- Technique Handlers ---

/// get_techniques
///
/// [Public Route] Lists all techniques with the owner's public info embedded.
#[utoipa::path(
    get,
    path = "/api/techniques",
    responses((status = 200, description = "All techniques", body = [Technique]))
)]
pub async fn get_techniques(
    State(state): State<AppState>,
) -> Result<Json<Vec<Technique>>, ApiError> {
    Ok(Json(state.repo.get_techniques().await?))
}

/// add_technique
///
/// [Authenticated Route] Tips arrive as an array or one comma-separated
/// string; both are normalized before storage.
#[utoipa::path(
    post,
    path = "/api/techniques",
    request_body = CreateTechniqueRequest,
    responses(
        (status = 201, description = "Created", body = Technique),
        (status = 400, description = "Missing fields")
    )
)]
pub async fn add_technique(
    AuthUser { id, .. }: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateTechniqueRequest>,
) -> Result<(StatusCode, Json<Technique>), ApiError> {
    let (Some(title), Some(category), Some(description)) = (
        required(payload.title),
        required(payload.category),
        required(payload.description),
    ) else {
        return Err(ApiError::bad_request("Please provide all required fields"));
    };

    let tips = payload.tips.map(|t| t.into_vec()).unwrap_or_default();

    let technique = state
        .repo
        .create_technique(id, title, category, description, tips)
        .await?;
    Ok((StatusCode::CREATED, Json(technique)))
}

/// update_technique
///
/// [Authenticated Route] Load-then-compare ownership: a missing record is 404,
/// a record owned by someone else is 403.
#[utoipa::path(
    put,
    path = "/api/techniques/{id}",
    params(("id" = Uuid, Path, description = "Technique ID")),
    request_body = UpdateTechniqueRequest,
    responses(
        (status = 200, description = "Updated", body = Technique),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_technique(
    AuthUser { id: user_id, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTechniqueRequest>,
) -> Result<Json<Technique>, ApiError> {
    let technique = state
        .repo
        .get_technique(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Technique not found"))?;

    if technique.user.id != user_id {
        return Err(ApiError::forbidden("Not authorized"));
    }

    state
        .repo
        .update_technique(
            id,
            payload.title,
            payload.category,
            payload.description,
            payload.tips.map(|t| t.into_vec()),
        )
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Technique not found"))
}

/// delete_technique
///
/// [Authenticated Route] Same load-then-compare gate as update.
#[utoipa::path(
    delete,
    path = "/api/techniques/{id}",
    params(("id" = Uuid, Path, description = "Technique ID")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_technique(
    AuthUser { id: user_id, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let technique = state
        .repo
        .get_technique(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Technique not found"))?;

    if technique.user.id != user_id {
        return Err(ApiError::forbidden("Not authorized"));
    }

    state.repo.delete_technique(id).await?;
    Ok(Json(MessageResponse {
        message: "Technique deleted".to_string(),
    }))
}

// --- Video Handlers ---

/// get_all_videos
///
/// [Public Route] Lists all videos, newest first, owner embedded.
#[utoipa::path(
    get,
    path = "/api/videos",
    responses((status = 200, description = "All videos", body = [Video]))
)]
pub async fn get_all_videos(State(state): State<AppState>) -> Result<Json<Vec<Video>>, ApiError> {
    Ok(Json(state.repo.get_videos().await?))
}

/// get_video_by_id
///
/// [Public Route]
#[utoipa::path(
    get,
    path = "/api/videos/{id}",
    params(("id" = Uuid, Path, description = "Video ID")),
    responses(
        (status = 200, description = "Found", body = Video),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_video_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Video>, ApiError> {
    state
        .repo
        .get_video(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Video not found"))
}

/// get_videos_by_user
///
/// [Public Route] Lists one user's videos, newest first.
#[utoipa::path(
    get,
    path = "/api/videos/user/{user_id}",
    params(("user_id" = Uuid, Path, description = "Owner ID")),
    responses((status = 200, description = "User's videos", body = [Video]))
)]
pub async fn get_videos_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Video>>, ApiError> {
    Ok(Json(state.repo.get_videos_by_user(user_id).await?))
}

fn validate_video_lengths(title: Option<&str>, description: Option<&str>) -> Result<(), ApiError> {
    if title.is_some_and(|t| t.chars().count() > MAX_VIDEO_TITLE_LEN) {
        return Err(ApiError::bad_request("Title cannot exceed 100 characters"));
    }
    if description.is_some_and(|d| d.chars().count() > MAX_VIDEO_DESCRIPTION_LEN) {
        return Err(ApiError::bad_request(
            "Description cannot exceed 500 characters",
        ));
    }
    Ok(())
}

/// create_video
///
/// [Authenticated Route] All fields except `thumbnail` are required.
#[utoipa::path(
    post,
    path = "/api/videos",
    request_body = CreateVideoRequest,
    responses(
        (status = 201, description = "Created", body = Video),
        (status = 400, description = "Missing or oversized fields")
    )
)]
pub async fn create_video(
    AuthUser { id, .. }: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateVideoRequest>,
) -> Result<(StatusCode, Json<Video>), ApiError> {
    let (Some(title), Some(description), Some(category), Some(duration), Some(url)) = (
        required(payload.title),
        required(payload.description),
        required(payload.category),
        required(payload.duration),
        required(payload.url),
    ) else {
        return Err(ApiError::bad_request("Please provide all required fields"));
    };

    validate_video_lengths(Some(&title), Some(&description))?;

    let thumbnail = payload.thumbnail.unwrap_or_default();

    let video = state
        .repo
        .create_video(id, title, description, category, duration, url, thumbnail)
        .await?;
    Ok((StatusCode::CREATED, Json(video)))
}

/// update_video
///
/// [Authenticated Route] Load-then-compare ownership; partial update.
#[utoipa::path(
    put,
    path = "/api/videos/{id}",
    params(("id" = Uuid, Path, description = "Video ID")),
    request_body = UpdateVideoRequest,
    responses(
        (status = 200, description = "Updated", body = Video),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_video(
    AuthUser { id: user_id, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateVideoRequest>,
) -> Result<Json<Video>, ApiError> {
    let video = state
        .repo
        .get_video(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Video not found"))?;

    if video.user.id != user_id {
        return Err(ApiError::forbidden("Not authorized to update this video"));
    }

    validate_video_lengths(payload.title.as_deref(), payload.description.as_deref())?;

    state
        .repo
        .update_video(id, payload)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Video not found"))
}

/// delete_video
///
/// [Authenticated Route]
#[utoipa::path(
    delete,
    path = "/api/videos/{id}",
    params(("id" = Uuid, Path, description = "Video ID")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_video(
    AuthUser { id: user_id, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let video = state
        .repo
        .get_video(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Video not found"))?;

    if video.user.id != user_id {
        return Err(ApiError::forbidden("Not authorized to delete this video"));
    }

    state.repo.delete_video(id).await?;
    Ok(Json(MessageResponse {
        message: "Video deleted successfully".to_string(),
    }))
}

// --- Screenshot Handlers ---

/// get_all_screenshots
///
/// [Public Route] Lists all screenshots, newest first, owner embedded.
#[utoipa::path(
    get,
    path = "/api/screenshots",
    responses((status = 200, description = "All screenshots", body = [Screenshot]))
)]
pub async fn get_all_screenshots(
    State(state): State<AppState>,
) -> Result<Json<Vec<Screenshot>>, ApiError> {
    Ok(Json(state.repo.get_screenshots().await?))
}

/// get_screenshot_by_id
///
/// [Public Route]
#[utoipa::path(
    get,
    path = "/api/screenshots/{id}",
    params(("id" = Uuid, Path, description = "Screenshot ID")),
    responses(
        (status = 200, description = "Found", body = Screenshot),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_screenshot_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Screenshot>, ApiError> {
    state
        .repo
        .get_screenshot(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Screenshot not found"))
}

/// get_screenshots_by_user
///
/// [Public Route]
#[utoipa::path(
    get,
    path = "/api/screenshots/user/{user_id}",
    params(("user_id" = Uuid, Path, description = "Owner ID")),
    responses((status = 200, description = "User's screenshots", body = [Screenshot]))
)]
pub async fn get_screenshots_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Screenshot>>, ApiError> {
    Ok(Json(state.repo.get_screenshots_by_user(user_id).await?))
}

fn validate_screenshot_description(description: &str) -> Result<(), ApiError> {
    if description.chars().count() > MAX_SCREENSHOT_DESCRIPTION_LEN {
        return Err(ApiError::bad_request(
            "Description cannot exceed 200 characters",
        ));
    }
    Ok(())
}

/// upload_screenshot
///
/// [Authenticated Route] The image travels inline as base64; the decoded size
/// (three quarters of the encoded length) is capped at 5MB.
#[utoipa::path(
    post,
    path = "/api/screenshots",
    request_body = CreateScreenshotRequest,
    responses(
        (status = 201, description = "Uploaded", body = Screenshot),
        (status = 400, description = "Missing or oversized image")
    )
)]
pub async fn upload_screenshot(
    AuthUser { id, .. }: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateScreenshotRequest>,
) -> Result<(StatusCode, Json<Screenshot>), ApiError> {
    let image_url = payload
        .image_url
        .filter(|i| !i.is_empty())
        .ok_or_else(|| ApiError::bad_request("Please provide an image"))?;

    let size_in_bytes = image_url.len() * 3 / 4;
    if size_in_bytes > MAX_SCREENSHOT_BYTES {
        return Err(ApiError::bad_request("Image size should be less than 5MB"));
    }

    let description = payload
        .description
        .map(|d| d.trim().to_string())
        .unwrap_or_default();
    validate_screenshot_description(&description)?;

    let screenshot = state
        .repo
        .create_screenshot(id, image_url, description)
        .await?;
    Ok((StatusCode::CREATED, Json(screenshot)))
}

/// update_screenshot
///
/// [Authenticated Route] Load-then-compare ownership; partial update.
#[utoipa::path(
    put,
    path = "/api/screenshots/{id}",
    params(("id" = Uuid, Path, description = "Screenshot ID")),
    request_body = UpdateScreenshotRequest,
    responses(
        (status = 200, description = "Updated", body = Screenshot),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_screenshot(
    AuthUser { id: user_id, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateScreenshotRequest>,
) -> Result<Json<Screenshot>, ApiError> {
    let screenshot = state
        .repo
        .get_screenshot(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Screenshot not found"))?;

    if screenshot.user.id != user_id {
        return Err(ApiError::forbidden(
            "Not authorized to update this screenshot",
        ));
    }

    if let Some(description) = &payload.description {
        validate_screenshot_description(description)?;
    }

    state
        .repo
        .update_screenshot(id, payload)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Screenshot not found"))
}

/// delete_screenshot
///
/// [Authenticated Route]
#[utoipa::path(
    delete,
    path = "/api/screenshots/{id}",
    params(("id" = Uuid, Path, description = "Screenshot ID")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_screenshot(
    AuthUser { id: user_id, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let screenshot = state
        .repo
        .get_screenshot(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Screenshot not found"))?;

    if screenshot.user.id != user_id {
        return Err(ApiError::forbidden(
            "Not authorized to delete this screenshot",
        ));
    }

    state.repo.delete_screenshot(id).await?;
    Ok(Json(MessageResponse {
        message: "Screenshot deleted successfully".to_string(),
    }))
}
