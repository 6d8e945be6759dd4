// Shared test support: an in-memory Repository implementation plus helpers
// for spawning the app and minting tokens against the default test secret.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use learnlog::{
    AppConfig, AppState,
    auth::create_token,
    create_router,
    models::{
        Mistake, OwnerInfo, Screenshot, Solution, Technique, UpdateMistakeRequest,
        UpdateScreenshotRequest, UpdateSolutionRequest, UpdateVideoRequest, User, Video,
    },
    repository::{Repository, RepositoryState},
};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use uuid::Uuid;

#[derive(Default)]
struct Store {
    users: Vec<User>,
    mistakes: Vec<Mistake>,
    solutions: Vec<Solution>,
    techniques: Vec<Technique>,
    videos: Vec<Video>,
    screenshots: Vec<Screenshot>,
}

/// InMemoryRepository
///
/// A stateful mock of the `Repository` trait. Unlike canned-response mocks it
/// actually stores records, so create/read/update/delete round trips and
/// ownership scoping behave like the real backend.
#[derive(Default)]
pub struct InMemoryRepository {
    inner: Mutex<Store>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a user record directly, simulating an account deleted after
    /// token issuance.
    pub fn remove_user(&self, id: Uuid) {
        let mut store = self.inner.lock().unwrap();
        store.users.retain(|u| u.id != id);
    }

    fn owner_info(store: &Store, user_id: Uuid) -> Result<OwnerInfo, sqlx::Error> {
        store
            .users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| OwnerInfo {
                id: u.id,
                name: u.name.clone(),
                email: u.email.clone(),
            })
            .ok_or(sqlx::Error::RowNotFound)
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn create_user(
        &self,
        name: String,
        email: String,
        password_hash: String,
    ) -> Result<User, sqlx::Error> {
        let mut store = self.inner.lock().unwrap();
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        };
        store.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let store = self.inner.lock().unwrap();
        Ok(store.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        let store = self.inner.lock().unwrap();
        Ok(store.users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_mistakes(&self, user_id: Uuid) -> Result<Vec<Mistake>, sqlx::Error> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .mistakes
            .iter()
            .filter(|m| m.user == user_id)
            .cloned()
            .collect())
    }

    async fn create_mistake(
        &self,
        user_id: Uuid,
        task: String,
        priority: String,
    ) -> Result<Mistake, sqlx::Error> {
        let mut store = self.inner.lock().unwrap();
        let now = Utc::now();
        let mistake = Mistake {
            id: Uuid::new_v4(),
            user: user_id,
            task,
            priority,
            completed: false,
            created_at: now,
            updated_at: now,
        };
        store.mistakes.push(mistake.clone());
        Ok(mistake)
    }

    async fn update_mistake(
        &self,
        id: Uuid,
        user_id: Uuid,
        req: UpdateMistakeRequest,
    ) -> Result<Option<Mistake>, sqlx::Error> {
        let mut store = self.inner.lock().unwrap();
        let Some(mistake) = store
            .mistakes
            .iter_mut()
            .find(|m| m.id == id && m.user == user_id)
        else {
            return Ok(None);
        };
        if let Some(task) = req.task {
            mistake.task = task;
        }
        if let Some(priority) = req.priority {
            mistake.priority = priority;
        }
        if let Some(completed) = req.completed {
            mistake.completed = completed;
        }
        mistake.updated_at = Utc::now();
        Ok(Some(mistake.clone()))
    }

    async fn delete_mistake(&self, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let mut store = self.inner.lock().unwrap();
        let before = store.mistakes.len();
        store.mistakes.retain(|m| !(m.id == id && m.user == user_id));
        Ok(store.mistakes.len() < before)
    }

    async fn get_solutions(&self, user_id: Uuid) -> Result<Vec<Solution>, sqlx::Error> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .solutions
            .iter()
            .filter(|s| s.user == user_id)
            .cloned()
            .collect())
    }

    async fn create_solution(
        &self,
        user_id: Uuid,
        title: String,
        description: Option<String>,
        timeframe: String,
    ) -> Result<Solution, sqlx::Error> {
        let mut store = self.inner.lock().unwrap();
        let now = Utc::now();
        let solution = Solution {
            id: Uuid::new_v4(),
            user: user_id,
            title,
            description,
            timeframe,
            created_at: now,
            updated_at: now,
        };
        store.solutions.push(solution.clone());
        Ok(solution)
    }

    async fn update_solution(
        &self,
        id: Uuid,
        user_id: Uuid,
        req: UpdateSolutionRequest,
    ) -> Result<Option<Solution>, sqlx::Error> {
        let mut store = self.inner.lock().unwrap();
        let Some(solution) = store
            .solutions
            .iter_mut()
            .find(|s| s.id == id && s.user == user_id)
        else {
            return Ok(None);
        };
        if let Some(title) = req.title {
            solution.title = title;
        }
        if let Some(description) = req.description {
            solution.description = Some(description);
        }
        if let Some(timeframe) = req.timeframe {
            solution.timeframe = timeframe;
        }
        solution.updated_at = Utc::now();
        Ok(Some(solution.clone()))
    }

    async fn delete_solution(&self, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let mut store = self.inner.lock().unwrap();
        let before = store.solutions.len();
        store
            .solutions
            .retain(|s| !(s.id == id && s.user == user_id));
        Ok(store.solutions.len() < before)
    }

    async fn get_techniques(&self) -> Result<Vec<Technique>, sqlx::Error> {
        let store = self.inner.lock().unwrap();
        Ok(store.techniques.clone())
    }

    async fn get_technique(&self, id: Uuid) -> Result<Option<Technique>, sqlx::Error> {
        let store = self.inner.lock().unwrap();
        Ok(store.techniques.iter().find(|t| t.id == id).cloned())
    }

    async fn create_technique(
        &self,
        user_id: Uuid,
        title: String,
        category: String,
        description: String,
        tips: Vec<String>,
    ) -> Result<Technique, sqlx::Error> {
        let mut store = self.inner.lock().unwrap();
        let owner = Self::owner_info(&store, user_id)?;
        let now = Utc::now();
        let technique = Technique {
            id: Uuid::new_v4(),
            user: owner,
            title,
            category,
            description,
            tips,
            created_at: now,
            updated_at: now,
        };
        store.techniques.push(technique.clone());
        Ok(technique)
    }

    async fn update_technique(
        &self,
        id: Uuid,
        title: Option<String>,
        category: Option<String>,
        description: Option<String>,
        tips: Option<Vec<String>>,
    ) -> Result<Option<Technique>, sqlx::Error> {
        let mut store = self.inner.lock().unwrap();
        let Some(technique) = store.techniques.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        if let Some(title) = title {
            technique.title = title;
        }
        if let Some(category) = category {
            technique.category = category;
        }
        if let Some(description) = description {
            technique.description = description;
        }
        if let Some(tips) = tips {
            technique.tips = tips;
        }
        technique.updated_at = Utc::now();
        Ok(Some(technique.clone()))
    }

    async fn delete_technique(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let mut store = self.inner.lock().unwrap();
        let before = store.techniques.len();
        store.techniques.retain(|t| t.id != id);
        Ok(store.techniques.len() < before)
    }

    async fn get_videos(&self) -> Result<Vec<Video>, sqlx::Error> {
        let store = self.inner.lock().unwrap();
        // Newest first, like the Postgres query.
        Ok(store.videos.iter().rev().cloned().collect())
    }

    async fn get_video(&self, id: Uuid) -> Result<Option<Video>, sqlx::Error> {
        let store = self.inner.lock().unwrap();
        Ok(store.videos.iter().find(|v| v.id == id).cloned())
    }

    async fn get_videos_by_user(&self, user_id: Uuid) -> Result<Vec<Video>, sqlx::Error> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .videos
            .iter()
            .rev()
            .filter(|v| v.user.id == user_id)
            .cloned()
            .collect())
    }

    async fn create_video(
        &self,
        user_id: Uuid,
        title: String,
        description: String,
        category: String,
        duration: String,
        url: String,
        thumbnail: String,
    ) -> Result<Video, sqlx::Error> {
        let mut store = self.inner.lock().unwrap();
        let owner = Self::owner_info(&store, user_id)?;
        let now = Utc::now();
        let video = Video {
            id: Uuid::new_v4(),
            user: owner,
            title,
            description,
            category,
            duration,
            url,
            thumbnail,
            created_at: now,
            updated_at: now,
        };
        store.videos.push(video.clone());
        Ok(video)
    }

    async fn update_video(
        &self,
        id: Uuid,
        req: UpdateVideoRequest,
    ) -> Result<Option<Video>, sqlx::Error> {
        let mut store = self.inner.lock().unwrap();
        let Some(video) = store.videos.iter_mut().find(|v| v.id == id) else {
            return Ok(None);
        };
        if let Some(title) = req.title {
            video.title = title;
        }
        if let Some(description) = req.description {
            video.description = description;
        }
        if let Some(category) = req.category {
            video.category = category;
        }
        if let Some(duration) = req.duration {
            video.duration = duration;
        }
        if let Some(url) = req.url {
            video.url = url;
        }
        if let Some(thumbnail) = req.thumbnail {
            video.thumbnail = thumbnail;
        }
        video.updated_at = Utc::now();
        Ok(Some(video.clone()))
    }

    async fn delete_video(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let mut store = self.inner.lock().unwrap();
        let before = store.videos.len();
        store.videos.retain(|v| v.id != id);
        Ok(store.videos.len() < before)
    }

    async fn get_screenshots(&self) -> Result<Vec<Screenshot>, sqlx::Error> {
        let store = self.inner.lock().unwrap();
        Ok(store.screenshots.iter().rev().cloned().collect())
    }

    async fn get_screenshot(&self, id: Uuid) -> Result<Option<Screenshot>, sqlx::Error> {
        let store = self.inner.lock().unwrap();
        Ok(store.screenshots.iter().find(|s| s.id == id).cloned())
    }

    async fn get_screenshots_by_user(&self, user_id: Uuid) -> Result<Vec<Screenshot>, sqlx::Error> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .screenshots
            .iter()
            .rev()
            .filter(|s| s.user.id == user_id)
            .cloned()
            .collect())
    }

    async fn create_screenshot(
        &self,
        user_id: Uuid,
        image_url: String,
        description: String,
    ) -> Result<Screenshot, sqlx::Error> {
        let mut store = self.inner.lock().unwrap();
        let owner = Self::owner_info(&store, user_id)?;
        let now = Utc::now();
        let screenshot = Screenshot {
            id: Uuid::new_v4(),
            user: owner,
            image_url,
            description,
            created_at: now,
            updated_at: now,
        };
        store.screenshots.push(screenshot.clone());
        Ok(screenshot)
    }

    async fn update_screenshot(
        &self,
        id: Uuid,
        req: UpdateScreenshotRequest,
    ) -> Result<Option<Screenshot>, sqlx::Error> {
        let mut store = self.inner.lock().unwrap();
        let Some(screenshot) = store.screenshots.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        if let Some(image_url) = req.image_url {
            screenshot.image_url = image_url;
        }
        if let Some(description) = req.description {
            screenshot.description = description;
        }
        screenshot.updated_at = Utc::now();
        Ok(Some(screenshot.clone()))
    }

    async fn delete_screenshot(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let mut store = self.inner.lock().unwrap();
        let before = store.screenshots.len();
        store.screenshots.retain(|s| s.id != id);
        Ok(store.screenshots.len() < before)
    }
}

/// Builds an AppState over the given repository with the default test config.
pub fn test_state(repo: Arc<InMemoryRepository>) -> AppState {
    AppState {
        repo: repo as RepositoryState,
        config: AppConfig::default(),
    }
}

/// Spawns the full router on an ephemeral port and returns its base address.
pub async fn spawn_app(repo: Arc<InMemoryRepository>) -> String {
    let router = create_router(test_state(repo));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

/// Mints a bearer token for the given user against the default test secret.
pub fn auth_token(user_id: Uuid) -> String {
    create_token(user_id, &AppConfig::default().jwt_secret).expect("token creation failed")
}

/// Seeds a user whose password is "secret1". A low bcrypt cost keeps the test
/// suite fast; the digest is still a real, verifiable one.
pub async fn seed_user(repo: &InMemoryRepository, name: &str, email: &str) -> User {
    let hash = bcrypt::hash("secret1", 4).unwrap();
    repo.create_user(name.to_string(), email.to_string(), hash)
        .await
        .unwrap()
}
