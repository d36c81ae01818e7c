use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use post_service::domain::auth::errors::AuthError;
use post_service::domain::auth::models::RefreshToken;
use post_service::domain::auth::ports::RefreshTokenRepository;
use post_service::domain::auth::service::AuthService;
use post_service::domain::post::errors::PostError;
use post_service::domain::post::models::Post;
use post_service::domain::post::models::PostId;
use post_service::domain::post::models::SortOrder;
use post_service::domain::post::ports::PostRepository;
use post_service::domain::post::service::PostService;
use post_service::domain::user::errors::UserError;
use post_service::domain::user::models::EmailAddress;
use post_service::domain::user::models::User;
use post_service::domain::user::models::UserId;
use post_service::domain::user::ports::UserRepository;
use post_service::domain::user::service::UserService;
use post_service::inbound::http::router::create_router;
use post_service::inbound::http::router::AppState;

pub const TEST_TOKEN_SECRET: &[u8] = b"test-secret-key-for-token-signing-at-least-32-bytes";
pub const TEST_API_KEY: &str = "test-admin-api-key";

/// Test application that spawns a real server over in-memory stores.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub refresh_tokens: Arc<InMemoryRefreshTokenRepository>,
}

impl TestApp {
    /// Spawn the application in a background task on the dev platform.
    pub async fn spawn() -> Self {
        Self::spawn_with_platform("dev").await
    }

    /// Spawn with an explicit platform label.
    pub async fn spawn_with_platform(platform: &str) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repo = Arc::new(InMemoryUserRepository::default());
        let post_repo = Arc::new(InMemoryPostRepository::default());
        let refresh_token_repo = Arc::new(InMemoryRefreshTokenRepository::default());

        let state = AppState {
            user_service: Arc::new(UserService::new(Arc::clone(&user_repo))),
            post_service: Arc::new(PostService::new(post_repo)),
            auth_service: Arc::new(AuthService::new(
                user_repo,
                Arc::clone(&refresh_token_repo),
                TEST_TOKEN_SECRET,
            )),
            api_key: TEST_API_KEY.to_string(),
            platform: platform.to_string(),
        };

        let router = create_router(state);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create reqwest client"),
            refresh_tokens: refresh_token_repo,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(&format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(&format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make GET request with the admin API key
    pub fn get_admin(&self, path: &str) -> reqwest::RequestBuilder {
        self.get(path)
            .header("Authorization", format!("ApiKey {}", TEST_API_KEY))
    }

    /// Helper to make POST request with the admin API key
    pub fn post_admin(&self, path: &str) -> reqwest::RequestBuilder {
        self.post(path)
            .header("Authorization", format!("ApiKey {}", TEST_API_KEY))
    }

    /// Register a user and return (id, access token, refresh token).
    pub async fn signup_and_login(&self, email: &str, password: &str) -> (String, String, String) {
        let response = self
            .post("/api/users")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        let user_id = body["data"]["id"].as_str().expect("Missing id").to_string();

        let response = self
            .post("/api/login")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        let access = body["data"]["token"]
            .as_str()
            .expect("Missing token")
            .to_string();
        let refresh = body["data"]["refresh_token"]
            .as_str()
            .expect("Missing refresh_token")
            .to_string();

        (user_id, access, refresh)
    }
}

/// In-memory user store keyed by ID, with the email-uniqueness rule of the
/// real schema.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_all(&self) -> Result<(), UserError> {
        self.users.lock().unwrap().clear();
        Ok(())
    }
}

/// In-memory post store.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Mutex<Vec<Post>>,
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: Post) -> Result<Post, PostError> {
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.id == id)
            .cloned())
    }

    async fn list(
        &self,
        author_id: Option<UserId>,
        sort: SortOrder,
    ) -> Result<Vec<Post>, PostError> {
        let mut posts: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| author_id.map_or(true, |author| p.author_id == author))
            .cloned()
            .collect();
        posts.sort_by_key(|p| p.created_at);
        if sort == SortOrder::Descending {
            posts.reverse();
        }
        Ok(posts)
    }

    async fn delete(&self, id: &PostId) -> Result<(), PostError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| &p.id != id);
        if posts.len() == before {
            return Err(PostError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), PostError> {
        self.posts.lock().unwrap().clear();
        Ok(())
    }
}

/// In-memory refresh-token store keyed by token value. History is retained;
/// revocation sets `revoked_at` in place.
#[derive(Default)]
pub struct InMemoryRefreshTokenRepository {
    tokens: Mutex<HashMap<String, RefreshToken>>,
}

impl InMemoryRefreshTokenRepository {
    /// Insert a record directly, bypassing login. Lets tests fabricate
    /// expired or revoked records without waiting out real clocks.
    pub fn insert(&self, token: RefreshToken) {
        self.tokens
            .lock()
            .unwrap()
            .insert(token.token.clone(), token);
    }
}

#[async_trait]
impl RefreshTokenRepository for InMemoryRefreshTokenRepository {
    async fn create(&self, token: RefreshToken) -> Result<RefreshToken, AuthError> {
        let mut tokens = self.tokens.lock().unwrap();
        if tokens.contains_key(&token.token) {
            return Err(AuthError::DuplicateRefreshToken);
        }
        tokens.insert(token.token.clone(), token.clone());
        Ok(token)
    }

    async fn find_by_value(&self, token_value: &str) -> Result<Option<RefreshToken>, AuthError> {
        Ok(self.tokens.lock().unwrap().get(token_value).cloned())
    }

    async fn revoke(
        &self,
        token_value: &str,
        revoked_at: DateTime<Utc>,
    ) -> Result<(), AuthError> {
        if let Some(token) = self.tokens.lock().unwrap().get_mut(token_value) {
            token.revoked_at = Some(revoked_at);
            token.updated_at = revoked_at;
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<RefreshToken>, AuthError> {
        let mut tokens: Vec<RefreshToken> =
            self.tokens.lock().unwrap().values().cloned().collect();
        tokens.sort_by_key(|t| std::cmp::Reverse(t.created_at));
        Ok(tokens)
    }
}
