use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenCodec;
use chrono::Duration;
use chrono::Utc;
use crm_service::domain::auth::service::AuthService;
use crm_service::domain::user::errors::RepositoryError;
use crm_service::domain::user::models::EmailAddress;
use crm_service::domain::user::models::User;
use crm_service::domain::user::models::UserId;
use crm_service::domain::user::models::UserRole;
use crm_service::domain::user::ports::UserRepository;
use crm_service::inbound::http::router::create_router;

pub const SECRET: &str = "dGVzdC1zZWNyZXQta2V5LWZvci1qd3Qtc2lnbmluZy1hdC1sZWFzdC0zMi1ieXRlcw==";

pub const SEEDED_ID: &str = "665f1d2c9b3e4a0012a4b7c8";
pub const SEEDED_EMAIL: &str = "maria@crm.com";
pub const SEEDED_PASSWORD: &str = "Abcdef1!";

/// Test application that spawns a real server backed by an in-memory
/// credential store seeded with one user.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub codec: TokenCodec,
}

/// In-memory credential store used in place of Postgres
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .iter()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .iter()
            .find(|u| u.id.as_str() == id.as_str())
            .cloned())
    }
}

impl TestApp {
    /// Spawn the application in a background task with a 24 hour token TTL
    pub async fn spawn() -> Self {
        Self::spawn_with_ttl(Duration::hours(24)).await
    }

    /// Spawn with an explicit token TTL; a zero TTL issues tokens that are
    /// already expired
    pub async fn spawn_with_ttl(ttl: Duration) -> Self {
        let repository = Arc::new(InMemoryUserRepository::new(vec![seeded_user()]));

        let codec =
            TokenCodec::from_base64_secret(SECRET, ttl).expect("Failed to build token codec");
        let auth_service = Arc::new(AuthService::new(repository, codec));

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let router = create_router(auth_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            codec: TokenCodec::from_base64_secret(SECRET, ttl)
                .expect("Failed to build token codec"),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make GET request with a raw Authorization header value
    pub fn get_with_authorization(&self, path: &str, header: &str) -> reqwest::RequestBuilder {
        self.get(path).header("Authorization", header)
    }

    /// Issue a token for the seeded user through the same codec the server
    /// signs with
    pub fn issue_seeded_token(&self) -> String {
        self.codec
            .issue(SEEDED_ID, SEEDED_EMAIL)
            .expect("Failed to issue token")
    }
}

fn seeded_user() -> User {
    let password_hash = PasswordHasher::new()
        .hash(SEEDED_PASSWORD)
        .expect("Failed to hash password");

    User {
        id: UserId::new(SEEDED_ID).expect("Invalid seeded id"),
        name: "María".to_string(),
        lastname: "González".to_string(),
        email: EmailAddress::new(SEEDED_EMAIL).expect("Invalid seeded email"),
        password_hash,
        role: UserRole::Admin,
        created_at: Utc::now(),
    }
}
