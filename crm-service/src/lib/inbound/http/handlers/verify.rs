use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::http::{self};
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;
use crate::inbound::http::router::AppState;

pub async fn verify<R: UserRepository>(
    State(state): State<AppState<R>>,
    headers: HeaderMap,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    let header = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    state
        .auth_service
        .validate_auth_header(header)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponseData {
    pub id: String,
    pub name: String,
    pub lastname: String,
    pub email: String,
    /// Always blank: the password hash is write-only from the API surface.
    pub password: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            lastname: user.lastname.clone(),
            email: user.email.as_str().to_string(),
            password: user.password_hash.clone(),
            role: user.role.to_string(),
            created_at: user.created_at,
        }
    }
}
