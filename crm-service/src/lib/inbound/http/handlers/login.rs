use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserRepository;
use crate::domain::validation::Validator;
use crate::inbound::http::router::AppState;

pub async fn login<R: UserRepository>(
    State(state): State<AppState<R>>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    // Field validation before touching the credential store. Collapsed to
    // the same undifferentiated message as a failed credential check so the
    // response does not reveal which part was wrong.
    let mut validator = Validator::for_user();
    validator.validate_email(&body.email);
    if !validator.is_valid() {
        tracing::debug!(errors = ?validator.errors(), "Login rejected by field validation");
        return Err(ApiError::BadRequest("Invalid credentials".to_string()));
    }

    let token = state.auth_service.login(&body.email, &body.password).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        TokenResponseData { token },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub token: String,
}
