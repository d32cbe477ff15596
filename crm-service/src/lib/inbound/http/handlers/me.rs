use axum::http::StatusCode;
use axum::Extension;

use super::verify::UserResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Route guard over the fail-open filter: the filter never blocks, so it is
/// this handler that rejects requests the filter left anonymous.
pub async fn current_user(
    identity: Option<Extension<AuthenticatedUser>>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    let Extension(AuthenticatedUser(user)) =
        identity.ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))?;

    Ok(ApiSuccess::new(StatusCode::OK, (&user).into()))
}
