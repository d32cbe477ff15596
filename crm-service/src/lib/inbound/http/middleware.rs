use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated identity through request
/// extensions. Request-scoped; never shared across requests.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

/// Fail-open authentication filter, run once per request before dispatch.
///
/// A valid bearer token installs the resolved identity into request
/// extensions; every failure is swallowed and the request continues
/// anonymously. Rejecting anonymous access is the job of downstream route
/// guards, not this layer.
pub async fn attach_identity<R: UserRepository>(
    State(state): State<AppState<R>>,
    mut req: Request,
    next: Next,
) -> Response {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match state.auth_service.validate_auth_header(header).await {
        Ok(user) => {
            req.extensions_mut().insert(AuthenticatedUser(user));
        }
        Err(e) => {
            tracing::debug!(error = %e, "Request continues unauthenticated");
        }
    }

    next.run(req).await
}
