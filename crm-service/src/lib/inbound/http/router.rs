use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::me::current_user;
use super::handlers::verify::verify;
use super::middleware::attach_identity;
use crate::domain::auth::service::AuthService;
use crate::domain::user::ports::UserRepository;

pub struct AppState<R: UserRepository> {
    pub auth_service: Arc<AuthService<R>>,
}

impl<R: UserRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
        }
    }
}

pub fn create_router<R: UserRepository>(auth_service: Arc<AuthService<R>>) -> Router {
    let state = AppState { auth_service };

    let public_routes = Router::new()
        .route("/auth/login", post(login::<R>))
        .route("/auth/verify", get(verify::<R>));

    let protected_routes = Router::new().route("/api/users/me", get(current_user));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    // The identity filter wraps every route; route guards downstream decide
    // whether an anonymous request is acceptable.
    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            attach_identity::<R>,
        ))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
