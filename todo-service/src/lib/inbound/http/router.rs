use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::me::me;
use super::handlers::register::register;
use super::handlers::tasks::create_task;
use super::handlers::tasks::delete_task;
use super::handlers::tasks::get_task;
use super::handlers::tasks::list_tasks;
use super::handlers::tasks::toggle_task;
use super::handlers::tasks::update_task;
use super::handlers::update_profile::update_profile;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::resolver::IdentityResolver;
use crate::domain::auth::service::AuthService;
use crate::domain::task::service::TaskService;
use crate::outbound::repositories::PostgresTaskRepository;
use crate::outbound::repositories::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PostgresUserRepository>>,
    pub task_service: Arc<TaskService<PostgresTaskRepository>>,
    pub identity_resolver: Arc<IdentityResolver<PostgresUserRepository>>,
}

pub fn create_router(
    auth_service: Arc<AuthService<PostgresUserRepository>>,
    task_service: Arc<TaskService<PostgresTaskRepository>>,
    identity_resolver: Arc<IdentityResolver<PostgresUserRepository>>,
) -> Router {
    let state = AppState {
        auth_service,
        task_service,
        identity_resolver,
    };

    let public_routes = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout));

    let protected_routes = Router::new()
        .route("/api/auth/me", get(me))
        .route("/api/users/me", patch(update_profile))
        .route("/api/tasks", post(create_task))
        .route("/api/tasks", get(list_tasks))
        .route("/api/tasks/:task_id", get(get_task))
        .route("/api/tasks/:task_id", patch(update_task))
        .route("/api/tasks/:task_id", delete(delete_task))
        .route("/api/tasks/:task_id/toggle", post(toggle_task))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

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

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
