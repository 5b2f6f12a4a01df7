pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod state;
pub mod utils;

use axum::{
    http::Method,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Builds the `/api` router with auth layers, tracing and CORS applied.
pub fn app(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login));

    let user_routes = Router::new()
        .route(
            "/api/leaves",
            get(handlers::leaves::list_my_leaves).post(handlers::leaves::create_leave),
        )
        .route("/api/leaves/{id}", delete(handlers::leaves::cancel_leave))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth,
        ));

    let admin_routes = Router::new()
        .route("/api/admin/leaves", get(handlers::admin::list_all_leaves))
        .route(
            "/api/admin/leaves/{id}/status",
            put(handlers::admin::update_leave_status),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_admin,
        ));

    Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .merge(admin_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::PUT,
                            Method::DELETE,
                            Method::OPTIONS,
                        ])
                        .allow_headers(Any)
                        .max_age(std::time::Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state(state)
}
