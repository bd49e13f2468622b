//! Router configuration for the Web API.

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    change_password, chat, create_letter, delete_letter, get_letter, get_public_letter, get_users,
    list_authored_letters, list_public_letters, list_received_letters, login, register, rewrite,
    update_letter, update_profile, AppState,
};
use super::middleware::{create_cors_layer, jwt_auth, JwtState};

/// Create the main API router.
pub fn create_router(
    app_state: Arc<AppState>,
    jwt_state: Arc<JwtState>,
    cors_origins: &[String],
) -> Router {
    let user_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/getusers", get(get_users))
        .route("/profile", put(update_profile))
        .route("/password", put(change_password));

    // Public-feed routes come before the authenticated letter routes
    // but live under the same prefix
    let letter_routes = Router::new()
        .route("/postletter", post(create_letter))
        .route("/getall", get(list_authored_letters))
        .route("/getallreceived", get(list_received_letters))
        .route("/getid/:id", get(get_letter))
        .route("/putid/:id", put(update_letter))
        .route("/deleteid/:id", delete(delete_letter))
        .route("/publicletters", get(list_public_letters))
        .route("/publicletters/:id", get(get_public_letter));

    let ai_routes = Router::new()
        .route("/rewrite", post(rewrite))
        .route("/chat", post(chat));

    // Clone jwt_state for the middleware closure
    let jwt_state_for_middleware = jwt_state.clone();

    Router::new()
        .nest("/users", user_routes)
        .nest("/letters", letter_routes)
        .nest("/ai", ai_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(move |req, next| {
                    let state = jwt_state_for_middleware.clone();
                    jwt_auth(state, req, next)
                })),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
