/**
 * API Route Handlers
 *
 * This module wires the JSON API endpoints to their handlers.
 *
 * # Routes
 *
 * ## Public
 * - `POST /user/create` - User registration
 * - `POST /user/login` - User login
 *
 * ## Bearer token required
 * - `POST /user/update` - Change username or password
 * - `GET /user/get` - Current user with topics
 * - `GET /user/get_all` - Every user (admin)
 * - `POST /user/ban`, `POST /user/enable` - Toggle a user (admin)
 * - `POST /topic/create`, `POST /topic/edit`, `POST /topic/delete`
 * - `GET /topic/get/{id}`
 * - `POST /conversation/generate`
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{
    ban_user, enable_user, get_all_users, get_profile, login, signup, update_profile,
};
use crate::backend::conversations::generate;
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::topics::{create_topic, delete_topic, get_topic, rename_topic};

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the auth middleware
///
/// # Authentication
///
/// Protected routes get [`auth_middleware`] through `route_layer`, so an
/// unknown path still falls through to the router's fallback instead of
/// answering 401.
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/user/create", post(signup))
        .route("/user/login", post(login));

    let protected = Router::new()
        // User endpoints
        .route("/user/update", post(update_profile))
        .route("/user/get", get(get_profile))
        // Admin endpoints (the AdminUser extractor enforces the flag)
        .route("/user/get_all", get(get_all_users))
        .route("/user/ban", post(ban_user))
        .route("/user/enable", post(enable_user))
        // Topic endpoints
        .route("/topic/create", post(create_topic))
        .route("/topic/edit", post(rename_topic))
        .route("/topic/delete", post(delete_topic))
        .route("/topic/get/{id}", get(get_topic))
        // Conversation endpoints
        .route("/conversation/generate", post(generate))
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware));

    router.merge(public).merge(protected)
}
