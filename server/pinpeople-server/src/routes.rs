//! Route table

pub mod paths;

use axum::{
    routing::{get, post},
    Router,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::openapi::ApiDoc;
use crate::server::PinPeopleServer;
use utoipa::OpenApi;

/// Wire every handler to its path
pub fn create_routes() -> Router<PinPeopleServer> {
    Router::new()
        .route(paths::HEALTH, get(handlers::health::health_check))
        .route(paths::VERSION, get(handlers::health::version))
        .route(paths::AUTH_REGISTER, post(handlers::auth::register))
        .route(paths::AUTH_LOGIN, post(handlers::auth::login_site))
        .route(paths::AUTH_LOGOUT, post(handlers::auth::logout_site))
        .route(paths::ADMIN_AUTH_LOGIN, post(handlers::auth::login_admin))
        .route(paths::ADMIN_AUTH_LOGOUT, post(handlers::auth::logout_admin))
        .route(
            paths::USER_PROFILE,
            get(handlers::users::get_profile).put(handlers::users::update_profile),
        )
        .route(paths::USER_LOCATIONS, get(handlers::location::list_locations))
        .route(
            paths::ADMIN_AUDIT_EVENTS,
            get(handlers::admin::list_audit_events),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
