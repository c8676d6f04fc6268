//! OpenAPI document served at `/docs`

use utoipa::OpenApi;

use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pin People API",
        description = "User accounts with pins on a map"
    ),
    paths(
        handlers::health::health_check,
        handlers::health::version,
        handlers::auth::register,
        handlers::auth::login_site,
        handlers::auth::login_admin,
        handlers::auth::logout_site,
        handlers::auth::logout_admin,
        handlers::users::get_profile,
        handlers::users::update_profile,
        handlers::location::list_locations,
        handlers::admin::list_audit_events,
    ),
    components(schemas(
        handlers::health::HealthStatus,
        handlers::health::VersionInfo,
        handlers::auth::RegisterRequest,
        handlers::auth::LoginRequest,
        handlers::auth::LoginResponse,
        handlers::users::ProfileResponse,
        handlers::users::UpdateProfileRequest,
        handlers::location::LocationEntry,
        audit_trail::AuthEvent,
        audit_trail::AuthEventKind,
        audit_trail::AuthEventFilter,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "auth", description = "Registration, login and logout"),
        (name = "users", description = "Profiles and locations"),
        (name = "admin", description = "Superuser-only endpoints")
    )
)]
pub struct ApiDoc;
