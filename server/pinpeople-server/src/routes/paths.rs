//! Route path constants
//!
//! `#[utoipa::path]` attributes require string literals, so the
//! handler annotations repeat these values; keep them in sync.

pub const HEALTH: &str = "/health";
pub const VERSION: &str = "/version";

pub const AUTH_REGISTER: &str = "/api/v1/auth/register";
pub const AUTH_LOGIN: &str = "/api/v1/auth/login";
pub const AUTH_LOGOUT: &str = "/api/v1/auth/logout";

pub const ADMIN_AUTH_LOGIN: &str = "/api/v1/admin/auth/login";
pub const ADMIN_AUTH_LOGOUT: &str = "/api/v1/admin/auth/logout";

pub const USER_PROFILE: &str = "/api/v1/users/:id/profile";
pub const USER_LOCATIONS: &str = "/api/v1/users/locations";

pub const ADMIN_AUDIT_EVENTS: &str = "/api/v1/admin/audit-events";
