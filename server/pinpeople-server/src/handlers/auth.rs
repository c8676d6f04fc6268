//! Registration, login and logout
//!
//! Site and admin consoles share credentials but are audited as
//! distinct surfaces, so each has its own login/logout route pair.

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use audit_trail::{Actor, AuthEventKind};

use crate::auth::{password, tokens, MaybeUser};
use crate::db::NewUser;
use crate::error::{api_success, ApiError, ApiResponse, ApiResult};
use crate::handlers::users::ProfileResponse;
use crate::server::PinPeopleServer;
use crate::validation::RequestValidation;
use crate::{validate_email, validate_field, validate_length, validate_required};

pub const USERNAME_TAKEN: &str = "A user with that username already exists.";
pub const BAD_CREDENTIALS: &str = "Invalid username or password.";
pub const NOT_ADMIN: &str = "This account is not allowed to access the admin console.";

/// Registration payload
///
/// Only the credentials are required; email and names default to empty
/// and can be filled in later through the profile editor.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub password: String,
    pub password_confirm: String,
}

impl RequestValidation for RegisterRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.username, "Username is required");
        validate_length!(
            self.username,
            1,
            150,
            "Username must be between 1 and 150 characters"
        );
        if !self.email.is_empty() {
            validate_email!(self.email, "Invalid email format");
        }
        validate_length!(
            self.password,
            8,
            128,
            "Password must be between 8 and 128 characters"
        );
        validate_field!(
            self.password_confirm,
            self.password == self.password_confirm,
            "Passwords do not match"
        );
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl RequestValidation for LoginRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.username, "Username is required");
        validate_required!(self.password, "Password is required");
        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
    pub user: ProfileResponse,
}

/// Create a new account
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created"),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn register(
    State(server): State<PinPeopleServer>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<ProfileResponse>>)> {
    request.validate()?;

    if server.users.username_taken(&request.username).await? {
        return Err(ApiError::conflict(USERNAME_TAKEN));
    }

    let new_user = NewUser {
        username: request.username,
        email: request.email,
        first_name: request.first_name,
        last_name: request.last_name,
        password_hash: password::hash_password(&request.password)?,
    };
    let user = server.users.create(&new_user).await?;

    tracing::info!(user_id = %user.id, username = %user.username, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(api_success(ProfileResponse::from_user(&user))),
    ))
}

async fn login(
    server: &PinPeopleServer,
    request: LoginRequest,
    kind: AuthEventKind,
) -> ApiResult<Json<ApiResponse<LoginResponse>>> {
    request.validate()?;

    let user = server
        .users
        .find_by_username(&request.username)
        .await?
        .filter(|user| user.is_active)
        .filter(|user| password::verify_password(&request.password, &user.password_hash))
        .ok_or_else(|| ApiError::authentication(BAD_CREDENTIALS))?;

    if kind == AuthEventKind::LoginAdmin && !user.is_superuser {
        return Err(ApiError::authorization(NOT_ADMIN));
    }

    let token = tokens::issue_token(
        &server.config.jwt_secret,
        user.id,
        &user.username,
        user.is_superuser,
        server.config.token_ttl_seconds,
    )
    .map_err(|e| ApiError::internal(format!("Token signing failed: {e}")))?;

    server.users.update_last_login(user.id).await?;

    let actor = Actor::new(user.id, user.username.clone());
    server.audit.record_auth_event(Some(&actor), kind).await;

    tracing::info!(user_id = %user.id, kind = %kind, "User logged in");

    Ok(Json(api_success(LoginResponse {
        token,
        token_type: "Bearer",
        expires_in: server.config.token_ttl_seconds,
        user: ProfileResponse::from_user(&user),
    })))
}

async fn logout(server: &PinPeopleServer, maybe: MaybeUser, kind: AuthEventKind) -> StatusCode {
    match maybe {
        MaybeUser(Some(current)) => {
            let actor = Actor::new(current.id, current.username);
            server.audit.record_auth_event(Some(&actor), kind).await;
        }
        MaybeUser(None) => server.audit.record_auth_event(None, kind).await,
    }
    StatusCode::NO_CONTENT
}

/// Log in to the site
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login_site(
    State(server): State<PinPeopleServer>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<ApiResponse<LoginResponse>>> {
    login(&server, request, AuthEventKind::LoginSite).await
}

/// Log in to the admin console; superusers only
#[utoipa::path(
    post,
    path = "/api/v1/admin/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued"),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Account is not a superuser")
    )
)]
pub async fn login_admin(
    State(server): State<PinPeopleServer>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<ApiResponse<LoginResponse>>> {
    login(&server, request, AuthEventKind::LoginAdmin).await
}

/// Log out of the site
///
/// Always returns 204. A missing or expired token simply skips the
/// audit entry.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = "auth",
    responses((status = 204, description = "Logged out"))
)]
pub async fn logout_site(State(server): State<PinPeopleServer>, maybe: MaybeUser) -> StatusCode {
    logout(&server, maybe, AuthEventKind::LogoutSite).await
}

/// Log out of the admin console
#[utoipa::path(
    post,
    path = "/api/v1/admin/auth/logout",
    tag = "auth",
    responses((status = 204, description = "Logged out"))
)]
pub async fn logout_admin(State(server): State<PinPeopleServer>, maybe: MaybeUser) -> StatusCode {
    logout(&server, maybe, AuthEventKind::LogoutAdmin).await
}
