//! Profile view and edit
//!
//! Both routes run the same access policy: a profile belongs to its
//! owner, and superusers may reach any profile.

use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::{policy, CurrentUser};
use crate::db::{ProfileUpdate, User};
use crate::error::{api_success, ApiError, ApiResponse, ApiResult};
use crate::server::PinPeopleServer;
use crate::validation::RequestValidation;
use crate::{validate_email, validate_field, validate_length, validate_required};

pub const EMAIL_IN_USE: &str = "This email is already in use.";

const MAX_PHONE_LEN: usize = 20;

/// Public view of a user row
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    /// DMS rendering of the coordinate pair, absent when incomplete
    pub position: Option<String>,
    pub is_superuser: bool,
    pub last_login: Option<DateTime<Utc>>,
}

impl ProfileResponse {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone_number: user.phone_number.clone(),
            address: user.address.clone(),
            latitude: user.latitude,
            longitude: user.longitude,
            position: user.position(),
            is_superuser: user.is_superuser,
            last_login: user.last_login,
        }
    }
}

/// Editable profile fields
///
/// Coordinates come and go as a pair; sending only one of them is a
/// validation error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

impl RequestValidation for UpdateProfileRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.username, "Username is required");
        validate_length!(
            self.username,
            1,
            150,
            "Username must be between 1 and 150 characters"
        );
        validate_required!(self.email, "Email is required");
        validate_email!(self.email, "Invalid email format");

        if let Some(phone) = &self.phone_number {
            validate_field!(
                phone,
                phone.len() <= MAX_PHONE_LEN,
                "Phone number must be at most 20 characters"
            );
        }

        validate_field!(
            self.latitude,
            self.latitude.is_some() == self.longitude.is_some(),
            "Latitude and longitude must be provided together"
        );
        if let Some(lat) = self.latitude {
            validate_field!(
                lat,
                lat.abs() <= Decimal::from(90),
                "Latitude must be between -90 and 90"
            );
        }
        if let Some(lon) = self.longitude {
            validate_field!(
                lon,
                lon.abs() <= Decimal::from(180),
                "Longitude must be between -180 and 180"
            );
        }
        Ok(())
    }
}

/// View a profile
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/profile",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Profile"),
        (status = 403, description = "Not the owner and not a superuser"),
        (status = 404, description = "No such user")
    )
)]
pub async fn get_profile(
    State(server): State<PinPeopleServer>,
    current: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<ProfileResponse>>> {
    if !policy::can_view(&current, id) {
        return Err(ApiError::authorization(policy::VIEW_DENIED));
    }

    let user = server
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("user"))?;

    Ok(Json(api_success(ProfileResponse::from_user(&user))))
}

/// Edit a profile
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}/profile",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile"),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Not the owner and not a superuser"),
        (status = 404, description = "No such user"),
        (status = 409, description = "Username or email already in use")
    )
)]
pub async fn update_profile(
    State(server): State<PinPeopleServer>,
    current: CurrentUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateProfileRequest>,
) -> ApiResult<Json<ApiResponse<ProfileResponse>>> {
    if !policy::can_edit(&current, id) {
        return Err(ApiError::authorization(policy::EDIT_DENIED));
    }

    request.validate()?;

    if server
        .users
        .username_taken_by_other(&request.username, id)
        .await?
    {
        return Err(ApiError::conflict(crate::handlers::auth::USERNAME_TAKEN));
    }

    if server.users.email_in_use_by_other(&request.email, id).await? {
        return Err(ApiError::conflict(EMAIL_IN_USE));
    }

    let update = ProfileUpdate {
        username: request.username,
        email: request.email,
        first_name: request.first_name,
        last_name: request.last_name,
        phone_number: request.phone_number,
        address: request.address,
        latitude: request.latitude,
        longitude: request.longitude,
    };

    let user = server
        .users
        .update_profile(id, &update)
        .await?
        .ok_or_else(|| ApiError::not_found("user"))?;

    tracing::info!(user_id = %user.id, "Profile updated");

    Ok(Json(api_success(ProfileResponse::from_user(&user))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn update_request() -> UpdateProfileRequest {
        UpdateProfileRequest {
            username: "lara".to_string(),
            email: "lara@example.com".to_string(),
            first_name: "Lara".to_string(),
            last_name: "Croft".to_string(),
            phone_number: Some("+27 21 555 0100".to_string()),
            address: Some("1 Croft Manor".to_string()),
            latitude: Some(dec!(-34.08)),
            longitude: Some(dec!(18.86)),
        }
    }

    #[test]
    fn valid_update_passes() {
        assert!(update_request().validate().is_ok());
    }

    #[test]
    fn blank_username_is_rejected() {
        let mut request = update_request();
        request.username = "  ".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn overlong_username_is_rejected() {
        let mut request = update_request();
        request.username = "x".repeat(151);
        assert!(request.validate().is_err());
    }

    #[test]
    fn lone_latitude_is_rejected() {
        let mut request = update_request();
        request.longitude = None;
        assert!(request.validate().is_err());
    }

    #[test]
    fn clearing_both_coordinates_is_allowed() {
        let mut request = update_request();
        request.latitude = None;
        request.longitude = None;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn out_of_range_latitude_is_rejected() {
        let mut request = update_request();
        request.latitude = Some(dec!(90.000001));
        assert!(request.validate().is_err());
    }

    #[test]
    fn out_of_range_longitude_is_rejected() {
        let mut request = update_request();
        request.longitude = Some(dec!(-180.5));
        assert!(request.validate().is_err());
    }

    #[test]
    fn long_phone_number_is_rejected() {
        let mut request = update_request();
        request.phone_number = Some("0".repeat(21));
        assert!(request.validate().is_err());
    }
}
