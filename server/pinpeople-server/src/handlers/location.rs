//! Locatable-user listing
//!
//! Any authenticated user can see where everyone with a pin is. Users
//! without a complete coordinate pair are simply absent from the list.

use axum::{extract::State, response::Json};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::db::LocatableUser;
use crate::error::{api_success, ApiResponse, ApiResult};
use crate::server::PinPeopleServer;

#[derive(Debug, Serialize, ToSchema)]
pub struct LocationEntry {
    pub id: Uuid,
    pub username: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    /// DMS rendering, e.g. `34°4'48"S 18°51'36"E`
    pub position: String,
}

impl LocationEntry {
    fn from_row(row: LocatableUser) -> Self {
        let position = geo_coords::format_position(Some(row.latitude), Some(row.longitude))
            .unwrap_or_default();
        Self {
            id: row.id,
            username: row.username,
            latitude: row.latitude,
            longitude: row.longitude,
            position,
        }
    }
}

/// List every user with a pinned location
#[utoipa::path(
    get,
    path = "/api/v1/users/locations",
    tag = "users",
    responses(
        (status = 200, description = "Locatable users ordered by username"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_locations(
    State(server): State<PinPeopleServer>,
    _current: CurrentUser,
) -> ApiResult<Json<ApiResponse<Vec<LocationEntry>>>> {
    let rows = server.users.list_locatable().await?;
    let entries = rows.into_iter().map(LocationEntry::from_row).collect();
    Ok(Json(api_success(entries)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn entry_carries_dms_position() {
        let entry = LocationEntry::from_row(LocatableUser {
            id: Uuid::new_v4(),
            username: "gordon".to_string(),
            latitude: dec!(-34.08),
            longitude: dec!(18.86),
        });
        assert_eq!(entry.position, "34°4'48\"S 18°51'36\"E");
    }
}
