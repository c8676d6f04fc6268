//! User rows and the write-side structs that feed them

use chrono::{DateTime, Utc};
use geo_coords::format_position;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A user account row
///
/// Coordinates are stored as NUMERIC(9,6), nullable as a pair: a user
/// either has both latitude and longitude or neither.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_superuser: bool,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The user's coordinates rendered as a DMS position string,
    /// `None` when either coordinate is missing
    pub fn position(&self) -> Option<String> {
        format_position(self.latitude, self.longitude)
    }

    /// Whether the user has a complete coordinate pair
    pub fn is_locatable(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// Fields required to create an account
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}

/// Editable profile fields
///
/// All fields are written on every update; the handler is responsible
/// for merging the incoming request with the current row first.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

/// Projection used by the locatable-user listing
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct LocatableUser {
    pub id: Uuid,
    pub username: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "gordon".to_string(),
            email: "gordon@example.com".to_string(),
            first_name: "Gordon".to_string(),
            last_name: "Freeman".to_string(),
            phone_number: None,
            address: None,
            latitude: Some(dec!(-34.08)),
            longitude: Some(dec!(18.86)),
            password_hash: "hash".to_string(),
            is_superuser: false,
            is_active: true,
            last_login: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn position_formats_both_coordinates() {
        let user = sample_user();
        assert!(user.is_locatable());
        assert_eq!(user.position().as_deref(), Some("34°4'48\"S 18°51'36\"E"));
    }

    #[test]
    fn position_is_none_without_full_pair() {
        let mut user = sample_user();
        user.longitude = None;
        assert!(!user.is_locatable());
        assert_eq!(user.position(), None);
    }

    #[test]
    fn deactivated_users_with_pins_stay_locatable() {
        let mut user = sample_user();
        user.is_active = false;
        assert!(user.is_locatable());
        assert!(user.position().is_some());
    }

    #[test]
    fn only_locatable_users_carry_positions() {
        let with_pin = sample_user();
        let mut second_pin = sample_user();
        second_pin.username = "alyx".to_string();
        second_pin.latitude = Some(dec!(51.477928));
        second_pin.longitude = Some(dec!(-0.001545));
        let mut no_pin = sample_user();
        no_pin.username = "barney".to_string();
        no_pin.latitude = None;
        no_pin.longitude = None;

        let users = vec![with_pin, second_pin, no_pin];
        let locatable: Vec<&User> = users.iter().filter(|u| u.is_locatable()).collect();

        assert_eq!(locatable.len(), 2);
        assert!(locatable.iter().all(|u| u.position().is_some()));
        assert!(!users.iter().any(|u| u.username == "barney" && u.is_locatable()));
    }
}
