//! User persistence
//!
//! Queries are bound at runtime so the crate builds without a live
//! database. Column lists stay explicit to keep `FromRow` stable when
//! the table grows.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::{LocatableUser, NewUser, ProfileUpdate, User};

const USER_COLUMNS: &str = "id, username, email, first_name, last_name, phone_number, \
     address, latitude, longitude, password_hash, is_superuser, is_active, \
     last_login, created_at, updated_at";

/// Repository for the `users` table
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new account and return the created row
    pub async fn create(&self, new_user: &NewUser) -> Result<User, sqlx::Error> {
        let sql = format!(
            "INSERT INTO users (id, username, email, first_name, last_name, password_hash, \
                 is_superuser, is_active, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, FALSE, TRUE, NOW(), NOW()) \
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(Uuid::new_v4())
            .bind(&new_user.username)
            .bind(&new_user.email)
            .bind(&new_user.first_name)
            .bind(&new_user.last_name)
            .bind(&new_user.password_hash)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn username_taken(&self, username: &str) -> Result<bool, sqlx::Error> {
        let taken: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM users WHERE username = $1 LIMIT 1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;
        Ok(taken.is_some())
    }

    /// Whether `username` is already held by an account other than `user_id`
    pub async fn username_taken_by_other(
        &self,
        username: &str,
        user_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let taken: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM users WHERE username = $1 AND id <> $2 LIMIT 1")
                .bind(username)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(taken.is_some())
    }

    /// Whether `email` is already used by an account other than `user_id`
    pub async fn email_in_use_by_other(
        &self,
        email: &str,
        user_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let used: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM users WHERE email = $1 AND id <> $2 LIMIT 1")
                .bind(email)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(used.is_some())
    }

    /// Overwrite the editable profile fields and return the new row
    pub async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<Option<User>, sqlx::Error> {
        let sql = format!(
            "UPDATE users SET username = $2, email = $3, first_name = $4, last_name = $5, \
                 phone_number = $6, address = $7, latitude = $8, longitude = $9, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(&update.username)
            .bind(&update.email)
            .bind(&update.first_name)
            .bind(&update.last_name)
            .bind(&update.phone_number)
            .bind(&update.address)
            .bind(update.latitude)
            .bind(update.longitude)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn update_last_login(&self, id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET last_login = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Users with a complete coordinate pair, ordered by username
    ///
    /// Coordinate presence is the only filter; deactivated accounts
    /// keep their pin until the coordinates are cleared.
    pub async fn list_locatable(&self) -> Result<Vec<LocatableUser>, sqlx::Error> {
        sqlx::query_as::<_, LocatableUser>(
            "SELECT id, username, latitude, longitude FROM users \
             WHERE latitude IS NOT NULL AND longitude IS NOT NULL \
             ORDER BY username",
        )
        .fetch_all(&self.pool)
        .await
    }
}
