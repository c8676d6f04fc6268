//! Fire-and-forget persistence for auth events

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entry::{Actor, AuthEvent, AuthEventFilter, AuthEventKind};
use crate::error::{AuditError, AuditResult};

/// Appends and reads [`AuthEvent`] rows in the `audit_events` table.
#[derive(Debug, Clone)]
pub struct AuditRecorder {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct AuthEventRow {
    id: Uuid,
    actor_id: Uuid,
    display_name: String,
    kind: String,
    recorded_at: DateTime<Utc>,
}

impl AuthEventRow {
    fn into_event(self) -> AuditResult<AuthEvent> {
        let kind = AuthEventKind::parse(&self.kind).ok_or(AuditError::UnknownKind {
            id: self.id,
            kind: self.kind,
        })?;
        Ok(AuthEvent {
            id: self.id,
            actor_id: self.actor_id,
            display_name: self.display_name,
            kind,
            recorded_at: self.recorded_at,
        })
    }
}

impl AuditRecorder {
    /// Create a new recorder over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append one auth event for the given actor.
    ///
    /// A `None` actor (logout without an authenticated session) records
    /// nothing. Persistence failures are logged at WARN and swallowed:
    /// by policy the authentication flow must succeed regardless of the
    /// audit outcome.
    pub async fn record_auth_event(&self, actor: Option<&Actor>, kind: AuthEventKind) {
        let Some(actor) = actor else {
            return;
        };

        let result = sqlx::query(
            r#"
            INSERT INTO audit_events (id, actor_id, display_name, kind, recorded_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(actor.id)
        .bind(&actor.display_name)
        .bind(kind.as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await;

        if let Err(e) = result {
            tracing::warn!(
                actor_id = %actor.id,
                kind = %kind,
                error = %e,
                "dropping auth audit event, insert failed"
            );
        }
    }

    /// List events newest-first, optionally restricted to logins or
    /// logouts. Backs the admin audit read path.
    pub async fn list_events(
        &self,
        filter: Option<AuthEventFilter>,
        limit: i64,
        offset: i64,
    ) -> AuditResult<Vec<AuthEvent>> {
        let rows: Vec<AuthEventRow> = match filter {
            Some(filter) => {
                sqlx::query_as(
                    r#"
                    SELECT id, actor_id, display_name, kind, recorded_at
                    FROM audit_events
                    WHERE kind LIKE $1
                    ORDER BY recorded_at DESC
                    LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(filter.kind_pattern())
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as(
                    r#"
                    SELECT id, actor_id, display_name, kind, recorded_at
                    FROM audit_events
                    ORDER BY recorded_at DESC
                    LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter().map(AuthEventRow::into_event).collect()
    }

    /// Count events matching the filter, for pagination metadata.
    pub async fn count_events(&self, filter: Option<AuthEventFilter>) -> AuditResult<i64> {
        let count: (i64,) = match filter {
            Some(filter) => {
                sqlx::query_as("SELECT COUNT(*) FROM audit_events WHERE kind LIKE $1")
                    .bind(filter.kind_pattern())
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as("SELECT COUNT(*) FROM audit_events")
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(count.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_kind_is_reported_with_record_id() {
        let id = Uuid::new_v4();
        let row = AuthEventRow {
            id,
            actor_id: Uuid::new_v4(),
            display_name: "testuser".to_string(),
            kind: "password_change".to_string(),
            recorded_at: Utc::now(),
        };
        match row.into_event() {
            Err(AuditError::UnknownKind { id: got, kind }) => {
                assert_eq!(got, id);
                assert_eq!(kind, "password_change");
            }
            other => panic!("expected UnknownKind, got {:?}", other),
        }
    }

    #[test]
    fn valid_row_converts() {
        let row = AuthEventRow {
            id: Uuid::new_v4(),
            actor_id: Uuid::new_v4(),
            display_name: "testuser".to_string(),
            kind: "logout_admin".to_string(),
            recorded_at: Utc::now(),
        };
        let event = row.into_event().unwrap();
        assert_eq!(event.kind, AuthEventKind::LogoutAdmin);
        assert_eq!(event.display_name, "testuser");
    }
}
