// Audit entry types and structures
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Kind of authentication transition being recorded.
///
/// The caller classifies site vs. admin before recording; the trail
/// never inspects routing state itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuthEventKind {
    LoginSite,
    LoginAdmin,
    LogoutSite,
    LogoutAdmin,
}

impl AuthEventKind {
    /// Stable wire/storage name for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            AuthEventKind::LoginSite => "login_site",
            AuthEventKind::LoginAdmin => "login_admin",
            AuthEventKind::LogoutSite => "logout_site",
            AuthEventKind::LogoutAdmin => "logout_admin",
        }
    }

    /// Parse a stored kind name. Unknown names are rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "login_site" => Some(AuthEventKind::LoginSite),
            "login_admin" => Some(AuthEventKind::LoginAdmin),
            "logout_site" => Some(AuthEventKind::LogoutSite),
            "logout_admin" => Some(AuthEventKind::LogoutAdmin),
            _ => None,
        }
    }

    /// True for the two login kinds.
    pub fn is_login(self) -> bool {
        matches!(self, AuthEventKind::LoginSite | AuthEventKind::LoginAdmin)
    }
}

impl std::fmt::Display for AuthEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated identity an event is recorded for.
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: Uuid,
    pub display_name: String,
}

impl Actor {
    pub fn new(id: Uuid, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

/// An immutable audit trail entry.
///
/// Entries are appended once per login/logout transition and never
/// mutated or deleted by this system.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthEvent {
    pub id: Uuid,
    pub actor_id: Uuid,
    pub display_name: String,
    pub kind: AuthEventKind,
    pub recorded_at: DateTime<Utc>,
}

/// Login/logout filter for the audit event listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuthEventFilter {
    Login,
    Logout,
}

impl AuthEventFilter {
    /// SQL LIKE pattern matching the stored kind names.
    pub(crate) fn kind_pattern(self) -> &'static str {
        match self {
            AuthEventFilter::Login => "login_%",
            AuthEventFilter::Logout => "logout_%",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in [
            AuthEventKind::LoginSite,
            AuthEventKind::LoginAdmin,
            AuthEventKind::LogoutSite,
            AuthEventKind::LogoutAdmin,
        ] {
            assert_eq!(AuthEventKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(AuthEventKind::parse("password_change"), None);
    }

    #[test]
    fn login_kinds_are_logins() {
        assert!(AuthEventKind::LoginSite.is_login());
        assert!(AuthEventKind::LoginAdmin.is_login());
        assert!(!AuthEventKind::LogoutSite.is_login());
        assert!(!AuthEventKind::LogoutAdmin.is_login());
    }

    #[test]
    fn filter_patterns_cover_both_kinds() {
        assert_eq!(AuthEventFilter::Login.kind_pattern(), "login_%");
        assert_eq!(AuthEventFilter::Logout.kind_pattern(), "logout_%");
    }
}
