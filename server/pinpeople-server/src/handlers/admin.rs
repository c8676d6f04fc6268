//! Admin-only endpoints

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use audit_trail::{AuthEvent, AuthEventFilter};

use crate::auth::CurrentUser;
use crate::error::{api_success_with_meta, ApiError, ApiResponse, ApiResult, ResponseMetadata};
use crate::server::PinPeopleServer;
use crate::types::PaginationParams;

pub const ADMIN_ONLY: &str = "You are not allowed to view the audit trail.";

#[derive(Debug, Deserialize, IntoParams)]
pub struct AuditEventQuery {
    /// Restrict to `login` or `logout` events
    pub filter: Option<AuthEventFilter>,
    /// Page number, starting at 1
    pub page: Option<i32>,
    /// Items per page
    pub page_size: Option<i32>,
}

impl AuditEventQuery {
    fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// List login/logout audit events, newest first
#[utoipa::path(
    get,
    path = "/api/v1/admin/audit-events",
    tag = "admin",
    params(AuditEventQuery),
    responses(
        (status = 200, description = "Audit events"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not a superuser")
    )
)]
pub async fn list_audit_events(
    State(server): State<PinPeopleServer>,
    current: CurrentUser,
    Query(query): Query<AuditEventQuery>,
) -> ApiResult<Json<ApiResponse<Vec<AuthEvent>>>> {
    if !current.is_superuser {
        return Err(ApiError::authorization(ADMIN_ONLY));
    }

    let pagination = query.pagination();
    let events = server
        .audit
        .list_events(query.filter, pagination.limit(), pagination.offset())
        .await
        .map_err(|e| ApiError::internal(format!("Audit listing failed: {e}")))?;

    let total_count = server
        .audit
        .count_events(query.filter)
        .await
        .map_err(|e| ApiError::internal(format!("Audit count failed: {e}")))?;

    let metadata = ResponseMetadata {
        pagination: Some(pagination.info(total_count)),
        total_count: Some(total_count),
    };

    Ok(Json(api_success_with_meta(events, metadata)))
}
