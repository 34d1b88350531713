use axum::{http::StatusCode, Json};
use contracts::system::roles::{ChangeRoleDto, RoleIssue, UserWithRoles};

use super::remote_context;
use crate::system::roles::service;

/// GET /api/system/roles/issues
pub async fn list_role_issues() -> Result<Json<Vec<RoleIssue>>, StatusCode> {
    let (store, page_size) = remote_context()?;

    match service::check_role_issues(store.as_ref(), page_size).await {
        Ok(issues) => Ok(Json(issues)),
        Err(e) => {
            tracing::error!("Role check failed: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/system/roles/users
pub async fn list_users_with_roles() -> Result<Json<Vec<UserWithRoles>>, StatusCode> {
    let (store, page_size) = remote_context()?;

    match service::list_users_with_roles(store.as_ref(), page_size).await {
        Ok(users) => Ok(Json(users)),
        Err(e) => {
            tracing::error!("Failed to list users with roles: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/system/roles
pub async fn change_role(Json(dto): Json<ChangeRoleDto>) -> Result<StatusCode, StatusCode> {
    if dto.user_id.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let (store, _) = remote_context()?;

    match service::change_role(store.as_ref(), &dto.user_id, dto.role).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            tracing::error!("Error updating role: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
