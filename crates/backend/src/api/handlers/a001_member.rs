use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_member::Member;
use std::collections::HashMap;

use super::remote_context;
use crate::domain::a001_member::service;

/// GET /api/members/by_collector/:collector
pub async fn list_by_collector(
    Path(collector): Path<String>,
) -> Result<Json<Vec<Member>>, StatusCode> {
    if collector.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let (store, page_size) = remote_context()?;

    match service::list_by_collector(store.as_ref(), &collector, page_size).await {
        Ok(members) => Ok(Json(members)),
        Err(e) => {
            tracing::error!("Error fetching members for collector {}: {:#}", collector, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/members/names
pub async fn member_names() -> Result<Json<HashMap<String, String>>, StatusCode> {
    let (store, page_size) = remote_context()?;

    match service::member_names(store.as_ref(), page_size).await {
        Ok(names) => Ok(Json(names)),
        Err(e) => {
            tracing::error!("Error fetching member names: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
