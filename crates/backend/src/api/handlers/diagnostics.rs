use axum::{http::StatusCode, Json};
use contracts::system::diagnostics::{
    ApplyFixDto, ApplyFixResponse, DiagnosticResult, SystemCheckResult,
};

use super::remote_context;
use crate::system::diagnostics::service;

/// POST /api/system/diagnostics/report
pub async fn run_diagnostic_report() -> Result<Json<Vec<DiagnosticResult>>, StatusCode> {
    let (store, _) = remote_context()?;
    Ok(Json(service::run_diagnostic_report(store.as_ref()).await))
}

/// POST /api/system/checks/run
pub async fn run_system_checks() -> Result<Json<Vec<SystemCheckResult>>, StatusCode> {
    let (store, _) = remote_context()?;

    match service::run_system_checks(store.as_ref()).await {
        Ok(results) => Ok(Json(results)),
        Err(e) => {
            tracing::error!("System checks error: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/system/checks/fix
pub async fn apply_fix(Json(dto): Json<ApplyFixDto>) -> Result<Json<ApplyFixResponse>, StatusCode> {
    if service::fix_function_for(&dto.check_type).is_none() {
        tracing::warn!("No automatic fix is available for {}", dto.check_type);
        return Err(StatusCode::BAD_REQUEST);
    }
    let (store, _) = remote_context()?;

    match service::apply_fix(store.as_ref(), &dto.check_type, dto.details).await {
        Ok(message) => Ok(Json(ApplyFixResponse { message })),
        Err(e) => {
            tracing::error!("Fix for {} failed: {:#}", dto.check_type, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
