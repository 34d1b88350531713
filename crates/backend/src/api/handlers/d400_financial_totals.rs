use axum::{http::StatusCode, Json};
use contracts::dashboards::d400_financial_totals::FinancialTotals;

use super::{internal_error, remote_context};
use crate::dashboards::d400_financial_totals::service;
use crate::system::initialization::totals_cache;

/// GET /api/d400/financial_totals
pub async fn get_financial_totals() -> Result<Json<FinancialTotals>, StatusCode> {
    tracing::info!("D400 Dashboard: Getting financial totals");
    let (store, page_size) = remote_context()?;
    let cache = totals_cache().map_err(internal_error)?;

    let result = cache
        .get_or_compute(|| service::compute_financial_totals(store.as_ref(), page_size))
        .await;

    match result {
        Ok(totals) => Ok(Json(totals)),
        Err(e) => {
            tracing::error!("D400 Dashboard: Failed to get financial totals: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/d400/financial_totals/refresh
pub async fn refresh_financial_totals() -> Result<Json<FinancialTotals>, StatusCode> {
    totals_cache().map_err(internal_error)?.invalidate();
    tracing::info!("D400 Dashboard: Cache invalidated, recomputing totals");
    get_financial_totals().await
}
