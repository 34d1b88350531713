use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DASHBOARDS
        // ========================================
        // D400 Financial totals
        .route(
            "/api/d400/financial_totals",
            get(handlers::d400_financial_totals::get_financial_totals),
        )
        .route(
            "/api/d400/financial_totals/refresh",
            post(handlers::d400_financial_totals::refresh_financial_totals),
        )
        // ========================================
        // AGGREGATES
        // ========================================
        // A001 Members
        .route(
            "/api/members/by_collector/:collector",
            get(handlers::a001_member::list_by_collector),
        )
        .route(
            "/api/members/names",
            get(handlers::a001_member::member_names),
        )
        // ========================================
        // SYSTEM
        // ========================================
        // Role audit & management
        .route(
            "/api/system/roles",
            post(handlers::roles::change_role),
        )
        .route(
            "/api/system/roles/issues",
            get(handlers::roles::list_role_issues),
        )
        .route(
            "/api/system/roles/users",
            get(handlers::roles::list_users_with_roles),
        )
        // Diagnostics
        .route(
            "/api/system/diagnostics/report",
            post(handlers::diagnostics::run_diagnostic_report),
        )
        .route(
            "/api/system/checks/run",
            post(handlers::diagnostics::run_system_checks),
        )
        .route(
            "/api/system/checks/fix",
            post(handlers::diagnostics::apply_fix),
        )
}
