use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::diagnostics::{
    DiagnosticCategory, DiagnosticResult, DiagnosticStatus, FixFunction, SystemCheckResult,
};
use serde_json::{json, Value};

use crate::shared::remote::{RemoteError, RemoteStore};

/// Запустить три диагностические процедуры параллельно.
///
/// Упавшая процедура даёт раздел со статусом `error`, остальные разделы
/// при этом всё равно возвращаются.
pub async fn run_diagnostic_report(store: &dyn RemoteStore) -> Vec<DiagnosticResult> {
    tracing::info!("Running system diagnostics...");

    let [roles, members, security] = DiagnosticCategory::all();
    let (role_result, member_result, security_result) = tokio::join!(
        store.rpc(roles.rpc_name(), json!({})),
        store.rpc(members.rpc_name(), json!({})),
        store.rpc(security.rpc_name(), json!({})),
    );

    vec![
        to_diagnostic(roles, role_result),
        to_diagnostic(members, member_result),
        to_diagnostic(security, security_result),
    ]
}

fn to_diagnostic(category: DiagnosticCategory, result: Result<Value, RemoteError>) -> DiagnosticResult {
    let timestamp = Utc::now();
    match result {
        Ok(data) => {
            let findings = match data {
                Value::Array(rows) => rows,
                Value::Null => Vec::new(),
                other => vec![other],
            };
            let status = if findings.is_empty() {
                DiagnosticStatus::Success
            } else {
                DiagnosticStatus::Warning
            };
            DiagnosticResult {
                timestamp,
                category,
                findings,
                status,
                error: None,
            }
        }
        Err(e) => {
            tracing::error!("Diagnostic {} failed: {}", category.rpc_name(), e);
            DiagnosticResult {
                timestamp,
                category,
                findings: Vec::new(),
                status: DiagnosticStatus::Error,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Комбинированные системные проверки (`run_combined_system_checks`)
pub async fn run_system_checks(store: &dyn RemoteStore) -> Result<Vec<SystemCheckResult>> {
    tracing::info!("Starting combined system checks...");

    let data = store
        .rpc("run_combined_system_checks", json!({}))
        .await
        .context("Failed to run system checks")?;

    let rows = match data {
        Value::Array(rows) => rows,
        Value::Null => Vec::new(),
        other => anyhow::bail!("Unexpected system checks response: {}", other),
    };

    let results: Vec<SystemCheckResult> = rows
        .into_iter()
        .filter_map(|row| match row {
            Value::Object(raw) => Some(to_check_result(raw)),
            other => {
                tracing::warn!("Skipping non-object system check row: {}", other);
                None
            }
        })
        .collect();

    tracing::info!("System checks complete: {} results", results.len());
    Ok(results)
}

fn to_check_result(raw: serde_json::Map<String, Value>) -> SystemCheckResult {
    let text = |key: &str| raw.get(key).and_then(Value::as_str).map(str::to_string);
    let test_name = text("metric_name").or_else(|| text("check_type"));
    let test_type = text("test_category");
    SystemCheckResult {
        test_name,
        test_type,
        raw,
    }
}

/// Процедура автоматического исправления для типа проверки
pub fn fix_function_for(check_type: &str) -> Option<FixFunction> {
    match check_type {
        "Multiple Roles Assigned" => Some(FixFunction::FixMultipleRoles),
        "Collectors Without Role" => Some(FixFunction::AssignCollectorRole),
        "Security Settings" => Some(FixFunction::FixSecuritySettings),
        _ => None,
    }
}

/// Применить автоматическое исправление; возвращает сообщение для пользователя
pub async fn apply_fix(store: &dyn RemoteStore, check_type: &str, details: Value) -> Result<String> {
    let function = fix_function_for(check_type).ok_or_else(|| {
        anyhow::anyhow!("No automatic fix is available for this issue: {}", check_type)
    })?;

    tracing::info!("Applying fix {} for {}", function.rpc_name(), check_type);
    let data = store
        .rpc(function.rpc_name(), json!({ "issue_details": details }))
        .await
        .with_context(|| format!("Failed to apply fix for {}", check_type))?;

    Ok(match data {
        Value::String(message) if !message.is_empty() => message,
        _ => format!("Successfully resolved {} issue", check_type),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::remote::memory::MemoryStore;

    #[tokio::test]
    async fn test_report_statuses() {
        let store = MemoryStore::new()
            .with_rpc(
                "check_role_inconsistencies",
                json!([{"user_id": "u1", "issue_type": "Missing Member Role"}]),
            )
            .with_rpc("check_member_numbers", json!([]))
            .with_failing_rpc("check_security_settings", "permission denied");

        let report = run_diagnostic_report(&store).await;

        assert_eq!(report.len(), 3);
        assert_eq!(report[0].category, DiagnosticCategory::RoleManagement);
        assert_eq!(report[0].status, DiagnosticStatus::Warning);
        assert_eq!(report[0].findings.len(), 1);
        assert_eq!(report[1].status, DiagnosticStatus::Success);
        assert_eq!(report[2].status, DiagnosticStatus::Error);
        assert!(report[2].error.as_deref().unwrap().contains("permission denied"));
    }

    #[tokio::test]
    async fn test_system_check_names() {
        let store = MemoryStore::new().with_rpc(
            "run_combined_system_checks",
            json!([
                {"metric_name": "Active members", "check_type": "Member Number Issues", "test_category": "data"},
                {"check_type": "Security Settings", "status": "Warning", "details": {}},
            ]),
        );

        let results = run_system_checks(&store).await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].test_name.as_deref(), Some("Active members"));
        assert_eq!(results[0].test_type.as_deref(), Some("data"));
        assert_eq!(results[1].test_name.as_deref(), Some("Security Settings"));
        assert_eq!(results[1].raw["status"], json!("Warning"));
    }

    #[tokio::test]
    async fn test_system_checks_error_propagates() {
        let store = MemoryStore::new().with_failing_rpc("run_combined_system_checks", "boom");
        assert!(run_system_checks(&store).await.is_err());
    }

    #[test]
    fn test_fix_function_mapping() {
        assert_eq!(
            fix_function_for("Multiple Roles Assigned"),
            Some(FixFunction::FixMultipleRoles)
        );
        assert_eq!(
            fix_function_for("Collectors Without Role"),
            Some(FixFunction::AssignCollectorRole)
        );
        assert_eq!(
            fix_function_for("Security Settings"),
            Some(FixFunction::FixSecuritySettings)
        );
        assert_eq!(fix_function_for("Member Number Issues"), None);
    }

    #[tokio::test]
    async fn test_apply_fix() {
        let store = MemoryStore::new()
            .with_rpc("assign_collector_role", json!("Assigned 2 roles"))
            .with_rpc("fix_multiple_roles", Value::Null);

        let message = apply_fix(&store, "Collectors Without Role", json!([{"user_id": "u1"}]))
            .await
            .unwrap();
        assert_eq!(message, "Assigned 2 roles");

        let message = apply_fix(&store, "Multiple Roles Assigned", json!([]))
            .await
            .unwrap();
        assert_eq!(message, "Successfully resolved Multiple Roles Assigned issue");

        let calls = store.rpc_calls();
        assert_eq!(calls[0].1, json!({"issue_details": [{"user_id": "u1"}]}));
    }

    #[tokio::test]
    async fn test_unknown_fix_issues_no_rpc() {
        let store = MemoryStore::new();
        assert!(apply_fix(&store, "Member Number Issues", json!({})).await.is_err());
        assert!(store.rpc_calls().is_empty());
    }
}
