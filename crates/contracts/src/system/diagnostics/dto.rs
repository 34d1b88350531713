use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticStatus {
    Success,
    Warning,
    Error,
}

/// Раздел диагностического отчёта и хранимая процедура, которая его проверяет
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticCategory {
    #[serde(rename = "Role Management")]
    RoleManagement,
    #[serde(rename = "Member Verification")]
    MemberVerification,
    #[serde(rename = "Security Audit")]
    SecurityAudit,
}

impl DiagnosticCategory {
    pub fn all() -> [DiagnosticCategory; 3] {
        [
            DiagnosticCategory::RoleManagement,
            DiagnosticCategory::MemberVerification,
            DiagnosticCategory::SecurityAudit,
        ]
    }

    pub fn rpc_name(&self) -> &'static str {
        match self {
            DiagnosticCategory::RoleManagement => "check_role_inconsistencies",
            DiagnosticCategory::MemberVerification => "check_member_numbers",
            DiagnosticCategory::SecurityAudit => "check_security_settings",
        }
    }
}

/// Результат одного раздела диагностики
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticResult {
    pub timestamp: DateTime<Utc>,
    pub category: DiagnosticCategory,
    /// Строки, которые вернула процедура, как есть
    pub findings: Vec<Value>,
    pub status: DiagnosticStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Строка результата `run_combined_system_checks`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemCheckResult {
    /// `metric_name`, иначе `check_type`
    pub test_name: Option<String>,
    /// `test_category`
    pub test_type: Option<String>,
    /// Исходная строка без изменений
    #[serde(flatten)]
    pub raw: serde_json::Map<String, Value>,
}

/// Хранимые процедуры автоматического исправления
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixFunction {
    FixMultipleRoles,
    AssignCollectorRole,
    FixSecuritySettings,
}

impl FixFunction {
    pub fn rpc_name(&self) -> &'static str {
        match self {
            FixFunction::FixMultipleRoles => "fix_multiple_roles",
            FixFunction::AssignCollectorRole => "assign_collector_role",
            FixFunction::FixSecuritySettings => "fix_security_settings",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyFixDto {
    pub check_type: String,
    #[serde(default)]
    pub details: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyFixResponse {
    pub message: String,
}
