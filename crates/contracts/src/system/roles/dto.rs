use crate::enums::AppRole;
use serde::{Deserialize, Serialize};

/// Строка таблицы `user_roles`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRoleRow {
    pub user_id: String,
    pub role: AppRole,
}

/// Тип несоответствия ролей
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleIssueType {
    #[serde(rename = "Missing Auth User")]
    MissingAuthUser,
    #[serde(rename = "Missing Collector Role")]
    MissingCollectorRole,
    #[serde(rename = "Invalid Collector Role")]
    InvalidCollectorRole,
    #[serde(rename = "Missing Member Role")]
    MissingMemberRole,
}

impl RoleIssueType {
    /// Пояснение для администратора
    pub fn details(&self) -> &'static str {
        match self {
            RoleIssueType::MissingAuthUser => "Member has no associated auth user",
            RoleIssueType::MissingCollectorRole => {
                "User is in collectors table but missing collector role"
            }
            RoleIssueType::InvalidCollectorRole => {
                "User has collector role but not in collectors table"
            }
            RoleIssueType::MissingMemberRole => "All users should have at least member role",
        }
    }
}

/// Найденное несоответствие между `members`, `user_roles` и `members_collectors`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleIssue {
    /// Пустая строка, если у члена нет auth-пользователя
    pub user_id: String,
    pub member_number: String,
    pub full_name: String,
    pub issue_type: RoleIssueType,
    pub details: String,
}

/// Член вместе со списком его ролей
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithRoles {
    pub user_id: Option<String>,
    pub full_name: String,
    pub member_number: String,
    pub roles: Vec<AppRole>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRoleDto {
    pub user_id: String,
    pub role: AppRole,
}
