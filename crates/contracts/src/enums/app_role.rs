use serde::{Deserialize, Serialize};

/// Роль пользователя (`user_roles.role`, enum `app_role` в удалённой БД)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppRole {
    Admin,
    Collector,
    Member,
}

impl AppRole {
    pub fn code(&self) -> &'static str {
        match self {
            AppRole::Admin => "admin",
            AppRole::Collector => "collector",
            AppRole::Member => "member",
        }
    }
}

impl std::fmt::Display for AppRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
