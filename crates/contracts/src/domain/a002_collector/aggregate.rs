use serde::{Deserialize, Serialize};

/// Проекция `members_collectors (member_number)` для проверки ролей
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorMemberNumber {
    #[serde(default)]
    pub member_number: Option<String>,
}
